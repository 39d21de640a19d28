//! `cw-agent` — agents, their movement strategies, and move application.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`agent`]    | `Agent<'m>` — position, stamina, strategy state, turn API    |
//! | [`moves`]    | `Move` — destination + stamina cost                          |
//! | [`strategy`] | `Strategy` tag, `StrategyState`, legal-road filtering        |
//! | [`random`]   | Uniform draw over legal roads                                |
//! | [`clv`]      | Cheapest-least-visited: `VisitCounts` + decision             |
//! | [`dfs`]      | Depth-first tour construction and replay: `DfsState`         |
//! | [`error`]    | `AgentError`, `AgentResult<T>`                               |
//!
//! # Turn protocol
//!
//! The driving loop calls [`Agent::next_move`] and then
//! [`Agent::apply_move`] with the result.  `next_move` only touches the
//! strategy's private memory (visit counters, DFS cursor); position and
//! stamina change exclusively inside `apply_move`.
//!
//! Agents borrow the [`Map`][cw_map::Map] they walk on.  The map is owned by
//! the driving program and outlives every agent.

pub mod agent;
pub mod clv;
pub mod dfs;
pub mod error;
pub mod moves;
pub mod random;
pub mod strategy;


pub use agent::Agent;
pub use clv::VisitCounts;
pub use dfs::DfsState;
pub use error::{AgentError, AgentResult};
pub use moves::Move;
pub use strategy::{Strategy, StrategyState};
