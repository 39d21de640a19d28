//! `cw-game` — the turn loop that drives a set of agents over one map.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`builder`]  | `GameBuilder`, `AgentSpec`                              |
//! | [`game`]     | `Game<'m>` — turn ordering, intel broadcast             |
//! | [`observer`] | `GameObserver` trait, `NoopObserver`                    |
//! | [`error`]    | `GameError`, `GameResult<T>`                            |
//!
//! # Turn model
//!
//! Each turn visits agents in the order they were added.  For every agent
//! the loop asks for [`next_move`][cw_agent::Agent::next_move], applies it
//! immediately, and reports it to the observer, so an agent later in the
//! order sees the positions of the agents before it.

pub mod builder;
pub mod error;
pub mod game;
pub mod observer;


pub use builder::{AgentSpec, GameBuilder};
pub use error::{GameError, GameResult};
pub use game::Game;
pub use observer::{GameObserver, NoopObserver};
