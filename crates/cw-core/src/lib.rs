//! `cw-core` — foundational types for the `citywalk` agent simulator.
//!
//! This crate is a dependency of every other `cw-*` crate.  It has no `cw-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                   |
//! |------------|--------------------------------------------|
//! | [`ids`]    | `CityId`, `AgentId`                        |
//! | [`turn`]   | `Turn`, `GameConfig`                       |
//! | [`rng`]    | `AgentRng` (per-agent, deterministic)      |
//! | [`error`]  | `CwError`, `CwResult`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod ids;
pub mod rng;
pub mod turn;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CwError, CwResult};
pub use ids::{AgentId, CityId};
pub use rng::AgentRng;
pub use turn::{GameConfig, Turn};
