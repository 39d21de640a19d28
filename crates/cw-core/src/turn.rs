//! Turn counter and run configuration.
//!
//! Time is a monotonically increasing `Turn` counter.  One turn gives every
//! agent exactly one decision, in the order the driving loop holds them.

use std::fmt;

use crate::{CwError, CwResult};

// ── Turn ──────────────────────────────────────────────────────────────────────

/// An absolute turn counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn(pub u64);

impl Turn {
    pub const ZERO: Turn = Turn(0);

    /// The turn immediately after `self`.
    #[inline]
    pub fn next(self) -> Turn {
        Turn(self.0 + 1)
    }
}

impl std::ops::Add<u64> for Turn {
    type Output = Turn;
    #[inline]
    fn add(self, rhs: u64) -> Turn {
        Turn(self.0 + rhs)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── GameConfig ────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically built in code or deserialized (with the `serde` feature) by the
/// application crate and handed to the driving loop.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Total turns to play.
    pub total_turns: u64,
}

impl GameConfig {
    /// The turn at which the game ends (exclusive upper bound).
    #[inline]
    pub fn end_turn(&self) -> Turn {
        Turn(self.total_turns)
    }

    /// Reject configurations that cannot produce a run.
    pub fn validate(&self) -> CwResult<()> {
        if self.total_turns == 0 {
            return Err(CwError::Config("total_turns must be positive".into()));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { seed: 42, total_turns: 24 }
    }
}
