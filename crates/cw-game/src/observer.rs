//! Observer trait for progress reporting and data collection.

use cw_agent::{Agent, Move};
use cw_core::{CityId, Turn};

/// Callbacks invoked by [`Game`][crate::Game] at key points of a turn.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — move logger
///
/// ```rust,ignore
/// struct MoveLog(Vec<(Turn, String, Move)>);
///
/// impl GameObserver for MoveLog {
///     fn on_move(&mut self, turn: Turn, agent: &Agent<'_>, _from: CityId, mv: Move) {
///         self.0.push((turn, agent.name().to_owned(), mv));
///     }
/// }
/// ```
pub trait GameObserver {
    /// Called at the very start of each turn.
    fn on_turn_start(&mut self, _turn: Turn) {}

    /// Called after `agent` has applied `mv`.  `from` is where it stood when
    /// it decided; `agent` already reflects the new position and stamina.
    fn on_move(&mut self, _turn: Turn, _agent: &Agent<'_>, _from: CityId, _mv: Move) {}

    /// Called once every agent has moved this turn.
    fn on_turn_end(&mut self, _turn: Turn, _agents: &[Agent<'_>]) {}

    /// Called once after the final turn of [`Game::run`][crate::Game::run].
    fn on_game_end(&mut self, _final_turn: Turn) {}
}

/// A [`GameObserver`] that does nothing.
pub struct NoopObserver;

impl GameObserver for NoopObserver {}
