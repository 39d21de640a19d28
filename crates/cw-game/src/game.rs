//! The `Game` struct and its turn loop.

use tracing::{debug, info};

use cw_agent::Agent;
use cw_core::{AgentId, CityId, GameConfig, Turn};
use cw_map::Map;

use crate::GameObserver;

/// A set of agents taking turns on one borrowed map.
///
/// Create via [`GameBuilder`][crate::GameBuilder].
pub struct Game<'m> {
    pub(crate) map:    &'m Map,
    pub(crate) config: GameConfig,
    pub(crate) agents: Vec<Agent<'m>>,
    pub(crate) turn:   Turn,
}

impl<'m> Game<'m> {
    // ── Queries ───────────────────────────────────────────────────────────

    pub fn map(&self) -> &'m Map {
        self.map
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The next turn to be played.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn agents(&self) -> &[Agent<'m>] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent<'m>> {
        self.agents.get(id.index())
    }

    // ── Turn loop ─────────────────────────────────────────────────────────

    /// Play turns until `config.end_turn()`, then notify the observer.
    pub fn run<O: GameObserver>(&mut self, observer: &mut O) {
        while self.turn < self.config.end_turn() {
            self.play_turn(observer);
        }
        info!(turns = self.turn.0, agents = self.agents.len(), "game finished");
        observer.on_game_end(self.turn);
    }

    /// Play exactly `n` turns from the current position, ignoring
    /// `end_turn`.
    pub fn run_turns<O: GameObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.play_turn(observer);
        }
    }

    /// One decision per agent, in turn order.  Returns the turn just played.
    pub fn play_turn<O: GameObserver>(&mut self, observer: &mut O) -> Turn {
        let now = self.turn;
        observer.on_turn_start(now);

        let mut moved = 0usize;
        for agent in &mut self.agents {
            let from = agent.location();
            let mv = agent.next_move();
            agent.apply_move(mv);
            if !mv.is_stay_at(from) {
                moved += 1;
            }
            observer.on_move(now, agent, from, mv);
        }

        debug!(turn = %now, moved, "turn complete");
        observer.on_turn_end(now, &self.agents);
        self.turn = now.next();
        now
    }

    // ── Intelligence ──────────────────────────────────────────────────────

    /// Report a sighting at `city` to every agent.
    pub fn broadcast_observation(&mut self, city: CityId) {
        for agent in &mut self.agents {
            agent.notify_observation(city);
        }
    }
}
