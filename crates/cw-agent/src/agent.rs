//! The agent: identity, position, stamina, and strategy memory.

use std::fmt;

use tracing::trace;

use cw_core::{AgentId, AgentRng, CityId};
use cw_map::Map;

use crate::{AgentError, AgentResult, Move, Strategy, StrategyState, clv, dfs, random};

/// A mobile agent walking over a borrowed [`Map`].
///
/// Stamina lies in `[0, max_stamina]`.  It drops only when the agent
/// travels a road and is refilled to `max_stamina` whenever the agent stays
/// put, by choice or because no road is affordable.
#[derive(Clone)]
pub struct Agent<'m> {
    id:          AgentId,
    name:        String,
    map:         &'m Map,
    start_city:  CityId,
    city:        CityId,
    max_stamina: u32,
    stamina:     u32,
    state:       StrategyState,
    rng:         AgentRng,
}

impl<'m> Agent<'m> {
    /// Create an agent at `start` with a full stamina bar.
    ///
    /// Fails if `start` is not a city on `map`.  The agent gets id `0` and an
    /// RNG seeded from it; use [`seeded`](Self::seeded) when running several
    /// agents together.
    pub fn new(
        map:         &'m Map,
        start:       CityId,
        max_stamina: u32,
        strategy:    Strategy,
        name:        impl Into<String>,
    ) -> AgentResult<Self> {
        if !map.contains_city(start) {
            return Err(AgentError::StartOutOfRange { start, count: map.city_count() });
        }
        let id = AgentId(0);
        Ok(Self {
            id,
            name: name.into(),
            map,
            start_city: start,
            city: start,
            max_stamina,
            stamina: max_stamina,
            state: StrategyState::new(strategy, map.city_count(), start),
            rng: AgentRng::new(0, id),
        })
    }

    /// Assign the agent's turn-order id and reseed its RNG from
    /// `(global_seed, id)`.
    pub fn seeded(mut self, id: AgentId, global_seed: u64) -> Self {
        self.id = id;
        self.rng = AgentRng::new(global_seed, id);
        self
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_city(&self) -> CityId {
        self.start_city
    }

    pub fn location(&self) -> CityId {
        self.city
    }

    pub fn stamina(&self) -> u32 {
        self.stamina
    }

    pub fn max_stamina(&self) -> u32 {
        self.max_stamina
    }

    pub fn strategy(&self) -> Strategy {
        self.state.strategy()
    }

    /// Read-only view of the strategy's private memory.
    pub fn strategy_state(&self) -> &StrategyState {
        &self.state
    }

    pub fn map(&self) -> &'m Map {
        self.map
    }

    // ── Turn protocol ─────────────────────────────────────────────────────

    /// Decide this turn's move.
    ///
    /// Position and stamina are left untouched; only the strategy's memory
    /// may change (visit counters, DFS tour and cursor).
    pub fn next_move(&mut self) -> Move {
        let (map, city, stamina) = (self.map, self.city, self.stamina);
        let mv = match &mut self.state {
            StrategyState::Stationary              => Move::stay(city),
            StrategyState::Random                  => random::next_move(map, city, stamina, &mut self.rng),
            StrategyState::CheapestLeastVisited(v) => clv::next_move(map, city, stamina, v),
            StrategyState::DepthFirstSearch(d)     => dfs::next_move(map, city, stamina, d),
        };
        trace!(
            agent = %self.name,
            strategy = %self.strategy(),
            from = %city,
            to = %mv.to,
            cost = mv.stamina_cost,
            "next move"
        );
        mv
    }

    /// Carry out `mv`.
    ///
    /// Staying refills stamina; travelling spends `mv.stamina_cost` and
    /// relocates the agent.  The move is not validated: callers pass moves
    /// produced by [`next_move`](Self::next_move) or otherwise affordable.
    pub fn apply_move(&mut self, mv: Move) {
        if mv.is_stay_at(self.city) {
            self.stamina = self.max_stamina;
        } else {
            self.stamina = self.stamina.saturating_sub(mv.stamina_cost);
            self.city = mv.to;
        }
    }

    // ── Information intake ────────────────────────────────────────────────

    /// Tell the agent that `city` is known to be occupied or explored, e.g.
    /// the last sighting of another actor.
    ///
    /// Only strategies with visit counters remember it.
    pub fn notify_observation(&mut self, city: CityId) {
        match &mut self.state {
            StrategyState::CheapestLeastVisited(visits) => visits.observe(city),
            _ => trace!(agent = %self.name, %city, "observation ignored by strategy"),
        }
    }
}

impl fmt::Display for Agent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.map.name(self.city) {
            Ok(city) => write!(f, "{} is in {} with {} stamina", self.name, city, self.stamina),
            Err(_)   => write!(f, "{} is in {} with {} stamina", self.name, self.city, self.stamina),
        }
    }
}

impl fmt::Debug for Agent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("city", &self.city)
            .field("stamina", &self.stamina)
            .field("max_stamina", &self.max_stamina)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
