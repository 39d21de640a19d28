//! Strategy tags and the per-strategy private memory they carry.
//!
//! The set of strategies is closed: each one is a variant of [`Strategy`]
//! with a matching [`StrategyState`] variant and one decision function in
//! its own module.  Adding a strategy means adding a variant to both enums
//! and an arm to [`Agent::next_move`][crate::Agent::next_move].

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use cw_core::CityId;
use cw_map::{Map, Road};

use crate::{AgentError, DfsState, VisitCounts};

// ── Strategy ──────────────────────────────────────────────────────────────────

/// How an agent picks its next move.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// Never moves.
    Stationary,
    /// Uniform draw over the legal roads.
    Random,
    /// Least-visited neighbour, cheapest road first.
    CheapestLeastVisited,
    /// Replays a precomputed depth-first tour of the reachable cities.
    DepthFirstSearch,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Stationary,
        Strategy::Random,
        Strategy::CheapestLeastVisited,
        Strategy::DepthFirstSearch,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Stationary           => "stationary",
            Strategy::Random               => "random",
            Strategy::CheapestLeastVisited => "cheapest-least-visited",
            Strategy::DepthFirstSearch     => "dfs",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stationary"                    => Ok(Strategy::Stationary),
            "random"                        => Ok(Strategy::Random),
            "cheapest-least-visited" | "clv" => Ok(Strategy::CheapestLeastVisited),
            "dfs" | "depth-first-search"    => Ok(Strategy::DepthFirstSearch),
            _ => Err(AgentError::UnknownStrategy(s.to_owned())),
        }
    }
}

// ── StrategyState ─────────────────────────────────────────────────────────────

/// Strategy-private memory, keyed by the strategy it belongs to.
#[derive(Clone, Debug)]
pub enum StrategyState {
    Stationary,
    Random,
    CheapestLeastVisited(VisitCounts),
    DepthFirstSearch(DfsState),
}

impl StrategyState {
    /// Fresh memory for `strategy` on a map of `city_count` cities, for an
    /// agent starting at `start`.
    pub fn new(strategy: Strategy, city_count: usize, start: CityId) -> Self {
        match strategy {
            Strategy::Stationary           => StrategyState::Stationary,
            Strategy::Random               => StrategyState::Random,
            Strategy::CheapestLeastVisited => {
                StrategyState::CheapestLeastVisited(VisitCounts::new(city_count, start))
            }
            Strategy::DepthFirstSearch     => StrategyState::DepthFirstSearch(DfsState::new(city_count)),
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            StrategyState::Stationary              => Strategy::Stationary,
            StrategyState::Random                  => Strategy::Random,
            StrategyState::CheapestLeastVisited(_) => Strategy::CheapestLeastVisited,
            StrategyState::DepthFirstSearch(_)     => Strategy::DepthFirstSearch,
        }
    }
}

// ── Legal roads ───────────────────────────────────────────────────────────────

/// Roads from `city` whose length does not exceed `stamina`, in canonical
/// (ascending destination) order.
///
/// A city that is not on the map has no legal roads.  That only happens when
/// the driving loop applied a move the map cannot back.
pub(crate) fn legal_roads(map: &Map, city: CityId, stamina: u32) -> Vec<Road> {
    match map.roads_from(city) {
        Ok(roads) => {
            let mut legal: Vec<Road> = roads.filter(|r| r.length <= stamina).collect();
            legal.sort_by_key(|r| r.to);
            legal
        }
        Err(e) => {
            warn!(%city, error = %e, "agent is off the map; no legal roads");
            Vec::new()
        }
    }
}
