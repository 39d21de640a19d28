//! Cheapest-least-visited strategy.
//!
//! Among the legal roads, go to the destination this agent has counted the
//! fewest times.  Ties break on road length, then on destination id.
//!
//! The counter that is bumped on each decision is the one for the city being
//! *left*, not the destination, and it is bumped on forced stays too.  A city
//! only looks "visited" once the agent has stood in it and decided to move
//! on.

use cw_core::CityId;
use cw_map::Map;

use crate::Move;
use crate::strategy::legal_roads;

// ── VisitCounts ───────────────────────────────────────────────────────────────

/// Per-city visit counters.  The start city begins at `1`, every other city
/// at `0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitCounts(Vec<u32>);

impl VisitCounts {
    pub fn new(city_count: usize, start: CityId) -> Self {
        let mut counts = vec![0; city_count];
        if let Some(c) = counts.get_mut(start.index()) {
            *c = 1;
        }
        Self(counts)
    }

    /// Count for `city`; `0` for ids outside the map.
    #[inline]
    pub fn get(&self, city: CityId) -> u32 {
        self.0.get(city.index()).copied().unwrap_or(0)
    }

    pub fn increment(&mut self, city: CityId) {
        if let Some(c) = self.0.get_mut(city.index()) {
            *c += 1;
        }
    }

    /// Mark `city` as seen without lowering a count that is already higher.
    pub fn observe(&mut self, city: CityId) {
        if let Some(c) = self.0.get_mut(city.index()) {
            *c = (*c).max(1);
        }
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

// ── Decision ──────────────────────────────────────────────────────────────────

pub fn next_move(map: &Map, city: CityId, stamina: u32, visits: &mut VisitCounts) -> Move {
    let legal = legal_roads(map, city, stamina);

    let choice = legal
        .iter()
        .map(|r| visits.get(r.to))
        .min()
        .and_then(|least| {
            legal
                .iter()
                .filter(|r| visits.get(r.to) == least)
                .min_by_key(|r| (r.length, r.to))
        })
        .map(|r| Move::new(r.to, r.length));

    visits.increment(city);
    choice.unwrap_or(Move::stay(city))
}
