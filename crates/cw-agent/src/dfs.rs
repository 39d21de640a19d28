//! Depth-first-search strategy.
//!
//! # Two phases
//!
//! 1. **Tour construction.**  When the agent has no tour, or has replayed
//!    all of it, a depth-first walk is run from the agent's current city over
//!    the roads it can afford *right now*.  Every advance into an
//!    undiscovered city is recorded, and so is every backtrack to the parent
//!    once a subtree is exhausted.  The result is an Euler-tour-like sequence
//!    in which consecutive cities are always joined by a road.
//!
//! 2. **Replay.**  Each decision moves one step along the tour.  If the agent
//!    cannot afford the next road it stays (and so refills) without
//!    advancing.
//!
//! For the path `0 ─2─ 1 ─2─ 2` rooted at `0` the tour is `[1, 2, 1, 0]`.
//!
//! The walk uses an explicit stack of `(city, remaining roads)` frames, so
//! its depth is bounded by the city count rather than the native call stack.

use tracing::debug;

use cw_core::CityId;
use cw_map::{Map, Road};

use crate::Move;
use crate::strategy::legal_roads;

// ── DfsState ──────────────────────────────────────────────────────────────────

/// Tour buffer and replay cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DfsState {
    /// Cities reached by the current tour construction.  Cleared before each
    /// construction.
    discovered: Vec<bool>,
    tour:       Vec<CityId>,
    /// Next tour index to replay.  `None` means no tour has been computed.
    cursor:     Option<usize>,
}

impl DfsState {
    pub fn new(city_count: usize) -> Self {
        Self {
            discovered: vec![false; city_count],
            tour:       Vec::with_capacity(city_count.saturating_sub(1) * 2),
            cursor:     None,
        }
    }

    /// The current tour, including backtrack steps.
    pub fn tour(&self) -> &[CityId] {
        &self.tour
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// `true` when the next decision has to construct a fresh tour.
    pub fn is_exhausted(&self) -> bool {
        match self.cursor {
            None    => true,
            Some(c) => c >= self.tour.len(),
        }
    }

    /// Run the depth-first walk from `root` over roads of length at most
    /// `stamina`, replacing any previous tour.
    pub fn build_tour(&mut self, map: &Map, root: CityId, stamina: u32) {
        self.discovered.fill(false);
        self.tour.clear();
        self.cursor = None;

        let Some(seen) = self.discovered.get_mut(root.index()) else {
            return;
        };
        *seen = true;

        let mut stack: Vec<(CityId, std::vec::IntoIter<Road>)> =
            vec![(root, legal_roads(map, root, stamina).into_iter())];

        while let Some((_, roads)) = stack.last_mut() {
            let discovered = &self.discovered;
            match roads.find(|r| !discovered[r.to.index()]) {
                Some(road) => {
                    self.discovered[road.to.index()] = true;
                    self.tour.push(road.to);
                    stack.push((road.to, legal_roads(map, road.to, stamina).into_iter()));
                }
                None => {
                    stack.pop();
                    if let Some(&(parent, _)) = stack.last() {
                        self.tour.push(parent);
                    }
                }
            }
        }

        if !self.tour.is_empty() {
            self.cursor = Some(0);
        }
        debug!(%root, stamina, len = self.tour.len(), "built depth-first tour");
    }

    /// Next tour city and the length of the road to it from `city`.
    ///
    /// `None` when there is no tour step left or the next step is not
    /// adjacent to `city`.
    fn peek(&self, map: &Map, city: CityId) -> Option<(CityId, u32)> {
        let next = *self.tour.get(self.cursor?)?;
        let length = map.road_length(city, next).ok().filter(|&l| l != 0)?;
        Some((next, length))
    }
}

// ── Decision ──────────────────────────────────────────────────────────────────

pub fn next_move(map: &Map, city: CityId, stamina: u32, state: &mut DfsState) -> Move {
    if state.is_exhausted() {
        state.build_tour(map, city, stamina);
    }

    let step = match state.peek(map, city) {
        Some(step) => Some(step),
        // The agent was moved off the tour by someone else.
        None if !state.is_exhausted() => {
            debug!(%city, "next tour step is not adjacent; rebuilding");
            state.build_tour(map, city, stamina);
            state.peek(map, city)
        }
        None => None,
    };

    let Some((next, length)) = step else {
        return Move::stay(city);
    };
    if stamina < length {
        return Move::stay(city);
    }
    state.cursor = state.cursor.map(|c| c + 1);
    Move::new(next, length)
}
