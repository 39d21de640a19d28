//! Random strategy: a uniform draw over the legal roads.

use cw_core::{AgentRng, CityId};
use cw_map::Map;

use crate::Move;
use crate::strategy::legal_roads;

/// Draw uniformly from the legal roads out of `city`, or stay when there are
/// none.
///
/// The draw is made over the canonical (ascending destination) ordering, so
/// the same RNG stream always produces the same move regardless of how the
/// map enumerates its roads.
pub fn next_move(map: &Map, city: CityId, stamina: u32, rng: &mut AgentRng) -> Move {
    let legal = legal_roads(map, city, stamina);
    rng.choose(&legal)
        .map_or(Move::stay(city), |r| Move::new(r.to, r.length))
}
