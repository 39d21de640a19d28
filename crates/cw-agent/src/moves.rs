//! The move an agent intends to make this turn.

use cw_core::CityId;

/// A proposed transition produced by a strategy.
///
/// A move whose destination equals the agent's current city is a stay and
/// always costs `0` stamina.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub to:           CityId,
    pub stamina_cost: u32,
}

impl Move {
    #[inline]
    pub fn new(to: CityId, stamina_cost: u32) -> Self {
        Self { to, stamina_cost }
    }

    /// Remain at `city` for a turn.
    #[inline]
    pub fn stay(city: CityId) -> Self {
        Self { to: city, stamina_cost: 0 }
    }

    #[inline]
    pub fn is_stay_at(self, city: CityId) -> bool {
        self.to == city
    }
}
