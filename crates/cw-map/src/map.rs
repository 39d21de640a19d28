//! City graph representation.
//!
//! # Data layout
//!
//! Roads are stored in a dense, row-major `city_count × city_count` weight
//! matrix.  `weights[a * n + b]` is the length of the road between `a` and
//! `b`, and `0` means "no road".  The matrix is kept symmetric on every
//! insertion, so `road_length(a, b) == road_length(b, a)` always holds.
//!
//! Iterating a row in column order yields a city's roads already sorted by
//! ascending destination id, which is the canonical order the movement
//! strategies rely on.
//!
//! The topology is built once by a loader and then only read; agents hold
//! `&Map` and never mutate it.

use std::fmt;

use cw_core::CityId;

use crate::{MapError, MapResult};

// ── Road ──────────────────────────────────────────────────────────────────────

/// One direction of an undirected road, as seen from `from`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Road {
    pub from:   CityId,
    pub to:     CityId,
    /// Stamina needed to travel the road.  Always positive.
    pub length: u32,
}

// ── Map ───────────────────────────────────────────────────────────────────────

/// Undirected weighted graph over a fixed number of cities.
pub struct Map {
    city_count: usize,
    road_count: usize,
    /// Row-major adjacency matrix; `0` encodes "no road".
    weights:    Vec<u32>,
    names:      Vec<String>,
}

impl Map {
    /// Create a map of `city_count` cities with no roads and empty names.
    pub fn new(city_count: usize) -> MapResult<Self> {
        if city_count == 0 {
            return Err(MapError::Empty);
        }
        // Every id must fit in a `CityId`.
        CityId::try_from(city_count - 1)
            .map_err(|_| MapError::Parse(format!("{city_count} cities exceed the id range")))?;

        Ok(Self {
            city_count,
            road_count: 0,
            weights:    vec![0; city_count * city_count],
            names:      vec![String::new(); city_count],
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn city_count(&self) -> usize {
        self.city_count
    }

    /// Number of undirected roads.  Ignored duplicate insertions are not
    /// counted.
    pub fn road_count(&self) -> usize {
        self.road_count
    }

    /// `true` if `city` is a valid id on this map.
    #[inline]
    pub fn contains_city(&self, city: CityId) -> bool {
        city.index() < self.city_count
    }

    /// All city ids in ascending order.
    pub fn cities(&self) -> impl Iterator<Item = CityId> + '_ {
        (0..self.city_count as u32).map(CityId)
    }

    // ── Roads ─────────────────────────────────────────────────────────────

    /// Insert an undirected road between `a` and `b`.
    ///
    /// The first insertion wins: if a road already exists the call does
    /// nothing and returns `Ok(false)`.  Returns `Ok(true)` when the road was
    /// added.
    pub fn insert_road(&mut self, a: CityId, b: CityId, length: u32) -> MapResult<bool> {
        let (ia, ib) = (self.check(a)?, self.check(b)?);
        if a == b {
            return Err(MapError::SelfLoop(a));
        }
        if length == 0 {
            return Err(MapError::ZeroLength { a, b });
        }
        let n = self.city_count;
        if self.weights[ia * n + ib] != 0 {
            return Ok(false);
        }
        self.weights[ia * n + ib] = length;
        self.weights[ib * n + ia] = length;
        self.road_count += 1;
        Ok(true)
    }

    /// Length of the road between `a` and `b`, or `0` if there is none.
    pub fn road_length(&self, a: CityId, b: CityId) -> MapResult<u32> {
        let (ia, ib) = (self.check(a)?, self.check(b)?);
        Ok(self.weights[ia * self.city_count + ib])
    }

    /// Every road leaving `city`, in ascending destination order.
    ///
    /// This is a scan of one matrix row — no heap allocation.
    pub fn roads_from(&self, city: CityId) -> MapResult<impl Iterator<Item = Road> + '_> {
        let i = self.check(city)?;
        let row = &self.weights[i * self.city_count..(i + 1) * self.city_count];
        Ok(row
            .iter()
            .enumerate()
            .filter(|&(_, &length)| length != 0)
            .map(move |(to, &length)| Road { from: city, to: CityId(to as u32), length }))
    }

    // ── Names ─────────────────────────────────────────────────────────────

    pub fn set_name(&mut self, city: CityId, name: impl Into<String>) -> MapResult<()> {
        let i = self.check(city)?;
        self.names[i] = name.into();
        Ok(())
    }

    pub fn name(&self, city: CityId) -> MapResult<&str> {
        let i = self.check(city)?;
        Ok(&self.names[i])
    }

    #[inline]
    fn check(&self, city: CityId) -> MapResult<usize> {
        if self.contains_city(city) {
            Ok(city.index())
        } else {
            Err(MapError::CityOutOfRange { city, count: self.city_count })
        }
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of cities: {}", self.city_count)?;
        writeln!(f, "Number of roads: {}", self.road_count)?;
        for (i, name) in self.names.iter().enumerate() {
            write!(f, "[{i}] {name} has roads to:")?;
            let row = &self.weights[i * self.city_count..(i + 1) * self.city_count];
            let mut first = true;
            for (to, &length) in row.iter().enumerate().filter(|&(_, &l)| l != 0) {
                if !first {
                    write!(f, ",")?;
                }
                first = false;
                write!(f, " [{to}] {} ({length})", self.names[to])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("city_count", &self.city_count)
            .field("road_count", &self.road_count)
            .finish_non_exhaustive()
    }
}
