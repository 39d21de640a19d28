//! CSV map loader.
//!
//! # CSV format
//!
//! A map is two CSV sources.  Cities, one row per city, with ids dense and
//! in order from `0`:
//!
//! ```csv
//! id,name
//! 0,Adelaide
//! 1,Brisbane
//! 2,Canberra
//! ```
//!
//! Roads, one row per undirected road:
//!
//! ```csv
//! from,to,length
//! 0,1,5
//! 1,2,3
//! ```
//!
//! Roads are inserted in file order, so a repeated pair keeps the length of
//! its first row.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use cw_core::CityId;

use crate::{Map, MapError, MapResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CityRecord {
    id:   u32,
    name: String,
}

#[derive(Deserialize)]
struct RoadRecord {
    from:   u32,
    to:     u32,
    length: u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Map`] from a cities CSV file and a roads CSV file.
pub fn load_map_csv(cities: &Path, roads: &Path) -> MapResult<Map> {
    let cities = std::fs::File::open(cities).map_err(MapError::Io)?;
    let roads = std::fs::File::open(roads).map_err(MapError::Io)?;
    load_map_reader(cities, roads)
}

/// Like [`load_map_csv`] but accepts any `Read` sources.
///
/// Useful for tests (pass a `std::io::Cursor`) and for maps embedded in a
/// binary.
pub fn load_map_reader<C: Read, R: Read>(cities: C, roads: R) -> MapResult<Map> {
    // ── Cities ────────────────────────────────────────────────────────────
    let mut names: Vec<String> = Vec::new();
    for result in csv_reader(cities).deserialize::<CityRecord>() {
        let row = result.map_err(|e| MapError::Parse(e.to_string()))?;
        if row.id as usize != names.len() {
            return Err(MapError::Parse(format!(
                "city id {} out of sequence: expected {}",
                row.id,
                names.len()
            )));
        }
        names.push(row.name);
    }

    let mut map = Map::new(names.len())?;
    for (i, name) in names.into_iter().enumerate() {
        map.set_name(CityId(i as u32), name)?;
    }

    // ── Roads ─────────────────────────────────────────────────────────────
    for result in csv_reader(roads).deserialize::<RoadRecord>() {
        let row = result.map_err(|e| MapError::Parse(e.to_string()))?;
        map.insert_road(CityId(row.from), CityId(row.to), row.length)?;
    }

    Ok(map)
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader)
}
