//! Unit tests for cw-map.
//!
//! All tests use hand-crafted maps so they run without any map files.

#[cfg(test)]
mod helpers {
    use cw_core::CityId;

    use crate::Map;

    /// Four cities:
    ///
    /// ```text
    ///   0 ──5── 1 ──3── 2
    ///   └───────7───────┘      3 (isolated)
    /// ```
    pub fn triangle_plus_island() -> Map {
        let mut m = Map::new(4).unwrap();
        m.insert_road(CityId(0), CityId(1), 5).unwrap();
        m.insert_road(CityId(1), CityId(2), 3).unwrap();
        m.insert_road(CityId(2), CityId(0), 7).unwrap();
        for (i, name) in ["Avalon", "Brookfield", "Cedar", "Dunmore"].iter().enumerate() {
            m.set_name(CityId(i as u32), *name).unwrap();
        }
        m
    }
}

// ── Construction & insertion ──────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use cw_core::CityId;

    use crate::{Map, MapError};

    #[test]
    fn zero_cities_rejected() {
        assert!(matches!(Map::new(0), Err(MapError::Empty)));
    }

    #[test]
    fn fresh_map_has_no_roads() {
        let m = Map::new(3).unwrap();
        assert_eq!(m.city_count(), 3);
        assert_eq!(m.road_count(), 0);
        for a in m.cities() {
            for b in m.cities() {
                assert_eq!(m.road_length(a, b).unwrap(), 0);
            }
        }
    }

    #[test]
    fn insert_is_symmetric() {
        let mut m = Map::new(3).unwrap();
        assert!(m.insert_road(CityId(0), CityId(2), 9).unwrap());
        assert_eq!(m.road_length(CityId(0), CityId(2)).unwrap(), 9);
        assert_eq!(m.road_length(CityId(2), CityId(0)).unwrap(), 9);
        assert_eq!(m.road_count(), 1);
    }

    #[test]
    fn first_insertion_wins() {
        let mut m = Map::new(2).unwrap();
        assert!(m.insert_road(CityId(0), CityId(1), 4).unwrap());
        assert!(!m.insert_road(CityId(0), CityId(1), 8).unwrap());
        // Reversed endpoints hit the same road.
        assert!(!m.insert_road(CityId(1), CityId(0), 2).unwrap());
        assert_eq!(m.road_length(CityId(0), CityId(1)).unwrap(), 4);
        assert_eq!(m.road_length(CityId(1), CityId(0)).unwrap(), 4);
        assert_eq!(m.road_count(), 1);
    }

    #[test]
    fn self_loop_rejected() {
        let mut m = Map::new(2).unwrap();
        assert!(matches!(
            m.insert_road(CityId(1), CityId(1), 3),
            Err(MapError::SelfLoop(CityId(1)))
        ));
        assert_eq!(m.road_count(), 0);
    }

    #[test]
    fn zero_length_rejected() {
        let mut m = Map::new(2).unwrap();
        assert!(matches!(
            m.insert_road(CityId(0), CityId(1), 0),
            Err(MapError::ZeroLength { .. })
        ));
    }

    #[test]
    fn out_of_range_is_an_error() {
        let mut m = Map::new(2).unwrap();
        assert!(matches!(
            m.insert_road(CityId(0), CityId(2), 1),
            Err(MapError::CityOutOfRange { city: CityId(2), count: 2 })
        ));
        assert!(m.road_length(CityId(5), CityId(0)).is_err());
        assert!(m.roads_from(CityId(2)).is_err());
        assert!(m.name(CityId(2)).is_err());
        assert!(m.set_name(CityId(9), "nowhere").is_err());
    }
}

// ── Road queries ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod queries {
    use cw_core::CityId;

    use crate::{Map, Road};

    #[test]
    fn roads_from_ascending_destination() {
        let mut m = Map::new(5).unwrap();
        // Insert out of order; enumeration must still be ascending.
        m.insert_road(CityId(2), CityId(4), 1).unwrap();
        m.insert_road(CityId(2), CityId(0), 6).unwrap();
        m.insert_road(CityId(3), CityId(2), 2).unwrap();

        let roads: Vec<Road> = m.roads_from(CityId(2)).unwrap().collect();
        let dests: Vec<CityId> = roads.iter().map(|r| r.to).collect();
        assert_eq!(dests, vec![CityId(0), CityId(3), CityId(4)]);
        assert!(roads.iter().all(|r| r.from == CityId(2)));
        assert_eq!(roads[0].length, 6);
        assert_eq!(roads[1].length, 2);
        assert_eq!(roads[2].length, 1);
    }

    #[test]
    fn isolated_city_has_no_roads() {
        let m = super::helpers::triangle_plus_island();
        assert_eq!(m.roads_from(CityId(3)).unwrap().count(), 0);
    }

    #[test]
    fn roads_from_matches_road_length() {
        let m = super::helpers::triangle_plus_island();
        for city in m.cities() {
            for road in m.roads_from(city).unwrap() {
                assert_eq!(m.road_length(road.from, road.to).unwrap(), road.length);
                assert_eq!(m.road_length(road.to, road.from).unwrap(), road.length);
            }
        }
    }

    #[test]
    fn names_roundtrip() {
        let m = super::helpers::triangle_plus_island();
        assert_eq!(m.name(CityId(0)).unwrap(), "Avalon");
        assert_eq!(m.name(CityId(3)).unwrap(), "Dunmore");
    }

    #[test]
    fn display_lists_roads() {
        let m = super::helpers::triangle_plus_island();
        let shown = m.to_string();
        assert!(shown.starts_with("Number of cities: 4\nNumber of roads: 3\n"));
        assert!(shown.contains("[0] Avalon has roads to: [1] Brookfield (5), [2] Cedar (7)\n"));
        assert!(shown.contains("[3] Dunmore has roads to:\n"));
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use cw_core::CityId;

    use crate::{MapError, load_map_csv, load_map_reader};

    const CITIES: &str = "id,name\n0,Avalon\n1,Brookfield\n2,Cedar\n";
    const ROADS: &str = "from,to,length\n0,1,5\n1,2,3\n1,0,99\n";

    #[test]
    fn loads_cities_and_roads() {
        let m = load_map_reader(Cursor::new(CITIES), Cursor::new(ROADS)).unwrap();
        assert_eq!(m.city_count(), 3);
        assert_eq!(m.road_count(), 2);
        assert_eq!(m.name(CityId(1)).unwrap(), "Brookfield");
        // Duplicate row 1,0,99 ignored.
        assert_eq!(m.road_length(CityId(0), CityId(1)).unwrap(), 5);
        assert_eq!(m.road_length(CityId(2), CityId(1)).unwrap(), 3);
    }

    #[test]
    fn whitespace_is_trimmed() {
        let cities = "id, name\n0, Avalon\n1, Brookfield\n";
        let roads = "from, to, length\n0, 1, 2\n";
        let m = load_map_reader(Cursor::new(cities), Cursor::new(roads)).unwrap();
        assert_eq!(m.name(CityId(0)).unwrap(), "Avalon");
        assert_eq!(m.road_length(CityId(0), CityId(1)).unwrap(), 2);
    }

    #[test]
    fn sparse_city_ids_rejected() {
        let cities = "id,name\n0,Avalon\n2,Cedar\n";
        let err = load_map_reader(Cursor::new(cities), Cursor::new("from,to,length\n")).unwrap_err();
        assert!(matches!(err, MapError::Parse(_)));
    }

    #[test]
    fn no_cities_rejected() {
        let err = load_map_reader(Cursor::new("id,name\n"), Cursor::new("from,to,length\n"))
            .unwrap_err();
        assert!(matches!(err, MapError::Empty));
    }

    #[test]
    fn road_to_unknown_city_rejected() {
        let roads = "from,to,length\n0,7,1\n";
        let err = load_map_reader(Cursor::new(CITIES), Cursor::new(roads)).unwrap_err();
        assert!(matches!(err, MapError::CityOutOfRange { .. }));
    }

    #[test]
    fn bad_length_is_parse_error() {
        let roads = "from,to,length\n0,1,far\n";
        let err = load_map_reader(Cursor::new(CITIES), Cursor::new(roads)).unwrap_err();
        assert!(matches!(err, MapError::Parse(_)));
    }

    #[test]
    fn loads_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let cities_path = dir.path().join("cities.csv");
        let roads_path = dir.path().join("roads.csv");
        std::fs::File::create(&cities_path).unwrap().write_all(CITIES.as_bytes()).unwrap();
        std::fs::File::create(&roads_path).unwrap().write_all(ROADS.as_bytes()).unwrap();

        let m = load_map_csv(&cities_path, &roads_path).unwrap();
        assert_eq!(m.city_count(), 3);
        assert_eq!(m.road_count(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_map_csv(&dir.path().join("nope.csv"), &dir.path().join("nope2.csv"))
            .unwrap_err();
        assert!(matches!(err, MapError::Io(_)));
    }
}
