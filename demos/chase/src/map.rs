//! Embedded demo map.
//!
//! Eight towns on two loops joined by one long bridge road (Dunmore to
//! Elmstead, length 9).

use std::io::Cursor;

use cw_map::{Map, MapResult, load_map_reader};

const CITIES_CSV: &str = "\
id,name\n\
0,Ashford\n\
1,Barrow\n\
2,Carlton\n\
3,Dunmore\n\
4,Elmstead\n\
5,Fairholm\n\
6,Glenrock\n\
7,Harwick\n\
";

const ROADS_CSV: &str = "\
from,to,length\n\
0,1,3\n\
1,2,4\n\
2,3,2\n\
3,0,5\n\
0,2,6\n\
3,4,9\n\
4,5,2\n\
5,6,3\n\
6,7,4\n\
7,4,3\n\
";

/// Parse the embedded demo map.
pub fn demo_map() -> MapResult<Map> {
    load_map_reader(Cursor::new(CITIES_CSV), Cursor::new(ROADS_CSV))
}
