//! `cw-map` — the city graph the agents move over.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`map`]    | `Map` (symmetric adjacency matrix + city names), `Road`   |
//! | [`loader`] | `load_map_csv`, `load_map_reader`                         |
//! | [`error`]  | `MapError`, `MapResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Road` and cw-core ids. |

pub mod error;
pub mod loader;
pub mod map;

#[cfg(test)]
mod tests;

pub use error::{MapError, MapResult};
pub use loader::{load_map_csv, load_map_reader};
pub use map::{Map, Road};
