pub mod loader;
pub mod raw;

pub use loader::{load_tileset, parse_tileset};
pub use raw::{RawFrame, RawTile, RawTileset};
