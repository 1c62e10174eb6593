//! Loader and animation resolver for Tiled tileset documents (`.tsj`).
//!
//! A tileset describes a tile atlas (grid geometry over a shared image) and
//! which tiles are animated: each animated tile cycles through an ordered
//! list of frames with per-frame durations. The document is validated once
//! at load time; afterwards [`Tileset::resolve`] maps a base tile ID and an
//! elapsed time to the tile that should be drawn, as a pure lookup.
//!
//! ```no_run
//! use tilecycle::Tileset;
//!
//! let tileset = Tileset::from_path("assets/overworld.tsj")?;
//! // Water tile 16 shows frame 58 after 100ms
//! assert_eq!(tileset.resolve(16, 100), 58);
//! # Ok::<(), tilecycle::TilesetError>(())
//! ```

pub mod error;
pub mod format;
pub mod plugin;
pub mod tileset;

pub use error::TilesetError;
pub use plugin::{ActiveTileset, AnimationSpeed, AnimationsPaused, TileAnimationPlugin, TileClock};
pub use tileset::{
    AnimationClock, Frame, TileAnimation, TileId, TileRect, Tileset, TilesetDescriptor,
};
