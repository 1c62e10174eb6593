use super::animation::TileAnimation;
use super::descriptor::TilesetDescriptor;
use super::types::TileId;
use crate::error::TilesetError;
use std::collections::HashMap;
use std::path::Path;

/// A validated tileset: atlas geometry plus the animation table, keyed by
/// base tile ID. Immutable after load, so lookups are safe from any thread.
#[derive(Debug, Clone)]
pub struct Tileset {
    pub descriptor: TilesetDescriptor,
    animations: HashMap<TileId, TileAnimation>,
}

impl Tileset {
    pub(crate) fn new(
        descriptor: TilesetDescriptor,
        animations: HashMap<TileId, TileAnimation>,
    ) -> Self {
        Self {
            descriptor,
            animations,
        }
    }

    /// Load and validate a Tiled JSON tileset document (`.tsj`)
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TilesetError> {
        crate::format::load_tileset(path)
    }

    /// Tile to draw for `base_id` after `elapsed_ms` of animation time.
    ///
    /// Animated tiles cycle through their declared frames; non-animated
    /// tiles come back unchanged. Each base ID resolves independently per
    /// its own frame list, even when it also appears as a frame inside
    /// another tile's animation.
    pub fn resolve(&self, base_id: TileId, elapsed_ms: u64) -> TileId {
        match self.animations.get(&base_id) {
            Some(animation) => animation.tile_at(elapsed_ms),
            None => base_id,
        }
    }

    /// Animation declared for a base tile, if any
    pub fn animation(&self, base_id: TileId) -> Option<&TileAnimation> {
        self.animations.get(&base_id)
    }

    pub fn is_animated(&self, base_id: TileId) -> bool {
        self.animations.contains_key(&base_id)
    }

    pub fn animated_count(&self) -> usize {
        self.animations.len()
    }

    /// Iterate over all animated base tile IDs (unordered)
    pub fn animated_ids(&self) -> impl Iterator<Item = TileId> + '_ {
        self.animations.keys().copied()
    }
}

impl std::str::FromStr for Tileset {
    type Err = TilesetError;

    /// Parse and validate a Tiled JSON tileset document from a string
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        crate::format::parse_tileset(text)
    }
}
