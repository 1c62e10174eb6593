use serde::{Deserialize, Serialize};

/// Type alias for local tile IDs within a tileset (u32 matches Tiled's JSON IDs)
pub type TileId = u32;

/// Pixel rectangle of one tile within the atlas image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// One step of a tile animation: the tile to display and for how long
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame {
    pub tile_id: TileId,
    pub duration_ms: u32,
}

impl Frame {
    pub const fn new(tile_id: TileId, duration_ms: u32) -> Self {
        Self {
            tile_id,
            duration_ms,
        }
    }
}
