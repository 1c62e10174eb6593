use crate::tileset::TileId;
use std::io;

/// Error type for tileset loading and validation
#[derive(Debug)]
pub enum TilesetError {
    Io(io::Error),
    Parse(serde_json::Error),
    MalformedAsset(String),
    DuplicateAnimation(TileId),
}

impl From<io::Error> for TilesetError {
    fn from(err: io::Error) -> Self {
        TilesetError::Io(err)
    }
}

impl From<serde_json::Error> for TilesetError {
    fn from(err: serde_json::Error) -> Self {
        TilesetError::Parse(err)
    }
}

impl std::fmt::Display for TilesetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TilesetError::Io(e) => write!(f, "IO error: {}", e),
            TilesetError::Parse(e) => write!(f, "JSON parse error: {}", e),
            TilesetError::MalformedAsset(msg) => write!(f, "Malformed tileset: {}", msg),
            TilesetError::DuplicateAnimation(id) => {
                write!(f, "Duplicate animation declared for tile {}", id)
            }
        }
    }
}

impl std::error::Error for TilesetError {}
