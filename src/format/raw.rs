use serde::Deserialize;

/// Raw mirror of a Tiled JSON tileset document (`.tsj`), field names as
/// written by the editor. Numeric fields stay signed here so the loader can
/// report negative values as malformed instead of as opaque parse failures.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTileset {
    #[serde(default)]
    pub name: String,
    pub tilewidth: i64,
    pub tileheight: i64,
    pub tilecount: i64,
    pub columns: i64,
    #[serde(default)]
    pub margin: i64,
    #[serde(default)]
    pub spacing: i64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub imagewidth: i64,
    #[serde(default)]
    pub imageheight: i64,
    /// Per-tile metadata entries; only present for tiles that carry extras
    /// such as an animation
    #[serde(default)]
    pub tiles: Vec<RawTile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTile {
    pub id: i64,
    /// `None` for entries that only carry other metadata (e.g. properties);
    /// an explicitly empty list is rejected by the loader
    #[serde(default)]
    pub animation: Option<Vec<RawFrame>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawFrame {
    pub tileid: i64,
    pub duration: i64,
}
