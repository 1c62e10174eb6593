use super::raw::{RawFrame, RawTileset};
use crate::error::TilesetError;
use crate::tileset::{Frame, TileAnimation, TileId, Tileset, TilesetDescriptor};
use bevy::log::info;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Read, parse and validate a Tiled JSON tileset document from disk
pub fn load_tileset<P: AsRef<Path>>(path: P) -> Result<Tileset, TilesetError> {
    let text = fs::read_to_string(path)?;
    parse_tileset(&text)
}

/// Parse and validate a Tiled JSON tileset document
pub fn parse_tileset(text: &str) -> Result<Tileset, TilesetError> {
    let raw: RawTileset = serde_json::from_str(text)?;
    build_tileset(raw)
}

fn build_tileset(raw: RawTileset) -> Result<Tileset, TilesetError> {
    let descriptor = TilesetDescriptor {
        name: raw.name,
        tile_width: dimension(raw.tilewidth, "tilewidth")?,
        tile_height: dimension(raw.tileheight, "tileheight")?,
        tile_count: dimension(raw.tilecount, "tilecount")?,
        columns: dimension(raw.columns, "columns")?,
        margin: dimension(raw.margin, "margin")?,
        spacing: dimension(raw.spacing, "spacing")?,
        image_source: raw.image,
        image_width: dimension(raw.imagewidth, "imagewidth")?,
        image_height: dimension(raw.imageheight, "imageheight")?,
    };
    descriptor.validate()?;

    let mut animations = HashMap::new();
    for tile in raw.tiles {
        // Every declared tile ID must address the atlas, animated or not
        let base_id = tile_id_in_range(tile.id, &descriptor)?;
        let Some(raw_frames) = tile.animation else {
            // Metadata-only entry (e.g. custom properties), nothing to do
            continue;
        };

        let frames = raw_frames
            .iter()
            .map(|frame| frame_from_raw(frame, &descriptor))
            .collect::<Result<Vec<_>, _>>()?;

        let animation = TileAnimation::new(frames).map_err(|err| match err {
            TilesetError::MalformedAsset(msg) => {
                TilesetError::MalformedAsset(format!("tile {}: {}", base_id, msg))
            }
            other => other,
        })?;

        if animations.insert(base_id, animation).is_some() {
            return Err(TilesetError::DuplicateAnimation(base_id));
        }
    }

    info!(
        "Loaded tileset \"{}\": {} tiles ({} columns), {} animated",
        descriptor.name,
        descriptor.tile_count,
        descriptor.columns,
        animations.len()
    );

    Ok(Tileset::new(descriptor, animations))
}

fn dimension(value: i64, field: &str) -> Result<u32, TilesetError> {
    u32::try_from(value).map_err(|_| {
        TilesetError::MalformedAsset(format!("{} must be a non-negative integer, got {}", field, value))
    })
}

fn tile_id_in_range(id: i64, descriptor: &TilesetDescriptor) -> Result<TileId, TilesetError> {
    if id < 0 || id >= i64::from(descriptor.tile_count) {
        return Err(TilesetError::MalformedAsset(format!(
            "tile id {} out of range for tilecount {}",
            id, descriptor.tile_count
        )));
    }
    Ok(id as TileId)
}

fn frame_from_raw(raw: &RawFrame, descriptor: &TilesetDescriptor) -> Result<Frame, TilesetError> {
    let tile_id = tile_id_in_range(raw.tileid, descriptor)?;
    let duration_ms = u32::try_from(raw.duration)
        .ok()
        .filter(|&d| d > 0)
        .ok_or_else(|| {
            TilesetError::MalformedAsset(format!(
                "frame targeting tile {} has invalid duration {}",
                tile_id, raw.duration
            ))
        })?;
    Ok(Frame::new(tile_id, duration_ms))
}
