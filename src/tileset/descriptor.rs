use super::types::{TileId, TileRect};
use crate::error::TilesetError;

/// Static geometry of a tile atlas: how tile IDs map to pixel rectangles
/// within the backing image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilesetDescriptor {
    pub name: String,
    /// Pixel width of one tile cell
    pub tile_width: u32,
    /// Pixel height of one tile cell
    pub tile_height: u32,
    /// Total addressable tile IDs; every referenced ID is in `[0, tile_count)`
    pub tile_count: u32,
    /// Atlas width in tile units
    pub columns: u32,
    /// Pixels around the outer edge of the image
    pub margin: u32,
    /// Pixels between adjacent tile cells
    pub spacing: u32,
    /// Image path as written in the asset; not resolved or loaded here
    pub image_source: String,
    pub image_width: u32,
    pub image_height: u32,
}

impl TilesetDescriptor {
    /// Number of tile rows in the atlas (last row may be partial)
    pub fn rows(&self) -> u32 {
        self.tile_count.div_ceil(self.columns)
    }

    /// Check whether an ID addresses a tile in this atlas
    pub fn contains(&self, id: TileId) -> bool {
        id < self.tile_count
    }

    /// Pixel rectangle of a tile within the atlas image, or `None` when the
    /// ID is out of range
    pub fn tile_rect(&self, id: TileId) -> Option<TileRect> {
        if !self.contains(id) {
            return None;
        }
        let col = id % self.columns;
        let row = id / self.columns;
        Some(TileRect {
            x: self.margin + col * (self.tile_width + self.spacing),
            y: self.margin + row * (self.tile_height + self.spacing),
            width: self.tile_width,
            height: self.tile_height,
        })
    }

    /// Validate atlas geometry: positive dimensions and image size consistent
    /// with the declared grid
    pub fn validate(&self) -> Result<(), TilesetError> {
        if self.tile_width == 0 || self.tile_height == 0 {
            return Err(TilesetError::MalformedAsset(format!(
                "tile size must be positive, got {}x{}",
                self.tile_width, self.tile_height
            )));
        }
        if self.columns == 0 {
            return Err(TilesetError::MalformedAsset(
                "columns must be positive".to_string(),
            ));
        }
        if self.tile_count == 0 {
            return Err(TilesetError::MalformedAsset(
                "tilecount must be positive".to_string(),
            ));
        }

        // Widen before multiplying: the fields individually fit in u32, but a
        // hostile document can make the products exceed it
        let margin = u64::from(self.margin);
        let spacing = u64::from(self.spacing);

        let columns = u64::from(self.columns);
        let expected_width =
            2 * margin + columns * u64::from(self.tile_width) + (columns - 1) * spacing;
        if u64::from(self.image_width) != expected_width {
            return Err(TilesetError::MalformedAsset(format!(
                "image width {} does not fit {} columns of {}px tiles (expected {})",
                self.image_width, self.columns, self.tile_width, expected_width
            )));
        }

        let rows = u64::from(self.rows());
        let expected_height =
            2 * margin + rows * u64::from(self.tile_height) + (rows - 1) * spacing;
        if u64::from(self.image_height) != expected_height {
            return Err(TilesetError::MalformedAsset(format!(
                "image height {} does not fit {} rows of {}px tiles (expected {})",
                self.image_height, rows, self.tile_height, expected_height
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overworld() -> TilesetDescriptor {
        TilesetDescriptor {
            name: "overworld".to_string(),
            tile_width: 16,
            tile_height: 16,
            tile_count: 1440,
            columns: 40,
            margin: 0,
            spacing: 0,
            image_source: "Overworld.png".to_string(),
            image_width: 640,
            image_height: 576,
        }
    }

    #[test]
    fn test_tile_rect() {
        let desc = overworld();

        // First tile sits at the origin
        let rect = desc.tile_rect(0).unwrap();
        assert_eq!((rect.x, rect.y), (0, 0));
        assert_eq!((rect.width, rect.height), (16, 16));

        // Tile 41 is column 1, row 1
        let rect = desc.tile_rect(41).unwrap();
        assert_eq!((rect.x, rect.y), (16, 16));

        // Last valid tile, out of range just past it
        assert!(desc.tile_rect(1439).is_some());
        assert_eq!(desc.tile_rect(1440), None);
    }

    #[test]
    fn test_tile_rect_with_margin_and_spacing() {
        let desc = TilesetDescriptor {
            margin: 2,
            spacing: 1,
            image_width: 2 * 2 + 40 * 16 + 39,
            image_height: 2 * 2 + 36 * 16 + 35,
            ..overworld()
        };
        desc.validate().expect("geometry should be consistent");

        let rect = desc.tile_rect(41).unwrap();
        assert_eq!((rect.x, rect.y), (2 + 17, 2 + 17));
    }

    #[test]
    fn test_rows_rounds_up_partial_row() {
        let desc = TilesetDescriptor {
            tile_count: 10,
            columns: 4,
            image_width: 64,
            image_height: 48,
            ..overworld()
        };
        assert_eq!(desc.rows(), 3);
    }

    #[test]
    fn test_validate_accepts_overworld_geometry() {
        assert!(overworld().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inconsistent_image_size() {
        let desc = TilesetDescriptor {
            image_width: 600,
            ..overworld()
        };
        assert!(matches!(
            desc.validate(),
            Err(TilesetError::MalformedAsset(_))
        ));

        let desc = TilesetDescriptor {
            image_height: 580,
            ..overworld()
        };
        assert!(matches!(
            desc.validate(),
            Err(TilesetError::MalformedAsset(_))
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_grid() {
        // columns * tile_width exceeds u32; must report malformed geometry,
        // not overflow
        let desc = TilesetDescriptor {
            columns: 65_536,
            tile_width: 65_536,
            tile_count: 65_536,
            ..overworld()
        };
        assert!(matches!(
            desc.validate(),
            Err(TilesetError::MalformedAsset(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_dimensions() {
        for desc in [
            TilesetDescriptor {
                tile_width: 0,
                ..overworld()
            },
            TilesetDescriptor {
                columns: 0,
                ..overworld()
            },
            TilesetDescriptor {
                tile_count: 0,
                ..overworld()
            },
        ] {
            assert!(matches!(
                desc.validate(),
                Err(TilesetError::MalformedAsset(_))
            ));
        }
    }
}
