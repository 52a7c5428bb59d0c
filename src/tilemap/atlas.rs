use super::TileMapError;
use crate::geometry::Rect;

/// A texture region cut into equal square tiles, plus the source rectangle of
/// every tile in row-major order.
///
/// Tile `i` sits at column `i % tiles_per_row`, row `i / tiles_per_row`. The
/// stride is the number of tiles across one atlas row, so non-square atlases
/// index the same way square ones do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileAtlas {
    bounds: Rect,
    tile_size: u32,
    tiles_per_row: u32,
    tiles_per_column: u32,
    source_rects: Vec<Rect>,
}

impl TileAtlas {
    /// Partition `bounds` into tiles the size of `tile`.
    ///
    /// Only the width and height of `tile` matter. Tiles must be square and
    /// non-empty, and must divide the atlas exactly on both axes. The whole
    /// atlas must lie inside `i32` pixel coordinates.
    pub fn new(bounds: Rect, tile: Rect) -> Result<Self, TileMapError> {
        let geometry_error = || TileMapError::InvalidAtlasGeometry {
            atlas_w: bounds.w,
            atlas_h: bounds.h,
            tile_w: tile.w,
            tile_h: tile.h,
        };

        if tile.w == 0 || tile.w != tile.h {
            return Err(geometry_error());
        }
        if bounds.w % tile.w != 0 || bounds.h % tile.h != 0 {
            return Err(geometry_error());
        }
        if bounds.right() > i32::MAX as i64 || bounds.bottom() > i32::MAX as i64 {
            return Err(geometry_error());
        }

        let tile_size = tile.w;
        let tiles_per_row = bounds.w / tile_size;
        let tiles_per_column = bounds.h / tile_size;
        let tiles_on_atlas = (tiles_per_row as usize)
            .checked_mul(tiles_per_column as usize)
            .ok_or_else(geometry_error)?;

        // Every origin is below `right()`/`bottom()`, so it fits in `i32`.
        let origin = |start: i32, step: u32| (start as i64 + step as i64 * tile_size as i64) as i32;

        let mut source_rects = Vec::with_capacity(tiles_on_atlas);
        for row in 0..tiles_per_column {
            for col in 0..tiles_per_row {
                source_rects.push(Rect::new(
                    origin(bounds.x, col),
                    origin(bounds.y, row),
                    tile_size,
                    tile_size,
                ));
            }
        }

        Ok(Self { bounds, tile_size, tiles_per_row, tiles_per_column, source_rects })
    }

    pub fn bounds(&self) -> Rect { self.bounds }
    pub fn tile_size(&self) -> u32 { self.tile_size }
    pub fn tiles_per_row(&self) -> u32 { self.tiles_per_row }
    pub fn tiles_per_column(&self) -> u32 { self.tiles_per_column }

    /// Total number of addressable tiles.
    pub fn tiles_on_atlas(&self) -> usize {
        self.source_rects.len()
    }

    /// Source rectangle for tile `index`, or `None` past the end of the atlas.
    pub fn source_rect(&self, index: u16) -> Option<Rect> {
        self.source_rects.get(index as usize).copied()
    }

    /// All source rectangles, indexed by tile index.
    pub fn source_rects(&self) -> &[Rect] {
        &self.source_rects
    }

    /// Check a loaded texture against the configured atlas size.
    pub fn verify_texture_size(&self, width: u32, height: u32) -> Result<(), TileMapError> {
        if width == self.bounds.w && height == self.bounds.h {
            Ok(())
        } else {
            Err(TileMapError::TextureSizeMismatch {
                expected_w: self.bounds.w,
                expected_h: self.bounds.h,
                actual_w: width,
                actual_h: height,
            })
        }
    }
}
