use std::fmt;

/// Everything that can go wrong while building or drawing a [`TiledMap`](super::TiledMap).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TileMapError {
    /// The atlas cannot be cut into whole, square, non-empty tiles, or it
    /// reaches past the `i32` pixel coordinate range.
    InvalidAtlasGeometry {
        atlas_w: u32,
        atlas_h: u32,
        tile_w: u32,
        tile_h: u32,
    },
    /// The index array does not hold exactly `rows * cols` entries.
    IndexCountMismatch { expected: usize, actual: usize },
    /// A grid cell names a tile the atlas does not have.
    TileIndexOutOfRange {
        cell: usize,
        index: u16,
        tiles_on_atlas: usize,
    },
    /// The grid's pixel footprint is larger than the viewport.
    ///
    /// The footprint is widened to `u64` so oversized grids report their true
    /// size.
    ViewportTooSmall {
        needed_w: u64,
        needed_h: u64,
        viewport_w: u32,
        viewport_h: u32,
    },
    /// The loaded texture is not the size the atlas was configured with.
    TextureSizeMismatch {
        expected_w: u32,
        expected_h: u32,
        actual_w: u32,
        actual_h: u32,
    },
    /// `render` was called before a successful `initialize`.
    NotInitialized,
}

impl fmt::Display for TileMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileMapError::InvalidAtlasGeometry { atlas_w, atlas_h, tile_w, tile_h } => write!(
                f,
                "atlas {atlas_w}x{atlas_h} cannot be divided into square {tile_w}x{tile_h} tiles"
            ),
            TileMapError::IndexCountMismatch { expected, actual } => {
                write!(f, "expected {expected} tile indices, got {actual}")
            }
            TileMapError::TileIndexOutOfRange { cell, index, tiles_on_atlas } => write!(
                f,
                "cell {cell} references tile {index}, atlas only has {tiles_on_atlas}"
            ),
            TileMapError::ViewportTooSmall { needed_w, needed_h, viewport_w, viewport_h } => write!(
                f,
                "map needs {needed_w}x{needed_h} px but viewport is {viewport_w}x{viewport_h}"
            ),
            TileMapError::TextureSizeMismatch { expected_w, expected_h, actual_w, actual_h } => write!(
                f,
                "atlas texture is {actual_w}x{actual_h}, expected {expected_w}x{expected_h}"
            ),
            TileMapError::NotInitialized => write!(f, "tile map has not been initialized"),
        }
    }
}

impl std::error::Error for TileMapError {}
