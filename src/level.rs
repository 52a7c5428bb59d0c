// =============================================================================
// LEVEL.RS — Embedded level data
//
// Levels are compiled into the binary as flat row-major `u16` tables, one
// entry per cell, each naming a tile in the atlas. There is no file format;
// new levels are new constants.
// =============================================================================

use crate::geometry::Rect;
use crate::tilemap::{TileMapError, TiledMap};

/// A fixed grid of tile indices.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Level {
    pub name: &'static str,
    pub rows: u32,
    pub cols: u32,
    /// Row-major, `rows * cols` entries.
    pub tiles: &'static [u16],
}

impl Level {
    /// The 36 × 28 maze drawn from the 192 × 192 sample atlas. Tile 49 is the
    /// empty background.
    pub const MAZE: Level = Level {
        name: "maze",
        rows: MAZE_ROWS,
        cols: MAZE_COLS,
        tiles: &MAZE_TILES,
    };

    /// Tile index at `(row, col)`, or `None` outside the grid.
    pub fn tile_at(&self, row: u32, col: u32) -> Option<u16> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.tiles.get((row * self.cols + col) as usize).copied()
    }

    /// Construct and initialize a map for this level in one step.
    pub fn build_map<T: Copy>(
        &self,
        atlas_rect: Rect,
        tile_rect: Rect,
        texture: T,
    ) -> Result<TiledMap<T>, TileMapError> {
        let mut map = TiledMap::new(self.rows, self.cols);
        map.initialize(atlas_rect, tile_rect, texture, self.tiles)?;
        Ok(map)
    }
}

const MAZE_ROWS: u32 = 36;
const MAZE_COLS: u32 = 28;

#[rustfmt::skip]
const MAZE_TILES: [u16; (MAZE_ROWS * MAZE_COLS) as usize] = [
    49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49,
    49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49,
    49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49,
     6,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7, 40, 39,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  8,
    18, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 15, 17, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 20,
    18, 16,  0,  1,  1,  2, 16,  0,  1,  1,  1,  2, 16, 15, 17, 16,  0,  1,  1,  1,  2, 16,  0,  1,  1,  2, 16, 20,
    18, 13, 12, 49, 49, 14, 16, 12, 49, 49, 49, 14, 16, 15, 17, 16, 12, 49, 49, 49, 14, 16, 12, 49, 49, 14, 13, 20,
    18, 16, 24, 25, 25, 26, 16, 24, 25, 25, 25, 26, 16, 27, 29, 16, 24, 25, 25, 25, 26, 16, 24, 25, 25, 26, 16, 20,
    18, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 20,
    18, 16,  0,  1,  1,  2, 16,  0,  2, 16,  0,  1,  1,  1,  1,  1,  1,  2, 16,  0,  2, 16,  0,  1,  1,  2, 16, 20,
    18, 16, 24, 25, 25, 26, 16, 12, 14, 16, 24, 25, 25,  5,  3, 25, 25, 26, 16, 12, 14, 16, 24, 25, 25, 26, 16, 20,
    18, 16, 16, 16, 16, 16, 16, 12, 14, 16, 16, 16, 16, 12, 14, 16, 16, 16, 16, 12, 14, 16, 16, 16, 16, 16, 16, 20,
    30, 31, 31, 31, 31, 11, 16, 12, 27,  1,  1,  2, 49, 12, 14, 49,  0,  1,  1, 29, 14, 16,  9, 31, 31, 31, 31, 32,
    49, 49, 49, 49, 49, 23, 16, 12,  3, 25, 25, 26, 49, 24, 26, 49, 24, 25, 25,  5, 14, 16, 21, 49, 49, 49, 49, 49,
    49, 49, 49, 49, 49, 23, 16, 12, 14, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 12, 14, 16, 21, 49, 49, 49, 49, 49,
    49, 49, 49, 49, 49, 23, 16, 12, 14, 49, 36, 37, 22, 47, 47, 19, 37, 38, 49, 12, 14, 16, 21, 49, 49, 49, 49, 49,
    34, 34, 34, 34, 34, 35, 16, 24, 26, 49, 48, 49, 49, 49, 49, 49, 49, 50, 49, 24, 26, 16, 33, 34, 34, 34, 34, 34,
    49, 49, 49, 49, 49, 49, 16, 49, 49, 49, 48, 49, 49, 49, 49, 49, 49, 50, 49, 49, 49, 16, 49, 49, 49, 49, 49, 49,
    10, 10, 10, 10, 10, 11, 16,  0,  2, 49, 48, 49, 49, 49, 49, 49, 49, 50, 49,  0,  2, 16,  9, 10, 10, 10, 10, 10,
    49, 49, 49, 49, 49, 23, 16, 12, 14, 49, 60, 61, 61, 61, 61, 61, 61, 62, 49, 12, 14, 16, 21, 49, 49, 49, 49, 49,
    49, 49, 49, 49, 49, 23, 16, 12, 14, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 12, 14, 16, 21, 49, 49, 49, 49, 49,
    49, 49, 49, 49, 49, 23, 16, 12, 14, 49,  0,  1,  1,  1,  1,  1,  1,  2, 49, 12, 14, 16, 21, 49, 49, 49, 49, 49,
     6, 34, 34, 34, 34, 35, 16, 24, 26, 49, 24, 25, 25,  5,  3, 25, 25, 26, 49, 24, 26, 16, 33,  7,  7,  7,  7,  8,
    18, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 12, 14, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 20,
    18, 16,  0,  1,  1,  2, 16,  0,  1,  1,  1,  2, 16, 12, 14, 16,  0,  1,  1,  1,  2, 16,  0,  1,  1,  2, 16, 20,
    18, 16, 24, 25,  5, 14, 16, 24, 25, 25, 25, 26, 16, 12, 14, 16, 24, 25, 25, 25, 26, 16, 12,  3, 25, 26, 16, 20,
    18, 13, 16, 16, 12, 14, 16, 16, 16, 16, 16, 16, 16, 24, 26, 16, 16, 16, 16, 16, 16, 16, 12, 14, 16, 16, 13, 20,
    53, 25,  5, 16, 12, 14, 16,  0,  2, 16,  0,  1,  1,  1,  1,  1,  1,  2, 16,  0,  2, 16, 12, 14, 16,  3,  4, 54,
    41, 28, 29, 16, 24, 26, 16, 12, 14, 16, 24, 25, 25,  5,  3, 25, 25, 26, 16, 12, 14, 16, 24, 26, 16, 27, 28, 42,
    18, 16, 16, 16, 16, 16, 16, 12, 14, 16, 16, 16, 16, 12, 14, 16, 16, 16, 16, 12, 14, 16, 16, 16, 16, 16, 16, 20,
    18, 16,  0,  1,  1,  1,  1, 29, 27,  1,  1,  2, 16, 12, 14, 16,  0,  1,  1, 29, 27,  1,  1,  1,  1,  2, 16, 20,
    18, 16, 24, 25, 25, 25, 25, 25, 25, 25, 25, 26, 16, 24, 26, 16, 24, 25, 25, 25, 25, 25, 25, 25, 25, 26, 16, 20,
    18, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 20,
    30, 31, 31, 31, 31, 31, 31, 31, 31, 31, 31, 31, 31, 31, 31, 31, 31, 31, 31, 31, 31, 31, 31, 31, 31, 31, 31, 32,
    49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49,
    49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49, 49,
];
