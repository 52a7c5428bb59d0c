// =============================================================================
// TILEMAP — static tile-atlas map compositor
//
// A `TiledMap` owns a rows × cols grid of tile indices and the source table
// of the atlas those indices point into. Once initialized it can be drawn any
// number of times: each call centres the grid in the viewport and issues one
// blit per cell, row by row.
//
// The map never touches a GPU. Drawing goes through `BlitTarget`, so the same
// code feeds the wgpu quad batch and the recording targets used in tests.
// =============================================================================

pub mod atlas;
mod error;

pub use atlas::TileAtlas;
pub use error::TileMapError;

use crate::geometry::{Rect, center_offset};

// ── BlitTarget ───────────────────────────────────────────────────────────────

/// Anything that can copy a rectangle of a texture onto the screen.
///
/// `Texture` is a non-owning handle: an id or a shared reference whose
/// referent is owned elsewhere and outlives the map holding it.
pub trait BlitTarget {
    type Texture: Copy;

    fn blit(&mut self, texture: Self::Texture, src: Rect, dst: Rect);
}

// ── MapLayout ────────────────────────────────────────────────────────────────

/// Where the grid lands inside a given viewport.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MapLayout {
    pub x_offset: u32,
    pub y_offset: u32,
    pub tile_size: u32,
    pub rows: u32,
    pub cols: u32,
}

impl MapLayout {
    /// Destination rectangle for cell `(row, col)`.
    ///
    /// Coordinates past `i32::MAX` saturate.
    #[inline]
    pub fn cell_rect(&self, row: u32, col: u32) -> Rect {
        let place = |cell: u32, offset: u32| {
            let px = cell as u64 * self.tile_size as u64 + offset as u64;
            i32::try_from(px).unwrap_or(i32::MAX)
        };
        Rect::new(place(col, self.x_offset), place(row, self.y_offset), self.tile_size, self.tile_size)
    }
}

// ── TiledMap ─────────────────────────────────────────────────────────────────

#[derive(Debug)]
struct Loaded<T> {
    atlas: TileAtlas,
    texture: T,
    /// Row-major copy of the caller's index array.
    cells: Vec<u16>,
}

#[derive(Debug)]
pub struct TiledMap<T> {
    rows: u32,
    cols: u32,
    loaded: Option<Loaded<T>>,
}

impl<T: Copy> TiledMap<T> {
    /// A map of `rows × cols` cells with no atlas or tiles yet.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols, loaded: None }
    }

    /// Build the source table from `atlas_rect` / `tile_rect` and copy
    /// `indices` into the map.
    ///
    /// Every check runs before anything is stored: on error the map keeps
    /// whatever state it had (uninitialized for a fresh map).
    pub fn initialize(
        &mut self,
        atlas_rect: Rect,
        tile_rect: Rect,
        texture: T,
        indices: &[u16],
    ) -> Result<(), TileMapError> {
        let atlas = TileAtlas::new(atlas_rect, tile_rect)?;

        let expected = self.cell_count();
        if indices.len() != expected {
            return Err(TileMapError::IndexCountMismatch { expected, actual: indices.len() });
        }

        let tiles_on_atlas = atlas.tiles_on_atlas();
        if let Some((cell, &index)) = indices
            .iter()
            .enumerate()
            .find(|&(_, &i)| i as usize >= tiles_on_atlas)
        {
            return Err(TileMapError::TileIndexOutOfRange { cell, index, tiles_on_atlas });
        }

        tracing::debug!(
            rows = self.rows,
            cols = self.cols,
            tile_size = atlas.tile_size(),
            tiles_per_row = atlas.tiles_per_row(),
            tiles_per_column = atlas.tiles_per_column(),
            tiles_on_atlas,
            "tile map initialized"
        );

        self.loaded = Some(Loaded { atlas, texture, cells: indices.to_vec() });
        Ok(())
    }

    // ── Accessors ──────────────────────────────────────────────────────────

    pub fn rows(&self) -> u32 { self.rows }
    pub fn cols(&self) -> u32 { self.cols }
    pub fn cell_count(&self) -> usize { self.rows as usize * self.cols as usize }
    pub fn is_initialized(&self) -> bool { self.loaded.is_some() }

    pub fn tile_size(&self) -> Option<u32> {
        self.loaded.as_ref().map(|l| l.atlas.tile_size())
    }

    pub fn atlas(&self) -> Option<&TileAtlas> {
        self.loaded.as_ref().map(|l| &l.atlas)
    }

    pub fn texture(&self) -> Option<T> {
        self.loaded.as_ref().map(|l| l.texture)
    }

    /// The stored grid, row-major.
    pub fn cells(&self) -> Option<&[u16]> {
        self.loaded.as_ref().map(|l| l.cells.as_slice())
    }

    /// Tile index at `(row, col)`.
    pub fn tile_at(&self, row: u32, col: u32) -> Option<u16> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells().map(|c| c[self.cell_index(row, col)])
    }

    /// Pixel size of the whole grid, `(width, height)`.
    pub fn footprint(&self) -> Option<(u64, u64)> {
        self.tile_size().map(|t| (self.cols as u64 * t as u64, self.rows as u64 * t as u64))
    }

    #[inline]
    fn cell_index(&self, row: u32, col: u32) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    // ── Layout & drawing ───────────────────────────────────────────────────

    /// Centre the grid in a `viewport_w × viewport_h` viewport.
    pub fn layout(&self, viewport_w: u32, viewport_h: u32) -> Result<MapLayout, TileMapError> {
        let tile_size = self.tile_size().ok_or(TileMapError::NotInitialized)?;
        let (needed_w, needed_h) = self.footprint().ok_or(TileMapError::NotInitialized)?;
        let too_small = || TileMapError::ViewportTooSmall { needed_w, needed_h, viewport_w, viewport_h };

        // A footprint that does not fit in u32 cannot fit any viewport.
        let fit = |span: u32, extent: u64| u32::try_from(extent).ok().and_then(|e| center_offset(span, e));
        let x_offset = fit(viewport_w, needed_w).ok_or_else(too_small)?;
        let y_offset = fit(viewport_h, needed_h).ok_or_else(too_small)?;

        Ok(MapLayout {
            x_offset,
            y_offset,
            tile_size,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// The `(src, dst)` pairs `render` would blit, in draw order.
    pub fn draw_list(&self, viewport_w: u32, viewport_h: u32) -> Result<Vec<(Rect, Rect)>, TileMapError> {
        let mut list = Vec::with_capacity(self.cell_count());
        self.for_each_blit(viewport_w, viewport_h, |_, src, dst| list.push((src, dst)))?;
        Ok(list)
    }

    /// Draw every cell into `target`, centred in the viewport.
    ///
    /// Either the whole grid is blitted or nothing is: the viewport check
    /// happens before the first blit.
    pub fn render<B>(&self, target: &mut B, viewport_w: u32, viewport_h: u32) -> Result<(), TileMapError>
    where
        B: BlitTarget<Texture = T>,
    {
        self.for_each_blit(viewport_w, viewport_h, |texture, src, dst| target.blit(texture, src, dst))
    }

    fn for_each_blit<F>(&self, viewport_w: u32, viewport_h: u32, mut f: F) -> Result<(), TileMapError>
    where
        F: FnMut(T, Rect, Rect),
    {
        let loaded = self.loaded.as_ref().ok_or(TileMapError::NotInitialized)?;
        let layout = self.layout(viewport_w, viewport_h)?;
        let source = loaded.atlas.source_rects();

        for row in 0..self.rows {
            for col in 0..self.cols {
                let index = loaded.cells[self.cell_index(row, col)];
                // Indices were range-checked in `initialize`.
                let src = source[index as usize];
                f(loaded.texture, src, layout.cell_rect(row, col));
            }
        }
        Ok(())
    }
}
