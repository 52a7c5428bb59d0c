use std::ops::Range;

use super::atlas::AtlasHandle;
use super::pipeline::TileVertex;
use crate::geometry::Rect;
use crate::tilemap::BlitTarget;

/// A span of the batch's vertices that all sample the same atlas.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawRun {
    pub atlas: AtlasHandle,
    pub vertices: Range<u32>,
}

/// CPU-side list of textured quads for one frame.
///
/// Every blit becomes two triangles (six vertices). Consecutive blits from the
/// same atlas share a [`DrawRun`] so the renderer binds each atlas once per
/// run instead of once per tile.
#[derive(Default)]
pub struct QuadBatch {
    vertices: Vec<TileVertex>,
    runs: Vec<DrawRun>,
}

impl QuadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(quads: usize) -> Self {
        Self { vertices: Vec::with_capacity(quads * 6), runs: Vec::new() }
    }

    /// Drop all quads but keep the allocation for the next frame.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.runs.clear();
    }

    pub fn is_empty(&self) -> bool { self.vertices.is_empty() }
    pub fn quad_count(&self) -> usize { self.vertices.len() / 6 }
    pub fn vertices(&self) -> &[TileVertex] { &self.vertices }
    pub fn runs(&self) -> &[DrawRun] { &self.runs }

    fn push_quad(&mut self, atlas: AtlasHandle, src: Rect, dst: Rect) {
        let (uv_min, uv_max) = atlas.uv_rect(src);
        let px = dst.x as f32;
        let py = dst.y as f32;
        let pw = dst.w as f32;
        let ph = dst.h as f32;

        let tl = TileVertex { position: [px,      py     ], uv: uv_min };
        let tr = TileVertex { position: [px + pw, py     ], uv: [uv_max[0], uv_min[1]] };
        let bl = TileVertex { position: [px,      py + ph], uv: [uv_min[0], uv_max[1]] };
        let br = TileVertex { position: [px + pw, py + ph], uv: uv_max };
        self.vertices.extend_from_slice(&[tl, bl, tr, tr, bl, br]);
    }
}

impl BlitTarget for QuadBatch {
    type Texture = AtlasHandle;

    fn blit(&mut self, texture: AtlasHandle, src: Rect, dst: Rect) {
        let start = self.vertices.len() as u32;
        self.push_quad(texture, src, dst);
        let end = self.vertices.len() as u32;

        match self.runs.last_mut() {
            Some(run) if run.atlas.id == texture.id => run.vertices.end = end,
            _ => self.runs.push(DrawRun { atlas: texture, vertices: start..end }),
        }
    }
}
