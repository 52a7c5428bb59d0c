use anyhow::Context;
use wgpu::util::DeviceExt;

use crate::geometry::Rect;

/// Cheap, copyable reference to an atlas texture owned by the [`Renderer`](super::Renderer).
///
/// Carries the texture's pixel size so blits can be turned into UVs without
/// going back to the GPU object.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AtlasHandle {
    pub id: u32,
    pub width: u32,
    pub height: u32,
}

impl AtlasHandle {
    /// Normalised `(uv_min, uv_max)` for a pixel rectangle of this atlas.
    pub fn uv_rect(&self, src: Rect) -> ([f32; 2], [f32; 2]) {
        let total_w = self.width.max(1) as f32;
        let total_h = self.height.max(1) as f32;

        let u_min = src.x as f32 / total_w;
        let v_min = src.y as f32 / total_h;
        let u_max = src.right() as f32 / total_w;
        let v_max = src.bottom() as f32 / total_h;

        ([u_min, v_min], [u_max, v_max])
    }
}

pub struct AtlasTexture {
    pub texture_view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    width: u32,
    height: u32,
}

impl AtlasTexture {
    /// Decode a PNG and upload it as an sRGB texture sampled with nearest
    /// filtering, so tile edges stay crisp.
    pub fn from_png(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        png_bytes: &[u8],
    ) -> anyhow::Result<Self> {
        let img = image::load_from_memory(png_bytes)
            .context("failed to decode atlas PNG")?
            .to_rgba8();
        let (width, height) = img.dimensions();

        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture_with_data(
            queue,
            &wgpu::TextureDescriptor {
                label: Some("tile_atlas"),
                size,
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Rgba8UnormSrgb,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            },
            wgpu::util::TextureDataOrder::LayerMajor,
            &img,
        );

        let texture_view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Ok(Self { texture_view, sampler, width, height })
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
}
