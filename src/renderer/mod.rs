pub mod atlas;
pub mod batch;
pub mod pipeline;

use std::sync::Arc;

use anyhow::Context;
use wgpu::util::DeviceExt;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use atlas::{AtlasHandle, AtlasTexture};
use batch::QuadBatch;
use pipeline::{TilePipeline, TileVertex, orthographic_projection};

struct LoadedAtlas {
    texture: AtlasTexture,
    bind_group: wgpu::BindGroup,
}

/// Persistent vertex buffer for the map quads.
///
/// The map is static, so after the first frame the bytes hash the same and
/// the upload is skipped. The buffer only grows.
#[derive(Default)]
struct VertexStore {
    buffer: Option<wgpu::Buffer>,
    /// Number of `TileVertex` slots `buffer` can hold.
    capacity: u32,
    /// FNV-1a hash of the last uploaded bytes.
    hash: u64,
}

/// FNV-1a 64-bit hash, used to detect unchanged vertex data.
fn fnv1a_64(data: &[u8]) -> u64 {
    data.iter().fold(14695981039346656037u64, |h, &b| {
        (h ^ b as u64).wrapping_mul(1099511628211)
    })
}

impl VertexStore {
    fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, vertices: &[TileVertex]) {
        if vertices.is_empty() {
            return;
        }
        let bytes: &[u8] = bytemuck::cast_slice(vertices);
        let hash = fnv1a_64(bytes);
        let count = vertices.len() as u32;

        if self.buffer.is_none() || count > self.capacity {
            let capacity = count.next_power_of_two().max(256);
            self.buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("tile_vertex_buffer"),
                size: capacity as u64 * std::mem::size_of::<TileVertex>() as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.capacity = capacity;
            self.hash = !hash; // fresh buffer is empty
        }

        if hash != self.hash {
            if let Some(buffer) = &self.buffer {
                queue.write_buffer(buffer, 0, bytes);
                self.hash = hash;
            }
        }
    }
}

/// wgpu surface, device and the one pipeline the map is drawn with.
pub struct Renderer {
    pub window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: TilePipeline,
    projection_buffer: wgpu::Buffer,
    projection_bind_group: wgpu::BindGroup,
    /// Indexed by `AtlasHandle::id`.
    atlases: Vec<LoadedAtlas>,
    vertices: VertexStore,
    clear_color: wgpu::Color,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, clear_color: [f64; 4]) -> anyhow::Result<Self> {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(Arc::clone(&window))
            .context("failed to create window surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                ..Default::default()
            })
            .await
            .context("no suitable GPU adapter found")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default())
            .await
            .context("failed to create device")?;

        let config = surface_config(&surface, &adapter, window.inner_size())?;
        surface.configure(&device, &config);

        let pipeline = TilePipeline::new(&device, config.format);

        let projection = orthographic_projection(config.width as f32, config.height as f32);
        let projection_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("tile_projection"),
            contents: bytemuck::cast_slice(&projection),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let projection_bind_group = pipeline.projection_bind_group(&device, &projection_buffer);

        tracing::info!(
            adapter = %adapter.get_info().name,
            format = ?config.format,
            width = config.width,
            height = config.height,
            "renderer ready"
        );

        let [r, g, b, a] = clear_color;
        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            projection_buffer,
            projection_bind_group,
            atlases: Vec::new(),
            vertices: VertexStore::default(),
            clear_color: wgpu::Color { r, g, b, a },
        })
    }

    /// Upload an atlas PNG and return the handle blits refer to it by.
    ///
    /// The texture lives as long as the renderer, and so does the handle.
    pub fn load_atlas(&mut self, png_bytes: &[u8]) -> anyhow::Result<AtlasHandle> {
        let texture = AtlasTexture::from_png(&self.device, &self.queue, png_bytes)?;
        let bind_group = self
            .pipeline
            .atlas_bind_group(&self.device, &texture.texture_view, &texture.sampler);

        let handle = AtlasHandle {
            id: self.atlases.len() as u32,
            width: texture.width(),
            height: texture.height(),
        };
        tracing::debug!(id = handle.id, width = handle.width, height = handle.height, "atlas uploaded");

        self.atlases.push(LoadedAtlas { texture, bind_group });
        Ok(handle)
    }

    /// The texture behind `handle`, if this renderer issued it.
    pub fn atlas_texture(&self, handle: AtlasHandle) -> Option<&AtlasTexture> {
        self.atlases.get(handle.id as usize).map(|a| &a.texture)
    }

    /// Current surface size in physical pixels; the projection maps exactly
    /// this many pixels.
    pub fn surface_size(&self) -> PhysicalSize<u32> {
        PhysicalSize::new(self.config.width, self.config.height)
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);

        let projection = orthographic_projection(new_size.width as f32, new_size.height as f32);
        self.queue
            .write_buffer(&self.projection_buffer, 0, bytemuck::cast_slice(&projection));
    }

    /// Clear the frame, draw every run in `batch`, and present.
    pub fn render(&mut self, batch: &QuadBatch) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.vertices.upload(&self.device, &self.queue, batch.vertices());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("tile_map_encoder") });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("tile_map_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if let Some(buffer) = self.vertices.buffer.as_ref().filter(|_| !batch.is_empty()) {
                let byte_len = std::mem::size_of_val(batch.vertices()) as u64;
                pass.set_pipeline(&self.pipeline.render_pipeline);
                pass.set_bind_group(0, &self.projection_bind_group, &[]);
                pass.set_vertex_buffer(0, buffer.slice(..byte_len));

                for run in batch.runs() {
                    let Some(atlas) = self.atlases.get(run.atlas.id as usize) else {
                        tracing::warn!(id = run.atlas.id, "draw run references unknown atlas");
                        continue;
                    };
                    pass.set_bind_group(1, &atlas.bind_group, &[]);
                    pass.draw(run.vertices.clone(), 0..1);
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn surface_config(
    surface: &wgpu::Surface<'_>,
    adapter: &wgpu::Adapter,
    size: PhysicalSize<u32>,
) -> anyhow::Result<wgpu::SurfaceConfiguration> {
    let caps = surface.get_capabilities(adapter);
    let format = *caps.formats.first().context("surface reports no texture formats")?;
    let alpha_mode = *caps.alpha_modes.first().context("surface reports no alpha modes")?;

    Ok(wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: size.width.max(1),
        height: size.height.max(1),
        present_mode: wgpu::PresentMode::AutoVsync,
        alpha_mode,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    })
}
