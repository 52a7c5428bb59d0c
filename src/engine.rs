// =============================================================================
// ENGINE.RS — Window, frame loop and startup wiring
//
// Owns everything around the tile map: the window, the wgpu renderer, the
// atlas texture and the fixed-timestep loop. Each frame:
//   1. sample the clock
//   2. let the map blit into a fresh quad batch, centred in the surface
//   3. clear, draw and present
//   4. sleep off whatever is left of the frame budget
// =============================================================================

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use crate::DEFAULT_ATLAS;
use crate::config::GameConfig;
use crate::level::Level;
use crate::renderer::Renderer;
use crate::renderer::atlas::AtlasHandle;
use crate::renderer::batch::QuadBatch;
use crate::tilemap::{TileMapError, TiledMap};
use crate::timing::FrameTimer;
use crate::window::window_attributes;

/// Open the window and run the frame loop until it is closed.
///
/// Returns an error if startup failed (no GPU, unreadable or mis-sized atlas,
/// a level that does not fit the atlas or the viewport).
pub fn run(config: GameConfig, level: Level) -> anyhow::Result<()> {
    config.validate()?;

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let timer = FrameTimer::from_fps(config.frames_per_second);
    let mut app = App {
        config,
        level,
        timer,
        scene: None,
        fatal: None,
    };
    event_loop.run_app(&mut app).context("event loop terminated abnormally")?;

    match app.fatal {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

// ── Frame fill ───────────────────────────────────────────────────────────────

/// What ended up in the batch for one frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Fill {
    /// Every cell was blitted.
    Drawn,
    /// The surface is smaller than the map; the batch is empty.
    TooSmall,
}

/// Rebuild `batch` with the map centred in a `surface`-sized viewport.
///
/// A surface shrunk below the map (tiling window managers, scale-factor
/// changes) is not fatal: the frame is just cleared.
fn fill_batch(
    map: &TiledMap<AtlasHandle>,
    batch: &mut QuadBatch,
    surface: PhysicalSize<u32>,
) -> Result<Fill, TileMapError> {
    batch.clear();
    match map.render(batch, surface.width, surface.height) {
        Ok(()) => Ok(Fill::Drawn),
        Err(TileMapError::ViewportTooSmall { .. }) => Ok(Fill::TooSmall),
        Err(e) => Err(e),
    }
}

/// The uploaded texture must exist and be exactly the configured atlas size.
fn check_atlas_texture(map: &TiledMap<AtlasHandle>, texture_size: Option<(u32, u32)>) -> anyhow::Result<()> {
    let (width, height) = texture_size.context("renderer has no texture for the atlas handle")?;
    let atlas = map.atlas().context("level map was not initialized")?;
    atlas.verify_texture_size(width, height)?;
    Ok(())
}

// ── Scene ────────────────────────────────────────────────────────────────────

/// Everything that exists once the window is up.
struct Scene {
    renderer: Renderer,
    map: TiledMap<AtlasHandle>,
    batch: QuadBatch,
    /// Last frame's fill, so a too-small surface is logged once.
    last_fill: Fill,
}

impl Scene {
    fn build(event_loop: &ActiveEventLoop, config: &GameConfig, level: &Level) -> anyhow::Result<Self> {
        let window = Arc::new(
            event_loop
                .create_window(window_attributes(&config.window))
                .context("failed to create window")?,
        );
        let mut renderer = pollster::block_on(Renderer::new(window, config.window.clear_color_f64()))?;

        let atlas_bytes = match &config.atlas.path {
            Some(path) => std::fs::read(path)
                .with_context(|| format!("failed to read atlas {}", path.display()))?,
            None => DEFAULT_ATLAS.to_vec(),
        };
        let handle = renderer.load_atlas(&atlas_bytes)?;

        let map = level
            .build_map(config.atlas.rect(), config.atlas.tile_rect(), handle)
            .with_context(|| format!("level '{}' does not fit the atlas", level.name))?;

        let texture_size = renderer.atlas_texture(handle).map(|t| (t.width(), t.height()));
        check_atlas_texture(&map, texture_size)?;

        // The window is requested at exactly this size.
        let layout = map.layout(config.window.width, config.window.height)?;
        tracing::info!(
            level = level.name,
            rows = map.rows(),
            cols = map.cols(),
            x_offset = layout.x_offset,
            y_offset = layout.y_offset,
            "map loaded"
        );

        let batch = QuadBatch::with_capacity(map.cell_count());
        Ok(Self { renderer, map, batch, last_fill: Fill::Drawn })
    }
}

// ── App (winit ApplicationHandler) ──────────────────────────────────────────

struct App {
    config: GameConfig,
    level: Level,
    timer: FrameTimer,
    scene: Option<Scene>,
    /// First unrecoverable error; reported by `run` after the loop exits.
    fatal: Option<anyhow::Error>,
}

impl App {
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        tracing::error!("{err:#}");
        self.fatal.get_or_insert(err);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let frame_start = Instant::now();
        let Some(scene) = self.scene.as_mut() else { return };

        let surface = scene.renderer.surface_size();
        match fill_batch(&scene.map, &mut scene.batch, surface) {
            Ok(fill) => {
                if fill == Fill::TooSmall && scene.last_fill != Fill::TooSmall {
                    tracing::warn!(
                        width = surface.width,
                        height = surface.height,
                        footprint = ?scene.map.footprint(),
                        "surface smaller than the map, drawing nothing"
                    );
                }
                scene.last_fill = fill;
            }
            Err(e) => {
                self.fail(event_loop, e.into());
                return;
            }
        }

        match scene.renderer.render(&scene.batch) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = scene.renderer.window.inner_size();
                scene.renderer.resize(size);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, anyhow::anyhow!("GPU out of memory"));
                return;
            }
            Err(e) => tracing::warn!("render error: {e}"),
        }

        if let Some(left) = self.timer.remaining(frame_start.elapsed()) {
            std::thread::sleep(left);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.scene.is_some() {
            return;
        }
        match Scene::build(event_loop, &self.config, &self.level) {
            Ok(scene) => self.scene = Some(scene),
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(scene) = self.scene.as_ref() {
            scene.renderer.window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(scene) = self.scene.as_mut() {
                    scene.renderer.resize(size);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    const SAMPLE: AtlasHandle = AtlasHandle { id: 0, width: 192, height: 192 };

    fn maze() -> TiledMap<AtlasHandle> {
        Level::MAZE
            .build_map(Rect::sized(192, 192), Rect::sized(16, 16), SAMPLE)
            .unwrap()
    }

    #[test]
    fn map_is_centred_in_the_actual_surface() {
        let map = maze();
        let mut batch = QuadBatch::new();

        assert_eq!(fill_batch(&map, &mut batch, PhysicalSize::new(800, 600)), Ok(Fill::Drawn));
        assert_eq!(batch.vertices()[0].position, [176.0, 12.0]);

        // Window manager handed out a bigger surface than requested.
        assert_eq!(fill_batch(&map, &mut batch, PhysicalSize::new(1024, 768)), Ok(Fill::Drawn));
        assert_eq!(batch.quad_count(), 36 * 28);
        assert_eq!(batch.vertices()[0].position, [288.0, 96.0]);
    }

    #[test]
    fn shrunk_surface_clears_the_batch() {
        let map = maze();
        let mut batch = QuadBatch::new();
        fill_batch(&map, &mut batch, PhysicalSize::new(800, 600)).unwrap();

        assert_eq!(fill_batch(&map, &mut batch, PhysicalSize::new(400, 300)), Ok(Fill::TooSmall));
        assert!(batch.is_empty());
        assert!(batch.runs().is_empty());
    }

    #[test]
    fn atlas_texture_must_exist_and_match() {
        let map = maze();
        assert!(check_atlas_texture(&map, Some((192, 192))).is_ok());

        let err = check_atlas_texture(&map, None).unwrap_err();
        assert!(err.to_string().contains("no texture"), "{err}");

        let err = check_atlas_texture(&map, Some((256, 192))).unwrap_err();
        assert_eq!(
            err.downcast_ref::<TileMapError>(),
            Some(&TileMapError::TextureSizeMismatch {
                expected_w: 192,
                expected_h: 192,
                actual_w: 256,
                actual_h: 192,
            })
        );
    }

    #[test]
    fn uninitialized_map_is_an_error() {
        let map: TiledMap<AtlasHandle> = TiledMap::new(36, 28);
        let mut batch = QuadBatch::new();
        assert_eq!(
            fill_batch(&map, &mut batch, PhysicalSize::new(800, 600)),
            Err(TileMapError::NotInitialized)
        );
    }
}
