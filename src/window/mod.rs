pub mod config;

pub use config::WindowConfig;

use winit::dpi::PhysicalSize;
use winit::window::{Window, WindowAttributes};

/// Attributes for the single fixed-size window the map is drawn into.
///
/// Resizing is disabled: the viewport the map is centred in is fixed for the
/// life of the process. The size is given in physical pixels so one tile
/// pixel maps to one screen pixel regardless of the monitor's scale factor.
pub fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    Window::default_attributes()
        .with_title(&config.title)
        .with_inner_size(PhysicalSize::new(config.width, config.height))
        .with_resizable(false)
}
