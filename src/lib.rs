pub mod config;
pub mod engine;
pub mod geometry;
pub mod level;
pub mod renderer;
pub mod tilemap;
pub mod timing;
pub mod window;

/// Built-in 192×192 sample atlas of 16×16 tiles, generated by the build script.
pub const DEFAULT_ATLAS: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/tiles.png"));
pub const DEFAULT_ATLAS_SIZE: u32 = 192;
pub const DEFAULT_TILE_SIZE: u32 = 16;
