// =============================================================================
// CONFIG.RS — Runtime configuration
//
// Everything the demo used to hardcode (screen size, frame rate, atlas and
// tile dimensions) lives in one `GameConfig` value. It deserialises from JSON
// with every field optional, so an empty object yields the stock setup.
// =============================================================================

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::{DEFAULT_ATLAS_SIZE, DEFAULT_TILE_SIZE};
use crate::window::WindowConfig;

// ── AtlasConfig ──────────────────────────────────────────────────────────────

/// Where the tile atlas comes from and how it is cut up.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    /// PNG to load instead of the built-in sample atlas.
    pub path: Option<PathBuf>,
    /// Expected pixel width of the atlas texture.
    pub width: u32,
    /// Expected pixel height of the atlas texture.
    pub height: u32,
    pub tile_width: u32,
    pub tile_height: u32,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            path: None,
            width: DEFAULT_ATLAS_SIZE,
            height: DEFAULT_ATLAS_SIZE,
            tile_width: DEFAULT_TILE_SIZE,
            tile_height: DEFAULT_TILE_SIZE,
        }
    }
}

impl AtlasConfig {
    pub fn rect(&self) -> Rect {
        Rect::sized(self.width, self.height)
    }

    pub fn tile_rect(&self) -> Rect {
        Rect::sized(self.tile_width, self.tile_height)
    }
}

// ── GameConfig ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    /// Target frame rate of the fixed-timestep loop.
    pub frames_per_second: u32,
    pub atlas: AtlasConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            frames_per_second: 60,
            atlas: AtlasConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json).context("invalid config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("in config {}", path.display()))
    }

    /// Reject values the frame loop cannot run with.
    ///
    /// Atlas geometry is left to [`TiledMap::initialize`](crate::tilemap::TiledMap::initialize).
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.frames_per_second == 0 {
            bail!("frames_per_second must be at least 1");
        }
        if self.frames_per_second > 1000 {
            bail!("frames_per_second must be at most 1000, got {}", self.frames_per_second);
        }
        if self.window.width == 0 || self.window.height == 0 {
            bail!(
                "window size must be non-zero, got {}x{}",
                self.window.width,
                self.window.height
            );
        }
        Ok(())
    }
}
