use serde::{Deserialize, Serialize};

// ── WindowConfig ──────────────────────────────────────────────────────────────

/// Window configuration snapshot.
///
/// The window is created at `width × height` physical pixels and is not
/// resizable, so these numbers double as the viewport the map is centred in
/// for the whole run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title bar text.
    pub title: String,
    /// Window / viewport width in pixels.
    pub width: u32,
    /// Window / viewport height in pixels.
    pub height: u32,
    /// RGBA colour the frame is cleared to before the map is drawn.
    pub clear_color: [u8; 4],
}

impl Default for WindowConfig {
    /// 800 × 600, mid-grey background.
    fn default() -> Self {
        Self {
            title: "Tiled Map".into(),
            width: 800,
            height: 600,
            clear_color: [128, 128, 128, 255],
        }
    }
}

impl WindowConfig {
    /// Clear colour as the normalised floats wgpu expects.
    pub fn clear_color_f64(&self) -> [f64; 4] {
        self.clear_color.map(|c| c as f64 / 255.0)
    }
}
