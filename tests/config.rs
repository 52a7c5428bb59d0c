use tiledmap::config::GameConfig;
use tiledmap::geometry::Rect;
use tiledmap::window::WindowConfig;

// ── Defaults ──────────────────────────────────────────────────────────────

#[test]
fn default_is_800x600_grey() {
    let cfg = WindowConfig::default();
    assert_eq!(cfg.width, 800);
    assert_eq!(cfg.height, 600);
    assert_eq!(cfg.title, "Tiled Map");
    assert_eq!(cfg.clear_color, [128, 128, 128, 255]);
}

#[test]
fn clear_color_is_normalised() {
    let cfg = WindowConfig { clear_color: [255, 0, 51, 255], ..WindowConfig::default() };
    let c = cfg.clear_color_f64();
    assert!((c[0] - 1.0).abs() < 1e-9);
    assert_eq!(c[1], 0.0);
    assert!((c[2] - 0.2).abs() < 1e-9);
    assert!((c[3] - 1.0).abs() < 1e-9);
}

#[test]
fn default_game_config_matches_sample_setup() {
    let cfg = GameConfig::default();
    assert_eq!(cfg.frames_per_second, 60);
    assert_eq!(cfg.atlas.rect(), Rect::sized(192, 192));
    assert_eq!(cfg.atlas.tile_rect(), Rect::sized(16, 16));
    assert!(cfg.atlas.path.is_none());
    assert!(cfg.validate().is_ok());
}

// ── JSON ──────────────────────────────────────────────────────────────────

#[test]
fn empty_object_yields_defaults() {
    assert_eq!(GameConfig::from_json_str("{}").unwrap(), GameConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = GameConfig::from_json_str(
        r#"{ "window": { "width": 1024 }, "atlas": { "path": "grfx/tiles.png" } }"#,
    )
    .unwrap();
    assert_eq!(cfg.window.width, 1024);
    assert_eq!(cfg.window.height, 600);
    assert_eq!(cfg.atlas.path.as_deref(), Some(std::path::Path::new("grfx/tiles.png")));
    assert_eq!(cfg.atlas.tile_width, 16);
    assert_eq!(cfg.frames_per_second, 60);
}

#[test]
fn malformed_json_is_an_error() {
    assert!(GameConfig::from_json_str("{ window: }").is_err());
}

#[test]
fn zero_fps_is_rejected() {
    let err = GameConfig::from_json_str(r#"{ "frames_per_second": 0 }"#).unwrap_err();
    assert!(err.to_string().contains("frames_per_second"), "{err}");
}

#[test]
fn zero_window_is_rejected() {
    assert!(GameConfig::from_json_str(r#"{ "window": { "height": 0 } }"#).is_err());
}

#[test]
fn missing_file_is_an_error() {
    assert!(GameConfig::load("does/not/exist.json").is_err());
}

#[test]
fn config_round_trips_through_json() {
    let mut cfg = GameConfig::default();
    cfg.window.title = "Maze".into();
    cfg.frames_per_second = 30;
    let json = serde_json::to_string(&cfg).unwrap();
    assert_eq!(GameConfig::from_json_str(&json).unwrap(), cfg);
}
