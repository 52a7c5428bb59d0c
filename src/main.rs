use anyhow::Context;
use tracing_subscriber::EnvFilter;

use tiledmap::config::GameConfig;
use tiledmap::engine;
use tiledmap::level::Level;

fn main() -> anyhow::Result<()> {
    // RUST_LOG wins when set; otherwise info for everything.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    // Optional single argument: path to a JSON config file.
    let config = match std::env::args_os().nth(1) {
        Some(path) => GameConfig::load(&path)
            .with_context(|| format!("could not load config {}", path.to_string_lossy()))?,
        None => GameConfig::default(),
    };
    tracing::info!(
        width = config.window.width,
        height = config.window.height,
        fps = config.frames_per_second,
        "starting"
    );

    engine::run(config, Level::MAZE)
}
