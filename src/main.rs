#![windows_subsystem = "windows"]

use anyhow::{Result, anyhow};
use druid::{AppLauncher, WindowDesc};
use rectboard::config::{CONFIG_FILE_PATH, Config};
use rectboard::logger::setup_logger;
use tracing::{Level, info, warn};
use xcap::Monitor;

mod board;
use board::{AppState, build_ui};

/// Size of the primary display, or of the first one if none claims primary.
fn primary_display_size() -> Result<(u32, u32)> {
    let mons = Monitor::all()?;
    let mon = mons
        .iter()
        .find(|m| m.is_primary().unwrap_or(false))
        .or_else(|| mons.first())
        .ok_or_else(|| anyhow!("找不到显示器"))?;
    Ok((mon.width()?, mon.height()?))
}

fn main() -> Result<()> {
    // Config comes first so the logger can use its level.
    let (config, load_error) = match Config::try_load() {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(error) => (Config::default(), Some(error)),
    };

    setup_logger(config.level().unwrap_or(Level::INFO))?;
    info!("rectboard v{}", env!("CARGO_PKG_VERSION"));

    if let Some(error) = load_error {
        warn!("Could not load {CONFIG_FILE_PATH}, using defaults:\n{error}");
    }
    if config.level().is_none() {
        warn!("Unknown log level {:?}, using info", config.log_level);
    }

    let (w, h) = primary_display_size()?;
    info!(width = w, height = h, "primary display");

    let window = WindowDesc::new(build_ui(&config))
        .title(config.title.clone())
        .window_size((w as f64, h as f64))
        .set_position(druid::Point::ORIGIN)
        .resizable(false);
    AppLauncher::with_window(window).launch(AppState::default())?;

    info!("window closed");
    Ok(())
}
