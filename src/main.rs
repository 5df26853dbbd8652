// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

slint::include_modules!();

mod startup;
mod ui;

use slideshow::services::FsDirectoryLister;
use slideshow::state::AppState;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(debug_assertions)]
    env_logger::Builder::new()
        .filter_level(slideshow::config::DEFAULT_DEBUG_LOG_LEVEL)
        .parse_default_env()
        .init();

    let app = AppWindow::new()?;
    let app_state = AppState::new(Arc::new(FsDirectoryLister::new()));

    // Setup all UI event handlers
    ui::setup_handlers(&app, &app_state);
    ui::refresh_view(&app, &app_state);
    startup::configure_startup_opening(&app, &app_state);

    app.run()?;

    Ok(())
}
