//! Application configuration constants.

use std::time::Duration;

/// Display name used as the window title while no folder is open.
pub const APP_NAME: &str = "Slideshow";

/// Supported image file extensions for scanning directories.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 8] =
    ["jpg", "jpeg", "png", "gif", "bmp", "tiff", "heic", "webp"];

/// Shown while no folder has been chosen yet.
pub const NO_FOLDER_MESSAGE: &str = "Press \u{21B5} to open a folder";

/// Shown when the chosen folder holds no supported images.
pub const EMPTY_FOLDER_MESSAGE: &str = "No images found in folder";

/// Shown in place of an image that could not be decoded.
pub const IMAGE_LOAD_FAILED_MESSAGE: &str = "Failed to load image";

/// Delay before the folder picker is offered at startup.
pub const STARTUP_PICKER_DELAY: Duration = Duration::from_millis(750);

/// Log level used by debug builds when `RUST_LOG` is not set.
pub const DEFAULT_DEBUG_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Debug;
