//! Image loading and display logic.
//!
//! Uses `rayon::spawn` for CPU-intensive image decoding operations,
//! then `slint::invoke_from_event_loop` to update UI from the background thread.

use crate::ui::state_helpers::{set_image, set_message};
use log::{debug, error};
use slideshow::config::IMAGE_LOAD_FAILED_MESSAGE;
use slideshow::file_utils::PathExt;
use slideshow::image_loader::{self, DecodedImage};
use slideshow::state::AppState;
use slint::{Image, Rgb8Pixel, SharedPixelBuffer};
use std::path::PathBuf;

fn create_slint_image(decoded: DecodedImage) -> Image {
    let buffer = SharedPixelBuffer::<Rgb8Pixel>::clone_from_slice(
        &decoded.data,
        decoded.width,
        decoded.height,
    );
    Image::from_rgb8(buffer)
}

/// Decodes `path` on a worker thread and shows it if it is still current.
///
/// Quick navigation can leave several decodes in flight; a result whose path
/// is no longer the slideshow's current image is dropped on arrival.
pub fn show_image(ui: slint::Weak<crate::AppWindow>, app_state: AppState, path: PathBuf) {
    rayon::spawn(move || {
        let result = image_loader::load_image_blocking(&path);

        let _ = slint::invoke_from_event_loop(move || {
            let Some(ui) = ui.upgrade() else {
                return;
            };

            let still_current = app_state.slideshow().current_image() == Some(path.as_path());
            if !still_current {
                debug!("Dropping decode of {}", path.format_for_log());
                return;
            }

            match result {
                Ok(decoded) => set_image(&ui, create_slint_image(decoded)),
                Err(e) => {
                    error!("{}: {}", path.format_for_log(), e);
                    set_message(&ui, IMAGE_LOAD_FAILED_MESSAGE);
                }
            }
        });
    });
}
