//! Helper functions to push slideshow state into the ViewState global.
//!
//! The state does not publish changes; every handler that mutates it calls
//! [`refresh_view`] afterwards.

use slideshow::config::{EMPTY_FOLDER_MESSAGE, NO_FOLDER_MESSAGE};
use slideshow::state::{AppState, DisplayContent};
use slint::ComponentHandle;

/// Re-reads the derived values of the slideshow and updates the window.
///
/// Text content is applied directly; an image is decoded in the background
/// by `image_display::show_image`.
pub fn refresh_view(ui: &crate::AppWindow, app_state: &AppState) {
    let (title, content) = {
        let slideshow = app_state.slideshow();
        (slideshow.window_title(), slideshow.display_content())
    };

    ui.set_window_title(title.into());

    match content {
        DisplayContent::Image(path) => {
            crate::ui::image_display::show_image(ui.as_weak(), app_state.clone(), path);
        }
        DisplayContent::NoFolder => set_message(ui, NO_FOLDER_MESSAGE),
        DisplayContent::EmptyFolder => set_message(ui, EMPTY_FOLDER_MESSAGE),
        DisplayContent::Error(message) => set_message(ui, &message),
    }
}

/// Replaces whatever is displayed with a centered message.
pub fn set_message(ui: &crate::AppWindow, message: &str) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_image_loaded(false);
    view_state.set_message(message.into());
}

/// Shows a decoded image.
pub fn set_image(ui: &crate::AppWindow, image: slint::Image) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_current_image(image);
    view_state.set_image_loaded(true);
    view_state.set_message("".into());
}
