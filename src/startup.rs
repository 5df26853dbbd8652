use i_slint_backend_winit::WinitWindowAccessor;
use i_slint_backend_winit::{EventResult, winit::event::WindowEvent};
use log::info;
use slideshow::config::STARTUP_PICKER_DELAY;
use slideshow::file_utils::{self, PathExt};
use slideshow::state::AppState;
use slint::ComponentHandle;
use std::path::PathBuf;

use crate::ui::handlers::{open_folder, prompt_for_folder};

/// First non-flag argument, if it names a directory.
fn startup_folder_from_args() -> Option<PathBuf> {
    std::env::args_os()
        .skip(1)
        .filter(|arg| !arg.to_string_lossy().starts_with('-'))
        .map(PathBuf::from)
        .next()
        .and_then(|path| file_utils::as_folder(&path))
}

/// Opens folders dropped onto the window; anything else is ignored.
fn setup_platform_window_hooks(app: &crate::AppWindow, app_state: &AppState) {
    let ui_handle = app.as_weak();
    let app_state = app_state.clone();

    app.window().on_winit_window_event(move |_window, event| {
        if let WindowEvent::DroppedFile(path) = event {
            info!("Dropped {}", path.format_for_log());
            if let (Some(folder), Some(ui)) = (file_utils::as_folder(path), ui_handle.upgrade()) {
                open_folder(&ui, &app_state, folder, false);
                return EventResult::PreventDefault;
            }
        }

        EventResult::Propagate
    });
}

pub fn configure_startup_opening(app: &crate::AppWindow, app_state: &AppState) {
    setup_platform_window_hooks(app, app_state);

    if let Some(folder) = startup_folder_from_args() {
        open_folder(app, app_state, folder, false);
        return;
    }

    let ui_handle = app.as_weak();
    let app_state = app_state.clone();
    slint::Timer::single_shot(STARTUP_PICKER_DELAY, move || {
        if !app_state.slideshow().has_folder() {
            prompt_for_folder(ui_handle, app_state, false);
        }
    });
}
