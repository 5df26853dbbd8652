//! Event handlers for UI callbacks.
//!
//! Maps key presses to slideshow commands, using the appropriate threading
//! model for each: the folder dialog runs through `slint::spawn_local`,
//! listings and decodes run on rayon, and results come back via
//! `slint::invoke_from_event_loop`.

use crate::ui::state_helpers::refresh_view;
use log::{debug, warn};
use slideshow::input::{self, Command, Key, Modifiers};
use slideshow::services::{self, RfdFolderPicker};
use slideshow::state::{AppState, PendingLoad};
use slint::platform::Key as SlintKey;
use slint::{ComponentHandle, SharedString};
use std::path::PathBuf;

const KEY_TABLE: [(SlintKey, Key); 12] = [
    (SlintKey::LeftArrow, Key::Left),
    (SlintKey::RightArrow, Key::Right),
    (SlintKey::UpArrow, Key::Up),
    (SlintKey::DownArrow, Key::Down),
    (SlintKey::Space, Key::Space),
    (SlintKey::Backspace, Key::Backspace),
    (SlintKey::Delete, Key::Delete),
    (SlintKey::Home, Key::Home),
    (SlintKey::End, Key::End),
    (SlintKey::Return, Key::Return),
    (SlintKey::Escape, Key::Escape),
    (SlintKey::F5, Key::F5),
];

fn key_from_text(text: &SharedString) -> Key {
    KEY_TABLE
        .into_iter()
        .find(|(slint_key, _)| *text == SharedString::from(*slint_key))
        .map(|(_, key)| key)
        .unwrap_or(Key::Other)
}

/// Sets up all UI event handlers for the application.
pub fn setup_handlers(ui: &crate::AppWindow, app_state: &AppState) {
    ui.global::<crate::Logic>().on_key_pressed({
        let ui_handle = ui.as_weak();
        let app_state = app_state.clone();
        move |text, control, meta| {
            let modifiers = Modifiers { control, meta };
            let Some(command) = input::command_for_key(key_from_text(&text), modifiers) else {
                return false;
            };
            let Some(ui) = ui_handle.upgrade() else {
                return false;
            };

            run_command(&ui, &app_state, command)
        }
    });
}

/// Runs `command`; returns `false` when it was ignored so the key propagates.
fn run_command(ui: &crate::AppWindow, app_state: &AppState, command: Command) -> bool {
    debug!("Command: {:?}", command);
    match command {
        Command::Navigate(direction) => {
            app_state.slideshow().navigate(direction);
            refresh_view(ui, app_state);
        }
        Command::First => {
            app_state.slideshow().jump_to_first();
            refresh_view(ui, app_state);
        }
        Command::Last => {
            app_state.slideshow().jump_to_last();
            refresh_view(ui, app_state);
        }
        Command::OpenFolder { force } => {
            let has_folder = app_state.slideshow().has_folder();
            if !input::opens_picker(force, has_folder) {
                return false;
            }
            prompt_for_folder(ui.as_weak(), app_state.clone(), force);
        }
        Command::Reload => {
            let pending = app_state.slideshow().reload();
            if let Some(pending) = pending {
                start_load(ui, app_state, pending);
            }
        }
        Command::Quit => {
            if let Err(e) = slint::quit_event_loop() {
                warn!("Failed to quit event loop: {}", e);
            }
        }
    }
    true
}

/// Shows the folder dialog and opens the chosen folder.
///
/// Uses slint::spawn_local because the native dialog must run on the main thread.
/// Ignored while another folder dialog is still showing.
pub fn prompt_for_folder(ui: slint::Weak<crate::AppWindow>, app_state: AppState, force: bool) {
    let Some(ticket) = app_state.picker.try_open() else {
        debug!("Folder dialog already open");
        return;
    };

    let spawned = slint::spawn_local(async move {
        let picked = services::choose_folder(&RfdFolderPicker).await;
        drop(ticket);
        let Some(folder) = picked else {
            debug!("No folder selected");
            return;
        };

        if let Some(ui) = ui.upgrade() {
            open_folder(&ui, &app_state, folder, force);
        }
    });

    if let Err(e) = spawned {
        warn!("Failed to show folder dialog: {}", e);
    }
}

/// Makes `folder` current and lists it in the background.
///
/// `folder` must already be known to be a directory.
pub fn open_folder(ui: &crate::AppWindow, app_state: &AppState, folder: PathBuf, force: bool) {
    let pending = app_state.slideshow().set_folder(folder, force);
    if let Some(pending) = pending {
        start_load(ui, app_state, pending);
    }
}

fn start_load(ui: &crate::AppWindow, app_state: &AppState, pending: PendingLoad) {
    refresh_view(ui, app_state);

    let ui_handle = ui.as_weak();
    let app_state = app_state.clone();
    services::spawn_load(pending, move |outcome| {
        let _ = slint::invoke_from_event_loop(move || {
            let applied = app_state.slideshow().apply_load(outcome);
            if !applied {
                return;
            }
            if let Some(ui) = ui_handle.upgrade() {
                refresh_view(&ui, &app_state);
            }
        });
    });
}
