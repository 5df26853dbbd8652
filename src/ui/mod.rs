//! UI module for handling user interactions and UI updates.
//!
//! Threading model:
//! - `slint::spawn_local`: work that must stay on the main thread (the native folder dialog)
//! - `rayon::spawn`: blocking work (folder listing, image decoding)
//! - `slint::invoke_from_event_loop`: hands rayon results back to the UI thread

pub mod handlers;
pub mod image_display;
mod state_helpers;

pub use handlers::setup_handlers;
pub use state_helpers::*;
