//! Core of a full-window image slideshow.
//!
//! [`state::SlideshowState`] owns the open folder, its images and the current
//! position. Everything that touches the platform (listing folders, native
//! dialogs, worker threads) lives in [`services`] behind small traits.

pub mod config;
pub mod error;
pub mod file_utils;
pub mod image_loader;
pub mod input;
pub mod services;
pub mod state;
