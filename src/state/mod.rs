//! State management for the slideshow.

use crate::services::{DirectoryLister, PickerGate};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub mod navigation;
pub mod slideshow;

pub use navigation::Direction;
pub use slideshow::{DisplayContent, LoadOutcome, PendingLoad, SlideshowState};

/// Application-wide state container.
///
/// The slideshow is only locked from the UI thread; worker results are
/// marshaled back before they touch it.
#[derive(Clone)]
pub struct AppState {
    pub slideshow: Arc<Mutex<SlideshowState>>,
    pub picker: PickerGate,
}

impl AppState {
    pub fn new(lister: Arc<dyn DirectoryLister>) -> Self {
        Self {
            slideshow: Arc::new(Mutex::new(SlideshowState::new(lister))),
            picker: PickerGate::new(),
        }
    }

    /// Locks the slideshow, recovering the guard if a previous holder panicked.
    pub fn slideshow(&self) -> MutexGuard<'_, SlideshowState> {
        self.slideshow
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
