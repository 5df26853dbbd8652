//! Slideshow state: the open folder, its images and the current position.
//!
//! Folder loads are split in three steps so the listing can run on a worker
//! thread while every mutation stays on the owning thread:
//! [`SlideshowState::set_folder`] resets the state and hands out a
//! [`PendingLoad`], [`PendingLoad::run`] does the blocking work anywhere, and
//! [`SlideshowState::apply_load`] takes the [`LoadOutcome`] back. Each
//! `set_folder` bumps a load generation; outcomes from older generations are
//! dropped without touching the state.

use crate::config::APP_NAME;
use crate::error::Result;
use crate::file_utils::{self, PathExt};
use crate::services::DirectoryLister;
use crate::state::navigation::{self, Direction};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// What the window should show right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayContent {
    Image(PathBuf),
    NoFolder,
    EmptyFolder,
    Error(String),
}

/// A folder listing requested by `set_folder`, ready to run off-thread.
pub struct PendingLoad {
    generation: u64,
    folder: PathBuf,
    lister: Arc<dyn DirectoryLister>,
}

impl PendingLoad {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Lists the folder and keeps its images in display order. Blocking.
    pub fn run(self) -> LoadOutcome {
        let start = std::time::Instant::now();
        let result = self.lister.list(&self.folder).map(file_utils::collect_images);
        debug!(
            "Load #{} of {} finished in {:?}",
            self.generation,
            self.folder.format_for_log(),
            start.elapsed()
        );

        LoadOutcome {
            generation: self.generation,
            result,
        }
    }
}

/// Result of a [`PendingLoad`], tagged with the generation that requested it.
#[derive(Debug)]
pub struct LoadOutcome {
    generation: u64,
    result: Result<Vec<PathBuf>>,
}

impl LoadOutcome {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Owns the open folder, its sorted image list and the current index.
pub struct SlideshowState {
    lister: Arc<dyn DirectoryLister>,
    app_name: String,
    folder: Option<PathBuf>,
    images: Vec<PathBuf>,
    current_index: usize,
    last_error: Option<String>,
    generation: u64,
    loading: bool,
}

impl SlideshowState {
    /// Creates a state with no folder that lists folders through `lister`.
    pub fn new(lister: Arc<dyn DirectoryLister>) -> Self {
        Self {
            lister,
            app_name: APP_NAME.to_string(),
            folder: None,
            images: Vec::new(),
            current_index: 0,
            last_error: None,
            generation: 0,
            loading: false,
        }
    }

    /// Overrides the title shown while no folder is open.
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// Makes `path` the current folder and starts a new load cycle.
    ///
    /// `path` must be a directory; callers validate external input first.
    /// Reselecting the current folder is a no-op unless `force_reload` is set.
    /// The returned [`PendingLoad`] must be run and its outcome passed back to
    /// [`apply_load`](Self::apply_load).
    pub fn set_folder(&mut self, path: PathBuf, force_reload: bool) -> Option<PendingLoad> {
        if !force_reload && self.folder.as_deref() == Some(path.as_path()) {
            debug!("Folder {} already open", path.format_for_log());
            return None;
        }

        self.generation += 1;
        info!(
            "Opening folder {} (load #{})",
            path.format_for_log(),
            self.generation
        );

        self.folder = Some(path.clone());
        self.images.clear();
        self.current_index = 0;
        self.last_error = None;
        self.loading = true;

        Some(PendingLoad {
            generation: self.generation,
            folder: path,
            lister: Arc::clone(&self.lister),
        })
    }

    /// Starts a forced reload of the current folder, if any.
    pub fn reload(&mut self) -> Option<PendingLoad> {
        let folder = self.folder.clone()?;
        self.set_folder(folder, true)
    }

    /// Applies a finished load if it belongs to the latest `set_folder` call.
    ///
    /// Returns `false` and leaves the state untouched for superseded loads.
    pub fn apply_load(&mut self, outcome: LoadOutcome) -> bool {
        if outcome.generation != self.generation {
            debug!(
                "Discarding stale load #{} (current #{})",
                outcome.generation, self.generation
            );
            return false;
        }

        self.loading = false;
        self.current_index = 0;
        match outcome.result {
            Ok(images) => {
                info!("Loaded {} images", images.len());
                self.images = images;
                self.last_error = None;
            }
            Err(err) => {
                warn!("Folder load failed: {}", err);
                self.images.clear();
                self.last_error = Some(err.to_string());
            }
        }
        true
    }

    /// Moves one image in `direction`, wrapping at the ends. No-op when empty.
    pub fn navigate(&mut self, direction: Direction) {
        if self.images.is_empty() {
            return;
        }

        self.current_index = navigation::step(self.current_index, self.images.len(), direction);
        debug_assert!(self.current_index < self.images.len());
    }

    pub fn jump_to_first(&mut self) {
        self.current_index = 0;
    }

    pub fn jump_to_last(&mut self) {
        self.current_index = self.images.len().saturating_sub(1);
    }

    pub fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    pub fn has_folder(&self) -> bool {
        self.folder.is_some()
    }

    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// True between `set_folder` and the matching `apply_load`.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn current_image(&self) -> Option<&Path> {
        self.images.get(self.current_index).map(PathBuf::as_path)
    }

    pub fn display_content(&self) -> DisplayContent {
        if let Some(image) = self.current_image() {
            return DisplayContent::Image(image.to_path_buf());
        }
        if !self.has_folder() {
            return DisplayContent::NoFolder;
        }
        match &self.last_error {
            Some(message) => DisplayContent::Error(message.clone()),
            None => DisplayContent::EmptyFolder,
        }
    }

    pub fn window_title(&self) -> String {
        let Some(folder) = &self.folder else {
            return self.app_name.clone();
        };

        let name = folder.folder_name();
        if self.images.is_empty() {
            name
        } else {
            format!(
                "{} [{}/{}]",
                name,
                self.current_index + 1,
                self.images.len()
            )
        }
    }
}
