//! Folder selection through a native dialog.
//!
//! The slideshow state never calls a picker itself; the UI asks one for a
//! folder and hands the result to `SlideshowState::set_folder`.

use crate::file_utils;
use rfd::AsyncFileDialog;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Presents a "choose a folder" UI.
pub trait FolderPicker {
    /// Resolves to the chosen folder, or `None` when the user cancels.
    fn pick_folder(&self) -> impl Future<Output = Option<PathBuf>>;
}

/// Native folder dialog. Must be awaited on the UI thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct RfdFolderPicker;

impl FolderPicker for RfdFolderPicker {
    async fn pick_folder(&self) -> Option<PathBuf> {
        AsyncFileDialog::new()
            .set_title("Open Folder")
            .pick_folder()
            .await
            .map(|handle| handle.path().to_path_buf())
    }
}

/// Asks `picker` for a folder and keeps the answer only if it is a directory.
pub async fn choose_folder<P: FolderPicker>(picker: &P) -> Option<PathBuf> {
    let chosen = picker.pick_folder().await?;
    file_utils::as_folder(&chosen)
}

/// Allows at most one folder dialog at a time.
///
/// The native dialog is not modal to the window, so a second open request
/// while one is showing must be refused.
#[derive(Debug, Default, Clone)]
pub struct PickerGate {
    open: Arc<AtomicBool>,
}

impl PickerGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a dialog as showing, or returns `None` if one already is.
    pub fn try_open(&self) -> Option<PickerTicket> {
        self.open
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| PickerTicket {
                open: Arc::clone(&self.open),
            })
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }
}

/// Held while a dialog is showing; closing is recorded on drop.
#[derive(Debug)]
pub struct PickerTicket {
    open: Arc<AtomicBool>,
}

impl Drop for PickerTicket {
    fn drop(&mut self) {
        self.open.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    struct FixedPicker(Option<PathBuf>);

    impl FolderPicker for FixedPicker {
        async fn pick_folder(&self) -> Option<PathBuf> {
            self.0.clone()
        }
    }

    #[test]
    fn gate_refuses_a_second_dialog() {
        let gate = PickerGate::new();
        let ticket = gate.try_open().expect("first dialog opens");
        assert!(gate.is_open());
        assert!(gate.clone().try_open().is_none());

        drop(ticket);
        assert!(!gate.is_open());
        assert!(gate.try_open().is_some());
    }

    #[test]
    fn cancelled_picker_yields_nothing() {
        let picked = async_std::task::block_on(choose_folder(&FixedPicker(None)));
        assert_eq!(picked, None);
    }

    #[test]
    fn picked_directory_is_passed_through() {
        let dir = tempdir().expect("failed to create temp dir");
        let picker = FixedPicker(Some(dir.path().to_path_buf()));

        let picked = async_std::task::block_on(choose_folder(&picker));
        assert_eq!(picked, Some(dir.path().to_path_buf()));
    }

    #[test]
    fn picked_file_is_rejected() {
        let dir = tempdir().expect("failed to create temp dir");
        let file = dir.path().join("a.png");
        std::fs::write(&file, b"x").expect("failed to write test file");

        let picked = async_std::task::block_on(choose_folder(&FixedPicker(Some(file))));
        assert_eq!(picked, None);
    }
}
