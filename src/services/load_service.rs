//! Runs folder listings off the UI thread.
//!
//! The listing is the only blocking step of a folder change. It runs on the
//! rayon pool and the outcome is handed to `on_complete`, which is expected to
//! marshal it back to the thread that owns the `SlideshowState` (for the UI,
//! `slint::invoke_from_event_loop`) before calling `apply_load`.

use crate::file_utils::PathExt;
use crate::state::{LoadOutcome, PendingLoad};
use log::debug;

/// Spawns `pending` on the rayon pool and passes its outcome to `on_complete`.
///
/// There is no cancellation: a superseded load still runs to completion and
/// is rejected later by the generation check.
pub fn spawn_load<F>(pending: PendingLoad, on_complete: F)
where
    F: FnOnce(LoadOutcome) + Send + 'static,
{
    debug!(
        "Queueing load #{} for {}",
        pending.generation(),
        pending.folder().format_for_log()
    );
    rayon::spawn(move || {
        let outcome = pending.run();
        on_complete(outcome);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, Result};
    use crate::services::DirectoryLister;
    use crate::state::{DisplayContent, SlideshowState};
    use std::path::{Path, PathBuf};
    use std::sync::Arc;
    use std::sync::mpsc;
    use std::time::Duration;

    struct SlowLister;

    impl DirectoryLister for SlowLister {
        fn list(&self, folder: &Path) -> Result<Vec<PathBuf>> {
            if folder.ends_with("slow") {
                std::thread::sleep(Duration::from_millis(50));
                return Ok(vec![folder.join("old.jpg")]);
            }
            if folder.ends_with("broken") {
                return Err(AppError::DirectoryRead("Permission denied".to_string()));
            }
            Ok(vec![folder.join("b.png"), folder.join("a.png")])
        }
    }

    #[test]
    fn outcome_reaches_the_owning_thread() {
        let mut state = SlideshowState::new(Arc::new(SlowLister));
        let (tx, rx) = mpsc::channel();

        let pending = state
            .set_folder(PathBuf::from("/mock/fast"), false)
            .expect("new folder starts a load");
        spawn_load(pending, move |outcome| {
            let _ = tx.send(outcome);
        });

        let outcome = rx.recv_timeout(Duration::from_secs(5)).expect("load never finished");
        assert!(state.apply_load(outcome));
        assert_eq!(
            state.display_content(),
            DisplayContent::Image(PathBuf::from("/mock/fast/a.png"))
        );
    }

    #[test]
    fn superseded_load_is_discarded_whatever_the_arrival_order() {
        let mut state = SlideshowState::new(Arc::new(SlowLister));
        let (tx, rx) = mpsc::channel();

        let first = state
            .set_folder(PathBuf::from("/mock/slow"), false)
            .expect("new folder starts a load");
        let tx_first = tx.clone();
        spawn_load(first, move |outcome| {
            let _ = tx_first.send(outcome);
        });

        let second = state
            .set_folder(PathBuf::from("/mock/broken"), false)
            .expect("new folder starts a load");
        spawn_load(second, move |outcome| {
            let _ = tx.send(outcome);
        });

        let mut applied = 0;
        for _ in 0..2 {
            let outcome = rx.recv_timeout(Duration::from_secs(5)).expect("load never finished");
            if state.apply_load(outcome) {
                applied += 1;
            }
        }

        assert_eq!(applied, 1);
        assert!(state.images().is_empty());
        assert_eq!(
            state.display_content(),
            DisplayContent::Error("Permission denied".to_string())
        );
        assert_eq!(state.folder(), Some(Path::new("/mock/broken")));
    }
}
