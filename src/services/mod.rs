//! Service layer for the slideshow's external collaborators.
//!
//! Keeps filesystem access, native dialogs and worker threads out of the
//! state so the state can be tested in isolation.

pub mod directory_service;
pub mod folder_picker;
pub mod load_service;

pub use directory_service::{DirectoryLister, FsDirectoryLister};
pub use folder_picker::{FolderPicker, PickerGate, PickerTicket, RfdFolderPicker, choose_folder};
pub use load_service::spawn_load;
