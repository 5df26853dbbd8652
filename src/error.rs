//! Unified error types for the slideshow.

use std::fmt;

/// Application-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Error listing the contents of a folder
    DirectoryRead(String),
    /// Error loading or decoding an image file
    ImageLoad(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DirectoryRead(msg) => write!(f, "{}", msg),
            AppError::ImageLoad(msg) => write!(f, "Image load error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::ImageLoad(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::DirectoryRead(err.to_string())
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;
