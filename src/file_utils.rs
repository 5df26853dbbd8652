use crate::config::SUPPORTED_IMAGE_EXTENSIONS;
use std::cmp::Ordering;
use std::iter::Peekable;
use std::path::{Path, PathBuf};
use std::str::Chars;

/// Path helpers shared by the state and the UI.
pub trait PathExt {
    /// Last path component, or the whole path when it has none (e.g. `/`).
    fn folder_name(&self) -> String;
    /// Short form used in log lines.
    fn format_for_log(&self) -> String;
}

impl PathExt for Path {
    fn folder_name(&self) -> String {
        self.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.to_string_lossy().into_owned())
    }

    fn format_for_log(&self) -> String {
        format!("\"{}\"", self.display())
    }
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext_str| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_str.to_lowercase().as_str()))
        .unwrap_or(false)
}

pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

/// Accepts an externally supplied path only if it names an existing directory.
pub fn as_folder(path: &Path) -> Option<PathBuf> {
    if path.is_dir() {
        Some(path.to_path_buf())
    } else {
        log::warn!("Rejecting non-directory path {}", path.format_for_log());
        None
    }
}

/// Keeps the supported images of a listing, ordered by file name.
pub fn collect_images(entries: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut image_files: Vec<PathBuf> = entries
        .into_iter()
        .filter(|path| is_supported_image(path))
        .collect();

    image_files.sort_by(|a, b| compare_file_names(&file_name_of(a), &file_name_of(b)));
    image_files
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Finder-style name ordering: case-insensitive, digit runs compared by value.
///
/// Names that compare equal under those rules fall back to a plain byte
/// comparison so the order is total.
pub fn compare_file_names(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        let ordering = match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_digits = take_digits(&mut left);
                let r_digits = take_digits(&mut right);
                compare_digit_runs(&l_digits, &r_digits)
            }
            (Some(l), Some(r)) => {
                left.next();
                right.next();
                l.to_lowercase().cmp(r.to_lowercase())
            }
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    digits
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a_trimmed = a.trim_start_matches('0');
    let b_trimmed = b.trim_start_matches('0');
    a_trimmed
        .len()
        .cmp(&b_trimmed.len())
        .then_with(|| a_trimmed.cmp(b_trimmed))
}
