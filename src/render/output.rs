//! Destination file handling.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

use crate::error::{PlateError, Result};

/// Make sure `dir` exists as a directory, creating missing ancestors.
pub fn ensure_dir(dir: &Path) -> io::Result<()> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} exists and is not a directory", dir.display()),
        )),
        Err(e) if e.kind() == io::ErrorKind::NotFound => fs::create_dir_all(dir),
        Err(e) => Err(e),
    }
}

/// Make sure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

/// Open `path` for writing, creating its parent directories first.
///
/// An existing file is truncated.
///
/// # Errors
///
/// Returns `OutputOpen` when a parent is not a directory or the file cannot
/// be created.
pub fn open_output(path: &Path) -> Result<File> {
    let wrap = |source| PlateError::OutputOpen {
        path: path.to_path_buf(),
        source,
    };

    ensure_parent_dir(path).map_err(wrap)?;

    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(wrap)
}
