//! File system utilities for bundling.
//!
//! Provides file operations with automatic parent directory creation and
//! operation/path context on every failure.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::{fs, io, path::Path};

/// Creates all of the directories of the specified path.
///
/// Succeeds if the directory already exists.
pub fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).fs_context("creating directory", path)
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// An existing destination is overwritten. Fails if the source path is a
/// directory or doesn't exist.
pub fn copy_file(from: &Path, to: &Path) -> Result<u64> {
    let metadata = fs::metadata(from).fs_context("reading source file", from)?;
    if !metadata.is_file() {
        return Err(Error::Fs {
            context: "copying source",
            path: from.to_path_buf(),
            error: io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
        });
    }
    if let Some(dest_dir) = to.parent() {
        create_dir_all(dest_dir)?;
    }
    fs::copy(from, to).fs_context("copying file to", to)
}

/// Writes `contents` to `path`, creating parent directories first.
pub fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    fs::write(path, contents).fs_context("writing file", path)
}

/// Marks a file as executable (mode 0755).
#[cfg(unix)]
pub fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .fs_context("setting executable permissions on", path)
}

/// Marks a file as executable. No-op where permissions have no execute bit.
#[cfg(not(unix))]
pub fn set_executable(_path: &Path) -> Result<()> {
    Ok(())
}
