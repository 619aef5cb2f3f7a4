//! Copying of additional resource sets into the bundle or build directory.
//!
//! A resource set whose source directory does not exist contributes
//! nothing and is not an error; such sets are often environment-specific.
//! A source path that exists but is not a readable directory is fatal, as is
//! every copy failure inside an existing directory.

mod scanner;

pub use scanner::{DEFAULT_EXCLUDES, FileSetMatcher, ScannedFile, scan};

use crate::bundler::{
    error::{Error, ErrorExt, Result},
    settings::FileSet,
    utils::fs,
};
use path_absolutize::Absolutize;
use std::{
    io,
    path::{Path, PathBuf},
};

/// Resolves the source directory of `file_set` against `project_root`.
pub fn source_directory(project_root: &Path, file_set: &FileSet) -> Result<PathBuf> {
    Ok(file_set
        .directory
        .absolutize_from(project_root)
        .fs_context("resolving resource directory", &file_set.directory)?
        .into_owned())
}

/// Copies the files selected by `file_set` into `destination`, keeping
/// their relative paths.
///
/// Returns the `/`-separated relative paths copied, in scan order. A missing
/// source directory yields an empty list; a source path that is not a
/// directory, or cannot be inspected, is an error.
pub fn merge_file_set(
    project_root: &Path,
    file_set: &FileSet,
    destination: &Path,
) -> Result<Vec<String>> {
    let source_dir = source_directory(project_root, file_set)?;

    match std::fs::metadata(&source_dir) {
        Ok(metadata) if metadata.is_dir() => {}
        Ok(_) => {
            return Err(Error::Fs {
                context: "scanning resource directory",
                path: source_dir,
                error: io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
            });
        }
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            log::debug!(
                "Resource directory {} does not exist, skipping",
                source_dir.display()
            );
            return Ok(Vec::new());
        }
        Err(error) => {
            return Err(Error::Fs {
                context: "inspecting resource directory",
                path: source_dir,
                error,
            });
        }
    }

    let files = scan(&source_dir, file_set)?;

    log::info!(
        "Copying {} additional resource{}",
        files.len(),
        if files.len() == 1 { "" } else { "s" }
    );

    let mut copied = Vec::with_capacity(files.len());
    for file in files {
        let from = source_dir.join(&file.relative);
        let to = destination.join(&file.relative);
        log::debug!("  {} -> {}", from.display(), to.display());
        fs::copy_file(&from, &to)?;
        copied.push(file.name);
    }

    Ok(copied)
}

/// Applies [`merge_file_set`] to each set in order and concatenates the
/// results.
pub fn merge_file_sets(
    project_root: &Path,
    file_sets: &[FileSet],
    destination: &Path,
) -> Result<Vec<String>> {
    let mut copied = Vec::new();
    for file_set in file_sets {
        copied.extend(merge_file_set(project_root, file_set, destination)?);
    }
    Ok(copied)
}

/// Prefixes each relative path with `directory/`.
pub fn prefix_paths(paths: Vec<String>, directory: &str) -> Vec<String> {
    let directory = directory.trim_end_matches('/');
    if directory.is_empty() {
        return paths;
    }
    paths
        .into_iter()
        .map(|path| format!("{directory}/{path}"))
        .collect()
}
