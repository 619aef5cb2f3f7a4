//! Bundle checksum calculation.
//!
//! A `.app` is a directory, so its checksum covers the whole tree: every
//! file's relative path and a NUL byte followed by its content, in sorted
//! path order.

use crate::bundler::error::{Error, ErrorExt, Result};
use sha2::{Digest, Sha256};
use std::{fs::File, io::Read, path::Path};

/// Size and checksum of a directory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeDigest {
    /// Total size of all files in bytes
    pub size: u64,
    /// Hex-encoded SHA-256
    pub sha256: String,
}

/// Calculates size and SHA-256 of the directory tree at `dir_path`.
///
/// The result depends only on relative paths and file contents, not on
/// traversal order or timestamps.
pub fn digest_tree(dir_path: &Path) -> Result<TreeDigest> {
    let mut entries = Vec::new();
    for entry in walkdir::WalkDir::new(dir_path).follow_links(false) {
        let entry = entry.map_err(|error| Error::Walk {
            root: dir_path.to_path_buf(),
            error,
        })?;
        if entry.file_type().is_file() {
            entries.push(entry.into_path());
        }
    }

    // Sort by path for deterministic ordering
    entries.sort();

    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];
    let mut size = 0u64;

    for path in entries {
        if let Ok(rel_path) = path.strip_prefix(dir_path) {
            hasher.update(rel_path.to_string_lossy().as_bytes());
            hasher.update([0u8]);
        }

        let mut file = File::open(&path).fs_context("opening file for hashing", &path)?;
        loop {
            let n = file
                .read(&mut buffer)
                .fs_context("reading file for hash calculation", &path)?;
            if n == 0 {
                break;
            }
            size += n as u64;
            hasher.update(&buffer[..n]);
        }
    }

    Ok(TreeDigest {
        size,
        sha256: format!("{:x}", hasher.finalize()),
    })
}
