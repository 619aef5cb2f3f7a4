//! Bundle directory skeleton.

use crate::bundler::{error::Result, utils::fs};
use std::path::{Path, PathBuf};

/// Subdirectories of `Contents` every bundle carries.
pub const CONTENTS_SUBDIRS: [&str; 3] = ["MacOS", "Resources", "Java"];

/// Creates `<app>/Contents/{MacOS,Resources,Java}`.
///
/// Existing directories are left untouched, so running this on a finished
/// bundle is a no-op. Returns the `Contents` directory.
pub fn create_skeleton(app_path: &Path) -> Result<PathBuf> {
    let contents = app_path.join("Contents");
    for dir in CONTENTS_SUBDIRS {
        fs::create_dir_all(&contents.join(dir))?;
    }
    log::debug!("Bundle skeleton ready at {}", app_path.display());
    Ok(contents)
}
