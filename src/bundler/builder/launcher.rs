//! Launcher stub installation.

use crate::bundler::{
    error::{Error, Result},
    settings::Settings,
    utils::fs,
};
use std::path::PathBuf;

/// Returns the launcher stub locations in lookup order.
pub fn stub_candidates(settings: &Settings) -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(2);
    if let Some(stub) = settings.launcher_stub() {
        candidates.push(stub.to_path_buf());
    }
    candidates.push(settings.resource_root().join(settings.launcher_name()));
    candidates
}

/// Copies the launcher stub byte for byte into `Contents/MacOS` and marks
/// it executable.
///
/// Returns the installed path.
pub fn install_launcher(settings: &Settings) -> Result<PathBuf> {
    let candidates = stub_candidates(settings);
    let stub = candidates
        .iter()
        .find(|path| path.is_file())
        .ok_or_else(|| Error::ResourceNotFound {
            resource: format!("launcher stub {}", settings.launcher_name()),
            searched: candidates.clone(),
        })?;

    let dest = settings.macos_dir().join(settings.launcher_name());
    fs::copy_file(stub, &dest)?;
    fs::set_executable(&dest)?;

    log::info!("Installed launcher {}", dest.display());
    Ok(dest)
}
