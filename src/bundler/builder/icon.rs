//! Icon installation into `Contents/Resources`.

use crate::bundler::{error::Result, settings::Settings, utils::fs};
use std::path::PathBuf;

/// Copies the configured icon, if present under the resource root, into
/// `Contents/Resources` under its base name.
///
/// A configured but missing icon is skipped with a warning; the manifest
/// then names the default icon.
pub fn copy_icon(settings: &Settings) -> Result<Option<PathBuf>> {
    let Some(configured) = settings.bundle_settings().icon_file.as_deref() else {
        return Ok(None);
    };

    let Some(source) = settings.icon_source() else {
        log::warn!(
            "Icon {} not found under {}, using the default icon",
            configured,
            settings.resource_root().display()
        );
        return Ok(None);
    };

    let Some(file_name) = source.file_name() else {
        return Ok(None);
    };
    let dest = settings.resources_dir().join(file_name);
    fs::copy_file(&source, &dest)?;

    log::debug!("Copied icon {} to {}", source.display(), dest.display());
    Ok(Some(dest))
}
