//! Main bundler orchestration.
//!
//! This module provides the [`Bundler`] orchestrator that runs every
//! assembly stage in order and reports what it produced.

use super::{checksum::digest_tree, icon, launcher, skeleton};
use crate::bundler::{
    Result, Settings,
    dependency::{DependencyProvider, collect_dependencies},
    plist, resources,
    utils::fs,
};
use std::path::PathBuf;

/// Result of a successful assembly run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct BundledApp {
    /// The `.app` directory
    pub app_path: PathBuf,
    /// The generated manifest
    pub info_plist: PathBuf,
    /// Class path written to the manifest, in load order
    pub classpath: Vec<String>,
    /// Files copied next to the bundle, relative to the build directory
    pub additional_resources: Vec<String>,
    /// Total size of the files in the bundle, in bytes
    pub size: u64,
    /// Hex-encoded SHA-256 of the bundle tree
    pub checksum: String,
}

/// Assembles one `.app` bundle.
///
/// Holds the validated [`Settings`] and the source of the artifacts to
/// bundle. One `Bundler` produces one bundle per [`bundle`](Self::bundle)
/// call; stages run sequentially on the calling thread.
pub struct Bundler {
    settings: Settings,
    provider: Box<dyn DependencyProvider>,
}

impl std::fmt::Debug for Bundler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bundler")
            .field("settings", &self.settings)
            .field("provider", &"<DependencyProvider>")
            .finish()
    }
}

impl Bundler {
    /// Creates a new bundler.
    pub fn new(settings: Settings, provider: impl DependencyProvider + 'static) -> Self {
        Self {
            settings,
            provider: Box::new(provider),
        }
    }

    /// Returns a reference to the bundler settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs the full pipeline.
    ///
    /// # Errors
    ///
    /// Fails on the first stage that fails. A failure before the manifest
    /// stage leaves no `Info.plist` behind from this run.
    pub fn bundle(&self) -> Result<BundledApp> {
        let settings = &self.settings;
        let bundle = settings.bundle_settings();
        let app_path = settings.app_path();

        log::info!(
            "Creating {} in {}",
            app_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            settings.build_directory().display()
        );

        // Step 1: Directories
        fs::create_dir_all(settings.build_directory())?;
        skeleton::create_skeleton(&app_path)?;

        // Step 2: Launcher stub
        launcher::install_launcher(settings)?;

        // Step 3: Icon
        icon::copy_icon(settings)?;

        // Step 4: Project artifact and runtime dependencies
        let artifacts = collect_dependencies(&settings.java_dir(), self.provider.as_ref())?;

        // Step 5: Additional bundled class path resources
        let bundled = self.copy_bundled_classpath_resources()?;

        // Step 6: Info.plist
        let classpath = plist::class_path(&artifacts, &bundled, &bundle.additional_classpath);
        let info_plist = plist::generate_info_plist(settings, &classpath)?;

        // Step 7: Additional resources next to the bundle
        let additional_resources = resources::merge_file_sets(
            settings.project_root(),
            &bundle.additional_resources,
            settings.build_directory(),
        )?;

        let digest = digest_tree(&app_path)?;
        log::info!("Bundle complete: {} bytes, sha256 {}", digest.size, digest.sha256);

        Ok(BundledApp {
            app_path,
            info_plist,
            classpath,
            additional_resources,
            size: digest.size,
            checksum: digest.sha256,
        })
    }

    /// Copies the bundled class path resources under
    /// `Contents/Java/<bundled_resources_dir>` and returns their class path
    /// entries, prefixed with that directory.
    fn copy_bundled_classpath_resources(&self) -> Result<Vec<String>> {
        let bundle = self.settings.bundle_settings();
        let file_sets = &bundle.additional_bundled_classpath_resources;
        if file_sets.is_empty() {
            return Ok(Vec::new());
        }

        let target_dir = bundle.bundled_resources_dir.trim_matches('/');
        let destination = self.settings.java_dir().join(target_dir);
        fs::create_dir_all(&destination)?;

        let copied =
            resources::merge_file_sets(self.settings.project_root(), file_sets, &destination)?;
        Ok(resources::prefix_paths(copied, target_dir))
    }
}
