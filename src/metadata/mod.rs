//! Project file loading.
//!
//! A project file (`Bundle.toml` by default) describes the project's own
//! artifact, the bundle settings, and the already resolved runtime
//! dependencies in class path order:
//!
//! ```toml
//! [project]
//! group = "com.example"
//! name = "demo"
//! version = "1.0"
//! file = "target/demo-1.0.jar"
//!
//! [bundle]
//! main_class = "com.example.Main"
//! name = "Demo"
//!
//! [paths]
//! build_directory = "target/demo-1.0"
//!
//! [[dependency]]
//! group = "org.slf4j"
//! name = "slf4j-api"
//! version = "2.0.9"
//! file = "lib/slf4j-api-2.0.9.jar"
//! ```
//!
//! Relative paths resolve against the directory containing the file.

use crate::bundler::{
    self, Artifact, BundleSettings, ResolvedArtifact, SettingsBuilder, StaticDependencies,
};
use crate::error::{BundlerError, CliError, Result};
use std::path::{Path, PathBuf};

/// An artifact entry with its file location.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ArtifactEntry {
    /// Coordinates
    #[serde(flatten)]
    pub artifact: Artifact,

    /// Artifact file, relative to the project root
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// The `[paths]` table.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct PathSettings {
    /// Where the `.app` and additional resources are written
    #[serde(default)]
    pub build_directory: Option<PathBuf>,

    /// Lookup root for the icon and template overrides
    #[serde(default)]
    pub resource_root: Option<PathBuf>,

    /// Explicit launcher stub file
    #[serde(default)]
    pub launcher_stub: Option<PathBuf>,

    /// Launcher executable name
    #[serde(default)]
    pub launcher_name: Option<String>,
}

/// Raw project file contents.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ProjectFile {
    /// The project's own artifact
    pub project: ArtifactEntry,

    /// Bundle settings
    #[serde(default)]
    pub bundle: BundleSettings,

    /// Path overrides
    #[serde(default)]
    pub paths: PathSettings,

    /// Runtime dependencies in class path order
    #[serde(default, rename = "dependency")]
    pub dependencies: Vec<ArtifactEntry>,
}

/// A loaded project, ready to be turned into settings.
#[derive(Debug, Clone)]
pub struct LoadedProject {
    /// Directory containing the project file
    pub root: PathBuf,

    /// Bundle settings with project defaults applied
    pub bundle: BundleSettings,

    /// Path overrides
    pub paths: PathSettings,

    /// Artifacts to bundle
    pub dependencies: StaticDependencies,
}

impl LoadedProject {
    /// Returns a settings builder pre-populated from the project file.
    pub fn settings_builder(&self) -> SettingsBuilder {
        let mut builder = SettingsBuilder::new()
            .project_root(&self.root)
            .bundle_settings(self.bundle.clone());
        if let Some(dir) = &self.paths.build_directory {
            builder = builder.build_directory(dir);
        }
        if let Some(root) = &self.paths.resource_root {
            builder = builder.resource_root(root);
        }
        if let Some(stub) = &self.paths.launcher_stub {
            builder = builder.launcher_stub(stub);
        }
        if let Some(name) = &self.paths.launcher_name {
            builder = builder.launcher_name(name);
        }
        builder
    }
}

/// Reads and parses the project file at `path`.
pub fn load_project(path: &Path) -> Result<LoadedProject> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        BundlerError::Cli(CliError::ExecutionFailed {
            command: "read_project_file".to_string(),
            reason: format!("Failed to read {}: {}", path.display(), e),
        })
    })?;

    let root = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    parse_project(&contents, &root)
}

/// Parses project file contents; relative paths resolve against `root`.
pub fn parse_project(contents: &str, root: &Path) -> Result<LoadedProject> {
    let file: ProjectFile = toml::from_str(contents)?;

    let project = resolve_entry(root, file.project, "project")?;

    let dependencies = file
        .dependencies
        .into_iter()
        .map(|entry| {
            let what = format!("dependency {}", entry.artifact);
            resolve_entry(root, entry, &what)
        })
        .collect::<Result<Vec<_>>>()?;

    // Unset bundle fields fall back to the project's own coordinates
    let mut bundle = file.bundle;
    if bundle.version.is_empty() {
        bundle.version = project.artifact.version.clone();
    }
    if bundle.name.is_empty() {
        bundle.name = project.artifact.name.clone();
    }

    Ok(LoadedProject {
        root: root.to_path_buf(),
        bundle,
        paths: file.paths,
        dependencies: StaticDependencies::new(project, dependencies),
    })
}

fn resolve_entry(root: &Path, entry: ArtifactEntry, what: &str) -> Result<ResolvedArtifact> {
    let file = entry.file.ok_or_else(|| {
        BundlerError::Bundler(bundler::Error::Configuration(format!(
            "{what} has no file"
        )))
    })?;
    Ok(ResolvedArtifact::new(entry.artifact, root.join(file)))
}
