//! Dependency collection into `Contents/Java`.
//!
//! Resolution itself happens elsewhere: a [`DependencyProvider`] hands over
//! the project's own artifact plus the runtime dependencies in the order
//! they should appear on the class path. This module only places the files.

use crate::bundler::{artifact::Artifact, error::Result, utils::fs};
use std::path::{Path, PathBuf};

/// An artifact together with the file that backs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    /// Artifact coordinates
    pub artifact: Artifact,
    /// Location of the artifact file on disk
    pub file: PathBuf,
}

impl ResolvedArtifact {
    /// Pairs coordinates with a file location.
    pub fn new(artifact: Artifact, file: impl Into<PathBuf>) -> Self {
        Self {
            artifact,
            file: file.into(),
        }
    }
}

/// Source of the artifacts to bundle.
pub trait DependencyProvider {
    /// The project's own build output.
    fn project_artifact(&self) -> Result<ResolvedArtifact>;

    /// Runtime dependencies, in class path order.
    fn runtime_dependencies(&self) -> Result<Vec<ResolvedArtifact>>;
}

/// A provider over an already resolved, fixed list of artifacts.
#[derive(Debug, Clone)]
pub struct StaticDependencies {
    project: ResolvedArtifact,
    dependencies: Vec<ResolvedArtifact>,
}

impl StaticDependencies {
    /// Creates a provider from a project artifact and its dependencies.
    pub fn new(project: ResolvedArtifact, dependencies: Vec<ResolvedArtifact>) -> Self {
        Self {
            project,
            dependencies,
        }
    }
}

impl DependencyProvider for StaticDependencies {
    fn project_artifact(&self) -> Result<ResolvedArtifact> {
        Ok(self.project.clone())
    }

    fn runtime_dependencies(&self) -> Result<Vec<ResolvedArtifact>> {
        Ok(self.dependencies.clone())
    }
}

/// Copies the project artifact and every runtime dependency into
/// `java_dir`, each at its layout path.
///
/// Returns the layout paths written, project artifact first, then the
/// dependencies in provider order. The first failed copy aborts the whole
/// collection.
pub fn collect_dependencies(
    java_dir: &Path,
    provider: &dyn DependencyProvider,
) -> Result<Vec<String>> {
    let project = provider.project_artifact()?;
    let dependencies = provider.runtime_dependencies()?;

    let mut layout_paths = Vec::with_capacity(dependencies.len() + 1);

    for resolved in std::iter::once(&project).chain(dependencies.iter()) {
        let layout_path = resolved.artifact.layout_path();
        let dest = java_dir.join(&layout_path);

        log::debug!("Adding {} as {}", resolved.file.display(), layout_path);
        fs::copy_file(&resolved.file, &dest)?;

        layout_paths.push(layout_path);
    }

    log::info!(
        "Copied {} artifact(s) into {}",
        layout_paths.len(),
        java_dir.display()
    );

    Ok(layout_paths)
}
