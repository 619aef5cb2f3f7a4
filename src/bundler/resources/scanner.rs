//! File set scanning with include/exclude patterns.

use crate::bundler::{
    error::{Error, Result},
    settings::FileSet,
};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};

/// Patterns excluded when [`FileSet::use_default_excludes`] is set.
///
/// Editor leftovers plus the metadata of common version control systems.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    // editors and temporary files
    "**/*~",
    "**/#*#",
    "**/.#*",
    "**/%*%",
    "**/._*",
    "**/.DS_Store",
    // CVS
    "**/CVS",
    "**/CVS/**",
    "**/.cvsignore",
    // RCS
    "**/RCS",
    "**/RCS/**",
    // SCCS
    "**/SCCS",
    "**/SCCS/**",
    // Visual SourceSafe
    "**/vssver.scc",
    // MKS
    "**/project.pj",
    // Subversion
    "**/.svn",
    "**/.svn/**",
    // GNU Arch
    "**/.arch-ids",
    "**/.arch-ids/**",
    // Bazaar
    "**/.bzr",
    "**/.bzr/**",
    "**/.bzrignore",
    // SurroundSCM
    "**/.MySCMServerInfo",
    // Serena Dimensions
    "**/.metadata",
    "**/.metadata/**",
    // Mercurial
    "**/.hg",
    "**/.hg/**",
    "**/.hgignore",
    // Git
    "**/.git",
    "**/.git/**",
    "**/.gitignore",
    "**/.gitattributes",
    // BitKeeper
    "**/BitKeeper",
    "**/BitKeeper/**",
    "**/ChangeSet",
    "**/ChangeSet/**",
    // darcs
    "**/_darcs",
    "**/_darcs/**",
    "**/.darcsrepo",
    "**/.darcsrepo/**",
    "**/-darcs-backup*",
    "**/.darcs-temp-mail",
];

/// A file selected by a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// Path relative to the scanned directory, in native form
    pub relative: PathBuf,
    /// The same path with `/` separators
    pub name: String,
}

/// Compiled include/exclude patterns of one [`FileSet`].
#[derive(Debug, Clone)]
pub struct FileSetMatcher {
    includes: Option<GlobSet>,
    excludes: GlobSet,
}

impl FileSetMatcher {
    /// Compiles the patterns of `file_set`.
    ///
    /// An empty include list matches every file.
    pub fn new(file_set: &FileSet) -> Result<Self> {
        let includes = if file_set.includes.is_empty() {
            None
        } else {
            Some(build_set(file_set.includes.iter().map(String::as_str))?)
        };

        let defaults = if file_set.use_default_excludes {
            DEFAULT_EXCLUDES
        } else {
            &[]
        };
        let excludes = build_set(
            file_set
                .excludes
                .iter()
                .map(String::as_str)
                .chain(defaults.iter().copied()),
        )?;

        Ok(Self { includes, excludes })
    }

    /// Returns true if the `/`-separated relative path is selected.
    pub fn is_selected(&self, name: &str) -> bool {
        let included = self
            .includes
            .as_ref()
            .is_none_or(|includes| includes.is_match(name));
        included && !self.excludes.is_match(name)
    }
}

fn build_set<'a>(patterns: impl Iterator<Item = &'a str>) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let normalized = normalize_pattern(pattern);
        let glob = GlobBuilder::new(&normalized)
            .literal_separator(true)
            .build()
            .map_err(|e| Error::Configuration(format!("invalid pattern {pattern:?}: {e}")))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| Error::Configuration(format!("invalid pattern set: {e}")))
}

/// Normalizes a pattern to `/` separators; a trailing `/` selects the whole
/// directory below it.
fn normalize_pattern(pattern: &str) -> String {
    let mut normalized = pattern.trim().replace('\\', "/");
    while normalized.starts_with("./") {
        normalized.drain(..2);
    }
    if normalized.ends_with('/') {
        normalized.push_str("**");
    }
    normalized
}

/// Scans `source_dir` and returns the selected files, sorted by path so the
/// result is the same on every platform.
///
/// Only regular files are returned; symlinks are followed.
pub fn scan(source_dir: &Path, file_set: &FileSet) -> Result<Vec<ScannedFile>> {
    let matcher = FileSetMatcher::new(file_set)?;
    let mut selected = Vec::new();

    for entry in walkdir::WalkDir::new(source_dir)
        .follow_links(true)
        .min_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|error| Error::Walk {
            root: source_dir.to_path_buf(),
            error,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(source_dir) else {
            continue;
        };
        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if matcher.is_selected(&name) {
            selected.push(ScannedFile {
                relative: relative.to_path_buf(),
                name,
            });
        } else {
            log::trace!("Skipping {name}");
        }
    }

    Ok(selected)
}
