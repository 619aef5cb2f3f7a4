//! Include/exclude specification for one resource directory.

use std::path::PathBuf;

/// A set of files under one source directory, filtered by glob patterns.
///
/// Patterns use `/` separators and are matched against paths relative to
/// [`FileSet::directory`]. `*` stays within one path segment, `**` spans
/// any number of segments, and a pattern ending in `/` matches everything
/// below that directory.
///
/// # Configuration
///
/// ```toml
/// [[bundle.additional_resources]]
/// directory = "src/main/dist"
/// includes = ["**/*.txt", "docs/"]
/// excludes = ["**/draft-*"]
/// ```
#[derive(Debug, Clone, serde::Deserialize)]
pub struct FileSet {
    /// Source directory. Relative paths resolve against the project root.
    pub directory: PathBuf,

    /// Include patterns.
    ///
    /// Default: empty, which includes every file
    #[serde(default)]
    pub includes: Vec<String>,

    /// Exclude patterns.
    ///
    /// Default: empty
    #[serde(default)]
    pub excludes: Vec<String>,

    /// Also exclude version-control and editor artifacts (`.git/`, `.svn/`,
    /// `*~`, `.DS_Store`, ...) regardless of the include patterns.
    ///
    /// Default: true
    #[serde(default = "default_true")]
    pub use_default_excludes: bool,
}

fn default_true() -> bool {
    true
}

impl FileSet {
    /// Creates a file set that includes everything under `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            includes: Vec::new(),
            excludes: Vec::new(),
            use_default_excludes: true,
        }
    }

    /// Adds an include pattern.
    pub fn include(mut self, pattern: &str) -> Self {
        self.includes.push(pattern.into());
        self
    }

    /// Adds an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Self {
        self.excludes.push(pattern.into());
        self
    }

    /// Toggles the default excludes.
    pub fn use_default_excludes(mut self, enabled: bool) -> Self {
        self.use_default_excludes = enabled;
        self
    }
}
