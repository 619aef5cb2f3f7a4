//! Error types for bundle assembly.
//!
//! Every failure the engine can raise falls into one of four kinds
//! ([`ErrorKind`]). Callers branch on [`Error::kind`], never on the
//! variant layout, so context fields can grow without breaking them.

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};

/// Result type alias for bundler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Closed set of failure kinds surfaced by the bundler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required setting is missing or invalid.
    Configuration,
    /// A required template or launcher stub could not be found.
    ResourceNotFound,
    /// Directory creation or file copy failed on a path expected to succeed.
    Io,
    /// The manifest template could not be parsed, decoded or merged.
    Template,
}

/// Main error type for bundle assembly.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid or incomplete configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A required resource is absent from every expected location.
    #[error("could not find {resource} (searched: {})", display_paths(searched))]
    ResourceNotFound {
        /// What was being looked up (template identifier, launcher name)
        resource: String,
        /// Every location that was checked
        searched: Vec<PathBuf>,
    },

    /// Filesystem failure with the operation and path that caused it.
    #[error("{context} {}: {error}", path.display())]
    Fs {
        /// Operation being attempted
        context: &'static str,
        /// Offending path
        path: PathBuf,
        /// Underlying error
        #[source]
        error: io::Error,
    },

    /// Directory traversal failure while scanning a resource set.
    #[error("failed to scan {}: {error}", root.display())]
    Walk {
        /// Directory being scanned
        root: PathBuf,
        /// Underlying error
        #[source]
        error: walkdir::Error,
    },

    /// Template parse, decode or merge failure.
    #[error("template {template}: {message}")]
    Template {
        /// Template identifier
        template: String,
        /// What went wrong
        message: String,
    },
}

impl Error {
    /// Returns the failure kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::ResourceNotFound { .. } => ErrorKind::ResourceNotFound,
            Self::Fs { .. } | Self::Walk { .. } => ErrorKind::Io,
            Self::Template { .. } => ErrorKind::Template,
        }
    }

    /// Builds a template error for the given identifier.
    pub fn template(template: impl Into<String>, message: impl Display) -> Self {
        Self::Template {
            template: template.into(),
            message: message.to_string(),
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "<none>".into();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Attaches configuration context to optional values and foreign errors.
pub trait Context<T> {
    /// Converts into a [`Error::Configuration`] carrying `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::Configuration(context.to_string()))
    }
}

/// Attaches filesystem context to I/O results.
pub trait ErrorExt<T> {
    /// Wraps an I/O error with the operation and path it concerned.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}

/// Returns early with a [`Error::Configuration`].
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::bundler::Error::Configuration(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::bundler::Error::Configuration(format!($fmt, $($arg)*)))
    };
}
