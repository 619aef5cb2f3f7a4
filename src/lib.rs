//! macOS application bundler for JVM programs.
//!
//! This library assembles a self-contained `.app` directory for a packaged
//! program and its jar dependencies:
//! - `Contents/MacOS` with the launcher stub
//! - `Contents/Java` with every artifact at its repository layout path
//! - `Contents/Info.plist` generated from a template
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
