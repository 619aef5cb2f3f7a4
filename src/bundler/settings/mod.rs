//! Configuration structures for bundle assembly.
//!
//! [`BundleSettings`] mirrors the `[bundle]` table of the project file,
//! [`FileSet`] describes one include/exclude-filtered resource directory,
//! and [`Settings`] is the validated, read-only configuration for a single
//! run, constructed through [`SettingsBuilder`].

mod builder;
mod bundle;
mod core;
mod fileset;

// Re-export all public types
pub use builder::SettingsBuilder;
pub use bundle::{BundleSettings, DEFAULT_TEMPLATE};
pub use core::{DEFAULT_LAUNCHER_NAME, Settings, sanitize_bundle_name};
pub use fileset::FileSet;
