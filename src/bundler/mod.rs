//! macOS application bundle assembly for JVM applications.
//!
//! Produces `<name>.app/Contents/{MacOS,Resources,Java}` plus a generated
//! `Info.plist`, from validated [`Settings`] and a [`DependencyProvider`].
//! See [`builder`] for the pipeline.

pub mod artifact;
pub mod builder;
pub mod dependency;
pub mod error;
pub mod plist;
pub mod resources;
pub mod settings;
pub mod utils;

pub use artifact::Artifact;
pub use builder::{BundledApp, Bundler};
pub use dependency::{DependencyProvider, ResolvedArtifact, StaticDependencies};
pub use error::{Error, ErrorKind, Result};
pub use settings::{BundleSettings, FileSet, Settings, SettingsBuilder};
