//! Bundle assembly.
//!
//! This module provides the [`Bundler`] orchestrator that runs the
//! assembly pipeline for one `.app` bundle.
//!
//! # Overview
//!
//! The bundler, strictly in this order:
//! 1. Creates the `Contents/{MacOS,Resources,Java}` skeleton
//! 2. Installs the launcher stub
//! 3. Copies the icon
//! 4. Copies the project artifact and its dependencies into `Contents/Java`
//! 5. Copies the additional bundled class path resources
//! 6. Writes `Contents/Info.plist`
//! 7. Copies the additional resources next to the bundle
//!
//! The first failure stops the run. Nothing is rolled back; a rerun
//! overwrites what an earlier run left behind.
//!
//! # Example
//!
//! ```no_run
//! use appbundler::bundler::{
//!     Artifact, BundleSettings, Bundler, ResolvedArtifact, SettingsBuilder, StaticDependencies,
//! };
//!
//! # fn example() -> appbundler::bundler::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .project_root(".")
//!     .bundle_settings(BundleSettings {
//!         main_class: "com.example.Main".into(),
//!         name: "Demo".into(),
//!         version: "1.0".into(),
//!         ..Default::default()
//!     })
//!     .build()?;
//!
//! let provider = StaticDependencies::new(
//!     ResolvedArtifact::new(Artifact::new("com.example", "demo", "1.0"), "target/demo-1.0.jar"),
//!     vec![],
//! );
//!
//! let app = Bundler::new(settings, provider).bundle()?;
//! println!("Created {} ({} bytes)", app.app_path.display(), app.size);
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`checksum`] - size and SHA-256 of the finished bundle
//! - [`icon`] - icon installation
//! - [`launcher`] - launcher stub installation
//! - [`orchestrator`] - the [`Bundler`] pipeline
//! - [`skeleton`] - directory skeleton creation

pub mod checksum;
pub mod icon;
pub mod launcher;
mod orchestrator;
pub mod skeleton;

pub use orchestrator::{BundledApp, Bundler};
