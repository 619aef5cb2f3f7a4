//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

/// macOS application bundler for JVM programs
#[derive(Parser, Debug)]
#[command(
    name = "appbundler",
    version,
    about = "Assembles a macOS .app bundle for a JVM program",
    long_about = "Assembles <name>.app with the launcher stub, the project jar and its dependencies, \
and a generated Info.plist, as described by a project file.

Usage:
  appbundler
  appbundler --config path/to/Bundle.toml --build-dir target/dist
  appbundler --launcher /opt/stubs/JavaAppLauncher --json

Exit code 0 = bundle complete at the reported path."
)]
pub struct Args {
    /// Project file describing the artifact, bundle and dependencies
    #[arg(short, long, value_name = "FILE", default_value = "Bundle.toml", env = "APPBUNDLER_CONFIG")]
    pub config: PathBuf,

    /// Build directory receiving the bundle (overrides the project file)
    #[arg(short, long, value_name = "DIR")]
    pub build_dir: Option<PathBuf>,

    /// Launcher stub to install (overrides the project file)
    #[arg(short, long, value_name = "FILE")]
    pub launcher: Option<PathBuf>,

    /// Print the assembly report as JSON
    #[arg(long)]
    pub json: bool,

    /// Log every copied file
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if !self.config.is_file() {
            return Err(format!(
                "Project file not found: {}",
                self.config.display()
            ));
        }

        if let Some(launcher) = &self.launcher {
            if !launcher.is_file() {
                return Err(format!("Launcher stub not found: {}", launcher.display()));
            }
        }

        Ok(())
    }
}
