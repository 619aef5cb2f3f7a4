//! Command line interface for appbundler.
//!
//! Loads the project file, applies command line overrides, runs the
//! bundler and reports the result.

mod args;

pub use args::Args;

use crate::{
    bundler::Bundler,
    error::{CliError, Result},
    metadata,
};
use path_absolutize::Absolutize;

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse_args()
}

/// Main CLI entry point
pub fn run(args: &Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let project = metadata::load_project(&args.config)?;

    // Command line paths are relative to the working directory, not the project root
    let mut builder = project.settings_builder();
    if let Some(dir) = &args.build_dir {
        builder = builder.build_directory(dir.absolutize()?);
    }
    if let Some(stub) = &args.launcher {
        builder = builder.launcher_stub(stub.absolutize()?);
    }
    let settings = builder.build()?;

    let app = Bundler::new(settings, project.dependencies).bundle()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&app)?);
    } else {
        println!("Created {}", app.app_path.display());
        println!("  class path entries: {}", app.classpath.len());
        println!("  additional resources: {}", app.additional_resources.len());
        println!("  size: {} bytes", app.size);
        println!("  sha256: {}", app.checksum);
    }

    Ok(0)
}
