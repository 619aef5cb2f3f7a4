//! appbundler - macOS application bundles for JVM programs.
//!
//! Reads a `Bundle.toml` project file, assembles `<name>.app` and writes
//! its Info.plist.

use appbundler::cli;
use std::process;

fn main() {
    let args = cli::parse_args();

    // Initialize logging
    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // Run CLI and get exit code
    let exit_code = match cli::run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
