//! Core Settings struct and implementations.

use super::BundleSettings;
use std::path::{Path, PathBuf};

/// Launcher executable name used when none is configured.
pub const DEFAULT_LAUNCHER_NAME: &str = "JavaAppLauncher";

/// Validated configuration for one assembly run.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder); every path
/// held here is absolute.
///
/// # Examples
///
/// ```no_run
/// use appbundler::bundler::{BundleSettings, SettingsBuilder};
///
/// # fn example() -> appbundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_root("/work/demo")
///     .bundle_settings(BundleSettings {
///         main_class: "com.example.Main".into(),
///         name: "My:App".into(),
///         ..Default::default()
///     })
///     .build()?;
///
/// assert_eq!(settings.bundle_name(), "My-App");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Base directory for relative resource set paths.
    project_root: PathBuf,

    /// Directory receiving the `.app` and the additional resources.
    build_directory: PathBuf,

    /// Lookup root for the icon and template overrides.
    resource_root: PathBuf,

    /// Name of the executable under `Contents/MacOS`.
    launcher_name: String,

    /// Explicit launcher stub location, searched before the resource root.
    launcher_stub: Option<PathBuf>,

    /// Bundle configuration.
    bundle: BundleSettings,

    /// Sanitized bundle name, computed once.
    bundle_name: String,
}

impl Settings {
    /// Returns the project root.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Returns the build directory.
    pub fn build_directory(&self) -> &Path {
        &self.build_directory
    }

    /// Returns the resource root.
    pub fn resource_root(&self) -> &Path {
        &self.resource_root
    }

    /// Returns the launcher executable name.
    pub fn launcher_name(&self) -> &str {
        &self.launcher_name
    }

    /// Returns the explicitly configured launcher stub, if any.
    pub fn launcher_stub(&self) -> Option<&Path> {
        self.launcher_stub.as_deref()
    }

    /// Returns the bundle configuration.
    pub fn bundle_settings(&self) -> &BundleSettings {
        &self.bundle
    }

    /// Returns the sanitized bundle name.
    ///
    /// This, not the configured name, is used for the `.app` directory and
    /// for every manifest field.
    pub fn bundle_name(&self) -> &str {
        &self.bundle_name
    }

    /// Returns `<build directory>/<bundle name>.app`.
    pub fn app_path(&self) -> PathBuf {
        self.build_directory.join(format!("{}.app", self.bundle_name))
    }

    /// Returns the `Contents` directory of the bundle.
    pub fn contents_dir(&self) -> PathBuf {
        self.app_path().join("Contents")
    }

    /// Returns `Contents/MacOS`.
    pub fn macos_dir(&self) -> PathBuf {
        self.contents_dir().join("MacOS")
    }

    /// Returns `Contents/Resources`.
    pub fn resources_dir(&self) -> PathBuf {
        self.contents_dir().join("Resources")
    }

    /// Returns `Contents/Java`, the root of the class path.
    pub fn java_dir(&self) -> PathBuf {
        self.contents_dir().join("Java")
    }

    /// Returns the location of the generated manifest.
    pub fn info_plist_path(&self) -> PathBuf {
        self.contents_dir().join("Info.plist")
    }

    /// Returns the configured icon file if it exists under the resource root.
    pub fn icon_source(&self) -> Option<PathBuf> {
        let icon = self.bundle.icon_file.as_deref()?;
        let path = self.resource_root.join(icon);
        path.is_file().then_some(path)
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        project_root: PathBuf,
        build_directory: PathBuf,
        resource_root: PathBuf,
        launcher_name: String,
        launcher_stub: Option<PathBuf>,
        bundle: BundleSettings,
    ) -> Self {
        let bundle_name = sanitize_bundle_name(&bundle.name);
        Self {
            project_root,
            build_directory,
            resource_root,
            launcher_name,
            launcher_stub,
            bundle,
            bundle_name,
        }
    }
}

/// Replaces characters that cannot appear in a file name component.
///
/// `"My:App"` becomes `"My-App"`.
pub fn sanitize_bundle_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            ':' | '/' | '\\' | '\0' => '-',
            c => c,
        })
        .collect()
}
