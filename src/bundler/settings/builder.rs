//! Builder for constructing Settings.

use super::{BundleSettings, Settings, core::DEFAULT_LAUNCHER_NAME};
use crate::bundler::error::{Context, ErrorExt, Result};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Relative paths are resolved against the project root when
/// [`build`](Self::build) runs, so setter order does not matter.
///
/// # Examples
///
/// ```no_run
/// use appbundler::bundler::{BundleSettings, SettingsBuilder};
///
/// # fn example() -> appbundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_root("/work/demo")
///     .build_directory("target/demo-1.0")
///     .bundle_settings(BundleSettings {
///         main_class: "com.example.Main".into(),
///         name: "Demo".into(),
///         version: "1.0".into(),
///         ..Default::default()
///     })
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    project_root: Option<PathBuf>,
    build_directory: Option<PathBuf>,
    resource_root: Option<PathBuf>,
    launcher_name: Option<String>,
    launcher_stub: Option<PathBuf>,
    bundle_settings: Option<BundleSettings>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the project root.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn project_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the build directory.
    ///
    /// Default: `<project root>/target`
    pub fn build_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.build_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the resource root searched for the icon and template overrides.
    ///
    /// Default: `<project root>/target/classes`
    pub fn resource_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.resource_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the launcher executable name.
    ///
    /// Default: `JavaAppLauncher`
    pub fn launcher_name(mut self, name: impl Into<String>) -> Self {
        self.launcher_name = Some(name.into());
        self
    }

    /// Sets an explicit launcher stub file.
    ///
    /// Default: None (looked up under the resource root)
    pub fn launcher_stub<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.launcher_stub = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the bundle configuration.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn bundle_settings(mut self, settings: BundleSettings) -> Self {
        self.bundle_settings = Some(settings);
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `project_root` or `bundle_settings`
    /// is missing, or if the bundle has no main class or name.
    pub fn build(self) -> Result<Settings> {
        let project_root = self.project_root.context("project_root is required")?;
        let project_root = project_root
            .absolutize()
            .fs_context("resolving project root", &project_root)?
            .into_owned();

        let bundle = self
            .bundle_settings
            .context("bundle_settings is required")?;

        if bundle.main_class.trim().is_empty() {
            crate::bail!("bundle.main_class is required");
        }
        if bundle.name.trim().is_empty() {
            crate::bail!("bundle.name is required");
        }
        if bundle.template.trim().is_empty() {
            crate::bail!("bundle.template must not be empty");
        }

        let launcher_name = self
            .launcher_name
            .unwrap_or_else(|| DEFAULT_LAUNCHER_NAME.to_string());
        if launcher_name.is_empty() || launcher_name.contains(['/', '\\']) {
            crate::bail!("invalid launcher name {launcher_name:?}");
        }

        let build_directory = resolve(
            &project_root,
            self.build_directory.unwrap_or_else(|| PathBuf::from("target")),
        )?;
        let resource_root = resolve(
            &project_root,
            self.resource_root
                .unwrap_or_else(|| Path::new("target").join("classes")),
        )?;
        let launcher_stub = self
            .launcher_stub
            .map(|stub| resolve(&project_root, stub))
            .transpose()?;

        Ok(Settings::new(
            project_root,
            build_directory,
            resource_root,
            launcher_name,
            launcher_stub,
            bundle,
        ))
    }
}

/// Resolves `path` against `base` unless it is already absolute.
fn resolve(base: &Path, path: PathBuf) -> Result<PathBuf> {
    Ok(path
        .absolutize_from(base)
        .fs_context("resolving path", &path)?
        .into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::ErrorKind;

    fn bundle() -> BundleSettings {
        BundleSettings {
            main_class: "com.example.Main".into(),
            name: "Demo".into(),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_resolve_under_project_root() {
        let settings = SettingsBuilder::new()
            .project_root("/work/demo")
            .bundle_settings(bundle())
            .build()
            .unwrap();

        assert_eq!(settings.build_directory(), Path::new("/work/demo/target"));
        assert_eq!(
            settings.resource_root(),
            Path::new("/work/demo/target/classes")
        );
        assert_eq!(settings.launcher_name(), "JavaAppLauncher");
        assert!(settings.launcher_stub().is_none());
    }

    #[test]
    fn absolute_paths_are_kept() {
        let settings = SettingsBuilder::new()
            .project_root("/work/demo")
            .build_directory("/out")
            .launcher_stub("stub/JavaAppLauncher")
            .bundle_settings(bundle())
            .build()
            .unwrap();

        assert_eq!(settings.build_directory(), Path::new("/out"));
        assert_eq!(
            settings.launcher_stub(),
            Some(Path::new("/work/demo/stub/JavaAppLauncher"))
        );
    }

    #[test]
    fn missing_main_class_is_a_configuration_error() {
        let err = SettingsBuilder::new()
            .project_root("/work/demo")
            .bundle_settings(BundleSettings {
                main_class: "  ".into(),
                ..bundle()
            })
            .build()
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains("main_class"));
    }

    #[test]
    fn missing_project_root_is_a_configuration_error() {
        let err = SettingsBuilder::new()
            .bundle_settings(bundle())
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}
