//! Bundle configuration read from the `[bundle]` table.

use super::FileSet;

/// Identifier of the compiled-in Info.plist template.
pub const DEFAULT_TEMPLATE: &str = "appbundler/Info.plist.template";

/// Bundle configuration for one application.
///
/// # Configuration
///
/// ```toml
/// [bundle]
/// main_class = "com.example.Main"
/// name = "My App"
/// icon_file = "icons/app.icns"
/// jvm_version = "17+"
/// jvm_arguments = ["--headless"]
/// additional_classpath = ["/opt/ext/ext.jar"]
/// vm_options = "-Xmx512m"
///
/// [[bundle.additional_bundled_classpath_resources]]
/// directory = "native"
/// includes = ["**/*.dylib"]
/// ```
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct BundleSettings {
    /// Fully qualified class launched when the bundle is opened.
    ///
    /// Required.
    pub main_class: String,

    /// Display name of the bundle. Also names the `.app` directory after
    /// sanitizing.
    ///
    /// Required.
    pub name: String,

    /// Working directory of the launched process. `$APP_ROOT` points inside
    /// the bundle.
    ///
    /// Default: `$APP_ROOT`
    pub working_directory: String,

    /// Icon file, relative to the resource root.
    ///
    /// Default: None (the launcher's generic icon)
    pub icon_file: Option<String>,

    /// Bundle version (`CFBundleVersion`).
    ///
    /// Default: the project version
    pub version: String,

    /// Required JVM version (`JVMVersion`).
    ///
    /// Default: `1.4+`
    pub jvm_version: String,

    /// Arguments handed to the main class.
    ///
    /// Default: Empty
    pub jvm_arguments: Vec<String>,

    /// Extra class path entries that are not shipped inside the bundle,
    /// e.g. jars with a known location on the target system.
    ///
    /// Default: Empty
    pub additional_classpath: Vec<String>,

    /// Files copied into `Contents/Java/<bundled_resources_dir>` and added
    /// to the class path (extra jars, JNI libraries).
    ///
    /// Default: Empty
    pub additional_bundled_classpath_resources: Vec<FileSet>,

    /// Directory under `Contents/Java` receiving the bundled class path
    /// resources.
    ///
    /// Default: `lib`
    pub bundled_resources_dir: String,

    /// Files copied next to the `.app` in the build directory.
    ///
    /// Default: Empty
    pub additional_resources: Vec<FileSet>,

    /// Info.plist template identifier. An override is looked up under the
    /// resource root before falling back to the compiled-in template.
    ///
    /// Default: [`DEFAULT_TEMPLATE`]
    pub template: String,

    /// JVM options string, passed through verbatim (`VMOptions`).
    ///
    /// Default: None
    pub vm_options: Option<String>,
}

impl Default for BundleSettings {
    fn default() -> Self {
        Self {
            main_class: String::new(),
            name: String::new(),
            working_directory: "$APP_ROOT".into(),
            icon_file: None,
            version: String::new(),
            jvm_version: "1.4+".into(),
            jvm_arguments: Vec::new(),
            additional_classpath: Vec::new(),
            additional_bundled_classpath_resources: Vec::new(),
            bundled_resources_dir: "lib".into(),
            additional_resources: Vec::new(),
            template: DEFAULT_TEMPLATE.into(),
            vm_options: None,
        }
    }
}
