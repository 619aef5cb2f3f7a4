//! Shared fixtures for integration tests.
#![allow(dead_code)]

use appbundler::bundler::{
    Artifact, BundleSettings, FileSet, ResolvedArtifact, Settings, SettingsBuilder,
    StaticDependencies,
};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tempfile::TempDir;

pub const LAUNCHER_BYTES: &[u8] = &[0xCF, 0xFA, 0xED, 0xFE, 0x07, 0x00, 0x00, 0x01];

/// A scratch project laid out like a finished JVM build.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let fixture = Self {
            dir: tempfile::tempdir().unwrap(),
        };
        fixture.write("target/classes/JavaAppLauncher", LAUNCHER_BYTES);
        fixture.write("target/classes/icons/app.icns", b"icns");
        fixture.write("target/demo-1.0.jar", b"project jar");
        fixture.write("repo/a.jar", b"jar a");
        fixture.write("repo/b.jar", b"jar b");
        fixture.write("native/C.dylib", b"dylib");
        fixture.write("native/.git/HEAD", b"ref: refs/heads/main");
        fixture.write("dist/README.txt", b"read me");
        fixture.write("dist/docs/guide.txt", b"guide");
        fixture.write("dist/.git/config", b"[core]");
        fixture
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    pub fn write(&self, rel: &str, contents: &[u8]) {
        let path = self.path(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    pub fn bundle_settings(&self) -> BundleSettings {
        BundleSettings {
            main_class: "com.example.Main".into(),
            name: "My:App".into(),
            version: "1.0".into(),
            icon_file: Some("icons/app.icns".into()),
            additional_classpath: vec!["/opt/ext.jar".into()],
            additional_bundled_classpath_resources: vec![FileSet::new("native")],
            additional_resources: vec![FileSet::new("dist"), FileSet::new("missing-dir")],
            ..Default::default()
        }
    }

    pub fn settings(&self, bundle: BundleSettings) -> Settings {
        SettingsBuilder::new()
            .project_root(self.root())
            .build_directory("target/demo-1.0")
            .bundle_settings(bundle)
            .build()
            .unwrap()
    }

    pub fn provider(&self) -> StaticDependencies {
        StaticDependencies::new(
            ResolvedArtifact::new(
                Artifact::new("com.example", "demo", "1.0"),
                self.path("target/demo-1.0.jar"),
            ),
            vec![
                ResolvedArtifact::new(Artifact::new("org.a", "a", "1.0"), self.path("repo/a.jar")),
                ResolvedArtifact::new(Artifact::new("org.b", "b", "2.0"), self.path("repo/b.jar")),
            ],
        )
    }

    pub fn app(&self) -> PathBuf {
        self.path("target/demo-1.0/My-App.app")
    }

    pub fn info_plist(&self) -> PathBuf {
        self.app().join("Contents/Info.plist")
    }
}

/// Reads `key` from the top-level dictionary of a property list file.
pub fn plist_value(path: &Path, key: &str) -> plist::Value {
    let value = plist::Value::from_file(path).unwrap();
    value
        .as_dictionary()
        .and_then(|dict| dict.get(key))
        .cloned()
        .unwrap_or_else(|| panic!("{key} missing from {}", path.display()))
}

/// Reads a string array from a property list file.
pub fn plist_strings(path: &Path, key: &str) -> Vec<String> {
    plist_value(path, key)
        .as_array()
        .unwrap_or_else(|| panic!("{key} is not an array"))
        .iter()
        .map(|v| v.as_string().unwrap().to_string())
        .collect()
}
