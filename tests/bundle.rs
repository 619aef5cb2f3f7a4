mod common;

use appbundler::bundler::{
    Artifact, BundleSettings, Bundler, ErrorKind, ResolvedArtifact, StaticDependencies,
    plist::DEFAULT_ICON,
};
use common::{Fixture, LAUNCHER_BYTES, plist_strings, plist_value};
use std::fs;

#[test]
fn assembles_complete_bundle() {
    let fixture = Fixture::new();
    let settings = fixture.settings(fixture.bundle_settings());

    let app = Bundler::new(settings, fixture.provider()).bundle().unwrap();

    assert_eq!(app.app_path, fixture.app());
    assert_eq!(app.info_plist, fixture.info_plist());
    assert_eq!(
        app.classpath,
        vec![
            "com/example/demo/1.0/demo-1.0.jar",
            "org/a/a/1.0/a-1.0.jar",
            "org/b/b/2.0/b-2.0.jar",
            "lib/C.dylib",
            "/opt/ext.jar",
        ]
    );

    let contents = fixture.app().join("Contents");
    assert_eq!(
        fs::read(contents.join("MacOS/JavaAppLauncher")).unwrap(),
        LAUNCHER_BYTES
    );
    assert_eq!(fs::read(contents.join("Resources/app.icns")).unwrap(), b"icns");
    assert_eq!(
        fs::read(contents.join("Java/org/b/b/2.0/b-2.0.jar")).unwrap(),
        b"jar b"
    );
    assert!(contents.join("Java/lib/C.dylib").is_file());
    assert!(!contents.join("Java/lib/.git").exists());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(contents.join("MacOS/JavaAppLauncher"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    // Additional resources land next to the bundle; VCS metadata does not
    assert_eq!(app.additional_resources, vec!["README.txt", "docs/guide.txt"]);
    let build_dir = fixture.path("target/demo-1.0");
    assert_eq!(fs::read(build_dir.join("README.txt")).unwrap(), b"read me");
    assert!(build_dir.join("docs/guide.txt").is_file());
    assert!(!build_dir.join(".git").exists());

    assert_eq!(app.checksum.len(), 64);
    assert!(app.size > 0);
}

#[test]
fn info_plist_carries_every_field() {
    let fixture = Fixture::new();
    let mut bundle = fixture.bundle_settings();
    bundle.jvm_arguments = vec!["--headless".into(), "-x".into()];
    bundle.vm_options = Some("-Xmx512m".into());

    Bundler::new(fixture.settings(bundle), fixture.provider())
        .bundle()
        .unwrap();

    let plist = fixture.info_plist();
    let string = |key: &str| plist_value(&plist, key).as_string().unwrap().to_string();

    assert_eq!(string("CFBundleName"), "My-App");
    assert_eq!(string("CFBundleDisplayName"), "My-App");
    assert_eq!(string("CFBundleExecutable"), "JavaAppLauncher");
    assert_eq!(string("CFBundleIconFile"), "app.icns");
    assert_eq!(string("CFBundleVersion"), "1.0");
    assert_eq!(string("JVMMainClassName"), "com.example.Main");
    assert_eq!(string("JVMVersion"), "1.4+");
    assert_eq!(string("JVMOptions"), "-Xmx512m");
    assert_eq!(string("WorkingDirectory"), "$APP_ROOT");
    assert_eq!(
        plist_strings(&plist, "JVMArguments"),
        vec!["--headless", "-x"]
    );
    assert_eq!(
        plist_strings(&plist, "JVMClassPath"),
        vec![
            "com/example/demo/1.0/demo-1.0.jar",
            "org/a/a/1.0/a-1.0.jar",
            "org/b/b/2.0/b-2.0.jar",
            "lib/C.dylib",
            "/opt/ext.jar",
        ]
    );
}

#[test]
fn unset_arguments_and_missing_icon_use_defaults() {
    let fixture = Fixture::new();
    let bundle = BundleSettings {
        icon_file: Some("icons/missing.icns".into()),
        ..fixture.bundle_settings()
    };

    Bundler::new(fixture.settings(bundle), fixture.provider())
        .bundle()
        .unwrap();

    let plist = fixture.info_plist();
    assert_eq!(
        plist_value(&plist, "CFBundleIconFile").as_string(),
        Some(DEFAULT_ICON)
    );
    assert!(plist_strings(&plist, "JVMArguments").is_empty());
    assert!(!fixture.app().join("Contents/Resources/missing.icns").exists());
}

#[test]
fn missing_dependency_aborts_before_manifest() {
    let fixture = Fixture::new();
    let provider = StaticDependencies::new(
        ResolvedArtifact::new(
            Artifact::new("com.example", "demo", "1.0"),
            fixture.path("target/demo-1.0.jar"),
        ),
        vec![ResolvedArtifact::new(
            Artifact::new("org.gone", "gone", "1.0"),
            fixture.path("repo/gone.jar"),
        )],
    );

    let err = Bundler::new(fixture.settings(fixture.bundle_settings()), provider)
        .bundle()
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(err.to_string().contains("gone.jar"));
    assert!(!fixture.info_plist().exists());
    assert!(!fixture.path("target/demo-1.0/README.txt").exists());
}

#[test]
fn missing_launcher_is_resource_not_found() {
    let fixture = Fixture::new();
    fs::remove_file(fixture.path("target/classes/JavaAppLauncher")).unwrap();

    let err = Bundler::new(
        fixture.settings(fixture.bundle_settings()),
        fixture.provider(),
    )
    .bundle()
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
    assert!(err.to_string().contains("JavaAppLauncher"));
    assert!(!fixture.info_plist().exists());
}

#[test]
fn rerun_overwrites_and_matches() {
    let fixture = Fixture::new();

    let first = Bundler::new(
        fixture.settings(fixture.bundle_settings()),
        fixture.provider(),
    )
    .bundle()
    .unwrap();
    let second = Bundler::new(
        fixture.settings(fixture.bundle_settings()),
        fixture.provider(),
    )
    .bundle()
    .unwrap();

    assert_eq!(first.checksum, second.checksum);
    assert_eq!(first.classpath, second.classpath);
}

#[test]
fn latin1_override_template_is_written_in_latin1() {
    let fixture = Fixture::new();
    let mut template = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n<plist version=\"1.0\"><dict>\
<key>CFBundleName</key><string>{{bundleName}} Caf"
        .to_vec();
    template.push(0xE9);
    template.extend_from_slice(b"</string><key>JVMClassPath</key>{{classpath}}</dict></plist>\n");
    fixture.write("target/classes/appbundler/Info.plist.template", &template);

    Bundler::new(
        fixture.settings(fixture.bundle_settings()),
        fixture.provider(),
    )
    .bundle()
    .unwrap();

    let written = fs::read(fixture.info_plist()).unwrap();
    let expected = b"<string>My-App Caf\xE9</string>";
    assert!(written.windows(expected.len()).any(|w| w == expected));
    assert!(std::str::from_utf8(&written).is_err());
    let classpath = b"<string>/opt/ext.jar</string></array>";
    assert!(written.windows(classpath.len()).any(|w| w == classpath));
}

#[test]
fn latin1_override_writes_unmappable_characters_as_references() {
    let fixture = Fixture::new();
    fixture.write(
        "target/classes/appbundler/Info.plist.template",
        b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n<plist version=\"1.0\"><dict>\
<key>CFBundleName</key><string>{{bundleName}}</string></dict></plist>\n",
    );
    let bundle = BundleSettings {
        name: "Caf\u{e9}\u{20ac}App".into(),
        ..fixture.bundle_settings()
    };

    Bundler::new(fixture.settings(bundle), fixture.provider())
        .bundle()
        .unwrap();

    let info_plist = fixture.path("target/demo-1.0/Caf\u{e9}\u{20ac}App.app/Contents/Info.plist");
    let written = fs::read(info_plist).unwrap();
    let expected = b"<string>Caf\xE9&#x20AC;App</string>";
    assert!(written.windows(expected.len()).any(|w| w == expected));
}

#[test]
fn utf16_override_template_keeps_bom_and_encoding() {
    let fixture = Fixture::new();
    let text = "<?xml version=\"1.0\" encoding=\"UTF-16\"?>\n<plist version=\"1.0\"><dict>\
<key>CFBundleName</key><string>{{bundleName}}</string></dict></plist>\n";
    let mut bytes = vec![0xFF, 0xFE];
    bytes.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
    fixture.write("target/classes/appbundler/Info.plist.template", &bytes);

    Bundler::new(
        fixture.settings(fixture.bundle_settings()),
        fixture.provider(),
    )
    .bundle()
    .unwrap();

    let written = fs::read(fixture.info_plist()).unwrap();
    assert_eq!(&written[..2], &[0xFF, 0xFE]);
    let units: Vec<u16> = written[2..]
        .chunks_exact(2)
        .map(|p| u16::from_le_bytes([p[0], p[1]]))
        .collect();
    let decoded = String::from_utf16(&units).unwrap();
    assert!(decoded.contains("<string>My-App</string>"));
}

#[test]
fn template_with_unknown_field_fails_without_manifest() {
    let fixture = Fixture::new();
    fixture.write(
        "target/classes/custom.plist.template",
        b"<plist><string>{{noSuchField}}</string></plist>",
    );
    let bundle = BundleSettings {
        template: "custom.plist.template".into(),
        ..fixture.bundle_settings()
    };

    let err = Bundler::new(fixture.settings(bundle), fixture.provider())
        .bundle()
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Template);
    assert!(err.to_string().contains("custom.plist.template"));
    assert!(!fixture.info_plist().exists());
}

#[test]
fn unknown_template_identifier_is_resource_not_found() {
    let fixture = Fixture::new();
    let bundle = BundleSettings {
        template: "nowhere/Info.plist.template".into(),
        ..fixture.bundle_settings()
    };

    let err = Bundler::new(fixture.settings(bundle), fixture.provider())
        .bundle()
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
    assert!(err.to_string().contains("nowhere/Info.plist.template"));
}
