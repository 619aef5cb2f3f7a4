//! Info.plist generation.
//!
//! Builds a [`ManifestContext`] from the settings and the collected class
//! path, merges it into the configured template and writes the result to
//! `Contents/Info.plist` in the template's own encoding.
//!
//! # Submodules
//!
//! - [`context`] - context values and list rendering
//! - [`encoding`] - XML encoding detection and codecs
//! - [`template`] - template lookup and merging

pub mod context;
pub mod encoding;
pub mod template;

pub use context::{ContextValue, ManifestContext};
pub use encoding::{Detected, Encoding, detect_xml_encoding};
pub use template::{PlistTemplate, TemplateContent, TemplateLocator, TemplateOrigin};

use crate::bundler::{
    error::Result,
    settings::Settings,
    utils::fs,
};
use context::keys;
use std::path::PathBuf;

/// Icon name used when no icon is configured or the configured one is
/// missing. The launcher framework ships this icon.
pub const DEFAULT_ICON: &str = "GenericJavaApp.icns";

/// Returns the icon file name written to the manifest: the base name of the
/// configured icon when it exists, [`DEFAULT_ICON`] otherwise.
pub fn icon_file_name(settings: &Settings) -> String {
    settings
        .icon_source()
        .and_then(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| DEFAULT_ICON.to_string())
}

/// Concatenates the class path in load order: collected artifacts (project
/// first), bundled resources, then the literal extra entries.
pub fn class_path(
    artifacts: &[String],
    bundled_resources: &[String],
    additional: &[String],
) -> Vec<String> {
    artifacts
        .iter()
        .chain(bundled_resources)
        .chain(additional)
        .cloned()
        .collect()
}

/// Builds the template context.
///
/// `class_path` is the complete, ordered class path from [`class_path`].
pub fn build_context(settings: &Settings, class_path: &[String]) -> ManifestContext {
    let bundle = settings.bundle_settings();
    let mut context = ManifestContext::new();

    context.insert_text(keys::MAIN_CLASS, &bundle.main_class);
    context.insert_text(keys::EXECUTABLE, settings.launcher_name());
    context.insert_raw(keys::VM_OPTIONS, bundle.vm_options.clone().unwrap_or_default());
    context.insert_text(keys::BUNDLE_NAME, settings.bundle_name());
    context.insert_text(keys::WORKING_DIRECTORY, &bundle.working_directory);
    context.insert_text(keys::ICON_FILE, &icon_file_name(settings));
    context.insert_text(keys::VERSION, &bundle.version);
    context.insert_text(keys::JVM_VERSION, &bundle.jvm_version);
    context.insert_list(keys::CLASSPATH, class_path);
    context.insert_list(keys::JVM_ARGUMENTS, &bundle.jvm_arguments);

    context
}

/// Renders the manifest and writes it to `Contents/Info.plist`.
///
/// Returns the path written. Nothing is written if lookup, decoding or
/// merging fails.
pub fn generate_info_plist(settings: &Settings, class_path: &[String]) -> Result<PathBuf> {
    let template_id = settings.bundle_settings().template.as_str();
    let context = build_context(settings, class_path);

    let content = TemplateLocator::new(settings.resource_root()).locate(template_id)?;
    if let TemplateOrigin::Override(path) = &content.origin {
        log::info!("Using Info.plist template override {}", path.display());
    }

    let (text, detected) = content.decode()?;
    log::debug!(
        "Detected encoding {} for template {}",
        detected.encoding,
        template_id
    );

    let rendered = PlistTemplate::new().merge(template_id, &text, &context)?;

    let mut bytes = Vec::with_capacity(rendered.len() + 3);
    if detected.has_bom() {
        bytes.extend_from_slice(detected.encoding.bom());
    }
    bytes.extend(detected.encoding.encode_xml(&rendered));

    let info_plist = settings.info_plist_path();
    fs::write_file(&info_plist, &bytes)?;
    log::info!("Wrote {}", info_plist.display());

    Ok(info_plist)
}
