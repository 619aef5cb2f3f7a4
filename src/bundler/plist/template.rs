//! Template lookup and merging.
//!
//! Lookup and merging are separate: [`TemplateLocator`] finds raw template
//! bytes by identifier, [`PlistTemplate`] merges decoded text with a
//! [`ManifestContext`].

use super::{
    context::ManifestContext,
    encoding::{Detected, Encoding, detect_xml_encoding},
};
use crate::bundler::{
    error::{Error, ErrorExt, Result},
    settings::DEFAULT_TEMPLATE,
};
use handlebars::Handlebars;
use std::path::PathBuf;

/// Templates compiled into the binary, keyed by identifier.
const BUNDLED_TEMPLATES: &[(&str, &str)] = &[(
    DEFAULT_TEMPLATE,
    include_str!("templates/Info.plist.template"),
)];

/// Where a template was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOrigin {
    /// Override file under the resource root
    Override(PathBuf),
    /// Compiled-in default
    Bundled,
}

/// Raw template content.
#[derive(Debug, Clone)]
pub struct TemplateContent {
    /// Template identifier
    pub id: String,
    /// Undecoded bytes
    pub bytes: Vec<u8>,
    /// Where the bytes came from
    pub origin: TemplateOrigin,
}

impl TemplateContent {
    /// Decodes the template.
    ///
    /// Override files go through encoding detection; bundled templates are
    /// always UTF-8.
    pub fn decode(&self) -> Result<(String, Detected)> {
        let detected = match self.origin {
            TemplateOrigin::Override(_) => {
                detect_xml_encoding(&self.bytes).map_err(|e| Error::template(&self.id, e))?
            }
            TemplateOrigin::Bundled => Detected {
                encoding: Encoding::Utf8,
                bom_len: 0,
            },
        };

        let text = detected
            .encoding
            .decode(&self.bytes[detected.bom_len..])
            .map_err(|e| Error::template(&self.id, e))?;

        Ok((text, detected))
    }
}

/// Finds templates by identifier.
#[derive(Debug, Clone)]
pub struct TemplateLocator {
    override_root: PathBuf,
}

impl TemplateLocator {
    /// Creates a locator that checks `override_root` before the bundled
    /// templates.
    pub fn new(override_root: impl Into<PathBuf>) -> Self {
        Self {
            override_root: override_root.into(),
        }
    }

    /// Returns the override location for `id`.
    pub fn override_path(&self, id: &str) -> PathBuf {
        self.override_root.join(id)
    }

    /// Locates the template `id`.
    pub fn locate(&self, id: &str) -> Result<TemplateContent> {
        let path = self.override_path(id);
        if path.is_file() {
            let bytes = std::fs::read(&path).fs_context("reading template", &path)?;
            return Ok(TemplateContent {
                id: id.into(),
                bytes,
                origin: TemplateOrigin::Override(path),
            });
        }

        BUNDLED_TEMPLATES
            .iter()
            .find(|(name, _)| *name == id)
            .map(|(_, text)| TemplateContent {
                id: id.into(),
                bytes: text.as_bytes().to_vec(),
                origin: TemplateOrigin::Bundled,
            })
            .ok_or_else(|| Error::ResourceNotFound {
                resource: format!("template {id}"),
                searched: vec![path],
            })
    }
}

/// Handlebars-backed template merger.
///
/// Strict mode is on, so a template referencing a field the context does
/// not carry fails to merge. Escaping is off; the context escapes values
/// itself.
pub struct PlistTemplate {
    registry: Handlebars<'static>,
}

impl Default for PlistTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl PlistTemplate {
    /// Creates a merger with its own registry.
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(true);
        Self { registry }
    }

    /// Parses `text` as template `id` and merges `context` into it.
    pub fn merge(&mut self, id: &str, text: &str, context: &ManifestContext) -> Result<String> {
        self.registry
            .register_template_string(id, text)
            .map_err(|e| Error::template(id, format!("failed to parse: {e}")))?;

        self.registry
            .render(id, context)
            .map_err(|e| Error::template(id, format!("failed to merge: {e}")))
    }
}
