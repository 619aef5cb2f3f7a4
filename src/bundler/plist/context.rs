//! Key/value context merged into the Info.plist template.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// A single context value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextValue {
    /// Rendered as-is.
    Scalar(String),
    /// Rendered as a property list `<array>` of `<string>` elements.
    List(Vec<String>),
}

impl ContextValue {
    /// Renders the value as template text.
    pub fn render(&self) -> String {
        match self {
            Self::Scalar(value) => value.clone(),
            Self::List(items) => render_string_array(items),
        }
    }
}

/// Field names consumed by Info.plist templates.
pub mod keys {
    /// Main class name
    pub const MAIN_CLASS: &str = "mainClass";
    /// Launcher executable name
    pub const EXECUTABLE: &str = "cfBundleExecutable";
    /// JVM options, verbatim
    pub const VM_OPTIONS: &str = "vmOptions";
    /// Sanitized bundle name
    pub const BUNDLE_NAME: &str = "bundleName";
    /// Working directory
    pub const WORKING_DIRECTORY: &str = "workingDirectory";
    /// Icon file name inside `Contents/Resources`
    pub const ICON_FILE: &str = "iconFile";
    /// Bundle version
    pub const VERSION: &str = "version";
    /// Required JVM version
    pub const JVM_VERSION: &str = "jvmVersion";
    /// Class path array
    pub const CLASSPATH: &str = "classpath";
    /// Application arguments array
    pub const JVM_ARGUMENTS: &str = "jvmArguments";
}

/// Mapping from template field name to value.
///
/// Serializes to a flat map of strings, lists already rendered as
/// `<array>` fragments, so templates can place them without helpers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestContext {
    values: BTreeMap<String, ContextValue>,
}

impl ManifestContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a scalar, XML-escaped.
    pub fn insert_text(&mut self, key: &str, value: &str) {
        self.values
            .insert(key.into(), ContextValue::Scalar(xml_escape(value)));
    }

    /// Inserts a scalar without escaping.
    pub fn insert_raw(&mut self, key: &str, value: impl Into<String>) {
        self.values
            .insert(key.into(), ContextValue::Scalar(value.into()));
    }

    /// Inserts a list; elements are XML-escaped.
    pub fn insert_list<I, S>(&mut self, key: &str, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items = items
            .into_iter()
            .map(|item| xml_escape(item.as_ref()))
            .collect();
        self.values.insert(key.into(), ContextValue::List(items));
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.values.get(key)
    }

    /// Iterates over all fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContextValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Serialize for ManifestContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (key, value) in &self.values {
            map.serialize_entry(key, &value.render())?;
        }
        map.end()
    }
}

/// Renders `<array><string>a</string>...</array>`; an empty list renders
/// as `<array></array>`.
pub fn render_string_array<S: AsRef<str>>(items: &[S]) -> String {
    let mut out = String::from("<array>");
    for item in items {
        out.push_str("<string>");
        out.push_str(item.as_ref());
        out.push_str("</string>");
    }
    out.push_str("</array>");
    out
}

/// Escapes the five XML special characters.
pub fn xml_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            ch => out.push(ch),
        }
    }
    out
}
