//! Artifact coordinates and the repository layout convention.

use std::fmt;

/// A uniquely identified binary dependency.
///
/// Identity is the full coordinate tuple. Coordinates are validated by
/// whoever resolves them; this type trusts its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct Artifact {
    /// Dotted group identifier, e.g. `com.example`
    pub group: String,

    /// Artifact name
    pub name: String,

    /// Version string
    pub version: String,

    /// Optional classifier, e.g. `sources` or `natives-macos`
    #[serde(default)]
    pub classifier: Option<String>,

    /// File extension without the leading dot.
    ///
    /// Default: `jar`
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_extension() -> String {
    "jar".into()
}

impl Artifact {
    /// Creates a `jar` artifact without classifier.
    pub fn new(group: &str, name: &str, version: &str) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
            classifier: None,
            extension: default_extension(),
        }
    }

    /// Sets the classifier.
    pub fn with_classifier(mut self, classifier: &str) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    /// Sets the extension.
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.into();
        self
    }

    /// Returns the layout path of this artifact.
    ///
    /// Shape: `<group as dirs>/<name>/<version>/<name>-<version>[-<classifier>].<ext>`.
    /// Always uses `/` separators since the result doubles as a class path
    /// entry in the manifest.
    pub fn layout_path(&self) -> String {
        let mut path = String::with_capacity(
            self.group.len() + 2 * (self.name.len() + self.version.len()) + 16,
        );

        for segment in self.group.split('.') {
            path.push_str(segment);
            path.push('/');
        }
        path.push_str(&self.name);
        path.push('/');
        path.push_str(&self.version);
        path.push('/');
        path.push_str(&self.name);
        path.push('-');
        path.push_str(&self.version);
        if let Some(classifier) = self.classifier.as_deref().filter(|c| !c.is_empty()) {
            path.push('-');
            path.push_str(classifier);
        }
        if !self.extension.is_empty() {
            path.push('.');
            path.push_str(&self.extension);
        }
        path
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        write!(f, "@{}", self.extension)
    }
}
