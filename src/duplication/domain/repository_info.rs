use serde::Deserialize;

/// Descriptor of the repository the pattern matches were collected from
///
/// Only `path` is required. Any other keys the upstream scanner sends, such
/// as git metadata, are accepted and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryInfo {
    pub path: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl RepositoryInfo {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
        }
    }

    /// Display name: explicit `name`, else the last path component
    pub fn display_name(&self) -> &str {
        if let Some(name) = self.name.as_deref() {
            return name;
        }
        self.path
            .trim_end_matches(['/', '\\'])
            .rsplit(['/', '\\'])
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.path)
    }
}
