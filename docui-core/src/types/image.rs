//! Image related type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Image summary (list entry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageSummary {
    /// Image ID (`sha256:...`)
    pub id: String,
    /// Repository tags, e.g. `nginx:1.27`
    #[serde(default)]
    pub repo_tags: Vec<String>,
    /// Creation time
    #[serde(with = "crate::utils::datetime")]
    pub created: DateTime<Utc>,
    /// Size in bytes
    pub size: u64,
}

impl ImageSummary {
    /// Split the first tag into (repository, tag); `<none>` when untagged
    pub fn repository_and_tag(&self) -> (&str, &str) {
        match self.repo_tags.first() {
            Some(tag) => match tag.rsplit_once(':') {
                // a port in `registry:5000/app` is not a tag separator
                Some((repo, t)) if !t.contains('/') => (repo, t),
                _ => (tag.as_str(), "latest"),
            },
            None => ("<none>", "<none>"),
        }
    }

    /// Short ID without the `sha256:` prefix
    pub fn short_id(&self) -> &str {
        let id = self.id.strip_prefix("sha256:").unwrap_or(&self.id);
        id.get(..12).unwrap_or(id)
    }

    /// Whether `reference` names this image (`repo:tag` or ID)
    pub fn matches_reference(&self, reference: &str) -> bool {
        self.id == reference
            || self.short_id() == reference
            || self.repo_tags.iter().any(|tag| tag == reference)
    }
}
