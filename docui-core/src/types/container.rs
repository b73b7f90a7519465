//! Container related type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Container run state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerState {
    Created,
    Running,
    Paused,
    Exited,
}

impl ContainerState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Exited => "exited",
        }
    }

    /// Running or paused
    pub fn is_running(self) -> bool {
        matches!(self, Self::Running | Self::Paused)
    }
}

/// Container summary (list entry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerSummary {
    /// Container ID
    pub id: String,
    /// Container names, with the leading `/`
    #[serde(default)]
    pub names: Vec<String>,
    /// Image reference the container was created from
    pub image: String,
    /// Run state
    pub state: ContainerState,
    /// Human readable status, e.g. `Up 3 hours`
    pub status: String,
    /// Creation time
    #[serde(with = "crate::utils::datetime")]
    pub created: DateTime<Utc>,
    /// Names of mounted volumes
    #[serde(default)]
    pub mounts: Vec<String>,
}

impl ContainerSummary {
    /// First name without the leading `/`
    pub fn display_name(&self) -> &str {
        self.names
            .first()
            .map_or("", |name| name.trim_start_matches('/'))
    }

    pub fn short_id(&self) -> &str {
        self.id.get(..12).unwrap_or(&self.id)
    }

    /// Whether `reference` names this container (name, ID or short ID)
    pub fn matches_reference(&self, reference: &str) -> bool {
        self.id == reference || self.short_id() == reference || self.display_name() == reference
    }
}
