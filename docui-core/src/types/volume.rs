//! Volume related type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Volume summary (list entry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VolumeSummary {
    /// Volume name, which is also its ID
    pub name: String,
    /// Storage driver
    pub driver: String,
    /// Mount point on the host
    pub mountpoint: String,
    /// Creation time, not reported by every driver
    #[serde(
        rename = "CreatedAt",
        default,
        with = "crate::utils::datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,
}
