//! Resource kinds and listings

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ContainerSummary, ImageSummary, VolumeSummary};

/// Kind of resource managed by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Image,
    Container,
    Volume,
}

impl ResourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Container => "container",
            Self::Volume => "volume",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a list call, one variant per resource kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "lowercase")]
pub enum Listing {
    Images(Vec<ImageSummary>),
    Containers(Vec<ContainerSummary>),
    Volumes(Vec<VolumeSummary>),
}

impl Listing {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Images(_) => ResourceKind::Image,
            Self::Containers(_) => ResourceKind::Container,
            Self::Volumes(_) => ResourceKind::Volume,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Images(items) => items.len(),
            Self::Containers(items) => items.len(),
            Self::Volumes(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
