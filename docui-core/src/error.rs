//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::ResourceKind;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Resource not found
    #[error("{kind} not found: {id}")]
    NotFound { kind: ResourceKind, id: String },

    /// Resource is still referenced or in a state that forbids the operation
    #[error("{kind} {id} is in use: {reason}")]
    Conflict {
        kind: ResourceKind,
        id: String,
        reason: String,
    },

    /// The backend answered with an error
    #[error("Backend error: {0}")]
    Backend(String),

    /// The backend did not answer in time
    #[error("Backend call timed out after {0}s")]
    Timeout(u64),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user action on a missing or busy resource), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Conflict { .. })
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_kind_and_id() {
        let err = CoreError::NotFound {
            kind: ResourceKind::Container,
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "container not found: abc");
        assert!(err.is_expected());
    }

    #[test]
    fn timeout_is_not_expected() {
        let err = CoreError::Timeout(30);
        assert_eq!(err.to_string(), "Backend call timed out after 30s");
        assert!(!err.is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(CoreError::Backend("boom".to_string())).unwrap();
        assert_eq!(json["code"], "Backend");
        assert_eq!(json["details"], "boom");
    }
}
