//! Error types for Cloak Canonical

use thiserror::Error;

/// Errors that can occur while canonicalizing arbitrary serializable values
///
/// Canonicalizing an existing `serde_json::Value` never fails; this error
/// only arises on the generic `Serialize` path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("JSON serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CanonicalError {
    fn from(err: serde_json::Error) -> Self {
        CanonicalError::SerializationError(err.to_string())
    }
}
