//! Error types for Cloak Core

use thiserror::Error;

/// A token could not be decoded back into a JSON value
///
/// Decode failure is an expected outcome, not a fault: the payload transform
/// service absorbs it by leaving the field unchanged. Only callers working
/// with a single token see this error directly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("token is not valid encoded output: {0}")]
    InvalidToken(String),

    #[error("decoded text is not valid JSON: {0}")]
    InvalidJson(String),
}

/// A strategy identifier did not match any known algorithm
///
/// Raised when parsing an identifier at the boundary; selection over the
/// closed enums can never fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown algorithm: {0}")]
pub struct UnknownAlgorithm(pub String);
