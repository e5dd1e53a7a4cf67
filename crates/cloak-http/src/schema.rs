//! Wire schemas for the Cloak endpoints

use cloak_core::{CodecAlgorithm, UnknownAlgorithm};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response body of the sign endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct SignatureResponse {
    pub signature: String,
}

/// Request body of the verify endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub signature: String,
    pub data: Value,
}

/// Response body of the health endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Optional per-request codec override, e.g. `POST /encrypt?algorithm=rot13`
#[derive(Debug, Default, Deserialize)]
pub struct AlgorithmQuery {
    pub algorithm: Option<String>,
}

impl AlgorithmQuery {
    /// Resolve the requested codec, falling back to the given default
    ///
    /// An identifier outside the supported set is a client error, never a
    /// silent fallback.
    pub fn codec(&self, default: CodecAlgorithm) -> Result<CodecAlgorithm, UnknownAlgorithm> {
        match &self.algorithm {
            Some(identifier) => identifier.parse(),
            None => Ok(default),
        }
    }
}
