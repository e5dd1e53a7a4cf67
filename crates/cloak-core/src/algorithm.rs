//! Strategy selection
//!
//! Algorithm identifiers form a closed set: parsing an unknown identifier
//! fails with [`UnknownAlgorithm`] at the boundary, and selection over the
//! parsed enums can never fail or silently fall back.

use crate::codec::{Base64Codec, Codec, Rot13Codec};
use crate::error::UnknownAlgorithm;
use crate::signer::{HmacSha256Signer, SecretKey, Signer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Identifier of a codec strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CodecAlgorithm {
    #[default]
    #[serde(rename = "base64")]
    Base64,
    #[serde(rename = "rot13")]
    Rot13,
}

impl CodecAlgorithm {
    /// All supported codec identifiers
    pub const ALL: [CodecAlgorithm; 2] = [CodecAlgorithm::Base64, CodecAlgorithm::Rot13];

    /// The wire identifier of this algorithm
    pub fn as_str(&self) -> &'static str {
        match self {
            CodecAlgorithm::Base64 => "base64",
            CodecAlgorithm::Rot13 => "rot13",
        }
    }
}

impl fmt::Display for CodecAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodecAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base64" => Ok(CodecAlgorithm::Base64),
            "rot13" => Ok(CodecAlgorithm::Rot13),
            other => Err(UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Identifier of a signer strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SignerAlgorithm {
    #[default]
    #[serde(rename = "hmac-sha256")]
    HmacSha256,
}

impl SignerAlgorithm {
    /// The wire identifier of this algorithm
    pub fn as_str(&self) -> &'static str {
        match self {
            SignerAlgorithm::HmacSha256 => "hmac-sha256",
        }
    }
}

impl fmt::Display for SignerAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignerAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hmac-sha256" => Ok(SignerAlgorithm::HmacSha256),
            other => Err(UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Construct the codec strategy for an identifier
pub fn select_codec(algorithm: CodecAlgorithm) -> Arc<dyn Codec> {
    match algorithm {
        CodecAlgorithm::Base64 => Arc::new(Base64Codec),
        CodecAlgorithm::Rot13 => Arc::new(Rot13Codec),
    }
}

/// Construct the signer strategy for an identifier, binding the process key
pub fn select_signer(algorithm: SignerAlgorithm, key: SecretKey) -> Arc<dyn Signer> {
    match algorithm {
        SignerAlgorithm::HmacSha256 => Arc::new(HmacSha256Signer::new(key)),
    }
}
