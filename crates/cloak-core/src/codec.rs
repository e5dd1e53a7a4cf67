//! Codec strategies: reversible per-value encoding
//!
//! Every codec canonicalizes the value first, then applies a reversible
//! character/byte transform. Decoding runs the inverse transform and parses
//! the result as JSON. None of this is confidentiality — the transforms are
//! keyless and reversible by anyone.

use crate::error::DecodeError;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use cloak_canonical::to_canonical_string;
use serde_json::Value;

/// A reversible encoding strategy for a single JSON value
///
/// Implementations hold no mutable state and are safe to share across
/// concurrent requests.
pub trait Codec: Send + Sync {
    /// Stable identifier of this codec (matches its `CodecAlgorithm` tag)
    fn name(&self) -> &'static str;

    /// Encode a value to a token
    ///
    /// Always succeeds: every JSON value has a canonical form, and the
    /// transforms accept arbitrary text.
    fn encode(&self, value: &Value) -> String;

    /// Decode a token back to the original value
    fn decode(&self, token: &str) -> Result<Value, DecodeError>;

    /// Check whether `decode` would succeed, without surfacing the error
    ///
    /// Safe to call speculatively; has no side effects beyond the decode
    /// attempt itself.
    fn probe(&self, token: &str) -> bool {
        self.decode(token).is_ok()
    }
}

/// Base64 codec over canonical JSON (standard alphabet, padded)
///
/// The default strategy. Decoding is strict: tokens with characters outside
/// the alphabet or bad padding are rejected rather than repaired.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Codec;

impl Codec for Base64Codec {
    fn name(&self) -> &'static str {
        "base64"
    }

    fn encode(&self, value: &Value) -> String {
        BASE64.encode(to_canonical_string(value).as_bytes())
    }

    fn decode(&self, token: &str) -> Result<Value, DecodeError> {
        let bytes = BASE64
            .decode(token)
            .map_err(|e| DecodeError::InvalidToken(e.to_string()))?;
        let text =
            String::from_utf8(bytes).map_err(|e| DecodeError::InvalidToken(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| DecodeError::InvalidJson(e.to_string()))
    }
}

/// ROT13 codec over canonical JSON
///
/// Demonstration strategy proving the codec interface is swappable; see
/// <https://en.wikipedia.org/wiki/ROT13>. Only ASCII letters are rotated,
/// so digits, punctuation and non-ASCII text pass through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rot13Codec;

impl Codec for Rot13Codec {
    fn name(&self) -> &'static str {
        "rot13"
    }

    fn encode(&self, value: &Value) -> String {
        rot13(&to_canonical_string(value))
    }

    fn decode(&self, token: &str) -> Result<Value, DecodeError> {
        // ROT13 is its own inverse
        let text = rot13(token);
        serde_json::from_str(&text).map_err(|e| DecodeError::InvalidJson(e.to_string()))
    }
}

/// Rotate ASCII letters by 13 positions, leaving everything else intact
fn rot13(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'a'..='z' => (((c as u8 - b'a' + 13) % 26) + b'a') as char,
            'A'..='Z' => (((c as u8 - b'A' + 13) % 26) + b'A') as char,
            other => other,
        })
        .collect()
}
