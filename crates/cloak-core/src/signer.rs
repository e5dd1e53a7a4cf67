//! Signer strategies: keyed signing and verification
//!
//! Signatures are computed over the canonical text of the whole value, so
//! two payloads that differ only in object key order carry the same tag.

use cloak_canonical::to_canonical_json_value;
use hmac::{Hmac, Mac};
use serde_json::Value;
use sha2::Sha256;
use std::fmt;
use std::fmt::Write as FmtWrite;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Process-wide signing key
///
/// Loaded once at startup and shared read-only across requests. `Debug` is
/// redacted so the key can never leak through logging.
#[derive(Clone)]
pub struct SecretKey(Vec<u8>);

impl SecretKey {
    /// Create a key from raw bytes
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Raw key material
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for SecretKey {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

/// A keyed signing strategy for a whole JSON value
///
/// Signing is pure and deterministic: same value + same key produce the
/// same tag regardless of when or where the tag is computed.
pub trait Signer: Send + Sync {
    /// Stable identifier of this signer (matches its `SignerAlgorithm` tag)
    fn name(&self) -> &'static str;

    /// Compute the signature tag for a value
    fn sign(&self, value: &Value) -> String;

    /// Check a tag against a value
    ///
    /// The comparison is constant-time over the full tag length; malformed
    /// tags simply fail the comparison, they never raise.
    fn verify(&self, value: &Value, tag: &str) -> bool {
        let expected = self.sign(value);
        // ct_eq yields false for mismatched lengths without early exit
        bool::from(expected.as_bytes().ct_eq(tag.as_bytes()))
    }
}

/// HMAC-SHA256 signer producing lowercase hex tags
pub struct HmacSha256Signer {
    key: SecretKey,
}

impl HmacSha256Signer {
    /// Create a signer owning the given key
    pub fn new(key: SecretKey) -> Self {
        Self { key }
    }
}

impl Signer for HmacSha256Signer {
    fn name(&self) -> &'static str {
        "hmac-sha256"
    }

    fn sign(&self, value: &Value) -> String {
        let mut mac = HmacSha256::new_from_slice(self.key.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(&to_canonical_json_value(value));
        hex_encode(&mac.finalize().into_bytes())
    }
}

/// Convert bytes to a lowercase hex string
fn hex_encode(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        write!(hex, "{:02x}", byte).unwrap();
    }
    hex
}
