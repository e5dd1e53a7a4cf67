//! # Cloak Core
//!
//! Pluggable codec and signer strategies over canonical JSON.
//!
//! This crate provides:
//! - [`Codec`] — reversible per-value encoding (base64, rot13)
//! - [`Signer`] — keyed whole-value signing (HMAC-SHA256)
//! - [`PayloadTransformer`] — field-wise encode/decode of a flat payload
//! - [`SignatureService`] — sign/verify of an entire JSON value
//! - [`CodecAlgorithm`] / [`SignerAlgorithm`] — strategy selection
//!
//! ## Example
//!
//! ```rust
//! use cloak_core::{select_codec, CodecAlgorithm, PayloadTransformer};
//! use serde_json::json;
//!
//! let transformer = PayloadTransformer::new(select_codec(CodecAlgorithm::Base64));
//!
//! let payload = json!({"name": "John Doe", "age": 30});
//! let encoded = transformer.encode_payload(payload.as_object().unwrap());
//! let decoded = transformer.decode_payload(&encoded);
//!
//! assert_eq!(serde_json::Value::Object(decoded), payload);
//! ```

pub mod algorithm;
pub mod codec;
pub mod error;
pub mod payload;
pub mod signature;
pub mod signer;

// Re-exports for convenience
pub use algorithm::*;
pub use codec::*;
pub use error::*;
pub use payload::*;
pub use signature::*;
pub use signer::*;
