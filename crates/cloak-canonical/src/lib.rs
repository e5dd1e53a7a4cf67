//! # Cloak Canonical
//!
//! Deterministic JSON serialization for the Cloak payload transform service.
//!
//! Canonical text is the common substrate for both the codec strategies
//! (every value is canonicalized before it is encoded) and the signer
//! strategy (signatures are computed over canonical text, which is what
//! makes them independent of object key order).
//!
//! ## Canonical JSON Rules
//!
//! 1. Object keys sorted lexicographically by UTF-8 bytes, at every depth
//! 2. Arrays preserve insertion order
//! 3. No whitespace; `,` and `:` are the only separators
//! 4. UTF-8 encoding, JSON string escaping
//! 5. Numbers in serde_json's fixed textual form (locale-independent)
//!
//! ## Example
//!
//! ```rust
//! use cloak_canonical::to_canonical_string;
//!
//! let value = serde_json::json!({"name": "John", "age": 30});
//! assert_eq!(to_canonical_string(&value), r#"{"age":30,"name":"John"}"#);
//! ```

mod canonical;
mod error;

pub use canonical::*;
pub use error::*;
