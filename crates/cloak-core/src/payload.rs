//! Field-wise payload transformation
//!
//! The transformer works one level deep: each top-level value of a flat
//! payload is encoded or decoded as an opaque unit. Nested structures are
//! never walked here; only the canonical serializer recurses.

use crate::codec::Codec;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Outcome of attempting to decode a single field
///
/// The "leave unchanged on failure" policy is an explicit branch rather
/// than suppressed error handling, so it can be tested directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    /// The field was a decodable token and was replaced by its value
    Decoded(Value),
    /// The field was not decodable (or not a string) and is carried through
    Unchanged(Value),
}

impl FieldOutcome {
    /// Unwrap the resulting value, whichever branch was taken
    pub fn into_value(self) -> Value {
        match self {
            FieldOutcome::Decoded(value) | FieldOutcome::Unchanged(value) => value,
        }
    }

    /// Whether the field was actually decoded
    pub fn was_decoded(&self) -> bool {
        matches!(self, FieldOutcome::Decoded(_))
    }
}

/// Applies a codec strategy field-by-field over a flat payload
///
/// Holds no mutable state; a single transformer can serve any number of
/// concurrent requests.
#[derive(Clone)]
pub struct PayloadTransformer {
    codec: Arc<dyn Codec>,
}

impl PayloadTransformer {
    /// Create a transformer around the given codec strategy
    pub fn new(codec: Arc<dyn Codec>) -> Self {
        Self { codec }
    }

    /// The active codec strategy
    pub fn codec(&self) -> &dyn Codec {
        self.codec.as_ref()
    }

    /// Encode every top-level value of the payload
    ///
    /// Always succeeds; the result maps every key to a string token.
    pub fn encode_payload(&self, payload: &Map<String, Value>) -> Map<String, Value> {
        payload
            .iter()
            .map(|(key, value)| (key.clone(), Value::String(self.codec.encode(value))))
            .collect()
    }

    /// Decode every top-level value that holds a decodable token
    ///
    /// Non-string values and strings that fail to decode are returned
    /// unchanged, so mixed and already-decoded payloads pass through
    /// safely. No single bad field fails the whole payload.
    pub fn decode_payload(&self, payload: &Map<String, Value>) -> Map<String, Value> {
        payload
            .iter()
            .map(|(key, value)| (key.clone(), self.decode_field(value).into_value()))
            .collect()
    }

    /// Attempt to decode one field
    pub fn decode_field(&self, value: &Value) -> FieldOutcome {
        match value {
            Value::String(token) => match self.codec.decode(token) {
                Ok(decoded) => FieldOutcome::Decoded(decoded),
                Err(_) => FieldOutcome::Unchanged(value.clone()),
            },
            other => FieldOutcome::Unchanged(other.clone()),
        }
    }
}
