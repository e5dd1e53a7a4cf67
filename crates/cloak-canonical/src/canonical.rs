//! Canonical JSON serialization

use crate::error::CanonicalError;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::Write as FmtWrite;

/// Serialize a value to canonical JSON bytes
///
/// # Rules
///
/// - Object keys sorted lexicographically by UTF-8 bytes
/// - Arrays preserve order
/// - No whitespace
///
/// # Errors
///
/// Returns `CanonicalError::SerializationError` if the value cannot be
/// converted to a JSON tree (e.g. a map with non-string keys).
///
/// # Example
///
/// ```rust
/// use cloak_canonical::to_canonical_json;
///
/// let value = serde_json::json!({"z": 1, "a": 2});
/// let canonical = to_canonical_json(&value).unwrap();
/// assert_eq!(canonical, b"{\"a\":2,\"z\":1}");
/// ```
pub fn to_canonical_json<T: Serialize>(value: &T) -> Result<Vec<u8>, CanonicalError> {
    let json_value = serde_json::to_value(value)?;
    Ok(to_canonical_json_value(&json_value))
}

/// Serialize a `serde_json::Value` to canonical JSON bytes
///
/// Infallible: every well-formed `Value` has a canonical form.
pub fn to_canonical_json_value(value: &Value) -> Vec<u8> {
    let mut output = Vec::new();
    write_canonical_value(&mut output, value);
    output
}

/// Serialize a value to a canonical JSON string
pub fn to_canonical_json_string<T: Serialize>(value: &T) -> Result<String, CanonicalError> {
    let bytes = to_canonical_json(value)?;
    // Safe because we only produce valid UTF-8
    Ok(String::from_utf8(bytes).expect("canonical JSON is always valid UTF-8"))
}

/// Serialize a `serde_json::Value` to a canonical JSON string
///
/// Infallible companion of [`to_canonical_json_string`].
pub fn to_canonical_string(value: &Value) -> String {
    let bytes = to_canonical_json_value(value);
    String::from_utf8(bytes).expect("canonical JSON is always valid UTF-8")
}

/// Write a JSON value in canonical form
fn write_canonical_value(output: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Null => {
            output.extend_from_slice(b"null");
        }
        Value::Bool(b) => {
            if *b {
                output.extend_from_slice(b"true");
            } else {
                output.extend_from_slice(b"false");
            }
        }
        Value::Number(n) => {
            // serde_json renders integers verbatim and floats through ryu,
            // which is deterministic and locale-independent.
            output.extend_from_slice(n.to_string().as_bytes());
        }
        Value::String(s) => {
            write_canonical_string(output, s);
        }
        Value::Array(arr) => {
            output.push(b'[');
            for (i, item) in arr.iter().enumerate() {
                if i > 0 {
                    output.push(b',');
                }
                write_canonical_value(output, item);
            }
            output.push(b']');
        }
        Value::Object(obj) => {
            write_canonical_object(output, obj);
        }
    }
}

/// Write a JSON object with sorted keys
fn write_canonical_object(output: &mut Vec<u8>, obj: &Map<String, Value>) {
    output.push(b'{');

    // Sort keys lexicographically by UTF-8 bytes
    let mut keys: Vec<&String> = obj.keys().collect();
    keys.sort_by(|a, b| a.as_bytes().cmp(b.as_bytes()));

    for (i, key) in keys.iter().enumerate() {
        if i > 0 {
            output.push(b',');
        }

        write_canonical_string(output, key);
        output.push(b':');

        if let Some(value) = obj.get(*key) {
            write_canonical_value(output, value);
        }
    }

    output.push(b'}');
}

/// Write a JSON string with proper escaping
fn write_canonical_string(output: &mut Vec<u8>, s: &str) {
    output.push(b'"');

    for c in s.chars() {
        match c {
            '"' => output.extend_from_slice(b"\\\""),
            '\\' => output.extend_from_slice(b"\\\\"),
            '\n' => output.extend_from_slice(b"\\n"),
            '\r' => output.extend_from_slice(b"\\r"),
            '\t' => output.extend_from_slice(b"\\t"),
            c if c.is_control() => {
                // Escape control characters as \uXXXX
                let mut hex_buf = String::new();
                write!(hex_buf, "\\u{:04x}", c as u32).unwrap();
                output.extend_from_slice(hex_buf.as_bytes());
            }
            c => {
                // Write UTF-8 bytes directly
                let mut buf = [0u8; 4];
                let encoded = c.encode_utf8(&mut buf);
                output.extend_from_slice(encoded.as_bytes());
            }
        }
    }

    output.push(b'"');
}
