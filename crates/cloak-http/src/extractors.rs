//! Axum extractors for Cloak requests
//!
//! Input shape validation lives here, at the boundary: by the time a
//! payload reaches the core it is guaranteed to be a JSON object.

use crate::error::CloakHttpError;
use crate::schema::VerifyRequest;
use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde_json::{Map, Value};

/// Extractor for flat payloads
///
/// Parses the request body as JSON and rejects anything that is not an
/// object with a 400.
///
/// # Example
///
/// ```ignore
/// use cloak_http::PayloadExtractor;
///
/// async fn handler(PayloadExtractor(payload): PayloadExtractor) {
///     // payload is a serde_json::Map<String, Value>
/// }
/// ```
pub struct PayloadExtractor(pub Map<String, Value>);

#[async_trait]
impl<S> FromRequest<S> for PayloadExtractor
where
    S: Send + Sync,
{
    type Rejection = CloakHttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| CloakHttpError::ParseError(e.to_string()))?;

        match value {
            Value::Object(map) => Ok(PayloadExtractor(map)),
            other => Err(CloakHttpError::ParseError(format!(
                "request body must be a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

/// Extractor for verify requests, with the same error mapping as
/// [`PayloadExtractor`]
pub struct VerifyRequestExtractor(pub VerifyRequest);

#[async_trait]
impl<S> FromRequest<S> for VerifyRequestExtractor
where
    S: Send + Sync,
{
    type Rejection = CloakHttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(request) = Json::<VerifyRequest>::from_request(req, state)
            .await
            .map_err(|e| CloakHttpError::ParseError(e.to_string()))?;

        if !request.data.is_object() {
            return Err(CloakHttpError::ParseError(format!(
                "verify data must be a JSON object, got {}",
                json_type_name(&request.data)
            )));
        }

        Ok(VerifyRequestExtractor(request))
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
