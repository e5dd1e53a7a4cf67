//! Handlers and router for the Cloak endpoints

use crate::error::CloakHttpError;
use crate::extractors::{PayloadExtractor, VerifyRequestExtractor};
use crate::schema::{AlgorithmQuery, HealthResponse, SignatureResponse};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use cloak_core::{select_codec, CodecAlgorithm, PayloadTransformer, SignatureService};
use serde_json::{Map, Value};

/// Shared per-process state
///
/// Everything in here is immutable after construction; cloning is cheap and
/// handlers never coordinate.
#[derive(Clone)]
pub struct AppState {
    default_codec: CodecAlgorithm,
    signature: SignatureService,
}

impl AppState {
    /// Build the state from the construction-time codec default and the
    /// signature service carrying the process key
    pub fn new(default_codec: CodecAlgorithm, signature: SignatureService) -> Self {
        Self {
            default_codec,
            signature,
        }
    }
}

/// Build the Cloak router over the given state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/encrypt", post(encrypt))
        .route("/decrypt", post(decrypt))
        .route("/sign", post(sign))
        .route("/verify", post(verify))
        .route("/health", get(health))
        .with_state(state)
}

/// Encode every top-level property of the payload
async fn encrypt(
    State(state): State<AppState>,
    Query(query): Query<AlgorithmQuery>,
    PayloadExtractor(payload): PayloadExtractor,
) -> Result<Json<Map<String, Value>>, CloakHttpError> {
    let algorithm = query.codec(state.default_codec)?;
    let transformer = PayloadTransformer::new(select_codec(algorithm));

    tracing::debug!(codec = %algorithm, fields = payload.len(), "encoding payload");

    Ok(Json(transformer.encode_payload(&payload)))
}

/// Decode the top-level properties that hold decodable tokens
async fn decrypt(
    State(state): State<AppState>,
    Query(query): Query<AlgorithmQuery>,
    PayloadExtractor(payload): PayloadExtractor,
) -> Result<Json<Map<String, Value>>, CloakHttpError> {
    let algorithm = query.codec(state.default_codec)?;
    let transformer = PayloadTransformer::new(select_codec(algorithm));

    tracing::debug!(codec = %algorithm, fields = payload.len(), "decoding payload");

    Ok(Json(transformer.decode_payload(&payload)))
}

/// Sign the whole payload as one canonicalized unit
async fn sign(
    State(state): State<AppState>,
    PayloadExtractor(payload): PayloadExtractor,
) -> Json<SignatureResponse> {
    let signature = state.signature.sign_value(&Value::Object(payload));
    Json(SignatureResponse { signature })
}

/// Verify a signature against the provided data
///
/// 204 when the signature matches, 400 `INVALID_SIGNATURE` when it does
/// not. Mismatch is a client-visible failure state, not a server fault.
async fn verify(
    State(state): State<AppState>,
    VerifyRequestExtractor(request): VerifyRequestExtractor,
) -> Result<StatusCode, CloakHttpError> {
    if state.signature.verify_value(&request.data, &request.signature) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        tracing::debug!("signature verification failed");
        Err(CloakHttpError::InvalidSignature)
    }
}

/// Basic health check
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
