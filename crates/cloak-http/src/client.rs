//! Reqwest-based Cloak HTTP client

use crate::error::CloakHttpError;
use crate::schema::{SignatureResponse, VerifyRequest};
use cloak_core::CodecAlgorithm;
use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};
use std::time::Duration;

/// HTTP client for a Cloak-compatible service
///
/// # Example
///
/// ```ignore
/// use cloak_http::CloakClient;
///
/// let client = CloakClient::new("http://localhost:8080");
/// let encoded = client.encode(&payload).await?;
/// let original = client.decode(&encoded).await?;
/// ```
pub struct CloakClient {
    client: Client,
    base_url: String,
}

impl CloakClient {
    /// Create a new client with the given base URL
    ///
    /// The base URL should not include a trailing slash.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("default reqwest client config is valid"),
            base_url: base_url.into(),
        }
    }

    /// Create a client with custom reqwest settings
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Encode a payload with the server's default codec
    pub async fn encode(
        &self,
        payload: &Map<String, Value>,
    ) -> Result<Map<String, Value>, CloakHttpError> {
        self.post_payload("/encrypt", payload, None).await
    }

    /// Encode a payload with an explicit codec
    pub async fn encode_with(
        &self,
        algorithm: CodecAlgorithm,
        payload: &Map<String, Value>,
    ) -> Result<Map<String, Value>, CloakHttpError> {
        self.post_payload("/encrypt", payload, Some(algorithm)).await
    }

    /// Decode a payload with the server's default codec
    pub async fn decode(
        &self,
        payload: &Map<String, Value>,
    ) -> Result<Map<String, Value>, CloakHttpError> {
        self.post_payload("/decrypt", payload, None).await
    }

    /// Decode a payload with an explicit codec
    pub async fn decode_with(
        &self,
        algorithm: CodecAlgorithm,
        payload: &Map<String, Value>,
    ) -> Result<Map<String, Value>, CloakHttpError> {
        self.post_payload("/decrypt", payload, Some(algorithm)).await
    }

    /// Sign a value, returning its signature tag
    pub async fn sign(&self, data: &Value) -> Result<String, CloakHttpError> {
        let url = format!("{}/sign", self.base_url);

        let response = self.client.post(&url).json(data).send().await?;
        if !response.status().is_success() {
            return Err(CloakHttpError::ServerError(format!(
                "sign returned {}",
                response.status()
            )));
        }

        let body: SignatureResponse = response.json().await?;
        Ok(body.signature)
    }

    /// Verify a signature against a value
    ///
    /// Maps the server's 204/400 contract back to a boolean.
    pub async fn verify(&self, data: &Value, signature: &str) -> Result<bool, CloakHttpError> {
        let url = format!("{}/verify", self.base_url);

        let request = VerifyRequest {
            signature: signature.to_string(),
            data: data.clone(),
        };

        let response = self.client.post(&url).json(&request).send().await?;
        match response.status() {
            StatusCode::NO_CONTENT => Ok(true),
            StatusCode::BAD_REQUEST => Ok(false),
            other => Err(CloakHttpError::ServerError(format!(
                "verify returned {}",
                other
            ))),
        }
    }

    async fn post_payload(
        &self,
        path: &str,
        payload: &Map<String, Value>,
        algorithm: Option<CodecAlgorithm>,
    ) -> Result<Map<String, Value>, CloakHttpError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.client.post(&url).json(payload);
        if let Some(algorithm) = algorithm {
            request = request.query(&[("algorithm", algorithm.as_str())]);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(CloakHttpError::ServerError(format!(
                "{} returned {}",
                path,
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}

impl Default for CloakClient {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
