//! # Cloak HTTP Transport
//!
//! Thin HTTP adapter around the cloak-core services.
//!
//! This crate provides:
//! - Axum extractors that validate request bodies before they reach the core
//! - Handlers and a router for the encode/decode/sign/verify endpoints
//! - Error mapping from the core taxonomy to HTTP status codes
//! - A reqwest-based client mirroring the four operations
//!
//! ## Server Example
//!
//! ```ignore
//! use cloak_http::{router, AppState};
//! use cloak_core::{select_signer, CodecAlgorithm, SecretKey, SignatureService, SignerAlgorithm};
//!
//! let signature = SignatureService::new(select_signer(
//!     SignerAlgorithm::HmacSha256,
//!     SecretKey::from("secret"),
//! ));
//! let app = router(AppState::new(CodecAlgorithm::Base64, signature));
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! ```
//!
//! ## Client Example
//!
//! ```ignore
//! use cloak_http::CloakClient;
//!
//! let client = CloakClient::new("http://localhost:8080");
//! let encoded = client.encode(&payload).await?;
//! let tag = client.sign(&value).await?;
//! ```

mod client;
mod error;
mod extractors;
mod routes;
mod schema;

pub use client::CloakClient;
pub use error::{CloakHttpError, ErrorResponse};
pub use extractors::{PayloadExtractor, VerifyRequestExtractor};
pub use routes::{router, AppState};
pub use schema::{AlgorithmQuery, HealthResponse, SignatureResponse, VerifyRequest};
