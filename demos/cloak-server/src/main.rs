//! Cloak demo server
//!
//! Exposes the payload transform and signature services over HTTP:
//!
//!   POST /encrypt   encode every top-level property
//!   POST /decrypt   decode decodable properties, leave the rest
//!   POST /sign      sign the whole payload
//!   POST /verify    204 if the signature matches, 400 otherwise
//!   GET  /health    liveness
//!
//! Usage:
//!   CLOAK_SECRET_KEY=... cargo run --package cloak-server

mod settings;

use cloak_core::{select_signer, SignatureService, SignerAlgorithm};
use cloak_http::{router, AppState};
use settings::Settings;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cloak_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env();
    if settings.using_default_key {
        tracing::warn!("CLOAK_SECRET_KEY not set, using the development default");
    }
    tracing::info!(codec = %settings.default_codec, "default codec strategy");

    let signature = SignatureService::new(select_signer(
        SignerAlgorithm::HmacSha256,
        settings.secret_key,
    ));

    let app = router(AppState::new(settings.default_codec, signature))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    tracing::info!("cloak server listening on http://{}", settings.addr);

    let listener = tokio::net::TcpListener::bind(settings.addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
