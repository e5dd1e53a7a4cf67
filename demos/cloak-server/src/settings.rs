//! Process configuration from environment variables

use cloak_core::{CodecAlgorithm, SecretKey};
use std::net::SocketAddr;

/// Development fallback, matching the documented local setup
const DEFAULT_SECRET_KEY: &str = "pretty-much-unbreakable-secret";

/// Server settings, read once at startup
pub struct Settings {
    pub addr: SocketAddr,
    pub secret_key: SecretKey,
    pub using_default_key: bool,
    pub default_codec: CodecAlgorithm,
}

impl Settings {
    /// Read settings from the environment
    ///
    /// - `CLOAK_ADDR` — listen address, default `127.0.0.1:8080`
    /// - `CLOAK_SECRET_KEY` — HMAC key; a development default applies when
    ///   unset (the key itself is never logged)
    /// - `CLOAK_CODEC` — default codec identifier, default `base64`;
    ///   an unrecognized identifier aborts startup rather than silently
    ///   falling back
    pub fn from_env() -> Self {
        let addr = std::env::var("CLOAK_ADDR")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 8080)));

        let (secret_key, using_default_key) = match std::env::var("CLOAK_SECRET_KEY") {
            Ok(key) => (SecretKey::from(key.as_str()), false),
            Err(_) => (SecretKey::from(DEFAULT_SECRET_KEY), true),
        };

        let default_codec = match std::env::var("CLOAK_CODEC") {
            Ok(identifier) => identifier
                .parse()
                .unwrap_or_else(|e| panic!("invalid CLOAK_CODEC: {}", e)),
            Err(_) => CodecAlgorithm::default(),
        };

        Self {
            addr,
            secret_key,
            using_default_key,
            default_codec,
        }
    }
}
