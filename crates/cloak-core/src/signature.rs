//! Whole-value signing service
//!
//! Unlike the payload transformer, signing treats the entire JSON value as
//! one unit: the whole object is canonicalized and signed together.

use crate::signer::Signer;
use serde_json::Value;
use std::sync::Arc;

/// Signs and verifies entire JSON values using the injected signer strategy
#[derive(Clone)]
pub struct SignatureService {
    signer: Arc<dyn Signer>,
}

impl SignatureService {
    /// Create a service around the given signer strategy
    pub fn new(signer: Arc<dyn Signer>) -> Self {
        Self { signer }
    }

    /// The active signer strategy
    pub fn signer(&self) -> &dyn Signer {
        self.signer.as_ref()
    }

    /// Compute the signature tag for a value
    pub fn sign_value(&self, value: &Value) -> String {
        self.signer.sign(value)
    }

    /// Check a tag against a value; `false` on any mismatch, never an error
    pub fn verify_value(&self, value: &Value, tag: &str) -> bool {
        self.signer.verify(value, tag)
    }
}
