//! Error types for strict catalog conversions.
//!
//! The soft lookups in [`crate::warnings`] treat unknown keys as a normal outcome and
//! return `Option`/`bool`. Callers that instead need to *reject* unknown keys (e.g.
//! validating keys pulled out of a config file) use the `TryFrom` conversions, which
//! fail with the error defined here.

use thiserror::Error;

/// A key that is not part of the deprecation catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown deprecation key `{key}`")]
pub struct UnknownWarningKey {
    /// The rejected key, exactly as the caller supplied it.
    pub key: String,
}

impl UnknownWarningKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}
