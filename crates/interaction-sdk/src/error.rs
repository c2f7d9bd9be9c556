//! # Model Errors
//!
//! Errors raised while loading metadata catalogs and building the
//! interaction model.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// Strict registration found an existing state machine for the entity.
    #[error("resource state machine already registered for entity {0}")]
    DuplicateEntity(String),

    #[error("no resource state machine for entity {0}")]
    UnknownEntity(String),

    /// A JSON catalog or configuration document could not be decoded.
    #[error("catalog error: {0}")]
    Catalog(#[from] serde_json::Error),
}
