//! Core error type.
//!
//! The simulation core itself is total; these errors come from validating
//! configuration at the boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `sl-core`.
pub type CoreResult<T> = Result<T, CoreError>;
