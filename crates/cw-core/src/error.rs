//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `CwError` as one variant
//! through a `#[from]` conversion.

use thiserror::Error;

/// The base error type for `cw-core` and its dependents.
#[derive(Debug, Error)]
pub enum CwError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `cw-core`.
pub type CwResult<T> = Result<T, CwError>;
