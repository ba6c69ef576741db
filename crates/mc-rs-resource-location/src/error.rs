//! Resource location parse errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("invalid namespace: {0:?}")]
    InvalidNamespace(String),

    #[error("invalid path: {0:?}")]
    InvalidPath(String),

    #[error("resource location has an empty path")]
    EmptyPath,
}
