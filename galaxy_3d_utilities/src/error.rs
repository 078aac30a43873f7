//! Error types for the Galaxy3D utilities
//!
//! Layer-mask validation and asset-database operations report failures
//! through this module. Visibility checks never fail.

use std::fmt;

/// Result type for Galaxy3D utility operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D utility errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Layer index outside [0, 31]
    LayerOutOfRange(u32),

    /// Asset path is malformed or has the wrong extension
    InvalidPath(String),

    /// No asset or object matches the given path or id
    AssetNotFound(String),

    /// An asset is already stored at the given path (or the object is already persisted)
    AssetAlreadyExists(String),

    /// Host asset database failure
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LayerOutOfRange(layer) => write!(f, "Layer out of range: {} (expected 0..=31)", layer),
            Error::InvalidPath(path) => write!(f, "Invalid asset path: {}", path),
            Error::AssetNotFound(what) => write!(f, "Asset not found: {}", what),
            Error::AssetAlreadyExists(what) => write!(f, "Asset already exists: {}", what),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
