//! Errors raised while inferring routes from a view directory

use std::path::PathBuf;

/// Failure of an inference pass
///
/// Every variant aborts the whole pass: there is no per-file error isolation.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// Walking the start directory failed (missing directory, permissions, ...)
    #[error("failed to walk view directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// The exclude pattern is not a valid glob
    #[error("invalid exclude pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// No view is registered under the derived module identifier
    #[error("no view registered for module `{0}`")]
    ModuleNotFound(String),

    /// The view exists but could not be loaded
    #[error("failed to load view `{module_path}` from {file:?}: {reason}")]
    Resolve {
        module_path: String,
        file: PathBuf,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, RouteError>;
