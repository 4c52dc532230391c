//! Error types for maxcheck
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for maxcheck operations
pub type VerifyResult<T> = Result<T, VerifyError>;

/// Main error type for maxcheck operations
///
/// Unreadable files *inside* a scan never surface here: the verifier
/// treats them as non-matches and keeps going. Only failures that make
/// the whole run meaningless (missing target directory, failing to
/// persist the report) become errors.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// Target plugin directory does not exist
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization error
    #[error("report serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_directory_not_found() {
        let err = VerifyError::DirectoryNotFound {
            path: PathBuf::from("/missing/plugin"),
        };
        assert_eq!(err.to_string(), "directory not found: /missing/plugin");
    }
}
