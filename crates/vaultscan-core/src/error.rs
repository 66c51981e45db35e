//! Error types and exit codes for vaultscan
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data/vault error (missing vault root, unwritable report target)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/vault error - missing root, bad report target (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during vaultscan operations
#[derive(Error, Debug)]
pub enum VaultError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("invalid date: {value} (expected YYYY-MM-DD)")]
    InvalidDate { value: String },

    #[error("{0}")]
    UsageError(String),

    // Data/vault errors (exit code 3)
    #[error("vault root not found: {path:?}")]
    VaultNotFound { path: PathBuf },

    #[error("vault root is not a directory: {path:?}")]
    NotADirectory { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl VaultError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        VaultError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            VaultError::UnknownFormat(_)
            | VaultError::InvalidDate { .. }
            | VaultError::UsageError(_) => ExitCode::Usage,

            VaultError::VaultNotFound { .. } | VaultError::NotADirectory { .. } => ExitCode::Data,

            VaultError::Io(_)
            | VaultError::Json(_)
            | VaultError::FailedOperationWithTarget { .. }
            | VaultError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            VaultError::UnknownFormat(_) => "unknown_format",
            VaultError::InvalidDate { .. } => "invalid_date",
            VaultError::UsageError(_) => "usage_error",
            VaultError::VaultNotFound { .. } => "vault_not_found",
            VaultError::NotADirectory { .. } => "not_a_directory",
            VaultError::Io(_) => "io_error",
            VaultError::Json(_) => "json_error",
            VaultError::FailedOperationWithTarget { .. } => "failed_operation",
            VaultError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for vaultscan operations
pub type Result<T> = std::result::Result<T, VaultError>;
