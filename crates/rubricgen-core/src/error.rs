//! Error types and exit codes for rubricgen
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing source document, invalid config, stale rubric)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing source, invalid config, stale rubric (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while generating or checking a rubric
#[derive(Error, Debug)]
pub enum RubricError {
    // Usage errors (exit code 2)
    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("AGENTS file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("invalid config in {}: {reason}", path.display())]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("rubric at {} is stale: {reason}", path.display())]
    RubricStale { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl RubricError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RubricError::DuplicateFormat | RubricError::UsageError(_) => ExitCode::Usage,

            RubricError::SourceNotFound { .. }
            | RubricError::InvalidConfig { .. }
            | RubricError::RubricStale { .. } => ExitCode::Data,

            RubricError::Io(_) | RubricError::Json(_) | RubricError::Other(_) => {
                ExitCode::Failure
            }
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

    fn error_type(&self) -> &'static str {
        match self {
            RubricError::DuplicateFormat => "duplicate_format",
            RubricError::UsageError(_) => "usage_error",
            RubricError::SourceNotFound { .. } => "source_not_found",
            RubricError::InvalidConfig { .. } => "invalid_config",
            RubricError::RubricStale { .. } => "rubric_stale",
            RubricError::Io(_) => "io_error",
            RubricError::Json(_) => "json_error",
            RubricError::Other(_) => "other",
        }
    }
}

/// Result type alias for rubricgen operations
pub type Result<T> = std::result::Result<T, RubricError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            RubricError::UsageError("x".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(RubricError::DuplicateFormat.exit_code(), ExitCode::Usage);
        assert_eq!(
            RubricError::SourceNotFound {
                path: PathBuf::from("/tmp/AGENTS.md")
            }
            .exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            RubricError::Other("boom".into()).exit_code(),
            ExitCode::Failure
        );
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(RubricError::from(io).exit_code(), ExitCode::Failure);
    }

    #[test]
    fn test_source_not_found_message() {
        let err = RubricError::SourceNotFound {
            path: PathBuf::from("/work/AGENTS.md"),
        };
        assert_eq!(err.to_string(), "AGENTS file not found: /work/AGENTS.md");
    }

    #[test]
    fn test_to_json_envelope() {
        let err = RubricError::RubricStale {
            path: PathBuf::from("/out/rubric.md"),
            reason: "fingerprint changed".into(),
        };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "rubric_stale");
        assert_eq!(
            json["error"]["message"],
            "rubric at /out/rubric.md is stale: fingerprint changed"
        );
    }

    #[test]
    fn test_exit_code_into_i32() {
        let code: i32 = ExitCode::Data.into();
        assert_eq!(code, 3);
    }
}
