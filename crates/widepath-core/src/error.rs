//! Error types and exit codes for widepath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (bad graph file, vertex out of range, unreachable target)

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
    /// Data error - bad graph, bad vertex, no path (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during widepath operations
#[derive(Error, Debug)]
pub enum WidepathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: scan, heap, or kruskal)")]
    UnknownAlgorithm(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("vertex {vertex} out of range (graph has {len} vertices)")]
    OutOfRange { vertex: usize, len: usize },

    #[error("vertex {to} is unreachable from vertex {from}")]
    Unreachable { from: usize, to: usize },

    #[error("invalid weight {weight} on edge {from}-{to} (weights must be finite and positive)")]
    InvalidWeight { from: usize, to: usize, weight: f64 },

    #[error("unsupported graph file {path:?} (expected .json, .toml, .yaml or .yml)")]
    UnsupportedGraphFile { path: PathBuf },

    #[error("algorithms disagree on {from}->{to}: {detail}")]
    Disagreement {
        from: usize,
        to: usize,
        detail: String,
    },

    // Programming errors surfaced as generic failures (exit code 1)
    #[error("{operation} called on an empty heap")]
    EmptyContainer { operation: &'static str },

    #[error("id {id} is not present in the heap")]
    NotInHeap { id: usize },

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),

    #[error("verification interrupted")]
    Interrupted,
}

impl WidepathError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        WidepathError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        WidepathError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WidepathError::UnknownFormat(_)
            | WidepathError::UnknownAlgorithm(_)
            | WidepathError::DuplicateFormat
            | WidepathError::UsageError(_)
            | WidepathError::InvalidValue { .. } => ExitCode::Usage,

            WidepathError::OutOfRange { .. }
            | WidepathError::Unreachable { .. }
            | WidepathError::InvalidWeight { .. }
            | WidepathError::UnsupportedGraphFile { .. }
            | WidepathError::Disagreement { .. } => ExitCode::Data,

            WidepathError::EmptyContainer { .. }
            | WidepathError::NotInHeap { .. }
            | WidepathError::Yaml(_)
            | WidepathError::Json(_)
            | WidepathError::Toml(_)
            | WidepathError::FailedOperationWithTarget { .. }
            | WidepathError::Other(_)
            | WidepathError::Interrupted => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            WidepathError::UnknownFormat(_) => "unknown_format",
            WidepathError::UnknownAlgorithm(_) => "unknown_algorithm",
            WidepathError::DuplicateFormat => "duplicate_format",
            WidepathError::UsageError(_) => "usage_error",
            WidepathError::InvalidValue { .. } => "invalid_value",
            WidepathError::OutOfRange { .. } => "out_of_range",
            WidepathError::Unreachable { .. } => "unreachable",
            WidepathError::InvalidWeight { .. } => "invalid_weight",
            WidepathError::UnsupportedGraphFile { .. } => "unsupported_graph_file",
            WidepathError::Disagreement { .. } => "disagreement",
            WidepathError::EmptyContainer { .. } => "empty_container",
            WidepathError::NotInHeap { .. } => "not_in_heap",
            WidepathError::Yaml(_) => "yaml_error",
            WidepathError::Json(_) => "json_error",
            WidepathError::Toml(_) => "toml_error",
            WidepathError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            WidepathError::Other(_) => "other",
            WidepathError::Interrupted => "interrupted",
        }
    }

    /// Convert error to JSON representation for structured error output.
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

/// Result type alias for widepath operations
pub type Result<T> = std::result::Result<T, WidepathError>;
