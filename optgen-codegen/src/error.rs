//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Definition parsing error.
    #[error("definition parse error: {0}")]
    Parse(#[from] optgen_schema::ParseError),

    /// Definition validation error.
    #[error("definition error: {0}")]
    Schema(#[from] optgen_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
