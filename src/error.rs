//! Error types for Leanline
//!
//! The numeric engine itself is total over its domain; errors only arise at
//! the serialization boundary (session state, report payloads).

use thiserror::Error;

/// Errors that can occur at the engine's serialization boundary
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to parse session state: {0}")]
    ParseError(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Encoding error: {0}")]
    EncodingError(String),
}
