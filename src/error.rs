// In: src/error.rs

//! This module defines the single, unified error type for the transform library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Every fallible pipeline operation returns `Result<(), TransformError>`; an `Err`
//! always means the pipeline state (buffer, flags) was left untouched.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    // =========================================================================
    // === Runtime Errors (Returned by pipeline operations)
    // =========================================================================
    #[error("Input too short: pipeline needs {expected} elements, source has {actual}")]
    InputTooShort { expected: usize, actual: usize },

    #[error("Stage index {index} is out of range for a pipeline of {stage_count} stages")]
    StageIndexOutOfRange { index: usize, stage_count: usize },

    // =========================================================================
    // === Construction Errors (No pipeline instance is produced)
    // =========================================================================
    #[error("Too many stages: {count} requested, the maximum is {max}")]
    TooManyStages { count: usize, max: usize },

    #[error("Invalid pipeline configuration: {0}")]
    Config(String),

    // =========================================================================
    // === External Error Wrappers
    // =========================================================================
    /// An error from a safe byte-casting operation failing.
    #[error("Byte slice casting error: {0}")]
    ByteCast(String), // bytemuck::PodCastError doesn't impl Error

    /// An error from the Serde JSON library while reading a pipeline config.
    #[error("Serde JSON error: {0}")]
    SerdeJson(String),
}

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

impl From<bytemuck::PodCastError> for TransformError {
    fn from(err: bytemuck::PodCastError) -> Self {
        TransformError::ByteCast(err.to_string())
    }
}

// serde_json::Error isn't Clone, so it is flattened to its message.
impl From<serde_json::Error> for TransformError {
    fn from(err: serde_json::Error) -> Self {
        TransformError::SerdeJson(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = TransformError::InputTooShort {
            expected: 4,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Input too short: pipeline needs 4 elements, source has 3"
        );

        let err = TransformError::StageIndexOutOfRange {
            index: 7,
            stage_count: 2,
        };
        assert!(err.to_string().contains("index 7"));
    }

    #[test]
    fn test_serde_error_conversion() {
        let bad = serde_json::from_str::<serde_json::Value>("{ not json");
        let err: TransformError = bad.unwrap_err().into();
        assert!(matches!(err, TransformError::SerdeJson(_)));
    }
}
