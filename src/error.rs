//! Errors raised by the argumentation engine.

use thiserror::Error;

/// Result type alias using the engine error type.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur while building frameworks or computing semantics.
///
/// Construction errors ([`DuplicateArgument`](EngineError::DuplicateArgument) and [`UnknownArgument`](EngineError::UnknownArgument))
/// are recoverable by the caller fixing its input.
/// [`InvalidFramework`](EngineError::InvalidFramework) denotes a broken framework invariant,
/// while [`ComputationTooLarge`](EngineError::ComputationTooLarge) is raised when a computation exceeds the configured limits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// An argument with the same label is already defined.
    #[error("duplicate argument: {0}")]
    DuplicateArgument(String),

    /// An argument referenced by an attack or a query does not exist.
    #[error("no such argument: {0}")]
    UnknownArgument(String),

    /// The framework breaks one of its structural invariants.
    #[error("invalid framework: {0}")]
    InvalidFramework(String),

    /// The computation exceeded the configured size or time ceiling.
    #[error("computation too large: {0}")]
    ComputationTooLarge(String),
}

impl EngineError {
    pub(crate) fn unknown_argument(label: impl std::fmt::Display) -> Self {
        Self::UnknownArgument(label.to_string())
    }

    pub(crate) fn duplicate_argument(label: impl std::fmt::Display) -> Self {
        Self::DuplicateArgument(label.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            "no such argument: a",
            EngineError::unknown_argument("a").to_string()
        );
        assert_eq!(
            "duplicate argument: b",
            EngineError::duplicate_argument("b").to_string()
        );
    }

    #[test]
    fn test_into_anyhow() {
        let err: anyhow::Error = EngineError::ComputationTooLarge("42 arguments".to_string()).into();
        assert!(err.downcast_ref::<EngineError>().is_some());
    }
}
