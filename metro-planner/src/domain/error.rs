//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from I/O and lookup errors.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A station or line name failed validation
    #[error("invalid name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// A distance was negative, NaN or infinite
    #[error("invalid distance {0}: must be finite and non-negative")]
    InvalidDistance(f64),

    /// Path and line sequences don't line up
    #[error("path of {stations} stations cannot have {lines} lines")]
    InconsistentPath { stations: usize, lines: usize },
}
