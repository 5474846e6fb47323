//! Network lookup errors.

/// Errors raised when a query names something the network doesn't contain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// No station with this name is registered
    #[error("unknown station: {0}")]
    UnknownStation(String),
}
