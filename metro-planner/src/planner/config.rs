//! Query configuration for the planner.

use std::num::NonZeroUsize;

/// Configuration parameters for path queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Maximum number of simple paths to enumerate between two stations.
    /// `None` enumerates all of them, which is exponential on dense networks.
    pub max_paths: Option<NonZeroUsize>,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_paths: Option<NonZeroUsize>) -> Self {
        Self { max_paths }
    }

    /// Configuration capping path enumeration at `max_paths`.
    ///
    /// A cap of zero means no cap.
    pub fn with_max_paths(max_paths: usize) -> Self {
        Self {
            max_paths: NonZeroUsize::new(max_paths),
        }
    }
}
