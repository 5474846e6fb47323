//! Route queries over an immutable network.
//!
//! This module implements the path engines that answer:
//! "How do I get from here to there, and what is nearby?"
//!
//! - [`Planner::shortest_path`]: Dijkstra with predecessor reconstruction
//! - [`Planner::all_paths`]: exhaustive simple-path enumeration
//! - [`Planner::nearby_stations`]: weighted reachability within a radius
//!
//! Every query borrows the network read-only and fails with
//! [`NetworkError::UnknownStation`] when given a name the network lacks.

mod config;
mod frontier;
mod nearby;
mod paths;
mod shortest;

use std::collections::BTreeMap;

pub use config::PlannerConfig;
pub use paths::PathSet;

use crate::domain::{Distance, PathResult, StationName};
use crate::network::{Network, NetworkError};

/// Query facade over a network.
#[derive(Debug, Clone, Copy)]
pub struct Planner<'a> {
    network: &'a Network,
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a planner over `network`.
    pub fn new(network: &'a Network, config: &'a PlannerConfig) -> Self {
        Self { network, config }
    }

    /// Shortest path from `start` to `end`.
    ///
    /// Returns an empty [`PathResult`] when `end` is unreachable.
    pub fn shortest_path(&self, start: &str, end: &str) -> Result<PathResult, NetworkError> {
        shortest::shortest_path(self.network, start, end)
    }

    /// Every simple path from `start` to `end`, up to the configured cap.
    pub fn all_paths(&self, start: &str, end: &str) -> Result<PathSet, NetworkError> {
        paths::all_paths(self.network, start, end, self.config.max_paths)
    }

    /// Stations within `max` of `start`, with their shortest distances.
    pub fn nearby_stations(
        &self,
        start: &str,
        max: Distance,
    ) -> Result<BTreeMap<&'a StationName, f64>, NetworkError> {
        nearby::nearby_stations(self.network, start, max)
    }
}
