//! Incremental network construction.

use std::collections::HashMap;

use super::{Network, NetworkError, Segment, Station};
use crate::domain::{Distance, LineName, StationName};
use crate::loader::Record;

/// Builder for a [`Network`].
///
/// Stations must be registered before segments can reference them; this is
/// what keeps every segment target inside the network.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    stations: HashMap<StationName, Station>,
}

impl NetworkBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station and add `line` to its line set.
    ///
    /// Idempotent: re-adding a station or a line it already has is a no-op.
    pub fn add_station(&mut self, name: &StationName, line: &LineName) -> &mut Self {
        let station = self.stations.entry(name.clone()).or_default();
        station.lines.insert(line.clone());
        self
    }

    /// Append a directed segment to `from`'s segment list.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::UnknownStation` if either endpoint has not been
    /// registered with [`add_station`](Self::add_station).
    pub fn add_edge(
        &mut self,
        from: &StationName,
        to: &StationName,
        line: &LineName,
        distance: Distance,
    ) -> Result<&mut Self, NetworkError> {
        if !self.stations.contains_key(to) {
            return Err(NetworkError::UnknownStation(to.to_string()));
        }
        let station = self
            .stations
            .get_mut(from)
            .ok_or_else(|| NetworkError::UnknownStation(from.to_string()))?;
        station.segments.push(Segment {
            target: to.clone(),
            line: line.clone(),
            distance,
        });
        Ok(self)
    }

    /// Add one physical segment: both endpoints and both directions.
    pub fn add_record(&mut self, record: &Record) -> &mut Self {
        self.add_station(&record.from, &record.line)
            .add_station(&record.to, &record.line);
        self.push_unchecked(&record.from, &record.to, &record.line, record.distance);
        self.push_unchecked(&record.to, &record.from, &record.line, record.distance);
        self
    }

    /// Finish building.
    pub fn build(self) -> Network {
        Network {
            stations: self.stations,
        }
    }

    /// Push a segment whose endpoints were registered just before.
    fn push_unchecked(
        &mut self,
        from: &StationName,
        to: &StationName,
        line: &LineName,
        distance: Distance,
    ) {
        if let Some(station) = self.stations.get_mut(from) {
            station.segments.push(Segment {
                target: to.clone(),
                line: line.clone(),
                distance,
            });
        }
    }
}
