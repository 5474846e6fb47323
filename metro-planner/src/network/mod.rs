//! The in-memory transit network.
//!
//! A network maps each station name to the set of lines serving it and its
//! ordered list of outgoing segments. It is built once from records and
//! treated as immutable afterwards; every query borrows it read-only.

mod builder;
mod error;

use std::collections::{BTreeMap, BTreeSet, HashMap};

pub use builder::NetworkBuilder;
pub use error::NetworkError;

use crate::domain::{Distance, LineName, StationName};
use crate::loader::Record;

/// A directed, line-labelled connection to an adjacent station.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Station this segment leads to
    pub target: StationName,
    /// Line running along this segment
    pub line: LineName,
    /// Length of the segment
    pub distance: Distance,
}

/// A station: the lines serving it and its outgoing segments.
#[derive(Debug, Clone, Default)]
pub struct Station {
    lines: BTreeSet<LineName>,
    segments: Vec<Segment>,
}

impl Station {
    /// Lines serving this station.
    pub fn lines(&self) -> &BTreeSet<LineName> {
        &self.lines
    }

    /// Outgoing segments in insertion order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns true if more than one line serves this station.
    pub fn is_transfer(&self) -> bool {
        self.lines.len() > 1
    }
}

/// The station → adjacency map.
///
/// # Invariants
///
/// Every segment's target is itself a station of the network. This holds by
/// construction: `NetworkBuilder` refuses edges between unregistered stations.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: HashMap<StationName, Station>,
}

impl Network {
    /// Build a network from records.
    ///
    /// Each record registers both endpoints under its line and adds the
    /// segment in both directions. Segment order follows record order.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let mut builder = NetworkBuilder::new();
        for record in records {
            builder.add_record(record);
        }
        builder.build()
    }

    /// Returns true if a station with this name exists.
    pub fn station_exists(&self, name: &str) -> bool {
        self.stations.contains_key(name)
    }

    /// Look up a station by name.
    pub fn station(&self, name: &str) -> Result<&Station, NetworkError> {
        self.stations
            .get(name)
            .ok_or_else(|| NetworkError::UnknownStation(name.to_string()))
    }

    /// Look up a station together with the key it is stored under.
    pub(crate) fn station_entry(
        &self,
        name: &str,
    ) -> Result<(&StationName, &Station), NetworkError> {
        self.stations
            .get_key_value(name)
            .ok_or_else(|| NetworkError::UnknownStation(name.to_string()))
    }

    /// Outgoing segments of a station.
    pub fn segments(&self, name: &str) -> Result<&[Segment], NetworkError> {
        self.station(name).map(Station::segments)
    }

    /// Stations served by more than one line, with their full line sets.
    ///
    /// Ordered by station name.
    pub fn transfer_stations(&self) -> BTreeMap<&StationName, &BTreeSet<LineName>> {
        self.stations
            .iter()
            .filter(|(_, station)| station.is_transfer())
            .map(|(name, station)| (name, &station.lines))
            .collect()
    }

    /// Iterate over all stations in unspecified order.
    pub fn stations(&self) -> impl Iterator<Item = (&StationName, &Station)> {
        self.stations.iter()
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the network has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Total number of directed segments.
    pub fn segment_count(&self) -> usize {
        self.stations.values().map(|s| s.segments.len()).sum()
    }

    /// Returns true if every segment leads to a registered station.
    pub fn is_consistent(&self) -> bool {
        self.stations
            .values()
            .flat_map(|s| &s.segments)
            .all(|seg| self.stations.contains_key(&seg.target))
    }
}
