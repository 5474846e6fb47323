//! Radius search: every station within a distance of a start station.

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use super::frontier::Frontier;
use crate::domain::{Distance, StationName};
use crate::network::{Network, NetworkError};

/// Find all stations whose shortest distance from `start` is at most `max`.
///
/// The start station itself is excluded. Over-limit candidates may enter the
/// frontier but are never expanded.
pub(super) fn nearby_stations<'a>(
    network: &'a Network,
    start: &str,
    max: Distance,
) -> Result<BTreeMap<&'a StationName, f64>, NetworkError> {
    let (start, _) = network.station_entry(start)?;
    let max_km = max.km();

    let mut finalized: HashSet<&StationName> = HashSet::new();
    let mut results = BTreeMap::new();
    let mut frontier = Frontier::new();
    frontier.push(start, 0.0);

    while let Some(entry) = frontier.pop() {
        if entry.distance > max_km {
            // Frontier pops in distance order, so everything left is out of range too
            break;
        }
        if !finalized.insert(entry.station) {
            continue;
        }
        if entry.station != start {
            results.insert(entry.station, entry.distance);
        }

        for segment in network.station(entry.station.as_str())?.segments() {
            if !finalized.contains(&segment.target) {
                frontier.push(&segment.target, entry.distance + segment.distance.km());
            }
        }
    }

    debug!(
        start = %start,
        max_km,
        found = results.len(),
        pops = frontier.pops(),
        "Radius search complete"
    );

    Ok(results)
}
