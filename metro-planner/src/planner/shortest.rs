//! Single-source, single-target shortest path (Dijkstra).

use std::collections::HashMap;

use tracing::debug;

use super::frontier::Frontier;
use crate::domain::{LineName, PathResult, StationName};
use crate::network::{Network, NetworkError};

/// Best known way of reaching a station.
#[derive(Debug, Clone, Copy)]
struct Visit<'a> {
    distance: f64,
    predecessor: Option<&'a StationName>,
    /// Line ridden into this station; `None` only for the start.
    line: Option<&'a LineName>,
}

/// Find the shortest path from `start` to `end`.
///
/// Stops as soon as `end` is popped from the frontier. An unreachable target
/// yields [`PathResult::unreachable`]. Ties between equal-length paths are
/// broken by frontier order and are not otherwise specified.
pub(super) fn shortest_path(
    network: &Network,
    start: &str,
    end: &str,
) -> Result<PathResult, NetworkError> {
    let (start, _) = network.station_entry(start)?;
    let (end, _) = network.station_entry(end)?;

    let mut best: HashMap<&StationName, Visit> = HashMap::new();
    let mut frontier = Frontier::new();

    best.insert(
        start,
        Visit {
            distance: 0.0,
            predecessor: None,
            line: None,
        },
    );
    frontier.push(start, 0.0);

    while let Some(entry) = frontier.pop() {
        if entry.station == end {
            break;
        }
        // Dominated by a later improvement
        if best
            .get(entry.station)
            .is_some_and(|v| entry.distance > v.distance)
        {
            continue;
        }

        for segment in network.station(entry.station.as_str())?.segments() {
            let candidate = entry.distance + segment.distance.km();
            let improves = best
                .get(&segment.target)
                .is_none_or(|v| candidate < v.distance);
            if improves {
                best.insert(
                    &segment.target,
                    Visit {
                        distance: candidate,
                        predecessor: Some(entry.station),
                        line: Some(&segment.line),
                    },
                );
                frontier.push(&segment.target, candidate);
            }
        }
    }

    let result = match best.get(end) {
        Some(visit) => reconstruct(&best, end, *visit),
        None => PathResult::unreachable(),
    };

    debug!(
        start = %start,
        end = %end,
        found = !result.is_empty(),
        distance_km = result.distance_km(),
        pops = frontier.pops(),
        "Shortest path search complete"
    );

    Ok(result)
}

/// Walk predecessor links back from `end`.
fn reconstruct(best: &HashMap<&StationName, Visit>, end: &StationName, end_visit: Visit) -> PathResult {
    let mut path = Vec::new();
    let mut lines = Vec::new();

    let mut station = end;
    let mut visit = end_visit;
    loop {
        path.push(station.clone());
        if let Some(line) = visit.line {
            lines.push(line.clone());
        }
        let Some(prev) = visit.predecessor else {
            break;
        };
        let Some(prev_visit) = best.get(prev) else {
            break;
        };
        station = prev;
        visit = *prev_visit;
    }

    path.reverse();
    lines.reverse();
    PathResult::from_walk(path, lines, end_visit.distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::Record;

    fn network(records: &[(&str, &str, &str, f64)]) -> Network {
        let records: Vec<Record> = records
            .iter()
            .map(|(l, a, b, km)| Record::new(l, a, b, *km).unwrap())
            .collect();
        Network::from_records(&records)
    }

    fn names(result: &PathResult) -> Vec<&str> {
        result.path().iter().map(StationName::as_str).collect()
    }

    fn lines(result: &PathResult) -> Vec<&str> {
        result.lines().iter().map(LineName::as_str).collect()
    }

    #[test]
    fn simple_line() {
        let net = network(&[("L1", "A", "B", 3.0), ("L1", "B", "C", 5.0)]);
        let result = shortest_path(&net, "A", "C").unwrap();

        assert_eq!(names(&result), vec!["A", "B", "C"]);
        assert_eq!(lines(&result), vec!["L1", "L1"]);
        assert_eq!(result.distance_km(), 8.0);
    }

    #[test]
    fn start_equals_end() {
        let net = network(&[("L1", "A", "B", 3.0)]);
        let result = shortest_path(&net, "A", "A").unwrap();

        assert_eq!(names(&result), vec!["A"]);
        assert!(result.lines().is_empty());
        assert_eq!(result.distance_km(), 0.0);
    }

    #[test]
    fn prefers_shorter_detour() {
        // A-D direct is 10, A-B-C-D is 6
        let net = network(&[
            ("L1", "A", "D", 10.0),
            ("L2", "A", "B", 2.0),
            ("L2", "B", "C", 2.0),
            ("L3", "C", "D", 2.0),
        ]);
        let result = shortest_path(&net, "A", "D").unwrap();

        assert_eq!(names(&result), vec!["A", "B", "C", "D"]);
        assert_eq!(lines(&result), vec!["L2", "L2", "L3"]);
        assert_eq!(result.distance_km(), 6.0);
        assert_eq!(result.transfer_count(), 1);
    }

    #[test]
    fn improves_after_first_discovery() {
        // C is first discovered via A-C (9), then improved via B (1 + 1)
        let net = network(&[
            ("L1", "A", "C", 9.0),
            ("L2", "A", "B", 1.0),
            ("L2", "B", "C", 1.0),
            ("L1", "C", "E", 1.0),
        ]);
        let result = shortest_path(&net, "A", "E").unwrap();

        assert_eq!(names(&result), vec!["A", "B", "C", "E"]);
        assert_eq!(result.distance_km(), 3.0);
    }

    #[test]
    fn unreachable_target() {
        let net = network(&[("L1", "A", "B", 1.0), ("L2", "X", "Y", 1.0)]);
        let result = shortest_path(&net, "A", "Y").unwrap();

        assert!(result.is_empty());
        assert_eq!(result.distance_km(), 0.0);
    }

    #[test]
    fn unknown_station() {
        let net = network(&[("L1", "A", "B", 1.0)]);
        assert_eq!(
            shortest_path(&net, "A", "Z").unwrap_err(),
            NetworkError::UnknownStation("Z".into())
        );
        assert_eq!(
            shortest_path(&net, "Q", "A").unwrap_err(),
            NetworkError::UnknownStation("Q".into())
        );
    }

    #[test]
    fn zero_length_segments() {
        let net = network(&[("L1", "A", "B", 0.0), ("L1", "B", "C", 0.0)]);
        let result = shortest_path(&net, "A", "C").unwrap();

        assert_eq!(names(&result), vec!["A", "B", "C"]);
        assert_eq!(result.distance_km(), 0.0);
    }
}
