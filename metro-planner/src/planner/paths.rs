//! Enumeration of every simple path between two stations.
//!
//! Depth-first search with an explicit stack, so deep networks can't exhaust
//! the call stack. Each frame remembers which of its station's segments to try
//! next; the visited set and path buffer are shared and unwound as frames
//! finish. Paths come out in segment insertion order.

use std::collections::HashSet;
use std::num::NonZeroUsize;

use tracing::debug;

use crate::domain::StationName;
use crate::network::{Network, NetworkError, Segment};

/// Simple paths found between two stations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathSet {
    /// Each path lists stations from start to end, with no repeats.
    pub paths: Vec<Vec<StationName>>,
    /// True if enumeration stopped at the configured cap.
    pub truncated: bool,
}

/// One level of the depth-first search.
struct Frame<'a> {
    segments: &'a [Segment],
    next: usize,
}

/// Enumerate simple paths from `start` to `end`, stopping after `limit` paths.
pub(super) fn all_paths(
    network: &Network,
    start: &str,
    end: &str,
    limit: Option<NonZeroUsize>,
) -> Result<PathSet, NetworkError> {
    let (start, start_station) = network.station_entry(start)?;
    let (end, _) = network.station_entry(end)?;

    let mut result = PathSet::default();

    if start == end {
        result.paths.push(vec![start.clone()]);
        return Ok(result);
    }

    let mut visited: HashSet<&StationName> = HashSet::from([start]);
    let mut path: Vec<&StationName> = vec![start];
    let mut stack = vec![Frame {
        segments: start_station.segments(),
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let segments = frame.segments;
        let next = frame.next;
        frame.next += 1;

        // Frame exhausted: backtrack
        let Some(segment) = segments.get(next) else {
            stack.pop();
            if let Some(station) = path.pop() {
                visited.remove(station);
            }
            continue;
        };

        let target = &segment.target;
        if visited.contains(target) {
            continue;
        }

        if target == end {
            let mut found: Vec<StationName> = path.iter().map(|s| (*s).clone()).collect();
            found.push(target.clone());
            result.paths.push(found);

            if limit.is_some_and(|cap| result.paths.len() >= cap.get()) {
                result.truncated = true;
                break;
            }
            continue;
        }

        visited.insert(target);
        path.push(target);
        stack.push(Frame {
            segments: network.station(target.as_str())?.segments(),
            next: 0,
        });
    }

    debug!(
        start = %start,
        end = %end,
        paths = result.paths.len(),
        truncated = result.truncated,
        "Path enumeration complete"
    );

    Ok(result)
}
