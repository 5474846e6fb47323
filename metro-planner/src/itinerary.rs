//! Human-readable itineraries.

use crate::domain::PathResult;

/// Rendered in place of an itinerary when no path exists.
pub const NO_PATH: &str = "no valid path";

/// Render a path result as travel instructions.
///
/// Names the first line and station, then each transfer point where the line
/// changes, then the destination.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::{LineName, PathResult, StationName};
/// use metro_planner::itinerary::format_itinerary;
///
/// let s = |n: &str| StationName::new(n).unwrap();
/// let l = |n: &str| LineName::new(n).unwrap();
/// let result = PathResult::new(
///     vec![s("A"), s("B"), s("D")],
///     vec![l("L1"), l("L2")],
///     5.0,
/// )
/// .unwrap();
///
/// assert_eq!(
///     format_itinerary(&result),
///     "Take L1 from A, at B transfer to L2, arrive at D."
/// );
/// ```
pub fn format_itinerary(result: &PathResult) -> String {
    let path = result.path();
    let lines = result.lines();

    let (Some(first_station), Some(last_station)) = (path.first(), path.last()) else {
        return NO_PATH.to_string();
    };
    let Some(mut current_line) = lines.first() else {
        return format!("Already at {first_station}.");
    };

    let mut text = format!("Take {current_line} from {first_station}");
    for (station, line) in path.iter().zip(lines) {
        if line != current_line {
            text.push_str(&format!(", at {station} transfer to {line}"));
            current_line = line;
        }
    }
    text.push_str(&format!(", arrive at {last_station}."));
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineName, StationName};

    fn result(stations: &[&str], lines: &[&str]) -> PathResult {
        PathResult::new(
            stations.iter().map(|s| StationName::new(*s).unwrap()).collect(),
            lines.iter().map(|l| LineName::new(*l).unwrap()).collect(),
            1.0,
        )
        .unwrap()
    }

    #[test]
    fn no_path() {
        assert_eq!(format_itinerary(&PathResult::unreachable()), NO_PATH);
    }

    #[test]
    fn single_station() {
        let single = PathResult::new(vec![StationName::new("A").unwrap()], vec![], 0.0).unwrap();
        assert_eq!(format_itinerary(&single), "Already at A.");
    }

    #[test]
    fn single_line() {
        let r = result(&["A", "B", "C"], &["L1", "L1"]);
        assert_eq!(format_itinerary(&r), "Take L1 from A, arrive at C.");
    }

    #[test]
    fn multiple_transfers() {
        let r = result(&["A", "B", "C", "D", "E"], &["L1", "L2", "L2", "L3"]);
        assert_eq!(
            format_itinerary(&r),
            "Take L1 from A, at B transfer to L2, at D transfer to L3, arrive at E."
        );
    }

    #[test]
    fn returning_to_earlier_line_is_a_transfer() {
        let r = result(&["A", "B", "C", "D"], &["L1", "L2", "L1"]);
        assert_eq!(
            format_itinerary(&r),
            "Take L1 from A, at B transfer to L2, at C transfer to L1, arrive at D."
        );
    }
}
