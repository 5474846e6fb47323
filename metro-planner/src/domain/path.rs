//! Shortest-path results.

use super::{DomainError, LineName, StationName};

/// The outcome of a shortest-path query.
///
/// Holds the stations visited in order, the line ridden for each hop, and the
/// total distance. An empty result means the destination was unreachable.
///
/// # Invariants
///
/// - Empty path implies no lines and zero distance
/// - Otherwise `lines.len() == path.len() - 1`
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    path: Vec<StationName>,
    lines: Vec<LineName>,
    distance_km: f64,
}

impl PathResult {
    /// Constructs a result, checking the hop/line invariant.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InconsistentPath` when the number of lines is not
    /// one less than the number of stations, or when an empty path carries
    /// lines or distance.
    pub fn new(
        path: Vec<StationName>,
        lines: Vec<LineName>,
        distance_km: f64,
    ) -> Result<Self, DomainError> {
        let consistent = if path.is_empty() {
            lines.is_empty() && distance_km == 0.0
        } else {
            lines.len() == path.len() - 1
        };
        if !consistent {
            return Err(DomainError::InconsistentPath {
                stations: path.len(),
                lines: lines.len(),
            });
        }
        Ok(Self {
            path,
            lines,
            distance_km,
        })
    }

    /// Constructs a result from a predecessor walk that already satisfies the invariants.
    pub(crate) fn from_walk(path: Vec<StationName>, lines: Vec<LineName>, distance_km: f64) -> Self {
        debug_assert_eq!(lines.len() + 1, path.len());
        Self {
            path,
            lines,
            distance_km,
        }
    }

    /// The "no path" result.
    pub fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            lines: Vec::new(),
            distance_km: 0.0,
        }
    }

    /// Returns true if no path was found.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Stations in travel order, start first.
    pub fn path(&self) -> &[StationName] {
        &self.path
    }

    /// Line ridden for each hop; `lines()[i]` connects `path()[i]` to `path()[i + 1]`.
    pub fn lines(&self) -> &[LineName] {
        &self.lines
    }

    /// Total distance in kilometres.
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Number of line changes along the path.
    pub fn transfer_count(&self) -> usize {
        self.lines.windows(2).filter(|w| w[0] != w[1]).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(s: &str) -> StationName {
        StationName::new(s).unwrap()
    }

    fn line(s: &str) -> LineName {
        LineName::new(s).unwrap()
    }

    #[test]
    fn valid_result() {
        let result = PathResult::new(
            vec![station("A"), station("B"), station("C")],
            vec![line("L1"), line("L2")],
            8.0,
        )
        .unwrap();

        assert!(!result.is_empty());
        assert_eq!(result.path().len(), 3);
        assert_eq!(result.lines().len(), 2);
        assert_eq!(result.distance_km(), 8.0);
        assert_eq!(result.transfer_count(), 1);
    }

    #[test]
    fn single_station_result() {
        let result = PathResult::new(vec![station("A")], vec![], 0.0).unwrap();
        assert_eq!(result.path(), &[station("A")]);
        assert!(result.lines().is_empty());
        assert_eq!(result.transfer_count(), 0);
    }

    #[test]
    fn mismatched_lines_rejected() {
        let err = PathResult::new(vec![station("A"), station("B")], vec![], 1.0).unwrap_err();
        assert_eq!(
            err,
            DomainError::InconsistentPath {
                stations: 2,
                lines: 0
            }
        );
    }

    #[test]
    fn empty_path_with_lines_rejected() {
        assert!(PathResult::new(vec![], vec![line("L1")], 0.0).is_err());
        assert!(PathResult::new(vec![], vec![], 3.0).is_err());
    }

    #[test]
    fn unreachable_is_empty() {
        let result = PathResult::unreachable();
        assert!(result.is_empty());
        assert_eq!(result.distance_km(), 0.0);
        assert_eq!(result, PathResult::new(vec![], vec![], 0.0).unwrap());
    }
}
