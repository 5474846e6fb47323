//! Segment distances.

use std::fmt;

use super::DomainError;

/// A non-negative, finite distance in kilometres.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::Distance;
///
/// let d = Distance::from_km(2.5).unwrap();
/// assert_eq!(d.km(), 2.5);
///
/// assert!(Distance::from_km(-1.0).is_err());
/// assert!(Distance::from_km(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Distance(f64);

impl Distance {
    /// Zero kilometres.
    pub const ZERO: Distance = Distance(0.0);

    /// Create a distance from kilometres.
    pub fn from_km(km: f64) -> Result<Self, DomainError> {
        if !km.is_finite() || km < 0.0 {
            return Err(DomainError::InvalidDistance(km));
        }
        Ok(Distance(km))
    }

    /// Returns the distance in kilometres.
    pub fn km(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}km", self.0)
    }
}
