//! Station and line name types.

use std::borrow::Borrow;
use std::fmt;

use super::DomainError;

/// Checks a raw name: non-empty and free of whitespace.
///
/// Records are whitespace-separated, so a name containing whitespace could
/// never round-trip through the record format.
fn validate(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidName {
            name: name.to_string(),
            reason: "must not be empty",
        });
    }
    if name.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidName {
            name: name.to_string(),
            reason: "must not contain whitespace",
        });
    }
    Ok(())
}

/// The unique name of a station.
///
/// Stations are identified by name alone. `StationName` borrows as `str`, so
/// maps keyed by it can be queried with a plain `&str`.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::StationName;
///
/// let name = StationName::new("Hankou").unwrap();
/// assert_eq!(name.as_str(), "Hankou");
///
/// assert!(StationName::new("").is_err());
/// assert!(StationName::new("Two Words").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationName(String);

impl StationName {
    /// Create a station name, rejecting empty or whitespace-bearing input.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        validate(&name)?;
        Ok(StationName(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for StationName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The name of a line serving one or more stations.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::LineName;
///
/// let line = LineName::new("Line2").unwrap();
/// assert_eq!(line.to_string(), "Line2");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineName(String);

impl LineName {
    /// Create a line name, rejecting empty or whitespace-bearing input.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        validate(&name)?;
        Ok(LineName(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LineName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineName({})", self.0)
    }
}

impl fmt::Display for LineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
