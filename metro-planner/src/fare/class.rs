//! Fare classes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A pricing policy applied on top of the standard fare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FareClass {
    /// Standard single-journey fare
    #[default]
    Standard,
    /// Unlimited travel for the day; trips cost nothing
    DayPass,
    /// Stored-value card with a 10% discount
    TransitCard,
}

impl FareClass {
    /// Parse a fare class label.
    ///
    /// Unrecognised labels fall back to [`FareClass::Standard`], so this
    /// never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use metro_planner::fare::FareClass;
    ///
    /// assert_eq!(FareClass::parse("day-pass"), FareClass::DayPass);
    /// assert_eq!(FareClass::parse("Transit-Card"), FareClass::TransitCard);
    /// assert_eq!(FareClass::parse("anything"), FareClass::Standard);
    /// ```
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "day-pass" | "daypass" | "日票" => FareClass::DayPass,
            "transit-card" | "transitcard" | "武汉通" => FareClass::TransitCard,
            _ => FareClass::Standard,
        }
    }

    /// Canonical label for this class.
    pub fn as_str(&self) -> &'static str {
        match self {
            FareClass::Standard => "standard",
            FareClass::DayPass => "day-pass",
            FareClass::TransitCard => "transit-card",
        }
    }
}

impl fmt::Display for FareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
