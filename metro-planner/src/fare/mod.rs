//! Fare computation.
//!
//! Fares follow a piecewise schedule: a flat base fare covers the first few
//! kilometres, then the remaining distance is consumed tier by tier. Within a
//! tier, every started block of `rate_km` kilometres adds one unit. The total
//! is capped.

mod class;

pub use class::FareClass;

use crate::domain::PathResult;

/// Fare charged for any trip up to [`BASE_DISTANCE_KM`].
pub const BASE_FARE: f64 = 2.0;

/// Distance covered by the base fare.
pub const BASE_DISTANCE_KM: f64 = 4.0;

/// Upper bound on any computed fare.
pub const MAX_FARE: f64 = 10.0;

/// Discount multiplier for transit-card holders.
pub const TRANSIT_CARD_MULTIPLIER: f64 = 0.9;

/// One band of the distance schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FareTier {
    /// Kilometres this tier covers.
    pub width_km: f64,
    /// Kilometres per fare unit within this tier.
    pub rate_km: f64,
}

/// Tiers applied in order to the distance beyond [`BASE_DISTANCE_KM`].
pub const FARE_TIERS: [FareTier; 5] = [
    FareTier {
        width_km: 8.0,
        rate_km: 4.0,
    },
    FareTier {
        width_km: 12.0,
        rate_km: 6.0,
    },
    FareTier {
        width_km: 16.0,
        rate_km: 8.0,
    },
    FareTier {
        width_km: 10.0,
        rate_km: 10.0,
    },
    FareTier {
        width_km: f64::INFINITY,
        rate_km: 20.0,
    },
];

/// Standard fare for a trip of `distance_km`.
///
/// # Examples
///
/// ```
/// use metro_planner::fare::calculate_fare;
///
/// assert_eq!(calculate_fare(4.0), 2.0);
/// assert_eq!(calculate_fare(4.5), 3.0);
/// assert_eq!(calculate_fare(500.0), 10.0);
/// ```
pub fn calculate_fare(distance_km: f64) -> f64 {
    if distance_km <= BASE_DISTANCE_KM {
        return BASE_FARE;
    }

    let mut fare = BASE_FARE;
    let mut remaining = distance_km - BASE_DISTANCE_KM;

    for tier in &FARE_TIERS {
        if remaining <= tier.width_km {
            fare += (remaining / tier.rate_km).ceil();
            break;
        }
        fare += (tier.width_km / tier.rate_km).ceil();
        remaining -= tier.width_km;
    }

    fare.min(MAX_FARE)
}

/// Fare for a shortest-path result under a fare class.
pub fn special_fare(result: &PathResult, class: FareClass) -> f64 {
    match class {
        FareClass::DayPass => 0.0,
        FareClass::TransitCard => calculate_fare(result.distance_km()) * TRANSIT_CARD_MULTIPLIER,
        FareClass::Standard => calculate_fare(result.distance_km()),
    }
}
