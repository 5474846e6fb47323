//! Data transfer objects for web requests and responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{LineName, PathResult, StationName};
use crate::fare::{FareClass, calculate_fare, special_fare};
use crate::itinerary::format_itinerary;
use crate::network::Network;
use crate::planner::PathSet;

/// A station served by several lines.
#[derive(Debug, Serialize)]
pub struct TransferStationResult {
    /// Station name
    pub name: String,

    /// Lines serving the station, sorted
    pub lines: Vec<String>,
}

/// Response listing all transfer stations.
#[derive(Debug, Serialize)]
pub struct TransferStationsResponse {
    /// Transfer stations sorted by name
    pub stations: Vec<TransferStationResult>,
}

impl TransferStationsResponse {
    /// Collect the transfer stations of a network.
    pub fn from_network(network: &Network) -> Self {
        let stations = network
            .transfer_stations()
            .into_iter()
            .map(|(name, lines)| TransferStationResult {
                name: name.to_string(),
                lines: lines.iter().map(LineName::to_string).collect(),
            })
            .collect();
        Self { stations }
    }
}

/// Response to a station existence check.
#[derive(Debug, Serialize)]
pub struct StationExistsResponse {
    /// Name that was checked
    pub name: String,

    /// Whether the network has a station by that name
    pub exists: bool,
}

/// Request for stations near a start station.
#[derive(Debug, Deserialize)]
pub struct NearbyRequest {
    /// Start station name
    pub station: String,

    /// Search radius in kilometres
    pub max_km: f64,
}

/// A station within the search radius.
#[derive(Debug, Serialize)]
pub struct NearbyStationResult {
    /// Station name
    pub name: String,

    /// Shortest distance from the start station
    pub distance_km: f64,
}

/// Response for a radius search.
#[derive(Debug, Serialize)]
pub struct NearbyResponse {
    /// Start station name
    pub station: String,

    /// Search radius in kilometres
    pub max_km: f64,

    /// Stations found, nearest first
    pub stations: Vec<NearbyStationResult>,
}

impl NearbyResponse {
    /// Build the response, ordering stations by distance then name.
    pub fn new(station: &str, max_km: f64, found: &BTreeMap<&StationName, f64>) -> Self {
        let mut stations: Vec<NearbyStationResult> = found
            .iter()
            .map(|(name, distance)| NearbyStationResult {
                name: name.to_string(),
                distance_km: *distance,
            })
            .collect();
        // BTreeMap iteration is already name-ordered; a stable sort keeps that for ties
        stations.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

        Self {
            station: station.to_string(),
            max_km,
            stations,
        }
    }
}

/// Request naming an origin and destination.
#[derive(Debug, Deserialize)]
pub struct PathsRequest {
    /// Origin station name
    pub from: String,

    /// Destination station name
    pub to: String,
}

/// Response listing simple paths.
#[derive(Debug, Serialize)]
pub struct PathsResponse {
    /// Each path as station names from origin to destination
    pub paths: Vec<Vec<String>>,

    /// True if the configured path cap cut enumeration short
    pub truncated: bool,
}

impl PathsResponse {
    /// Convert a path set.
    pub fn from_path_set(set: &PathSet) -> Self {
        Self {
            paths: set
                .paths
                .iter()
                .map(|p| p.iter().map(StationName::to_string).collect())
                .collect(),
            truncated: set.truncated,
        }
    }
}

/// Request for the shortest route and its fare.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin station name
    pub from: String,

    /// Destination station name
    pub to: String,

    /// Fare class label (defaults to standard)
    pub fare_class: Option<String>,
}

/// Shortest route with itinerary and fares.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Whether a route exists
    pub found: bool,

    /// Stations along the route
    pub path: Vec<String>,

    /// Line for each hop
    pub lines: Vec<String>,

    /// Total distance
    pub distance_km: f64,

    /// Number of line changes
    pub transfers: usize,

    /// Human-readable instructions
    pub itinerary: String,

    /// Standard fare, if a route exists
    pub fare: Option<f64>,

    /// Fare class applied to `special_fare`
    pub fare_class: FareClass,

    /// Fare under `fare_class`, if a route exists
    pub special_fare: Option<f64>,
}

impl RouteResponse {
    /// Convert a path result, pricing it under `class`.
    pub fn from_result(result: &PathResult, class: FareClass) -> Self {
        let found = !result.is_empty();
        Self {
            found,
            path: result.path().iter().map(StationName::to_string).collect(),
            lines: result.lines().iter().map(LineName::to_string).collect(),
            distance_km: result.distance_km(),
            transfers: result.transfer_count(),
            itinerary: format_itinerary(result),
            fare: found.then(|| calculate_fare(result.distance_km())),
            fare_class: class,
            special_fare: found.then(|| special_fare(result, class)),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
