//! Metro network planner.
//!
//! Models a transit network of stations, lines and distance-weighted
//! segments, and answers routing and fare questions over it: transfer
//! stations, stations within a radius, every simple path between two
//! stations, the shortest path, a readable itinerary and the fare.

pub mod config;
pub mod domain;
pub mod fare;
pub mod itinerary;
pub mod loader;
pub mod logging;
pub mod network;
pub mod planner;
pub mod web;

