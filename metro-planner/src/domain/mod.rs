//! Domain types for the metro planner.
//!
//! This module contains the value types that represent validated network
//! data. All types enforce their invariants at construction time, so code
//! that receives these types can trust their validity.

mod distance;
mod error;
mod name;
mod path;

pub use distance::Distance;
pub use error::DomainError;
pub use name::{LineName, StationName};
pub use path::PathResult;
