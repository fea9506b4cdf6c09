//! Domain types for the route ranker.
//!
//! These types represent validated schedule data. All types enforce their
//! invariants at construction time, so the graph and planner code can
//! trust their validity.

mod record;
mod station;
mod time;

pub use record::{InvalidRecord, RouteRecord};
pub use station::{InvalidId, RouteId, StationId};
pub use time::{ScheduleTime, TimeError};
