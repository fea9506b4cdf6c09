//! A single direct connection from the schedule.

use super::station::{RouteId, StationId};

/// Error returned when a record's costs are out of range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidRecord {
    /// Price is negative, NaN or infinite
    #[error("price must be a finite non-negative number, got {0}")]
    Price(f64),

    /// Duration is negative
    #[error("duration must be non-negative, got {0}s")]
    Duration(i64),
}

/// One scheduled direct trip between two stations.
///
/// Costs are validated at construction, so the graph code can rely on
/// every price being finite and non-negative and every duration being
/// non-negative.
///
/// # Examples
///
/// ```
/// use route_ranker::domain::{RouteId, RouteRecord, StationId};
///
/// let record = RouteRecord::new(
///     RouteId::from(1177),
///     StationId::from(1902),
///     StationId::from(1929),
///     164.52,
///     3600,
/// )
/// .unwrap();
/// assert_eq!(record.price(), 164.52);
///
/// assert!(RouteRecord::new(
///     RouteId::from(1),
///     StationId::from(1),
///     StationId::from(2),
///     -1.0,
///     0,
/// )
/// .is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRecord {
    route: RouteId,
    origin: StationId,
    destination: StationId,
    price: f64,
    duration_secs: i64,
}

impl RouteRecord {
    /// Create a record, validating its costs.
    pub fn new(
        route: RouteId,
        origin: StationId,
        destination: StationId,
        price: f64,
        duration_secs: i64,
    ) -> Result<Self, InvalidRecord> {
        if !price.is_finite() || price < 0.0 {
            return Err(InvalidRecord::Price(price));
        }
        if duration_secs < 0 {
            return Err(InvalidRecord::Duration(duration_secs));
        }

        Ok(Self {
            route,
            origin,
            destination,
            price,
            duration_secs,
        })
    }

    pub fn route(&self) -> RouteId {
        self.route
    }

    pub fn origin(&self) -> StationId {
        self.origin
    }

    pub fn destination(&self) -> StationId {
        self.destination
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn duration_secs(&self) -> i64 {
        self.duration_secs
    }
}
