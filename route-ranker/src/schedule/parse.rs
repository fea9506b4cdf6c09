//! Row normalisation: raw text fields to a validated record.

use crate::domain::{RouteId, RouteRecord, ScheduleTime, StationId};

use super::error::RowError;

/// Strip whitespace and stray braces from a raw field.
///
/// Exported schedules sometimes wrap rows in `{ ... }`.
pub fn clean_field(raw: &str) -> &str {
    raw.trim()
        .trim_matches(|c| c == '{' || c == '}')
        .trim()
}

/// Parse one row of `route;origin;destination;price;departure;arrival`.
///
/// Fields are cleaned with [`clean_field`] first. The record's duration is
/// the departure-to-arrival time, wrapping past midnight.
///
/// ```
/// use route_ranker::schedule::parse_row;
///
/// let record = parse_row(&["1177", "1902", "1929", "164.52", "10:00:00", "12:30:00"]).unwrap();
/// assert_eq!(record.price(), 164.52);
/// assert_eq!(record.duration_secs(), 9000);
/// ```
pub fn parse_row(fields: &[&str]) -> Result<RouteRecord, RowError> {
    let [route, origin, destination, price, departure, arrival] = fields else {
        return Err(RowError::FieldCount(fields.len()));
    };

    let route = RouteId::parse(clean_field(route))?;
    let origin = StationId::parse(clean_field(origin))?;
    let destination = StationId::parse(clean_field(destination))?;

    let price_str = clean_field(price);
    let price: f64 = price_str
        .parse()
        .map_err(|_| RowError::Price(price_str.to_string()))?;

    let departure = parse_time(departure, "departure")?;
    let arrival = parse_time(arrival, "arrival")?;

    Ok(RouteRecord::new(
        route,
        origin,
        destination,
        price,
        departure.travel_secs_to(arrival),
    )?)
}

fn parse_time(raw: &str, field: &'static str) -> Result<ScheduleTime, RowError> {
    ScheduleTime::parse(clean_field(raw)).map_err(|source| RowError::Time { field, source })
}
