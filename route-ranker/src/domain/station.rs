//! Station and route identifier types.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} id: {reason}")]
pub struct InvalidId {
    kind: &'static str,
    reason: &'static str,
}

fn parse_numeric_id(s: &str, kind: &'static str) -> Result<u64, InvalidId> {
    if s.is_empty() {
        return Err(InvalidId {
            kind,
            reason: "cannot be empty",
        });
    }

    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidId {
            kind,
            reason: "must contain only ASCII digits",
        });
    }

    s.parse().map_err(|_| InvalidId {
        kind,
        reason: "does not fit in 64 bits",
    })
}

/// A station identifier from the schedule file.
///
/// Station ids arrive as numeric tokens but are only ever compared for
/// identity and printed back out. Arithmetic on them is meaningless, so
/// the inner value is not exposed as a number.
///
/// # Examples
///
/// ```
/// use route_ranker::domain::StationId;
///
/// let id = StationId::parse("1909").unwrap();
/// assert_eq!(id.to_string(), "1909");
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("-4").is_err());
/// assert!(StationId::parse("KGX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StationId(u64);

impl StationId {
    /// Parse a station id from a string of ASCII digits.
    pub fn parse(s: &str) -> Result<Self, InvalidId> {
        parse_numeric_id(s, "station").map(StationId)
    }
}

impl From<u64> for StationId {
    fn from(raw: u64) -> Self {
        StationId(raw)
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A route (train number) identifier from the schedule file.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteId(u64);

impl RouteId {
    /// Parse a route id from a string of ASCII digits.
    pub fn parse(s: &str) -> Result<Self, InvalidId> {
        parse_numeric_id(s, "route").map(RouteId)
    }
}

impl From<u64> for RouteId {
    fn from(raw: u64) -> Self {
        RouteId(raw)
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
