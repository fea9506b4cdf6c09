//! Schedule time handling.
//!
//! The schedule carries departure and arrival times as "HH:MM:SS" strings
//! with no date. Trips that arrive earlier in the day than they depart are
//! overnight trips that arrive on the following day.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Seconds in one day; travel durations are always below this.
const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day from the schedule, with minute resolution.
///
/// # Examples
///
/// ```
/// use route_ranker::domain::ScheduleTime;
///
/// let time = ScheduleTime::parse("14:30:00").unwrap();
/// assert_eq!(time.to_string(), "14:30:00");
///
/// // Seconds must be zero
/// assert!(ScheduleTime::parse("14:30:15").is_err());
/// assert!(ScheduleTime::parse("14:30").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScheduleTime(NaiveTime);

impl ScheduleTime {
    /// Parse a time from "HH:MM:00" format.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let time = NaiveTime::parse_from_str(s, "%H:%M:%S")
            .map_err(|_| TimeError::new("expected HH:MM:SS format"))?;

        // Schedules are published at minute resolution
        if time.second() != 0 {
            return Err(TimeError::new("seconds must be 00"));
        }

        Ok(Self(time))
    }

    #[cfg(test)]
    fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Seconds since midnight.
    pub fn seconds_from_midnight(&self) -> i64 {
        i64::from(self.0.num_seconds_from_midnight())
    }

    /// Travel time in seconds from this departure to `arrival`.
    ///
    /// An arrival earlier than the departure is taken to be on the next
    /// day, so the result is always in `[0, 86400)`.
    ///
    /// ```
    /// use route_ranker::domain::ScheduleTime;
    ///
    /// let dep = ScheduleTime::parse("23:30:00").unwrap();
    /// let arr = ScheduleTime::parse("00:45:00").unwrap();
    /// assert_eq!(dep.travel_secs_to(arr), 75 * 60);
    /// ```
    pub fn travel_secs_to(&self, arrival: ScheduleTime) -> i64 {
        let diff = arrival.seconds_from_midnight() - self.seconds_from_midnight();
        diff.rem_euclid(SECONDS_PER_DAY)
    }
}

impl fmt::Debug for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScheduleTime({})", self.0.format("%H:%M:%S"))
    }
}

impl fmt::Display for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M:%S"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ScheduleTime {
        ScheduleTime::parse(s).unwrap()
    }

    #[test]
    fn parse_valid() {
        assert_eq!(t("00:00:00").seconds_from_midnight(), 0);
        assert_eq!(t("23:59:00").seconds_from_midnight(), SECONDS_PER_DAY - 60);
        assert_eq!(t("14:30:00").seconds_from_midnight(), 14 * 3600 + 30 * 60);
    }

    #[test]
    fn reject_bad_format() {
        assert!(ScheduleTime::parse("").is_err());
        assert!(ScheduleTime::parse("14:30").is_err());
        assert!(ScheduleTime::parse("1430").is_err());
        assert!(ScheduleTime::parse("25:00:00").is_err());
        assert!(ScheduleTime::parse("12:60:00").is_err());
        assert!(ScheduleTime::parse("ab:cd:00").is_err());
    }

    #[test]
    fn reject_non_zero_seconds() {
        let err = ScheduleTime::parse("10:00:30").unwrap_err();
        assert_eq!(err.to_string(), "invalid time: seconds must be 00");
    }

    #[test]
    fn same_day_travel() {
        assert_eq!(t("10:00:00").travel_secs_to(t("12:15:00")), 2 * 3600 + 15 * 60);
    }

    #[test]
    fn overnight_travel_wraps() {
        assert_eq!(t("22:00:00").travel_secs_to(t("01:00:00")), 3 * 3600);
    }

    #[test]
    fn equal_times_are_zero() {
        assert_eq!(t("08:00:00").travel_secs_to(t("08:00:00")), 0);
    }

    #[test]
    fn from_hm_range() {
        assert_eq!(ScheduleTime::from_hm(9, 5), Some(t("09:05:00")));
        assert!(ScheduleTime::from_hm(24, 0).is_none());
        assert!(ScheduleTime::from_hm(0, 60).is_none());
    }

    #[test]
    fn display_and_debug() {
        let time = t("07:45:00");
        assert_eq!(time.to_string(), "07:45:00");
        assert_eq!(format!("{time:?}"), "ScheduleTime(07:45:00)");
    }
}
