//! Schedule loading error types.

use std::path::PathBuf;

use crate::domain::{InvalidId, InvalidRecord, TimeError};

/// Errors in a single schedule row.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RowError {
    /// Row doesn't have exactly six fields
    #[error("expected 6 fields, found {0}")]
    FieldCount(usize),

    /// Route or station id is not a non-negative integer
    #[error(transparent)]
    Id(#[from] InvalidId),

    /// Price is not a number
    #[error("invalid price {0:?}")]
    Price(String),

    /// Departure or arrival time is malformed
    #[error("{field}: {source}")]
    Time {
        field: &'static str,
        #[source]
        source: TimeError,
    },

    /// Parsed values are out of range
    #[error(transparent)]
    Record(#[from] InvalidRecord),
}

/// Errors that can occur when loading a schedule.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// The schedule file couldn't be opened
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading or splitting the delimited text failed
    #[error("malformed schedule: {0}")]
    Csv(#[from] csv::Error),

    /// A row has bad content
    #[error("line {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: RowError,
    },
}
