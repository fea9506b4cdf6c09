//! Schedule loading.
//!
//! Reads the semicolon-delimited schedule file, one direct trip per line:
//!
//! ```text
//! route_id;origin_id;destination_id;price;departure;arrival
//! ```
//!
//! and turns it into validated [`RouteRecord`]s plus the station index the
//! graph is built over.

mod error;
mod parse;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

pub use error::{RowError, ScheduleError};
pub use parse::{clean_field, parse_row};

use crate::domain::RouteRecord;
use crate::graph::StationIndex;

/// A loaded schedule: records in file order and their station index.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    records: Vec<RouteRecord>,
    index: StationIndex,
}

impl Schedule {
    /// Wrap already-validated records.
    pub fn from_records(records: Vec<RouteRecord>) -> Self {
        let index = StationIndex::from_records(&records);
        Self { records, index }
    }

    /// Read a schedule from delimited text.
    ///
    /// Blank and whitespace-only lines are skipped. Any other line must be
    /// a valid row; the first bad one aborts the load with its line number.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ScheduleError> {
        let mut rows = csv::ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::new();
        for row in rows.records() {
            let row = row?;
            let line = row.position().map_or(0, |p| p.line());

            let fields: Vec<&str> = row.iter().collect();
            if fields.len() == 1 && fields[0].trim().is_empty() {
                debug!(line, "skipping blank line");
                continue;
            }

            let record =
                parse_row(&fields).map_err(|source| ScheduleError::Row { line, source })?;
            records.push(record);
        }

        let schedule = Self::from_records(records);
        info!(
            records = schedule.records.len(),
            stations = schedule.index.len(),
            "loaded schedule"
        );
        Ok(schedule)
    }

    /// Load a schedule file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ScheduleError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "reading schedule");
        Self::from_reader(file)
    }

    /// Records in file order.
    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    pub fn index(&self) -> &StationIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
