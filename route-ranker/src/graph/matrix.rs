//! Minimum-weight adjacency matrix over indexed stations.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, warn};

use super::index::StationIndex;
use crate::domain::RouteRecord;

/// Which cost a matrix is weighted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Ticket price
    Price,
    /// Travel time in seconds
    Duration,
}

impl Dimension {
    /// Both dimensions, in report order.
    pub const ALL: [Dimension; 2] = [Dimension::Price, Dimension::Duration];

    /// This dimension's weight for `record`.
    pub fn weight_of(self, record: &RouteRecord) -> f64 {
        match self {
            Dimension::Price => record.price(),
            Dimension::Duration => record.duration_secs() as f64,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Price => "price",
            Dimension::Duration => "duration",
        }
    }
}

/// Error returned when a dimension name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid cost dimension {0:?}: expected \"price\" or \"duration\"")]
pub struct InvalidDimension(String);

impl FromStr for Dimension {
    type Err = InvalidDimension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(Dimension::Price),
            "duration" => Ok(Dimension::Duration),
            other => Err(InvalidDimension(other.to_string())),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An edge weight, or the absence of an edge.
///
/// `Unreachable` sorts after every finite weight, zero included.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Weight {
    Finite(f64),
    Unreachable,
}

impl Weight {
    /// The finite value, if there is an edge.
    pub fn value(self) -> Option<f64> {
        match self {
            Weight::Finite(w) => Some(w),
            Weight::Unreachable => None,
        }
    }
}

/// Error returned when building a matrix from explicit rows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("matrix is not square: row {row} has {found} cells, expected {expected}")]
pub struct MatrixError {
    row: usize,
    expected: usize,
    found: usize,
}

/// N×N matrix of the cheapest direct edge between each pair of stations.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    dimension: Dimension,
    size: usize,
    /// Row-major, `size * size` cells.
    cells: Vec<Weight>,
}

impl WeightMatrix {
    /// Build the matrix for `dimension` from every record.
    ///
    /// Each cell keeps the smallest weight seen for that (origin,
    /// destination) pair. A later record only replaces the stored weight
    /// when it is strictly smaller.
    ///
    /// `index` must cover every station in `records`, as one built by
    /// [`StationIndex::from_records`] over the same records does. Debug
    /// builds panic otherwise; release builds log a warning and leave the
    /// record out.
    pub fn build(index: &StationIndex, records: &[RouteRecord], dimension: Dimension) -> Self {
        let size = index.len();
        let mut cells = vec![Weight::Unreachable; size * size];

        for record in records {
            let origin = index.index_of(record.origin());
            let destination = index.index_of(record.destination());
            debug_assert!(
                origin.is_some() && destination.is_some(),
                "route {} references a station missing from the index",
                record.route()
            );

            let (Some(i), Some(j)) = (origin, destination) else {
                warn!(route = %record.route(), "record references unindexed station, skipping");
                continue;
            };

            let w = Weight::Finite(dimension.weight_of(record));
            let cell = &mut cells[i * size + j];
            if w < *cell {
                *cell = w;
            }
        }

        debug!(%dimension, stations = size, records = records.len(), "built weight matrix");

        Self {
            dimension,
            size,
            cells,
        }
    }

    /// Build a matrix from explicit rows.
    pub fn from_rows(dimension: Dimension, rows: Vec<Vec<Weight>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);

        for (row, weights) in rows.into_iter().enumerate() {
            if weights.len() != size {
                return Err(MatrixError {
                    row,
                    expected: size,
                    found: weights.len(),
                });
            }
            cells.extend(weights);
        }

        Ok(Self {
            dimension,
            size,
            cells,
        })
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Number of stations (rows and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Weight of the edge `from -> to`.
    ///
    /// Out-of-range indices are `Unreachable`.
    pub fn weight(&self, from: usize, to: usize) -> Weight {
        if from >= self.size || to >= self.size {
            return Weight::Unreachable;
        }
        self.cells[from * self.size + to]
    }

    /// Outgoing weights from `from`, indexed by destination.
    pub fn row(&self, from: usize) -> &[Weight] {
        if from >= self.size {
            return &[];
        }
        &self.cells[from * self.size..(from + 1) * self.size]
    }
}
