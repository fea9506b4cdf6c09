//! Serializable views of ranking results.

use serde::Serialize;

use crate::domain::StationId;
use crate::graph::{Dimension, StationIndex};
use crate::planner::{PathResult, RankingPass};

use super::ReportError;

/// One ranking pass, with paths translated back to station ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassReport {
    /// Cost dimension ("price" or "duration")
    pub dimension: Dimension,

    /// Ranked routes, best first
    pub routes: Vec<RouteReport>,

    /// Start stations with no complete route
    pub skipped: usize,
}

/// A ranked route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    /// 1-based rank
    pub rank: usize,

    /// Total cost along the route
    pub cost: Cost,

    /// Stations in visiting order
    pub path: Vec<StationId>,
}

/// A total cost in the unit of its dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cost {
    /// Price, rounded to cents
    Price(f64),
    /// Whole seconds
    Seconds(i64),
}

impl Cost {
    pub fn new(dimension: Dimension, total: f64) -> Self {
        match dimension {
            Dimension::Price => Cost::Price((total * 100.0).round() / 100.0),
            Dimension::Duration => Cost::Seconds(total.round() as i64),
        }
    }
}

impl RouteReport {
    fn from_result(
        rank: usize,
        dimension: Dimension,
        result: &PathResult,
        index: &StationIndex,
    ) -> Result<Self, ReportError> {
        let path = index
            .resolve(&result.path)
            .ok_or(ReportError::UnknownStation { dimension, rank })?;

        Ok(Self {
            rank,
            cost: Cost::new(dimension, result.total_cost),
            path,
        })
    }
}

impl PassReport {
    /// Build the report for `pass`, resolving indices through `index`.
    ///
    /// Fails if a path holds an index that `index` doesn't know, which
    /// means the pass was ranked over a different schedule.
    pub fn new(pass: &RankingPass, index: &StationIndex) -> Result<Self, ReportError> {
        let routes = pass
            .routes
            .iter()
            .enumerate()
            .map(|(i, result)| RouteReport::from_result(i + 1, pass.dimension, result, index))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            dimension: pass.dimension,
            routes,
            skipped: pass.skipped,
        })
    }
}
