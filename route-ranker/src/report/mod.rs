//! Rendering of ranked routes.
//!
//! Text output is one line per route, `rank. Cost: value Path: a -> b`,
//! under a header per cost dimension. JSON output is an array of
//! [`PassReport`]s.

mod dto;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

pub use dto::{Cost, PassReport, RouteReport};

use crate::graph::{Dimension, StationIndex};
use crate::planner::RankingPass;

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Error returned when an output format name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid output format {0:?}: expected \"text\" or \"json\"")]
pub struct InvalidFormat(String);

impl FromStr for OutputFormat {
    type Err = InvalidFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Errors writing a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{dimension} route ranked {rank} refers to a station outside the schedule")]
    UnknownStation { dimension: Dimension, rank: usize },
}

/// Write `passes` to `out` in `format`.
pub fn render<W: Write>(
    out: &mut W,
    passes: &[RankingPass],
    index: &StationIndex,
    format: OutputFormat,
) -> Result<(), ReportError> {
    let reports = passes
        .iter()
        .map(|p| PassReport::new(p, index))
        .collect::<Result<Vec<_>, _>>()?;

    match format {
        OutputFormat::Text => write_text(out, &reports)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &reports)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

fn header(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Price => "Best routes by price:",
        Dimension::Duration => "Best routes by duration:",
    }
}

fn write_text<W: Write>(out: &mut W, reports: &[PassReport]) -> std::io::Result<()> {
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", header(report.dimension))?;

        if report.routes.is_empty() {
            writeln!(out, "(no complete routes)")?;
            continue;
        }

        for route in &report.routes {
            writeln!(out, "{}", format_route(route))?;
        }
    }
    Ok(())
}

/// Format one ranked route as a text line.
///
/// ```
/// use route_ranker::domain::StationId;
/// use route_ranker::report::{Cost, RouteReport, format_route};
///
/// let route = RouteReport {
///     rank: 1,
///     cost: Cost::Price(15.0),
///     path: vec![StationId::from(1), StationId::from(2)],
/// };
/// assert_eq!(format_route(&route), "1. Price: 15.00 Path: 1 -> 2");
/// ```
pub fn format_route(route: &RouteReport) -> String {
    let path = route
        .path
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ");

    match route.cost {
        Cost::Price(price) => format!("{}. Price: {:.2} Path: {}", route.rank, price, path),
        Cost::Seconds(secs) => format!("{}. Time (s): {} Path: {}", route.rank, secs, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RouteId, RouteRecord, StationId};
    use crate::planner::PathResult;

    fn index() -> StationIndex {
        let records = [RouteRecord::new(
            RouteId::from(1),
            StationId::from(10),
            StationId::from(20),
            1.0,
            1,
        )
        .unwrap()];
        StationIndex::from_records(&records)
    }

    fn render_to_string(passes: &[RankingPass], format: OutputFormat) -> String {
        let mut out = Vec::new();
        render(&mut out, passes, &index(), format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn format_from_str() {
        assert_eq!("text".parse(), Ok(OutputFormat::Text));
        assert_eq!("json".parse(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn text_report() {
        let passes = vec![
            RankingPass {
                dimension: Dimension::Price,
                routes: vec![
                    PathResult {
                        total_cost: 164.5,
                        path: vec![0, 1],
                    },
                    PathResult {
                        total_cost: 200.125,
                        path: vec![1, 0],
                    },
                ],
                skipped: 0,
            },
            RankingPass {
                dimension: Dimension::Duration,
                routes: vec![],
                skipped: 2,
            },
        ];

        assert_eq!(
            render_to_string(&passes, OutputFormat::Text),
            "Best routes by price:\n\
             1. Price: 164.50 Path: 10 -> 20\n\
             2. Price: 200.13 Path: 20 -> 10\n\
             \n\
             Best routes by duration:\n\
             (no complete routes)\n"
        );
    }

    #[test]
    fn duration_line() {
        let route = RouteReport {
            rank: 3,
            cost: Cost::Seconds(5400),
            path: vec![StationId::from(1), StationId::from(2), StationId::from(3)],
        };
        assert_eq!(format_route(&route), "3. Time (s): 5400 Path: 1 -> 2 -> 3");
    }

    #[test]
    fn json_report() {
        let passes = vec![RankingPass {
            dimension: Dimension::Price,
            routes: vec![PathResult {
                total_cost: 7.0,
                path: vec![0, 1],
            }],
            skipped: 1,
        }];

        let text = render_to_string(&passes, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["dimension"], "price");
        assert_eq!(value[0]["routes"][0]["cost"], 7.0);
        assert_eq!(value[0]["routes"][0]["path"], serde_json::json!([10, 20]));
        assert_eq!(value[0]["skipped"], 1);
    }

    #[test]
    fn bad_index_writes_nothing() {
        let passes = vec![RankingPass {
            dimension: Dimension::Duration,
            routes: vec![PathResult {
                total_cost: 60.0,
                path: vec![0, 5],
            }],
            skipped: 0,
        }];

        let mut out = Vec::new();
        let err = render(&mut out, &passes, &index(), OutputFormat::Text).unwrap_err();
        assert!(matches!(err, ReportError::UnknownStation { rank: 1, .. }));
        assert!(out.is_empty());
    }
}
