//! End-to-end ranking run: load, rank every dimension, render.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::planner::{RankConfig, rank_all};
use crate::report::{OutputFormat, ReportError, render};
use crate::schedule::{Schedule, ScheduleError};

/// Errors from a full ranking run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Rank an already-loaded schedule and write the report to `out`.
pub fn rank_and_render<W: Write>(
    schedule: &Schedule,
    config: &RankConfig,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), ReportError> {
    let passes = rank_all(schedule, config);
    for pass in &passes {
        info!(
            dimension = %pass.dimension,
            routes = pass.routes.len(),
            skipped = pass.skipped,
            "ranking pass complete"
        );
    }
    render(out, &passes, schedule.index(), format)
}

/// Load the schedule at `path`, rank it and write the report to `out`.
pub fn run<W: Write>(
    path: impl AsRef<Path>,
    config: &RankConfig,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), RunError> {
    let schedule = Schedule::load(path)?;
    rank_and_render(&schedule, config, format, out)?;
    Ok(())
}
