//! Ranking of greedy walks across every start station.

use std::cmp::Ordering;

use tracing::{debug, trace};

use super::config::RankConfig;
use super::greedy::{PathResult, find_best};
use crate::graph::{Dimension, WeightMatrix};
use crate::schedule::Schedule;

/// Walk from every station in index order and rank the complete walks.
///
/// Starts whose walk gets stuck are dropped. The rest are sorted by total
/// cost, cheapest first. The sort is stable, so equal costs stay in
/// start-index order.
pub fn rank_paths(matrix: &WeightMatrix) -> Vec<PathResult> {
    let mut results: Vec<PathResult> = (0..matrix.size())
        .filter_map(|start| {
            let result = find_best(matrix, start);
            if result.is_none() {
                trace!(start, dimension = %matrix.dimension(), "no complete walk");
            }
            result
        })
        .collect();

    results.sort_by(|a, b| {
        a.total_cost
            .partial_cmp(&b.total_cost)
            .unwrap_or(Ordering::Equal)
    });

    results
}

/// The outcome of ranking one cost dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingPass {
    /// Dimension the routes were weighted by.
    pub dimension: Dimension,

    /// Complete routes, cheapest first.
    pub routes: Vec<PathResult>,

    /// Number of start stations whose walk got stuck.
    pub skipped: usize,
}

/// Build the matrix for `dimension` and rank every start station.
pub fn rank_schedule(
    schedule: &Schedule,
    dimension: Dimension,
    config: &RankConfig,
) -> RankingPass {
    let matrix = WeightMatrix::build(schedule.index(), schedule.records(), dimension);
    let mut routes = rank_paths(&matrix);
    let skipped = matrix.size() - routes.len();

    debug!(
        %dimension,
        stations = matrix.size(),
        complete = routes.len(),
        skipped,
        "ranked greedy walks"
    );

    if let Some(max) = config.max_results {
        routes.truncate(max);
    }

    RankingPass {
        dimension,
        routes,
        skipped,
    }
}

/// Run one pass per configured dimension, in configured order.
pub fn rank_all(schedule: &Schedule, config: &RankConfig) -> Vec<RankingPass> {
    config
        .dimensions
        .iter()
        .map(|&dimension| rank_schedule(schedule, dimension, config))
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::graph::Weight;
    use proptest::prelude::*;

    fn matrix_strategy() -> impl Strategy<Value = WeightMatrix> {
        (0usize..6).prop_flat_map(|n| {
            proptest::collection::vec(
                proptest::collection::vec(proptest::option::weighted(0.8, 0u8..10), n),
                n,
            )
            .prop_map(|rows| {
                let rows = rows
                    .into_iter()
                    .map(|row| {
                        row.into_iter()
                            .map(|cell| {
                                cell.map_or(Weight::Unreachable, |v| Weight::Finite(f64::from(v)))
                            })
                            .collect()
                    })
                    .collect();
                WeightMatrix::from_rows(Dimension::Price, rows).unwrap()
            })
        })
    }

    proptest! {
        /// Output is sorted, and ties are in start order
        #[test]
        fn sorted_and_stable(m in matrix_strategy()) {
            let ranked = rank_paths(&m);
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].total_cost <= pair[1].total_cost);
                if pair[0].total_cost == pair[1].total_cost {
                    prop_assert!(pair[0].start() < pair[1].start());
                }
            }
        }

        /// Exactly the starts with a complete walk appear, once each
        #[test]
        fn one_entry_per_successful_start(m in matrix_strategy()) {
            let ranked = rank_paths(&m);
            let expected: Vec<usize> = (0..m.size())
                .filter(|&s| find_best(&m, s).is_some())
                .collect();

            let mut starts: Vec<usize> = ranked.iter().filter_map(PathResult::start).collect();
            starts.sort_unstable();
            prop_assert_eq!(starts, expected);
        }
    }
}
