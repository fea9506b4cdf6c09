//! Greedy nearest-unvisited-neighbour walk.
//!
//! From a start station the walk always takes the cheapest edge to a
//! station it has not visited yet. It never revisits a choice, so it can
//! miss a complete route that exists via another visiting order, or report
//! a more expensive one than the best. That heuristic behaviour is the
//! contract: callers rank what the walk finds, they don't expect optimality.

use crate::graph::{Weight, WeightMatrix};

/// A complete walk over every station.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Sum of the edge weights along `path`.
    pub total_cost: f64,

    /// Station indices in visiting order, starting at the start station.
    pub path: Vec<usize>,
}

impl PathResult {
    /// The station the walk started from.
    pub fn start(&self) -> Option<usize> {
        self.path.first().copied()
    }
}

/// Walk greedily from `start` until every station is visited.
///
/// Returns `None` when the walk gets stuck: every unvisited station is
/// unreachable from the current one. A start outside the matrix also
/// yields `None`.
pub fn find_best(matrix: &WeightMatrix, start: usize) -> Option<PathResult> {
    let n = matrix.size();
    if start >= n {
        return None;
    }

    let mut visited = vec![false; n];
    let mut path = Vec::with_capacity(n);
    let mut total_cost = 0.0;
    let mut current = start;

    loop {
        visited[current] = true;
        path.push(current);

        if path.len() == n {
            return Some(PathResult { total_cost, path });
        }

        let (next, weight) = nearest_unvisited(matrix.row(current), &visited)?;
        total_cost += weight;
        current = next;
    }
}

/// Cheapest reachable unvisited destination in `row`.
///
/// Scans left to right and only replaces the best on a strictly smaller
/// weight, so ties go to the lowest index.
fn nearest_unvisited(row: &[Weight], visited: &[bool]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;

    for (candidate, &weight) in row.iter().enumerate() {
        if visited[candidate] {
            continue;
        }
        let Some(w) = weight.value() else {
            continue;
        };
        if best.is_none_or(|(_, best_w)| w < best_w) {
            best = Some((candidate, w));
        }
    }

    best
}
