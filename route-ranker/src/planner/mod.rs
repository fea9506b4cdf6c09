//! Route planning by greedy walk.
//!
//! For every start station this module walks the weight matrix, always
//! moving to the cheapest unvisited neighbour, and ranks the walks that
//! manage to visit every station.

mod config;
mod greedy;
mod rank;

pub use config::RankConfig;
pub use greedy::{PathResult, find_best};
pub use rank::{RankingPass, rank_all, rank_paths, rank_schedule};
