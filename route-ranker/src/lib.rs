//! Greedy route ranking over a travel schedule.
//!
//! Loads a semicolon-delimited schedule of direct trips, builds one
//! cheapest-edge matrix per cost dimension (price and travel time), walks
//! greedily from every station and ranks the walks that visit them all.

pub mod app;
pub mod domain;
pub mod graph;
pub mod planner;
pub mod report;
pub mod schedule;
