//! Station graph construction.
//!
//! Stations are mapped to dense indices, and each cost dimension gets its
//! own independent matrix holding the cheapest direct edge per pair.

mod index;
mod matrix;

pub use index::StationIndex;
pub use matrix::{Dimension, InvalidDimension, MatrixError, Weight, WeightMatrix};
