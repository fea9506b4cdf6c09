//! Ranking configuration.

use crate::graph::Dimension;

/// Configuration parameters for a ranking run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankConfig {
    /// Cost dimensions to rank by, one pass each, in this order.
    pub dimensions: Vec<Dimension>,

    /// Maximum number of routes to keep per pass.
    /// `None` keeps every complete route.
    pub max_results: Option<usize>,
}

impl RankConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(dimensions: Vec<Dimension>, max_results: Option<usize>) -> Self {
        Self {
            dimensions,
            max_results,
        }
    }

    /// Rank by these dimensions instead.
    pub fn with_dimensions(mut self, dimensions: Vec<Dimension>) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Keep at most `max_results` routes per pass.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            // Price first, then duration
            dimensions: Dimension::ALL.to_vec(),
            max_results: None,
        }
    }
}
