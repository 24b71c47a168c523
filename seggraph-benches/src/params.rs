//! Benchmark parameter labels.

use std::fmt;

/// Image size for a graph-construction benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GridBenchParams {
    /// Number of rows.
    pub height: usize,
    /// Number of columns.
    pub width: usize,
}

impl fmt::Display for GridBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// Image size and granularity for a merge benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct MergeBenchParams {
    /// Image size.
    pub grid: GridBenchParams,
    /// Granularity `k`.
    pub granularity: f64,
}

impl fmt::Display for MergeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},k={}", self.grid, self.granularity)
    }
}
