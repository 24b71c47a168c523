//! Greedy threshold merge over globally sorted edges.
//!
//! Edges are visited once each in non-decreasing weight order. An edge joins
//! two components only when its weight is strictly below the smaller of the
//! two adaptive thresholds `internal_difference + k / size`. Because the
//! forest state feeds every subsequent threshold, the scan is strictly
//! sequential.

use crate::{forest::DisjointSetForest, graph::Edge};

/// How the size bonus `k / size` is computed.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ThresholdDivision {
    /// `floor(k / size)`. Matches integer floor division of the granularity
    /// by the component size.
    #[default]
    Floor,
    /// `k / size` as a real number.
    Real,
}

/// Adaptive merge threshold parameters.
///
/// # Examples
/// ```
/// use seggraph_core::{MergeThreshold, ThresholdDivision};
///
/// let floor = MergeThreshold::new(500.0, ThresholdDivision::Floor);
/// assert_eq!(floor.bonus(3), 166.0);
/// assert_eq!(floor.tau(2.0, 1_000), 2.0);
///
/// let real = MergeThreshold::new(500.0, ThresholdDivision::Real);
/// assert_eq!(real.bonus(1_000), 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MergeThreshold {
    granularity: f64,
    division: ThresholdDivision,
}

impl MergeThreshold {
    /// Creates a threshold for granularity `k`.
    #[must_use]
    pub const fn new(granularity: f64, division: ThresholdDivision) -> Self {
        Self {
            granularity,
            division,
        }
    }

    /// The granularity parameter `k`.
    #[must_use]
    #[rustfmt::skip]
    pub fn granularity(&self) -> f64 { self.granularity }

    /// The configured division mode.
    #[must_use]
    #[rustfmt::skip]
    pub fn division(&self) -> ThresholdDivision { self.division }

    /// Size bonus added to a component's internal difference.
    #[must_use]
    pub fn bonus(&self, size: usize) -> f64 {
        let quotient = self.granularity / size as f64;
        match self.division {
            ThresholdDivision::Floor => quotient.floor(),
            ThresholdDivision::Real => quotient,
        }
    }

    /// Merge threshold of a component with the given statistics.
    #[must_use]
    pub fn tau(&self, max_internal: f64, size: usize) -> f64 {
        max_internal + self.bonus(size)
    }
}

/// Counters describing one merge pass.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MergeStats {
    /// Edges visited.
    pub edges_considered: usize,
    /// Edges that joined two components.
    pub merges: usize,
    /// Edges between distinct components that failed the threshold test.
    pub rejected: usize,
    /// Edges whose endpoints already shared a component.
    pub skipped_same_component: usize,
}

/// Sorts `edges` ascending by weight.
///
/// The sort is stable: equal weights keep their emission order, so a source's
/// tied edges are visited in [`NEIGHBOUR_OFFSETS`](crate::NEIGHBOUR_OFFSETS)
/// order. Under floor division the threshold depends on component size at the
/// moment an edge is visited, so this order decides which pixels merge.
pub fn sort_edges(edges: &mut [Edge]) {
    edges.sort_by(|left, right| left.weight().total_cmp(&right.weight()));
}

/// Runs the greedy merge over `edges`, which must already be sorted by
/// [`sort_edges`].
///
/// # Examples
/// ```
/// use seggraph_core::{
///     DisjointSetForest, Edge, MergeThreshold, ThresholdDivision, merge_sorted_edges,
/// };
///
/// let mut forest = DisjointSetForest::new(3);
/// let edges = [Edge::new(0, 1, 1.0), Edge::new(1, 2, 50.0)];
/// let stats = merge_sorted_edges(
///     &mut forest,
///     &edges,
///     MergeThreshold::new(10.0, ThresholdDivision::Floor),
/// );
/// assert_eq!(stats.merges, 1);
/// assert_eq!(stats.rejected, 1);
/// assert_eq!(forest.component_count(), 2);
/// ```
pub fn merge_sorted_edges(
    forest: &mut DisjointSetForest,
    edges: &[Edge],
    threshold: MergeThreshold,
) -> MergeStats {
    let mut stats = MergeStats::default();
    for edge in edges {
        stats.edges_considered += 1;

        let left = forest.find(edge.source());
        let right = forest.find(edge.target());
        if left == right {
            stats.skipped_same_component += 1;
            continue;
        }

        let left_tau = threshold.tau(forest.max_internal_weight(left), forest.size(left));
        let right_tau = threshold.tau(forest.max_internal_weight(right), forest.size(right));

        if edge.weight() < left_tau.min(right_tau) {
            forest.union(edge.source(), edge.target(), edge.weight());
            stats.merges += 1;
        } else {
            stats.rejected += 1;
        }
    }
    stats
}

#[cfg(test)]
mod property;
