//! Segmentation entry point.
//!
//! Provides the [`Segmenter`] runtime, which builds the pixel graph, sorts its
//! edges, runs the greedy merge and freezes the resulting forest.

use tracing::{debug_span, info, instrument, warn};

use crate::{
    Result,
    error::SegmentationError,
    forest::DisjointSetForest,
    graph::{Neighbourhood, PixelGraph},
    merge::{MergeThreshold, ThresholdDivision, merge_sorted_edges, sort_edges},
    pixels::PixelGrid,
    segmentation::Segmentation,
};

/// Runs graph-based segmentation with a fixed configuration.
///
/// Each call to [`Segmenter::run`] owns all of its state, so a single
/// segmenter can be shared across threads and reused for many images.
///
/// # Examples
/// ```
/// use seggraph_core::{Color, PixelGrid, SegmenterBuilder};
///
/// let grid = PixelGrid::from_fn(3, 3, |_, _| Color::new(7, 7, 7)).expect("valid grid");
/// let segmentation = SegmenterBuilder::new()
///     .with_granularity(0.0)
///     .build()
///     .expect("zero granularity is valid")
///     .run(&grid)
///     .expect("3x3 grids are accepted");
/// assert_eq!(segmentation.component_count(), 9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Segmenter {
    threshold: MergeThreshold,
    neighbourhood: Neighbourhood,
}

impl Segmenter {
    pub(crate) fn new(threshold: MergeThreshold, neighbourhood: Neighbourhood) -> Self {
        Self {
            threshold,
            neighbourhood,
        }
    }

    /// Returns the granularity `k`.
    #[must_use]
    pub fn granularity(&self) -> f64 {
        self.threshold.granularity()
    }

    /// Returns the threshold division mode.
    #[must_use]
    pub fn threshold_division(&self) -> ThresholdDivision {
        self.threshold.division()
    }

    /// Returns the neighbourhood policy.
    #[must_use]
    pub fn neighbourhood(&self) -> Neighbourhood {
        self.neighbourhood
    }

    /// Segments `grid`.
    ///
    /// # Errors
    /// Returns [`SegmentationError::EmptyImage`] when the grid has no pixels
    /// and [`SegmentationError::InsufficientDimensions`] when either side is
    /// shorter than the neighbourhood's minimum (3 for
    /// [`Neighbourhood::InteriorSources`]).
    #[instrument(
        name = "core.run",
        err,
        skip(self, grid),
        fields(
            height = grid.height(),
            width = grid.width(),
            granularity = self.threshold.granularity(),
            division = ?self.threshold.division(),
            neighbourhood = ?self.neighbourhood,
        ),
    )]
    pub fn run(&self, grid: &PixelGrid) -> Result<Segmentation> {
        if grid.is_empty() {
            warn!("image is empty, returning error");
            return Err(SegmentationError::EmptyImage);
        }
        let minimum = self.neighbourhood.minimum_side();
        if grid.height() < minimum || grid.width() < minimum {
            return Err(SegmentationError::InsufficientDimensions {
                height: grid.height(),
                width: grid.width(),
                minimum,
                neighbourhood: self.neighbourhood,
            });
        }

        let graph = debug_span!("core.build_graph", nodes = grid.len())
            .in_scope(|| PixelGraph::build(grid, self.neighbourhood));
        Ok(self.segment_graph(&graph))
    }

    /// Segments an already built graph.
    ///
    /// The graph's edges are copied and sorted; `graph` itself is left
    /// untouched.
    #[must_use]
    pub fn segment_graph(&self, graph: &PixelGraph) -> Segmentation {
        let mut edges = graph.edges().to_vec();
        let mut forest = DisjointSetForest::new(graph.node_count());
        let stats = debug_span!("core.merge", edges = edges.len()).in_scope(|| {
            sort_edges(&mut edges);
            merge_sorted_edges(&mut forest, &edges, self.threshold)
        });

        let segmentation = Segmentation::freeze(graph.height(), graph.width(), forest, stats);
        info!(
            edges = stats.edges_considered,
            merges = stats.merges,
            rejected = stats.rejected,
            components = segmentation.component_count(),
            "segmentation completed"
        );
        segmentation
    }
}
