//! Seggraph core library.
//!
//! Graph-based image segmentation in the style of Felzenszwalb and
//! Huttenlocher. A [`PixelGrid`] is turned into a [`PixelGraph`] whose edges
//! connect neighbouring pixels, the edges are sorted by colour dissimilarity,
//! and a [`DisjointSetForest`] greedily merges regions whose internal
//! variation is compatible with the connecting edge. The frozen forest is
//! exposed as a read-only [`Segmentation`].
//!
//! # Examples
//! ```
//! use seggraph_core::{Color, PixelGrid, SegmenterBuilder};
//!
//! let grid = PixelGrid::from_fn(3, 3, |_, _| Color::new(10, 20, 30))
//!     .expect("dimensions are consistent");
//! let segmenter = SegmenterBuilder::new()
//!     .with_granularity(500.0)
//!     .build()
//!     .expect("granularity is valid");
//! let segmentation = segmenter.run(&grid).expect("grid is large enough");
//! assert_eq!(segmentation.component_count(), 1);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
mod forest;
mod graph;
mod merge;
mod pixels;
mod segmentation;
mod segmenter;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::SegmenterBuilder,
    error::{PixelGridError, PixelGridErrorCode, Result, SegmentationError, SegmentationErrorCode},
    forest::DisjointSetForest,
    graph::{Edge, NEIGHBOUR_OFFSETS, Neighbourhood, PixelGraph, PixelNode, color_dissimilarity},
    merge::{MergeStats, MergeThreshold, ThresholdDivision, merge_sorted_edges, sort_edges},
    pixels::{Color, PixelGrid},
    segmentation::{ComponentId, Segmentation},
    segmenter::Segmenter,
};
