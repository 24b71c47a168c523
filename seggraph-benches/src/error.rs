//! Benchmark setup error type.
//!
//! Lets setup code propagate failures with `?` so bench entry points can
//! report them once.

use seggraph_core::SegmentationError;

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic image generation failed.
    #[error("synthetic image generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Segmenter configuration or execution failed.
    #[error("segmentation failed: {0}")]
    Segmentation(#[from] SegmentationError),
}
