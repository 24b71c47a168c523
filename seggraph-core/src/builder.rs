//! Builder utilities for configuring segmentation runs.
//!
//! Collects the granularity, threshold division mode and neighbourhood policy
//! and validates them before constructing a [`Segmenter`].

use crate::{
    Result,
    error::SegmentationError,
    graph::Neighbourhood,
    merge::{MergeThreshold, ThresholdDivision},
    segmenter::Segmenter,
};

/// Granularity used when none is supplied.
pub(crate) const DEFAULT_GRANULARITY: f64 = 500.0;

/// Configures and constructs [`Segmenter`] instances.
///
/// # Examples
/// ```
/// use seggraph_core::{Neighbourhood, SegmenterBuilder, ThresholdDivision};
///
/// let segmenter = SegmenterBuilder::new()
///     .with_granularity(300.0)
///     .with_threshold_division(ThresholdDivision::Real)
///     .with_neighbourhood(Neighbourhood::InteriorSources)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(segmenter.granularity(), 300.0);
/// assert_eq!(segmenter.threshold_division(), ThresholdDivision::Real);
/// ```
#[derive(Debug, Clone)]
pub struct SegmenterBuilder {
    granularity: f64,
    division: ThresholdDivision,
    neighbourhood: Neighbourhood,
}

impl Default for SegmenterBuilder {
    fn default() -> Self {
        Self {
            granularity: DEFAULT_GRANULARITY,
            division: ThresholdDivision::Floor,
            neighbourhood: Neighbourhood::InteriorSources,
        }
    }
}

impl SegmenterBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use seggraph_core::{Neighbourhood, SegmenterBuilder, ThresholdDivision};
    ///
    /// let builder = SegmenterBuilder::new();
    /// assert_eq!(builder.granularity(), 500.0);
    /// assert_eq!(builder.threshold_division(), ThresholdDivision::Floor);
    /// assert_eq!(builder.neighbourhood(), Neighbourhood::InteriorSources);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the granularity `k`. Larger values favour larger segments.
    #[must_use]
    pub fn with_granularity(mut self, granularity: f64) -> Self {
        self.granularity = granularity;
        self
    }

    /// Returns the configured granularity.
    #[must_use]
    pub fn granularity(&self) -> f64 {
        self.granularity
    }

    /// Selects how the size bonus `k / size` is computed.
    #[must_use]
    pub fn with_threshold_division(mut self, division: ThresholdDivision) -> Self {
        self.division = division;
        self
    }

    /// Returns the configured threshold division mode.
    #[must_use]
    pub fn threshold_division(&self) -> ThresholdDivision {
        self.division
    }

    /// Selects which pixels emit graph edges.
    #[must_use]
    pub fn with_neighbourhood(mut self, neighbourhood: Neighbourhood) -> Self {
        self.neighbourhood = neighbourhood;
        self
    }

    /// Returns the configured neighbourhood policy.
    #[must_use]
    pub fn neighbourhood(&self) -> Neighbourhood {
        self.neighbourhood
    }

    /// Validates the configuration and constructs a [`Segmenter`].
    ///
    /// # Errors
    /// Returns [`SegmentationError::InvalidGranularity`] when the granularity
    /// is negative, infinite or NaN.
    ///
    /// # Examples
    /// ```
    /// use seggraph_core::{SegmentationError, SegmenterBuilder};
    ///
    /// let err = SegmenterBuilder::new().with_granularity(-1.0).build().unwrap_err();
    /// assert!(matches!(err, SegmentationError::InvalidGranularity { .. }));
    /// ```
    pub fn build(self) -> Result<Segmenter> {
        if !self.granularity.is_finite() || self.granularity < 0.0 {
            return Err(SegmentationError::InvalidGranularity {
                got: self.granularity,
            });
        }

        Ok(Segmenter::new(
            MergeThreshold::new(self.granularity, self.division),
            self.neighbourhood,
        ))
    }
}
