//! Read-only view over a finished segmentation.
//!
//! A [`Segmentation`] is produced once every edge has been processed. The
//! forest is fully path-compressed at that point, so each pixel's
//! representative is stored directly and queries never mutate state.

use crate::{forest::DisjointSetForest, merge::MergeStats};

/// Contiguous component identifier, starting at zero.
///
/// # Examples
/// ```
/// use seggraph_core::ComponentId;
///
/// let id = ComponentId::new(3);
/// assert_eq!(id.get(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(usize);

impl ComponentId {
    /// Wraps a raw component index.
    #[must_use]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    /// Returns the raw component index.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

/// Final pixel-to-component mapping.
///
/// # Examples
/// ```
/// use seggraph_core::{Color, PixelGrid, SegmenterBuilder};
///
/// let grid = PixelGrid::from_fn(3, 4, |_, col| {
///     if col < 2 { Color::new(0, 0, 0) } else { Color::new(250, 250, 250) }
/// })
/// .expect("valid grid");
/// let segmentation = SegmenterBuilder::new()
///     .with_granularity(100.0)
///     .build()
///     .expect("valid granularity")
///     .run(&grid)
///     .expect("segmentation succeeds");
///
/// assert_eq!(segmentation.component_count(), 2);
/// assert_eq!(segmentation.representative(0), segmentation.representative(5));
/// assert_ne!(segmentation.representative(0), segmentation.representative(3));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Segmentation {
    height: usize,
    width: usize,
    representatives: Vec<usize>,
    sizes: Vec<usize>,
    internal: Vec<f64>,
    component_count: usize,
    stats: MergeStats,
}

impl Segmentation {
    pub(crate) fn freeze(
        height: usize,
        width: usize,
        forest: DisjointSetForest,
        stats: MergeStats,
    ) -> Self {
        let component_count = forest.component_count();
        let (representatives, sizes, internal) = forest.into_compressed_parts();
        Self {
            height,
            width,
            representatives,
            sizes,
            internal,
            component_count,
            stats,
        }
    }

    /// Number of rows in the segmented image.
    #[must_use]
    #[rustfmt::skip]
    pub fn height(&self) -> usize { self.height }

    /// Number of columns in the segmented image.
    #[must_use]
    #[rustfmt::skip]
    pub fn width(&self) -> usize { self.width }

    /// Number of pixels.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.representatives.len() }

    /// Returns `true` when no pixels were segmented.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.representatives.is_empty() }

    /// Number of distinct components.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Counters recorded while merging.
    #[must_use]
    #[rustfmt::skip]
    pub fn stats(&self) -> MergeStats { self.stats }

    /// Identity of the pixel representing `pixel`'s component, or `None`
    /// when `pixel` is out of range.
    #[must_use]
    pub fn representative(&self, pixel: usize) -> Option<usize> {
        self.representatives.get(pixel).copied()
    }

    /// Representatives of every pixel, indexed by pixel identity.
    #[must_use]
    #[rustfmt::skip]
    pub fn representatives(&self) -> &[usize] { &self.representatives }

    /// Size of the component containing `pixel`.
    #[must_use]
    pub fn component_size(&self, pixel: usize) -> Option<usize> {
        self.representative(pixel)
            .and_then(|root| self.sizes.get(root).copied())
    }

    /// Internal difference of the component containing `pixel`.
    #[must_use]
    pub fn internal_difference(&self, pixel: usize) -> Option<f64> {
        self.representative(pixel)
            .and_then(|root| self.internal.get(root).copied())
    }

    /// Contiguous component labels, numbered in order of first appearance
    /// when scanning pixels row-major.
    #[must_use]
    pub fn labels(&self) -> Vec<ComponentId> {
        let mut by_root: Vec<Option<ComponentId>> = vec![None; self.representatives.len()];
        let mut next = 0;
        self.representatives
            .iter()
            .map(|&root| {
                *by_root[root].get_or_insert_with(|| {
                    let id = ComponentId::new(next);
                    next += 1;
                    id
                })
            })
            .collect()
    }
}
