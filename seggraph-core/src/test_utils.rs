//! Shared test utilities for `seggraph-core`.

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use seggraph_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::pixels::{Color, PixelGrid};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// Keeps property suites aligned on the same `SEGGRAPH_PBT_CASES` and
/// `SEGGRAPH_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Small palette so generated images contain many equal-weight edges.
pub(crate) const PALETTE: [Color; 5] = [
    Color::new(0, 0, 0),
    Color::new(12, 12, 12),
    Color::new(200, 40, 40),
    Color::new(40, 200, 40),
    Color::new(255, 255, 255),
];

/// Grid where every pixel has `color`.
pub(crate) fn uniform_grid(height: usize, width: usize, color: Color) -> PixelGrid {
    PixelGrid::from_fn(height, width, |_, _| color).expect("valid uniform grid")
}

/// Grid split vertically: columns `< split` take `left`, the rest `right`.
pub(crate) fn split_grid(
    height: usize,
    width: usize,
    split: usize,
    left: Color,
    right: Color,
) -> PixelGrid {
    PixelGrid::from_fn(height, width, |_, col| if col < split { left } else { right })
        .expect("valid split grid")
}

/// Strategy producing grids of at least 3x3 drawn from [`PALETTE`].
pub(crate) fn palette_grid_strategy() -> impl Strategy<Value = PixelGrid> {
    (3usize..9, 3usize..9).prop_flat_map(|(height, width)| {
        prop::collection::vec(0..PALETTE.len(), height * width).prop_map(move |indices| {
            let colors = indices.into_iter().map(|index| PALETTE[index]).collect();
            PixelGrid::new(height, width, colors).expect("strategy matches dimensions")
        })
    })
}

/// Number of distinct values in `labels`.
pub(crate) fn distinct_count(labels: &[usize]) -> usize {
    let mut sorted = labels.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    sorted.len()
}
