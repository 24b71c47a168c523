//! Property-based tests for the greedy threshold merge.
//!
//! Checks the merge against a sequential relabelling oracle and a naive
//! union-find, both fed edges ranked by `(weight, emission index)` without
//! going through [`sort_edges`]. Also verifies determinism and the
//! uniform-image guarantees on generated palette images.

use proptest::prelude::*;

use crate::{
    forest::DisjointSetForest,
    graph::{Edge, Neighbourhood, PixelGraph},
    pixels::PixelGrid,
    test_utils::{PALETTE, distinct_count, palette_grid_strategy, suite_proptest_config},
};

use super::{MergeStats, MergeThreshold, ThresholdDivision, merge_sorted_edges, sort_edges};

/// Emitted edges ranked by weight, ties broken by emission index.
fn ranked_by_emission(emitted: &[Edge]) -> Vec<Edge> {
    let mut ranked: Vec<(usize, Edge)> = emitted.iter().copied().enumerate().collect();
    ranked.sort_unstable_by(|(left_index, left), (right_index, right)| {
        left.weight()
            .total_cmp(&right.weight())
            .then(left_index.cmp(right_index))
    });
    ranked.into_iter().map(|(_, edge)| edge).collect()
}

/// Union by size without path compression. On equal sizes the source's root
/// stays the root, so representatives must match the forest exactly.
fn parent_chasing_oracle(
    node_count: usize,
    edges: &[Edge],
    threshold: MergeThreshold,
) -> Vec<usize> {
    fn root(parents: &[usize], mut node: usize) -> usize {
        while parents[node] != node {
            node = parents[node];
        }
        node
    }

    let mut parents: Vec<usize> = (0..node_count).collect();
    let mut sizes = vec![1usize; node_count];
    let mut internal = vec![0.0f64; node_count];

    for edge in edges {
        let mut left = root(&parents, edge.source());
        let mut right = root(&parents, edge.target());
        if left == right {
            continue;
        }
        let left_tau = threshold.tau(internal[left], sizes[left]);
        let right_tau = threshold.tau(internal[right], sizes[right]);
        if edge.weight() >= left_tau.min(right_tau) {
            continue;
        }
        if sizes[left] < sizes[right] {
            std::mem::swap(&mut left, &mut right);
        }
        parents[right] = left;
        sizes[left] += sizes[right];
        internal[left] = internal[left].max(edge.weight());
    }
    (0..node_count).map(|node| root(&parents, node)).collect()
}

/// Reference merge that relabels whole components instead of using a
/// union-find. Component statistics do not depend on which member is the
/// root, so both implementations must agree on the partition.
fn relabelling_oracle(node_count: usize, edges: &[Edge], threshold: MergeThreshold) -> Vec<usize> {
    let mut labels: Vec<usize> = (0..node_count).collect();
    let mut sizes = vec![1usize; node_count];
    let mut internal = vec![0.0f64; node_count];

    for edge in edges {
        let left = labels[edge.source()];
        let right = labels[edge.target()];
        if left == right {
            continue;
        }
        let left_tau = threshold.tau(internal[left], sizes[left]);
        let right_tau = threshold.tau(internal[right], sizes[right]);
        if edge.weight() < left_tau.min(right_tau) {
            for label in &mut labels {
                if *label == right {
                    *label = left;
                }
            }
            sizes[left] += sizes[right];
            internal[left] = internal[left].max(edge.weight());
        }
    }
    canonicalise(&labels)
}

/// Maps every label to the smallest node carrying it.
fn canonicalise(labels: &[usize]) -> Vec<usize> {
    labels
        .iter()
        .map(|label| labels.iter().position(|other| other == label).unwrap_or_default())
        .collect()
}

fn segment(
    grid: &PixelGrid,
    threshold: MergeThreshold,
    neighbourhood: Neighbourhood,
) -> (Vec<Edge>, Vec<usize>, MergeStats) {
    let graph = PixelGraph::build(grid, neighbourhood);
    let mut edges = graph.edges().to_vec();
    sort_edges(&mut edges);
    let mut forest = DisjointSetForest::new(graph.node_count());
    let stats = merge_sorted_edges(&mut forest, &edges, threshold);
    let roots = (0..graph.node_count()).map(|node| forest.find(node)).collect();
    (edges, roots, stats)
}

fn division_strategy() -> impl Strategy<Value = ThresholdDivision> {
    prop_oneof![Just(ThresholdDivision::Floor), Just(ThresholdDivision::Real)]
}

fn neighbourhood_strategy() -> impl Strategy<Value = Neighbourhood> {
    prop_oneof![
        Just(Neighbourhood::InteriorSources),
        Just(Neighbourhood::AllPixels)
    ]
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn merge_matches_relabelling_oracle(
        grid in palette_grid_strategy(),
        k in 0u32..5_000,
        division in division_strategy(),
        neighbourhood in neighbourhood_strategy(),
    ) {
        let threshold = MergeThreshold::new(f64::from(k), division);
        let (_, roots, _) = segment(&grid, threshold, neighbourhood);
        let emitted = PixelGraph::build(&grid, neighbourhood).edges().to_vec();
        let expected = relabelling_oracle(grid.len(), &ranked_by_emission(&emitted), threshold);
        prop_assert_eq!(canonicalise(&roots), expected);
    }

    #[test]
    fn representatives_match_emission_order_union_find(
        grid in palette_grid_strategy(),
        k in 0u32..600,
        division in division_strategy(),
    ) {
        let threshold = MergeThreshold::new(f64::from(k), division);
        let (_, roots, _) = segment(&grid, threshold, Neighbourhood::InteriorSources);
        let emitted = PixelGraph::build(&grid, Neighbourhood::InteriorSources)
            .edges()
            .to_vec();
        let expected = parent_chasing_oracle(grid.len(), &ranked_by_emission(&emitted), threshold);
        prop_assert_eq!(roots, expected);
    }

    #[test]
    fn repeated_runs_agree(
        grid in palette_grid_strategy(),
        k in 0u32..5_000,
        division in division_strategy(),
    ) {
        let threshold = MergeThreshold::new(f64::from(k), division);
        let (_, first, first_stats) = segment(&grid, threshold, Neighbourhood::InteriorSources);
        let (_, second, second_stats) = segment(&grid, threshold, Neighbourhood::InteriorSources);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first_stats, second_stats);
    }

    #[test]
    fn stats_account_for_every_edge(
        grid in palette_grid_strategy(),
        k in 0u32..5_000,
        division in division_strategy(),
    ) {
        let threshold = MergeThreshold::new(f64::from(k), division);
        let (edges, roots, stats) = segment(&grid, threshold, Neighbourhood::InteriorSources);
        prop_assert_eq!(stats.edges_considered, edges.len());
        prop_assert_eq!(
            stats.merges + stats.rejected + stats.skipped_same_component,
            edges.len()
        );
        prop_assert_eq!(distinct_count(&roots), grid.len() - stats.merges);
    }

    #[test]
    fn uniform_image_collapses_with_real_division(
        height in 3usize..12,
        width in 3usize..12,
        colour in 0..PALETTE.len(),
        k in 1u32..10_000,
    ) {
        let grid = PixelGrid::from_fn(height, width, |_, _| PALETTE[colour])
            .expect("valid grid");
        let threshold = MergeThreshold::new(f64::from(k), ThresholdDivision::Real);
        let (_, roots, _) = segment(&grid, threshold, Neighbourhood::InteriorSources);
        prop_assert_eq!(distinct_count(&roots), 1);
    }

    #[test]
    fn uniform_image_collapses_with_floor_division_when_k_covers_the_image(
        height in 3usize..12,
        width in 3usize..12,
        colour in 0..PALETTE.len(),
        extra in 0u32..1_000,
    ) {
        let grid = PixelGrid::from_fn(height, width, |_, _| PALETTE[colour])
            .expect("valid grid");
        let pixels = u32::try_from(grid.len()).expect("small grid");
        let threshold = MergeThreshold::new(f64::from(pixels + extra), ThresholdDivision::Floor);
        let (_, roots, _) = segment(&grid, threshold, Neighbourhood::InteriorSources);
        prop_assert_eq!(distinct_count(&roots), 1);
    }

    #[test]
    fn zero_granularity_on_uniform_image_keeps_singletons(
        height in 3usize..12,
        width in 3usize..12,
        division in division_strategy(),
    ) {
        let grid = PixelGrid::from_fn(height, width, |_, _| PALETTE[1]).expect("valid grid");
        let threshold = MergeThreshold::new(0.0, division);
        let (_, roots, stats) = segment(&grid, threshold, Neighbourhood::InteriorSources);
        prop_assert_eq!(stats.merges, 0);
        prop_assert_eq!(roots, (0..grid.len()).collect::<Vec<_>>());
    }
}
