//! Graph construction and merge-phase benchmarks.
//!
//! `build_graph` measures edge emission alone. `merge` starts from a prebuilt
//! graph and measures sorting plus the greedy merge for several
//! granularities, isolating it from graph construction.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use seggraph_benches::{
    error::BenchSetupError,
    params::{GridBenchParams, MergeBenchParams},
    source::{SyntheticImageConfig, tiled_image},
};
use seggraph_core::{Neighbourhood, PixelGraph, SegmenterBuilder};

/// Seed used for all synthetic image generation in this benchmark.
const SEED: u64 = 42;

/// Image sizes to benchmark; the largest matches the CLI's default
/// downscale bound.
const SIZES: &[(usize, usize)] = &[(64, 64), (128, 128), (250, 200)];

/// Granularities swept by the merge benchmark.
const GRANULARITIES: &[f64] = &[100.0, 500.0, 2_000.0];

fn synthetic(height: usize, width: usize) -> SyntheticImageConfig {
    SyntheticImageConfig {
        height,
        width,
        tile_size: 16,
        noise: 6,
        seed: SEED,
    }
}

fn build_graph_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("build_graph");
    group.sample_size(20);

    for &(height, width) in SIZES {
        let grid = tiled_image(&synthetic(height, width))?;
        let params = GridBenchParams { height, width };
        group.throughput(Throughput::Elements(grid.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(params), &grid, |b, grid| {
            b.iter(|| PixelGraph::build(grid, Neighbourhood::InteriorSources));
        });
    }

    group.finish();
    Ok(())
}

fn merge_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("merge");
    group.sample_size(20);

    for &(height, width) in SIZES {
        let grid = tiled_image(&synthetic(height, width))?;
        let graph = PixelGraph::build(&grid, Neighbourhood::InteriorSources);
        group.throughput(Throughput::Elements(graph.edges().len() as u64));

        for &granularity in GRANULARITIES {
            let segmenter = SegmenterBuilder::new()
                .with_granularity(granularity)
                .build()?;
            let params = MergeBenchParams {
                grid: GridBenchParams { height, width },
                granularity,
            };
            group.bench_with_input(
                BenchmarkId::from_parameter(params),
                &(&segmenter, &graph),
                |b, &(segmenter, graph)| {
                    b.iter(|| segmenter.segment_graph(graph));
                },
            );
        }
    }

    group.finish();
    Ok(())
}

fn build_graph(c: &mut Criterion) {
    if let Err(err) = build_graph_impl(c) {
        panic!("build_graph benchmark setup failed: {err}");
    }
}

fn merge(c: &mut Criterion) {
    if let Err(err) = merge_impl(c) {
        panic!("merge benchmark setup failed: {err}");
    }
}

criterion_group!(benches, build_graph, merge);
criterion_main!(benches);
