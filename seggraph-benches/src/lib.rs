//! Benchmark support crate for seggraph.
//!
//! Provides seeded synthetic images and parameter labels used by the
//! Criterion benchmarks for graph construction and the merge phase.

pub mod error;
pub mod params;
pub mod source;
