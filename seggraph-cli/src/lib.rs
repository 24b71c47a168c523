//! Support library for the `seggraph` binary.
//!
//! Exposes the command pipeline and logging setup so integration tests and
//! doctests can drive a segmentation run without spawning a subprocess.

pub mod cli;
pub mod logging;
