//! Command-line interface for segmenting image files.
//!
//! The `run` command decodes an image, optionally downscales and blurs it,
//! segments it with the core engine and writes a rendered copy where every
//! pixel takes its component representative's colour.

mod commands;
mod imaging;

pub use commands::{
    Cli, CliError, Command, DivisionArg, ExecutionSummary, NeighbourhoodArg, RenderMode,
    RunCommand, render_summary, run_cli,
};
pub use imaging::fit_within;

#[cfg(test)]
mod test_helpers;
