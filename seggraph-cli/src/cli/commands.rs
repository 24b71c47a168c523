//! Argument parsing and command execution for the `seggraph` CLI.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use image::ImageError;
use seggraph_core::{
    Neighbourhood, PixelGridError, Segmentation, SegmentationError, SegmenterBuilder,
    ThresholdDivision,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::imaging;

const DEFAULT_GRANULARITY: f64 = 500.0;
const DEFAULT_MAX_DIMENSION: u32 = 250;
const DEFAULT_BLUR_SIGMA: f32 = 0.8;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "seggraph",
    about = "Segment images with the Felzenszwalb-Huttenlocher graph method."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Segment an image and write the rendered result.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Image to segment. Any format the `image` crate decodes is accepted.
    pub input: PathBuf,

    /// Destination for the rendered segmentation; the format follows the
    /// file extension.
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Granularity `k`. Larger values favour larger segments; 300 to 500
    /// suits most photographs.
    #[arg(long = "k", short = 'k', default_value_t = DEFAULT_GRANULARITY)]
    pub granularity: f64,

    /// How the size bonus `k / size` is computed.
    #[arg(long, value_enum, default_value_t = DivisionArg::Floor)]
    pub division: DivisionArg,

    /// Which pixels emit graph edges.
    #[arg(long, value_enum, default_value_t = NeighbourhoodArg::Interior)]
    pub neighbourhood: NeighbourhoodArg,

    /// Images with a side longer than this are downscaled before
    /// segmentation.
    #[arg(
        long = "max-dimension",
        default_value_t = DEFAULT_MAX_DIMENSION,
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    pub max_dimension: u32,

    /// Standard deviation of the Gaussian blur applied before segmentation.
    /// The kernel grows with sigma; at the default it reaches two pixels
    /// from the centre, a 5x5 window.
    #[arg(long = "blur-sigma", default_value_t = DEFAULT_BLUR_SIGMA)]
    pub blur_sigma: f32,

    /// Skip the Gaussian blur.
    #[arg(long = "no-blur")]
    pub no_blur: bool,

    /// Colouring applied to each component in the output image.
    #[arg(long, value_enum, default_value_t = RenderMode::Inverted)]
    pub render: RenderMode,
}

/// Command-line spelling of [`ThresholdDivision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DivisionArg {
    /// Round `k / size` down to an integer.
    Floor,
    /// Use `k / size` unrounded.
    Real,
}

impl From<DivisionArg> for ThresholdDivision {
    fn from(value: DivisionArg) -> Self {
        match value {
            DivisionArg::Floor => Self::Floor,
            DivisionArg::Real => Self::Real,
        }
    }
}

/// Command-line spelling of [`Neighbourhood`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NeighbourhoodArg {
    /// Only pixels off the image border emit edges.
    Interior,
    /// Every pixel emits edges to its in-bounds neighbours.
    All,
}

impl From<NeighbourhoodArg> for Neighbourhood {
    fn from(value: NeighbourhoodArg) -> Self {
        match value {
            NeighbourhoodArg::Interior => Self::InteriorSources,
            NeighbourhoodArg::All => Self::AllPixels,
        }
    }
}

/// Colouring applied to each component in the rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderMode {
    /// Representative colour with every channel inverted (`255 - c`).
    Inverted,
    /// Representative colour unchanged.
    Representative,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input image could not be read or decoded.
    #[error("failed to decode `{path}`: {source}")]
    Decode {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Error raised by the `image` crate.
        #[source]
        source: ImageError,
    },
    /// The rendered image could not be encoded or written.
    #[error("failed to write `{path}`: {source}")]
    Encode {
        /// Destination path.
        path: PathBuf,
        /// Error raised by the `image` crate.
        #[source]
        source: ImageError,
    },
    /// The blur standard deviation must be positive and finite.
    #[error("blur sigma must be positive and finite (got {sigma})")]
    InvalidBlurSigma {
        /// The rejected value.
        sigma: f32,
    },
    /// The decoded pixels could not be wrapped in a grid.
    #[error(transparent)]
    Grid(#[from] PixelGridError),
    /// Segmentation configuration or execution failed.
    #[error(transparent)]
    Core(#[from] SegmentationError),
}

impl CliError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Decode { .. } => "SEGGRAPH_CLI_DECODE",
            Self::Encode { .. } => "SEGGRAPH_CLI_ENCODE",
            Self::InvalidBlurSigma { .. } => "SEGGRAPH_CLI_INVALID_BLUR_SIGMA",
            Self::Grid(err) => err.code().as_str(),
            Self::Core(err) => err.code().as_str(),
        }
    }
}

/// Outcome of a `run` command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Image that was segmented.
    pub input: PathBuf,
    /// Where the rendered result was written.
    pub output: PathBuf,
    /// `(width, height)` of the decoded input before any downscaling.
    pub original_dimensions: (u32, u32),
    /// Granularity used for the run.
    pub granularity: f64,
    /// The segmentation of the preprocessed image.
    pub segmentation: Segmentation,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when decoding, segmentation or encoding fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::ffi::OsString;
/// # use seggraph_cli::cli::{Cli, run_cli};
/// # use clap::Parser;
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let input = dir.path().join("flat.png");
/// let output = dir.path().join("segments.png");
/// image::RgbImage::from_pixel(6, 5, image::Rgb([20, 40, 60])).save(&input)?;
///
/// let cli = Cli::try_parse_from([
///     OsString::from("seggraph"),
///     OsString::from("run"),
///     input.clone().into_os_string(),
///     OsString::from("--output"),
///     output.clone().into_os_string(),
///     OsString::from("--no-blur"),
/// ])?;
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.segmentation.component_count(), 1);
/// assert!(output.exists());
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        input = %command.input.display(),
        output = %command.output.display(),
        granularity = command.granularity,
        blur = field::Empty,
    ),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let segmenter = SegmenterBuilder::new()
        .with_granularity(command.granularity)
        .with_threshold_division(command.division.into())
        .with_neighbourhood(command.neighbourhood.into())
        .build()?;
    let blur_sigma = if command.no_blur {
        None
    } else {
        Some(imaging::validate_sigma(command.blur_sigma)?)
    };
    Span::current().record("blur", field::debug(blur_sigma));

    let decoded = imaging::load_rgb(&command.input)?;
    let original_dimensions = decoded.dimensions();
    let resized = imaging::downscale(decoded, command.max_dimension);
    let prepared = match blur_sigma {
        Some(sigma) => imaging::blur(&resized, sigma),
        None => resized,
    };
    info!(
        width = prepared.width(),
        height = prepared.height(),
        original_width = original_dimensions.0,
        original_height = original_dimensions.1,
        "image prepared"
    );

    let grid = imaging::to_grid(&prepared)?;
    let segmentation = segmenter.run(&grid)?;
    let rendered = imaging::render(&grid, &segmentation, command.render, prepared.dimensions());
    imaging::save(&rendered, &command.output)?;

    info!(
        components = segmentation.component_count(),
        output = %command.output.display(),
        "command completed"
    );
    Ok(ExecutionSummary {
        input: command.input,
        output: command.output,
        original_dimensions,
        granularity: command.granularity,
        segmentation,
    })
}

/// Renders `summary` to `writer` as `key: value` lines.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let segmentation = &summary.segmentation;
    let (original_width, original_height) = summary.original_dimensions;
    let stats = segmentation.stats();
    writeln!(writer, "input: {}", summary.input.display())?;
    writeln!(writer, "output: {}", summary.output.display())?;
    writeln!(
        writer,
        "dimensions: {}x{} (decoded {original_width}x{original_height})",
        segmentation.width(),
        segmentation.height(),
    )?;
    writeln!(writer, "granularity: {}", summary.granularity)?;
    writeln!(writer, "edges: {}", stats.edges_considered)?;
    writeln!(writer, "merges: {}", stats.merges)?;
    writeln!(writer, "components: {}", segmentation.component_count())?;
    Ok(())
}
