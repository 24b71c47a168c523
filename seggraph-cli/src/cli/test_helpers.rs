//! Fixtures shared by the CLI unit tests.

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use tempfile::TempDir;

use super::commands::run_command;
use super::{CliError, DivisionArg, NeighbourhoodArg, RenderMode, RunCommand};

pub(super) const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub(super) const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_png(
    dir: &TempDir,
    name: &str,
    image: &RgbImage,
) -> Result<PathBuf, image::ImageError> {
    let path = dir.path().join(name);
    image.save(&path)?;
    Ok(path)
}

/// Black left half, white right half.
pub(super) fn split_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| if x < width / 2 { BLACK } else { WHITE })
}

/// `run` options with blur disabled and the remaining defaults.
pub(super) fn unblurred(input: &Path, output: &Path, granularity: f64) -> RunCommand {
    RunCommand {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        granularity,
        division: DivisionArg::Floor,
        neighbourhood: NeighbourhoodArg::Interior,
        max_dimension: 250,
        blur_sigma: 0.8,
        no_blur: true,
        render: RenderMode::Inverted,
    }
}

pub(super) fn run_command_expecting_error(cmd: RunCommand, panic_msg: &str) -> CliError {
    match run_command(cmd) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
