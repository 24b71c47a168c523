//! Image decoding, preprocessing and rendering around the core engine.

use std::path::Path;

use image::{Rgb, RgbImage, imageops::FilterType};
use imageproc::filter::gaussian_blur_f32;
use seggraph_core::{PixelGrid, PixelGridError, Segmentation};
use tracing::{debug, instrument};

use super::commands::{CliError, RenderMode};

/// Dimensions an image of `width x height` is downscaled to so neither side
/// exceeds `max`, or `None` when it already fits.
///
/// Portrait images become `0.8 * max` wide and `max` tall, landscape images
/// the transpose, square images `max x max`. Aspect ratio is not otherwise
/// preserved.
///
/// # Examples
/// ```
/// use seggraph_cli::cli::fit_within;
///
/// assert_eq!(fit_within(640, 480, 250), Some((250, 200)));
/// assert_eq!(fit_within(480, 640, 250), Some((200, 250)));
/// assert_eq!(fit_within(120, 90, 250), None);
/// ```
#[must_use]
pub fn fit_within(width: u32, height: u32, max: u32) -> Option<(u32, u32)> {
    if width <= max && height <= max {
        return None;
    }
    let short = (max.saturating_mul(4) / 5).max(1);
    Some(match height.cmp(&width) {
        std::cmp::Ordering::Greater => (short, max),
        std::cmp::Ordering::Less => (max, short),
        std::cmp::Ordering::Equal => (max, max),
    })
}

#[instrument(name = "cli.load_image", err, skip(path), fields(path = %path.display()))]
pub(super) fn load_rgb(path: &Path) -> Result<RgbImage, CliError> {
    let decoded = image::open(path).map_err(|source| CliError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decoded.into_rgb8())
}

pub(super) fn downscale(image: RgbImage, max: u32) -> RgbImage {
    let (width, height) = image.dimensions();
    match fit_within(width, height, max) {
        Some((target_width, target_height)) => {
            debug!(width, height, target_width, target_height, "downscaling image");
            image::imageops::resize(&image, target_width, target_height, FilterType::Triangle)
        }
        None => image,
    }
}

pub(super) fn validate_sigma(sigma: f32) -> Result<f32, CliError> {
    if sigma.is_finite() && sigma > 0.0 {
        Ok(sigma)
    } else {
        Err(CliError::InvalidBlurSigma { sigma })
    }
}

/// `sigma` must already have passed [`validate_sigma`]. The kernel size is
/// derived from `sigma` rather than fixed.
pub(super) fn blur(image: &RgbImage, sigma: f32) -> RgbImage {
    gaussian_blur_f32(image, sigma)
}

pub(super) fn to_grid(image: &RgbImage) -> Result<PixelGrid, PixelGridError> {
    let (width, height) = image.dimensions();
    PixelGrid::from_rgb_bytes(height as usize, width as usize, image.as_raw())
}

/// Paints every pixel with its component representative's colour.
///
/// The trailing `(width, height)` must match the image `grid` was built from.
pub(super) fn render(
    grid: &PixelGrid,
    segmentation: &Segmentation,
    mode: RenderMode,
    (width, height): (u32, u32),
) -> RgbImage {
    let colors = grid.colors();
    let mut rendered = RgbImage::new(width, height);
    for (pixel, (_, _, out)) in rendered.enumerate_pixels_mut().enumerate() {
        let color = segmentation
            .representative(pixel)
            .and_then(|root| colors.get(root))
            .copied()
            .unwrap_or_default();
        let painted = match mode {
            RenderMode::Inverted => color.inverted(),
            RenderMode::Representative => color,
        };
        *out = Rgb(painted.to_rgb());
    }
    rendered
}

#[instrument(name = "cli.save_image", err, skip(image, path), fields(path = %path.display()))]
pub(super) fn save(image: &RgbImage, path: &Path) -> Result<(), CliError> {
    image.save(path).map_err(|source| CliError::Encode {
        path: path.to_path_buf(),
        source,
    })
}
