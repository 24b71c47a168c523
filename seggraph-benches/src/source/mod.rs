//! Seeded synthetic images for benchmarking.
//!
//! Images are a grid of flat-coloured square tiles with optional per-pixel
//! channel noise, so the merge phase sees both long runs of near-zero edges
//! and sharp tile boundaries.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use seggraph_core::{Color, PixelGrid, PixelGridError};

/// Errors raised while generating synthetic images.
#[derive(Debug, thiserror::Error)]
pub enum SyntheticError {
    /// A requested image side was zero.
    #[error("image {dimension} must be greater than zero")]
    ZeroDimension {
        /// Which side was zero.
        dimension: &'static str,
    },
    /// The requested tile size was zero.
    #[error("tile size must be greater than zero")]
    ZeroTileSize,
    /// The generated pixels did not form a valid grid.
    #[error(transparent)]
    Grid(#[from] PixelGridError),
}

/// Configuration for a tiled synthetic image.
#[derive(Clone, Debug)]
pub struct SyntheticImageConfig {
    /// Number of rows.
    pub height: usize,
    /// Number of columns.
    pub width: usize,
    /// Side length of each flat-coloured tile.
    pub tile_size: usize,
    /// Largest value added to each channel of each pixel.
    pub noise: u8,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates a tiled image described by `config`.
///
/// # Errors
/// Returns [`SyntheticError`] when a side or the tile size is zero.
pub fn tiled_image(config: &SyntheticImageConfig) -> Result<PixelGrid, SyntheticError> {
    if config.height == 0 {
        return Err(SyntheticError::ZeroDimension { dimension: "height" });
    }
    if config.width == 0 {
        return Err(SyntheticError::ZeroDimension { dimension: "width" });
    }
    if config.tile_size == 0 {
        return Err(SyntheticError::ZeroTileSize);
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let tiles_across = config.width.div_ceil(config.tile_size);
    let tiles_down = config.height.div_ceil(config.tile_size);
    let palette: Vec<Color> = (0..tiles_across.saturating_mul(tiles_down))
        .map(|_| {
            Color::new(
                rng.gen_range(0..=255),
                rng.gen_range(0..=255),
                rng.gen_range(0..=255),
            )
        })
        .collect();

    let noise = config.noise;
    let grid = PixelGrid::from_fn(config.height, config.width, |row, col| {
        let tile = tile_index(row, col, config.tile_size, tiles_across);
        let base = palette.get(tile).copied().unwrap_or_default();
        if noise == 0 {
            return base;
        }
        Color::new(
            base.red.saturating_add(rng.gen_range(0..=noise)),
            base.green.saturating_add(rng.gen_range(0..=noise)),
            base.blue.saturating_add(rng.gen_range(0..=noise)),
        )
    })?;
    Ok(grid)
}

#[expect(
    clippy::integer_division,
    reason = "tile coordinates are the truncated quotient of pixel coordinates"
)]
const fn tile_index(row: usize, col: usize, tile_size: usize, tiles_across: usize) -> usize {
    (row / tile_size) * tiles_across + col / tile_size
}
