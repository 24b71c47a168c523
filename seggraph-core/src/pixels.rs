//! Owned pixel storage consumed by the graph builder.
//!
//! A [`PixelGrid`] is a validated, row-major array of 8-bit colours. Pixel
//! identities are `row * width + col`, matching the node identities used by
//! the graph and the disjoint-set forest.

use crate::error::PixelGridError;

/// A colour with three 8-bit channels.
///
/// # Examples
/// ```
/// use seggraph_core::Color;
///
/// let color = Color::new(255, 128, 0);
/// assert_eq!(color.green, 128);
/// assert_eq!(color.inverted(), Color::new(0, 127, 255));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Color {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl Color {
    /// Creates a colour from its red, green and blue channels.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns the colour with every channel replaced by `255 - channel`.
    #[must_use]
    pub const fn inverted(self) -> Self {
        Self {
            red: u8::MAX - self.red,
            green: u8::MAX - self.green,
            blue: u8::MAX - self.blue,
        }
    }

    /// Returns the channels in `[red, green, blue]` order.
    #[must_use]
    pub const fn to_rgb(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self { red, green, blue }
    }
}

/// Rectangular, row-major grid of colours.
///
/// # Examples
/// ```
/// use seggraph_core::{Color, PixelGrid};
///
/// let grid = PixelGrid::from_rgb_bytes(1, 2, &[1, 2, 3, 4, 5, 6])
///     .expect("buffer matches dimensions");
/// assert_eq!(grid.color(0, 1), Some(Color::new(4, 5, 6)));
/// assert_eq!(grid.index_of(0, 1), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    height: usize,
    width: usize,
    colors: Vec<Color>,
}

impl PixelGrid {
    /// Wraps `colors` as a `height x width` grid.
    ///
    /// # Errors
    /// Returns [`PixelGridError::DimensionsOverflow`] when `height * width`
    /// overflows and [`PixelGridError::PixelCountMismatch`] when `colors`
    /// does not contain exactly `height * width` entries.
    pub fn new(height: usize, width: usize, colors: Vec<Color>) -> Result<Self, PixelGridError> {
        let expected = pixel_count(height, width)?;
        if colors.len() != expected {
            return Err(PixelGridError::PixelCountMismatch {
                height,
                width,
                expected,
                actual: colors.len(),
            });
        }
        Ok(Self {
            height,
            width,
            colors,
        })
    }

    /// Builds a grid from interleaved RGB bytes.
    ///
    /// # Errors
    /// Returns [`PixelGridError::PixelCountMismatch`] when `bytes` does not
    /// hold exactly three bytes per pixel, and
    /// [`PixelGridError::DimensionsOverflow`] when the byte count overflows.
    pub fn from_rgb_bytes(height: usize, width: usize, bytes: &[u8]) -> Result<Self, PixelGridError> {
        let pixels = pixel_count(height, width)?;
        let expected = pixels
            .checked_mul(3)
            .ok_or(PixelGridError::DimensionsOverflow { height, width })?;
        if bytes.len() != expected {
            return Err(PixelGridError::PixelCountMismatch {
                height,
                width,
                expected,
                actual: bytes.len(),
            });
        }
        let colors = bytes
            .chunks_exact(3)
            .map(|chunk| Color::new(chunk[0], chunk[1], chunk[2]))
            .collect();
        Ok(Self {
            height,
            width,
            colors,
        })
    }

    /// Builds a grid by evaluating `color_at(row, col)` for every position.
    ///
    /// # Errors
    /// Returns [`PixelGridError::DimensionsOverflow`] when `height * width`
    /// overflows.
    pub fn from_fn(
        height: usize,
        width: usize,
        mut color_at: impl FnMut(usize, usize) -> Color,
    ) -> Result<Self, PixelGridError> {
        let expected = pixel_count(height, width)?;
        let mut colors = Vec::with_capacity(expected);
        for row in 0..height {
            for col in 0..width {
                colors.push(color_at(row, col));
            }
        }
        Ok(Self {
            height,
            width,
            colors,
        })
    }

    /// Number of rows.
    #[must_use]
    #[rustfmt::skip]
    pub fn height(&self) -> usize { self.height }

    /// Number of columns.
    #[must_use]
    #[rustfmt::skip]
    pub fn width(&self) -> usize { self.width }

    /// Total number of pixels.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.colors.len() }

    /// Returns `true` when the grid holds no pixels.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// Row-major view of every colour.
    #[must_use]
    #[rustfmt::skip]
    pub fn colors(&self) -> &[Color] { &self.colors }

    /// Returns the colour at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn color(&self, row: usize, col: usize) -> Option<Color> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.colors.get(self.index_of(row, col)).copied()
    }

    /// Pixel identity for `(row, col)`.
    #[must_use]
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// `(row, col)` position of pixel identity `id`, or `None` when `id` is
    /// not a pixel of this grid.
    #[must_use]
    pub fn position_of(&self, id: usize) -> Option<(usize, usize)> {
        if id >= self.len() {
            return None;
        }
        Some((id.checked_div(self.width)?, id.checked_rem(self.width)?))
    }
}

fn pixel_count(height: usize, width: usize) -> Result<usize, PixelGridError> {
    height
        .checked_mul(width)
        .ok_or(PixelGridError::DimensionsOverflow { height, width })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::error::PixelGridErrorCode;

    #[rstest]
    #[case::too_short(2, 2, 3)]
    #[case::too_long(2, 2, 5)]
    fn new_rejects_mismatched_buffers(
        #[case] height: usize,
        #[case] width: usize,
        #[case] actual: usize,
    ) {
        let err = PixelGrid::new(height, width, vec![Color::default(); actual])
            .expect_err("mismatched buffer must fail");
        assert_eq!(
            err,
            PixelGridError::PixelCountMismatch {
                height,
                width,
                expected: 4,
                actual,
            }
        );
        assert_eq!(err.code().as_str(), "PIXEL_GRID_COUNT_MISMATCH");
    }

    #[test]
    fn from_rgb_bytes_counts_bytes_not_pixels() {
        let err = PixelGrid::from_rgb_bytes(1, 2, &[0; 4]).expect_err("4 bytes is not 2 pixels");
        assert!(matches!(
            err,
            PixelGridError::PixelCountMismatch {
                expected: 6,
                actual: 4,
                ..
            }
        ));
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        let err = PixelGrid::from_fn(usize::MAX, 2, |_, _| Color::default())
            .expect_err("overflow must be detected before allocation");
        assert_eq!(err.code(), PixelGridErrorCode::DimensionsOverflow);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 3)]
    #[case(2, 4)]
    fn index_and_position_are_inverse(#[case] row: usize, #[case] col: usize) {
        let grid = PixelGrid::from_fn(3, 5, |_, _| Color::default()).expect("valid grid");
        let id = grid.index_of(row, col);
        assert_eq!(id, row * 5 + col);
        assert_eq!(grid.position_of(id), Some((row, col)));
    }

    #[rstest]
    #[case::zero_width(5, 0, 0)]
    #[case::zero_height(0, 4, 0)]
    #[case::past_the_end(3, 5, 15)]
    fn position_of_rejects_ids_outside_the_grid(
        #[case] height: usize,
        #[case] width: usize,
        #[case] id: usize,
    ) {
        let grid = PixelGrid::from_fn(height, width, |_, _| Color::default()).expect("valid grid");
        assert_eq!(grid.position_of(id), None);
    }

    #[test]
    fn color_returns_none_out_of_bounds() {
        let grid = PixelGrid::from_fn(2, 2, |row, col| {
            Color::new(u8::try_from(row).unwrap_or(0), u8::try_from(col).unwrap_or(0), 0)
        })
        .expect("valid grid");
        assert_eq!(grid.color(1, 0), Some(Color::new(1, 0, 0)));
        assert_eq!(grid.color(2, 0), None);
        assert_eq!(grid.color(0, 2), None);
    }
}
