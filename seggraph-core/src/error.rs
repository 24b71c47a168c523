//! Error types for the seggraph core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::graph::Neighbourhood;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while constructing a [`crate::PixelGrid`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PixelGridError {
    /// The supplied buffer does not hold exactly `height * width` pixels.
    #[error(
        "pixel buffer for a {height}x{width} grid must hold {expected} values but holds {actual}"
    )]
    PixelCountMismatch {
        /// Requested grid height.
        height: usize,
        /// Requested grid width.
        width: usize,
        /// Number of values the buffer should contain.
        expected: usize,
        /// Number of values the buffer actually contains.
        actual: usize,
    },
    /// `height * width` does not fit in `usize`.
    #[error("grid dimensions {height}x{width} overflow the addressable pixel count")]
    DimensionsOverflow {
        /// Requested grid height.
        height: usize,
        /// Requested grid width.
        width: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`PixelGridError`] variants.
    enum PixelGridErrorCode for PixelGridError {
        /// The supplied buffer does not hold exactly `height * width` pixels.
        PixelCountMismatch => PixelCountMismatch { .. } => "PIXEL_GRID_COUNT_MISMATCH",
        /// `height * width` does not fit in `usize`.
        DimensionsOverflow => DimensionsOverflow { .. } => "PIXEL_GRID_DIMENSIONS_OVERFLOW",
    }
}

/// Error type produced when configuring or running a [`crate::Segmenter`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SegmentationError {
    /// The granularity parameter must be finite and non-negative.
    #[error("granularity must be finite and non-negative (got {got})")]
    InvalidGranularity {
        /// The rejected granularity value.
        got: f64,
    },
    /// The supplied grid contains no pixels.
    #[error("cannot segment an empty image")]
    EmptyImage,
    /// The grid is too small to contain an edge-emitting pixel under the
    /// configured neighbourhood.
    #[error(
        "a {height}x{width} image has no interior pixel; {neighbourhood:?} needs at least {minimum}x{minimum}"
    )]
    InsufficientDimensions {
        /// Grid height.
        height: usize,
        /// Grid width.
        width: usize,
        /// Smallest accepted side length.
        minimum: usize,
        /// Neighbourhood policy that imposed the minimum.
        neighbourhood: Neighbourhood,
    },
}

define_error_codes! {
    /// Stable codes describing [`SegmentationError`] variants.
    enum SegmentationErrorCode for SegmentationError {
        /// The granularity parameter must be finite and non-negative.
        InvalidGranularity => InvalidGranularity { .. } => "SEGGRAPH_INVALID_GRANULARITY",
        /// The supplied grid contains no pixels.
        EmptyImage => EmptyImage => "SEGGRAPH_EMPTY_IMAGE",
        /// The grid is too small for the configured neighbourhood.
        InsufficientDimensions => InsufficientDimensions { .. } => "SEGGRAPH_INSUFFICIENT_DIMENSIONS",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, SegmentationError>;
