//! Error types for prism-core operations.
//!
//! The [`Error`] enum covers structural problems with rasters: buffers that
//! do not match their declared dimensions, zero-area images, and pairs of
//! rasters (image and mask) whose sizes disagree.
//!
//! # Usage
//!
//! ```rust
//! use prism_core::{Error, RgbImage};
//!
//! let err = RgbImage::from_raw(4, 4, vec![0; 5]).unwrap_err();
//! assert!(matches!(err, Error::InvalidDimensions { .. }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or validating rasters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Buffer length does not match the declared dimensions, or the
    /// dimensions overflow `usize`.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Image has zero width or zero height.
    #[error("image has zero area: {width}x{height}")]
    EmptyImage {
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },

    /// Two rasters that must line up have different sizes.
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        /// First raster width
        a_width: u32,
        /// First raster height
        a_height: u32,
        /// Second raster width
        b_width: u32,
        /// Second raster height
        b_height: u32,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::EmptyImage`] error.
    #[inline]
    pub fn empty_image(width: u32, height: u32) -> Self {
        Self::EmptyImage { width, height }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(a: (u32, u32), b: (u32, u32)) -> Self {
        Self::DimensionMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions() {
        let err = Error::invalid_dimensions(10, 20, "expected 600 bytes, got 5");
        let msg = err.to_string();
        assert!(msg.contains("10x20"));
        assert!(msg.contains("600"));
    }

    #[test]
    fn test_empty_image() {
        let err = Error::empty_image(0, 7);
        assert!(err.to_string().contains("0x7"));
        assert!(matches!(err, Error::EmptyImage { width: 0, height: 7 }));
    }

    #[test]
    fn test_dimension_mismatch() {
        let msg = Error::dimension_mismatch((100, 100), (200, 50)).to_string();
        assert!(msg.contains("100x100"));
        assert!(msg.contains("200x50"));
    }
}
