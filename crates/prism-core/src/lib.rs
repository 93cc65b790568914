//! # prism-core
//!
//! Core types for the prism color conversion engine.
//!
//! - [`RgbImage`] - 8-bit interleaved RGB raster
//! - [`GamutMask`] - per-pixel out-of-gamut flags
//! - [`pixel`] - byte/float conversion at the raster boundary
//! - [`Error`] - structural raster errors
//!
//! # Usage
//!
//! ```rust
//! use prism_core::{GamutMask, RgbImage};
//!
//! let img = RgbImage::filled(8, 8, [200, 30, 30]);
//! img.validate().unwrap();
//!
//! let mask = GamutMask::new(img.width(), img.height());
//! assert_eq!(mask.count_out_of_gamut(), 0);
//! ```
//!
//! # Used By
//!
//! - `prism-color` - Conversion input/output
//! - `prism-cli` - Image file I/O

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod image;
pub mod pixel;

pub use error::{Error, Result};
pub use image::{CHANNELS, GamutMask, RgbImage};
pub use pixel::Rgb8;
