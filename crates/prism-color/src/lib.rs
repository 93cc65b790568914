//! # prism-color
//!
//! Per-pixel conversion of 8-bit RGB images between working spaces.
//!
//! A working space is a [`ColorProfile`](prism_primaries::ColorProfile):
//! gamma plus white and primaries. [`convert`] maps every pixel of an image
//! from a source profile to a target profile under one of four
//! [`RenderingIntent`]s and reports which pixels fell outside the target
//! gamut.
//!
//! # Modules
//!
//! - [`engine`] - [`convert`], [`Conversion`], options and result
//! - [`intent`] - [`RenderingIntent`]
//! - [`gamut`] - out-of-gamut test and gamut extents
//! - [`adapt`] - Bradford white adaptation
//! - [`hsl`] - RGB/HSL for the saturation intent
//! - [`mask`] - painting a gamut mask onto an image
//!
//! # Usage
//!
//! ```rust
//! use prism_color::{RenderingIntent, convert, mask::overlay_mask};
//! use prism_core::RgbImage;
//! use prism_primaries::{SRGB, WIDE_GAMUT_RGB};
//!
//! let img = RgbImage::filled(16, 16, [0, 255, 0]);
//! let mut result = convert(&img, &WIDE_GAMUT_RGB, &SRGB, RenderingIntent::RelativeColorimetric)?;
//!
//! if let Some(mask) = &result.gamut_mask {
//!     overlay_mask(&mut result.image, mask)?;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Dependencies
//!
//! - `prism-core` - Rasters
//! - `prism-math` - Matrices, Bradford
//! - `prism-transfer` - Gamma codecs
//! - `prism-primaries` - Profiles and matrix builder
//! - `rayon` - Row-parallel pixel loop
//! - `tracing` - Diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod adapt;
pub mod engine;
pub mod error;
pub mod gamut;
pub mod hsl;
pub mod intent;
pub mod mask;

pub use engine::{Conversion, ConversionResult, ConvertOptions, convert, convert_with_options};
pub use error::{ColorError, ColorResult, ProfileRole};
pub use intent::{ParseIntentError, RenderingIntent};
pub use prism_transfer::TransferPolicy;
