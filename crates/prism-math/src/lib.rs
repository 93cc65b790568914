//! # prism-math
//!
//! Math utilities for RGB working-space conversion.
//!
//! This crate provides the primitives the rest of prism is built on:
//!
//! - [`Mat3`] - 3x3 matrices for RGB/XYZ transforms
//! - [`Vec3`] - 3D vectors for RGB/XYZ/cone triplets
//! - Chromatic adaptation ([`BRADFORD`], [`adapt_matrix`]) and
//!   [`xy_to_xyz`]
//!
//! # Design
//!
//! All values are `f64`. Matrices use **row-major** storage and
//! **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Inversion goes through [`glam::DMat3`] after a determinant check, so a
//! singular matrix is reported as `None` instead of producing NaNs.
//!
//! # Usage
//!
//! ```rust
//! use prism_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::new(1.0, 0.5, 0.25);
//! let back = rgb_to_xyz.inverse().unwrap() * xyz;
//! assert!((back.y - 0.5).abs() < 1e-9);
//! ```
//!
//! # Used By
//!
//! - `prism-primaries` - RGB/XYZ matrix generation
//! - `prism-color` - Conversion engine

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod mat3;
mod vec3;

pub use adapt::*;
pub use mat3::*;
pub use vec3::*;
