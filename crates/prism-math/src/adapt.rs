//! Chromatic Adaptation Transforms (CAT).
//!
//! This module provides the Bradford cone-response matrix and the
//! von Kries style scaling built on it, used to move colors between two
//! white points.
//!
//! # Usage
//!
//! ```rust
//! use prism_math::{adapt_matrix, xy_to_xyz, BRADFORD};
//!
//! let d65 = xy_to_xyz(0.3127, 0.3290).unwrap();
//! let d50 = xy_to_xyz(0.3457, 0.3585).unwrap();
//!
//! let d65_to_d50 = adapt_matrix(BRADFORD, d65, d50).unwrap();
//! let result = d65_to_d50 * d65;
//! assert!((result.x - d50.x).abs() < 1e-9);
//! assert!((result.z - d50.z).abs() < 1e-9);
//! ```

use crate::{Mat3, Vec3};

/// Bradford chromatic adaptation matrix.
///
/// Transforms XYZ to a "sharpened" cone response space.
///
/// # Reference
///
/// Lam, K.M. (1985). Metamerism and Colour Constancy.
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Converts xy chromaticity to XYZ with Y=1.
///
/// Returns `None` when `y` is zero or any input is not finite, since the
/// xyY to XYZ mapping divides by `y`.
///
/// # Example
///
/// ```rust
/// use prism_math::xy_to_xyz;
///
/// let d65 = xy_to_xyz(0.3127, 0.3290).unwrap();
/// assert_eq!(d65.y, 1.0);
/// assert!(xy_to_xyz(0.3, 0.0).is_none());
/// ```
#[inline]
pub fn xy_to_xyz(x: f64, y: f64) -> Option<Vec3> {
    if !x.is_finite() || !y.is_finite() || y == 0.0 {
        return None;
    }
    let xyz = Vec3::new(x / y, 1.0, (1.0 - x - y) / y);
    xyz.is_finite().then_some(xyz)
}

/// Computes a chromatic adaptation matrix between two white points.
///
/// The result is `M^-1 * D * M` where `D` is the diagonal matrix of
/// destination/source cone responses.
///
/// # Arguments
///
/// * `method` - Cone response matrix, normally [`BRADFORD`]
/// * `src_white` - Source white point in XYZ
/// * `dst_white` - Destination white point in XYZ
///
/// Returns `None` if `method` is singular or a source cone response is zero,
/// which would make the diagonal scale non-finite.
pub fn adapt_matrix(method: Mat3, src_white: Vec3, dst_white: Vec3) -> Option<Mat3> {
    let method_inv = method.inverse()?;

    let src_cone = method * src_white;
    let dst_cone = method * dst_white;

    let scale = dst_cone / src_cone;
    if !scale.is_finite() {
        return None;
    }

    Some(method_inv * Mat3::from_diagonal(scale) * method)
}
