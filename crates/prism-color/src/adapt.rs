//! White-point adaptation for the relative colorimetric intent.
//!
//! The Bradford transform is applied directly to linear RGB rather than to
//! XYZ. This is the long-standing behavior of the relative intent and is
//! kept as is: results differ from an XYZ-domain adaptation whenever the
//! two whites differ.

use prism_math::{BRADFORD, Mat3, Vec3, adapt_matrix};
use prism_primaries::{ColorProfile, ProfileError};

use crate::error::{ColorError, ColorResult, ProfileRole};

/// Bradford matrix taking `source`'s white to `target`'s white.
///
/// Identity (up to rounding) when the whites match.
///
/// # Errors
///
/// [`ColorError::DegenerateProfile`] if either white is unusable, or the
/// source white has a zero cone response.
pub fn white_adaptation(source: &ColorProfile, target: &ColorProfile) -> ColorResult<Mat3> {
    let src_white = source
        .white_xyz()
        .map_err(|e| ColorError::degenerate(ProfileRole::Source, e))?;
    let dst_white = target
        .white_xyz()
        .map_err(|e| ColorError::degenerate(ProfileRole::Target, e))?;

    adapt_matrix(BRADFORD, src_white, dst_white)
        .ok_or_else(|| ColorError::degenerate(ProfileRole::Source, ProfileError::DegenerateWhite))
}

/// Adapts one linear RGB triple from `source`'s white to `target`'s white.
///
/// Convenience for single values; conversions build the matrix once with
/// [`white_adaptation`].
///
/// # Example
///
/// ```rust
/// use prism_color::adapt::adapt;
/// use prism_primaries::SRGB;
/// use prism_math::Vec3;
///
/// let d50 = SRGB.with_white((0.34567, 0.35850));
/// let rgb = Vec3::new(0.5, 0.4, 0.3);
/// let same = adapt(rgb, &SRGB, &SRGB).unwrap();
/// assert!((same.x - 0.5).abs() < 1e-12);
/// let warmer = adapt(rgb, &SRGB, &d50).unwrap();
/// assert!(warmer.x > warmer.z * 5.0 / 3.0);
/// ```
pub fn adapt(rgb: Vec3, source: &ColorProfile, target: &ColorProfile) -> ColorResult<Vec3> {
    Ok(white_adaptation(source, target)? * rgb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use prism_primaries::{ADOBE_RGB, CUSTOM, SRGB};

    #[test]
    fn test_same_white_is_identity() {
        // Every preset shares one white
        let m = white_adaptation(&SRGB, &ADOBE_RGB).unwrap();
        assert!(m.abs_diff_eq(&Mat3::IDENTITY, 1e-12));
    }

    #[test]
    fn test_d65_to_d50_moves_white() {
        let d50 = SRGB.with_white((0.34567, 0.35850));
        let m = white_adaptation(&SRGB, &d50).unwrap();
        let src_white = SRGB.white_xyz().unwrap();
        let dst_white = d50.white_xyz().unwrap();
        let mapped = m * src_white;
        assert_abs_diff_eq!(mapped.x, dst_white.x, epsilon = 1e-9);
        assert_abs_diff_eq!(mapped.y, dst_white.y, epsilon = 1e-9);
        assert_abs_diff_eq!(mapped.z, dst_white.z, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_white_names_side() {
        let err = white_adaptation(&SRGB, &CUSTOM).unwrap_err();
        assert_eq!(err.role(), Some(ProfileRole::Target));
        let err = white_adaptation(&CUSTOM, &SRGB).unwrap_err();
        assert_eq!(err.role(), Some(ProfileRole::Source));
    }
}
