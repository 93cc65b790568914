//! Gamut analysis.
//!
//! - [`out_of_gamut`] classifies a converted linear RGB triple
//! - [`max_extents`] measures how far a profile's primaries reach in XYZ
//! - [`perceptual_scale`] turns two extents into the per-axis XYZ scale used
//!   by the perceptual intent

use prism_math::{Mat3, Vec3};
use prism_primaries::ProfileError;

use crate::error::{ColorError, ColorResult, ProfileRole};

/// Tolerance around `[0, 1]` before a channel counts as out of gamut.
pub const OUT_OF_GAMUT_EPSILON: f64 = 1e-3;

/// Returns `true` if any channel lies below `-1e-3` or above `1 + 1e-3`.
///
/// NaN channels count as out of gamut.
///
/// # Example
///
/// ```rust
/// use prism_color::gamut::out_of_gamut;
/// use prism_math::Vec3;
///
/// assert!(!out_of_gamut(Vec3::new(1.0009, 0.5, -0.0009)));
/// assert!(out_of_gamut(Vec3::new(1.0011, 0.5, 0.5)));
/// ```
#[inline]
pub fn out_of_gamut(rgb: Vec3) -> bool {
    let lo = -OUT_OF_GAMUT_EPSILON;
    let hi = 1.0 + OUT_OF_GAMUT_EPSILON;
    rgb.to_array().iter().any(|&c| !(lo..=hi).contains(&c))
}

/// Component-wise maximum of the XYZ images of the three unit primaries,
/// i.e. the largest X, Y and Z found among the columns of `rgb_to_xyz`.
pub fn max_extents(rgb_to_xyz: &Mat3) -> Vec3 {
    let r = *rgb_to_xyz * Vec3::X;
    let g = *rgb_to_xyz * Vec3::Y;
    let b = *rgb_to_xyz * Vec3::Z;
    r.max(g).max(b)
}

fn positive_extents(rgb_to_xyz: &Mat3, role: ProfileRole) -> ColorResult<Vec3> {
    let extents = max_extents(rgb_to_xyz);
    if extents.is_finite() && extents.min_element() > 0.0 {
        Ok(extents)
    } else {
        Err(ColorError::degenerate(
            role,
            ProfileError::DegenerateExtents(extents.x, extents.y, extents.z),
        ))
    }
}

/// Diagonal XYZ scale `target_extents / source_extents`.
///
/// # Errors
///
/// [`ColorError::DegenerateProfile`] naming the side whose extents are zero,
/// negative or non-finite on some axis.
pub fn perceptual_scale(source_to_xyz: &Mat3, target_to_xyz: &Mat3) -> ColorResult<Mat3> {
    let src = positive_extents(source_to_xyz, ProfileRole::Source)?;
    let dst = positive_extents(target_to_xyz, ProfileRole::Target)?;
    Ok(Mat3::from_diagonal(dst / src))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use prism_primaries::{ADOBE_RGB, SRGB, rgb_to_xyz_matrix};

    #[test]
    fn test_out_of_gamut_boundaries() {
        assert!(!out_of_gamut(Vec3::ZERO));
        assert!(!out_of_gamut(Vec3::ONE));
        assert!(out_of_gamut(Vec3::new(-0.0011, 0.5, 0.5)));
        assert!(out_of_gamut(Vec3::new(0.5, 1.0011, 0.5)));
        assert!(!out_of_gamut(Vec3::new(0.5, 0.5, -0.0009)));
        assert!(!out_of_gamut(Vec3::new(1.0009, 0.5, 0.5)));
    }

    #[test]
    fn test_out_of_gamut_nan() {
        assert!(out_of_gamut(Vec3::new(f64::NAN, 0.5, 0.5)));
    }

    #[test]
    fn test_max_extents() {
        let m = Mat3::from_rows([[0.4, 0.3, 0.2], [0.2, 0.7, 0.1], [0.0, 0.1, 0.9]]);
        assert_eq!(max_extents(&m), Vec3::new(0.4, 0.7, 0.9));
    }

    #[test]
    fn test_perceptual_scale_identity() {
        let m = rgb_to_xyz_matrix(&SRGB).unwrap();
        let s = perceptual_scale(&m, &m).unwrap();
        assert!(s.abs_diff_eq(&Mat3::IDENTITY, 1e-12));
    }

    #[test]
    fn test_perceptual_scale_srgb_to_adobe() {
        let src = rgb_to_xyz_matrix(&SRGB).unwrap();
        let dst = rgb_to_xyz_matrix(&ADOBE_RGB).unwrap();
        let s = perceptual_scale(&src, &dst).unwrap();
        let expected = max_extents(&dst) / max_extents(&src);
        assert_abs_diff_eq!(s.m[0][0], expected.x, epsilon = 1e-12);
        assert_abs_diff_eq!(s.m[1][1], expected.y, epsilon = 1e-12);
        assert_eq!(s.m[0][1], 0.0);
    }

    #[test]
    fn test_perceptual_scale_rejects_zero_extent() {
        let good = rgb_to_xyz_matrix(&SRGB).unwrap();
        let flat = Mat3::from_rows([[0.4, 0.3, 0.2], [0.2, 0.7, 0.1], [0.0, 0.0, 0.0]]);
        let err = perceptual_scale(&good, &flat).unwrap_err();
        assert_eq!(err.role(), Some(ProfileRole::Target));
        assert!(matches!(
            err,
            ColorError::DegenerateProfile {
                source: ProfileError::DegenerateExtents(..),
                ..
            }
        ));
    }
}
