//! # prism-primaries
//!
//! RGB working-space profiles and RGB-XYZ matrix generation.
//!
//! A [`ColorProfile`] is a gamma plus four CIE xy chromaticities: the
//! reference white and the red, green and blue primaries. From those the
//! matrix builder derives the 3x3 transform taking linear RGB to CIE XYZ,
//! normalized so that RGB `(1, 1, 1)` lands on the white point with `Y = 1`.
//!
//! # Included Presets
//!
//! | Preset | Gamma | Notes |
//! |--------|-------|-------|
//! | sRGB | 2.2 | Rec.709 primaries |
//! | Adobe RGB | 2.2 | Wider green |
//! | Apple RGB | 1.8 | Legacy Mac displays |
//! | CIE RGB | 2.2 | CIE 1931 primaries |
//! | Wide Gamut RGB | 2.2 | Spectral-locus primaries |
//! | Custom | 1.0 | All-zero slot, must be filled in |
//!
//! Every preset uses the same white, `(0.31273, 0.329020)`.
//!
//! # Usage
//!
//! ```rust
//! use prism_primaries::{SRGB, rgb_to_xyz_matrix};
//! use prism_math::Vec3;
//!
//! let m = rgb_to_xyz_matrix(&SRGB).unwrap();
//! let white = m * Vec3::ONE;
//! assert!((white.y - 1.0).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `prism-color` - Conversion engine
//! - `prism-cli` - Profile files and preset listing

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod presets;

pub use error::{Component, ProfileError, Result};
pub use presets::*;

use prism_math::{Mat3, Vec3, xy_to_xyz};

/// An RGB working space: gamma plus white and primaries as CIE xy.
///
/// # Example
///
/// ```rust
/// use prism_primaries::ColorProfile;
///
/// let p = ColorProfile::new(2.2, (0.3127, 0.3290), (0.64, 0.33), (0.30, 0.60), (0.15, 0.06));
/// assert!(p.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorProfile {
    /// Transfer exponent
    pub gamma: f64,
    /// Reference white (x, y)
    pub white: (f64, f64),
    /// Red primary (x, y)
    pub red: (f64, f64),
    /// Green primary (x, y)
    pub green: (f64, f64),
    /// Blue primary (x, y)
    pub blue: (f64, f64),
}

impl ColorProfile {
    /// Creates a profile from its gamma and chromaticities.
    pub const fn new(
        gamma: f64,
        white: (f64, f64),
        red: (f64, f64),
        green: (f64, f64),
        blue: (f64, f64),
    ) -> Self {
        Self {
            gamma,
            white,
            red,
            green,
            blue,
        }
    }

    /// Returns a copy with a different gamma.
    pub const fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Returns a copy with a different white point.
    pub const fn with_white(mut self, white: (f64, f64)) -> Self {
        self.white = white;
        self
    }

    /// Chromaticity of one component.
    pub fn chromaticity(&self, component: Component) -> (f64, f64) {
        match component {
            Component::White => self.white,
            Component::Red => self.red,
            Component::Green => self.green,
            Component::Blue => self.blue,
        }
    }

    /// Returns a copy with one chromaticity replaced.
    pub fn with_chromaticity(mut self, component: Component, xy: (f64, f64)) -> Self {
        match component {
            Component::White => self.white = xy,
            Component::Red => self.red = xy,
            Component::Green => self.green = xy,
            Component::Blue => self.blue = xy,
        }
        self
    }

    /// Converts one chromaticity to XYZ with `Y = 1`.
    ///
    /// # Errors
    ///
    /// [`ProfileError::NonFinite`] or [`ProfileError::ZeroChromaticityY`].
    pub fn component_xyz(&self, component: Component) -> Result<Vec3> {
        let (x, y) = self.chromaticity(component);
        if !x.is_finite() || !y.is_finite() {
            return Err(ProfileError::NonFinite { component, x, y });
        }
        xy_to_xyz(x, y).ok_or(ProfileError::ZeroChromaticityY { component })
    }

    /// White point as XYZ (`Y = 1`).
    ///
    /// # Errors
    ///
    /// Fails when the white chromaticity is non-finite or has `y == 0`.
    pub fn white_xyz(&self) -> Result<Vec3> {
        self.component_xyz(Component::White)
    }

    /// Checks everything a conversion needs from this profile: a positive
    /// finite gamma, finite chromaticities with non-zero `y`, non-collinear
    /// primaries and an invertible RGB to XYZ matrix.
    pub fn validate(&self) -> Result<()> {
        ProfileMatrices::new(self).map(|_| ())
    }

    fn check_gamma(&self) -> Result<()> {
        if self.gamma.is_finite() && self.gamma > 0.0 {
            Ok(())
        } else {
            Err(ProfileError::InvalidGamma(self.gamma))
        }
    }
}

/// Computes the RGB to XYZ matrix for a profile.
///
/// # Algorithm
///
/// 1. Convert the primaries and white from xy to XYZ (`Y = 1`)
/// 2. Put the primaries in the columns of `P`
/// 3. Solve `S = P^-1 * W` for the per-primary scale
/// 4. Scale each column of `P` by the matching component of `S`
///
/// Gamma is not consulted.
///
/// # Errors
///
/// - [`ProfileError::NonFinite`] / [`ProfileError::ZeroChromaticityY`] for
///   an unusable coordinate, white included
/// - [`ProfileError::SingularPrimaries`] for collinear primaries
/// - [`ProfileError::SingularMatrix`] when the scaled matrix cannot be
///   inverted
///
/// # Example
///
/// ```rust
/// use prism_primaries::{ColorProfile, ProfileError, rgb_to_xyz_matrix};
///
/// let zero = ColorProfile::new(1.0, (0.0, 0.0), (0.0, 0.0), (0.0, 0.0), (0.0, 0.0));
/// assert!(matches!(
///     rgb_to_xyz_matrix(&zero),
///     Err(ProfileError::ZeroChromaticityY { .. })
/// ));
/// ```
pub fn rgb_to_xyz_matrix(profile: &ColorProfile) -> Result<Mat3> {
    let w_xyz = profile.component_xyz(Component::White)?;
    let r_xyz = profile.component_xyz(Component::Red)?;
    let g_xyz = profile.component_xyz(Component::Green)?;
    let b_xyz = profile.component_xyz(Component::Blue)?;

    let p = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);
    let p_inv = p.inverse().ok_or(ProfileError::SingularPrimaries)?;
    let s = p_inv * w_xyz;

    let m = Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z);
    if !m.is_finite() {
        return Err(ProfileError::SingularMatrix);
    }
    Ok(m)
}

/// Both directions of a profile's RGB/XYZ transform, derived once.
///
/// Construction validates the whole profile, gamma included, so holding a
/// `ProfileMatrices` means the profile is usable for conversion.
///
/// # Example
///
/// ```rust
/// use prism_primaries::{ADOBE_RGB, ProfileMatrices};
/// use prism_math::Vec3;
///
/// let m = ProfileMatrices::new(&ADOBE_RGB).unwrap();
/// let rgb = Vec3::new(0.2, 0.7, 0.4);
/// let back = m.from_xyz * (m.to_xyz * rgb);
/// assert!((back.y - 0.7).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileMatrices {
    /// Linear RGB to XYZ
    pub to_xyz: Mat3,
    /// XYZ to linear RGB
    pub from_xyz: Mat3,
}

impl ProfileMatrices {
    /// Validates `profile` and derives its matrices.
    pub fn new(profile: &ColorProfile) -> Result<Self> {
        profile.check_gamma()?;
        let to_xyz = rgb_to_xyz_matrix(profile)?;
        let from_xyz = to_xyz.inverse().ok_or(ProfileError::SingularMatrix)?;
        Ok(Self { to_xyz, from_xyz })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_srgb_matrix() {
        let m = rgb_to_xyz_matrix(&SRGB).unwrap();
        // Known D65 values; the preset white differs from D65 in the 5th digit
        assert_abs_diff_eq!(m.m[0][0], 0.4124564, epsilon = 1e-3);
        assert_abs_diff_eq!(m.m[1][0], 0.2126729, epsilon = 1e-3);
        assert_abs_diff_eq!(m.m[2][2], 0.9503041, epsilon = 1e-3);
    }

    #[test]
    fn test_white_maps_to_white_point() {
        for preset in PRESETS.iter().filter(|p| p.name != "Custom") {
            let m = rgb_to_xyz_matrix(&preset.profile).unwrap();
            let white = m * Vec3::ONE;
            let expected = preset.profile.white_xyz().unwrap();
            assert_abs_diff_eq!(white.x, expected.x, epsilon = 1e-12);
            assert_abs_diff_eq!(white.y, 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(white.z, expected.z, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_roundtrip_identity() {
        for preset in PRESETS.iter().filter(|p| p.name != "Custom") {
            let m = ProfileMatrices::new(&preset.profile).unwrap();
            let product = m.from_xyz * m.to_xyz;
            assert!(
                product.abs_diff_eq(&Mat3::IDENTITY, 1e-9),
                "{}: {:?}",
                preset.name,
                product
            );
        }
    }

    #[test]
    fn test_all_zero_profile() {
        assert_eq!(
            CUSTOM.validate(),
            Err(ProfileError::ZeroChromaticityY {
                component: Component::White
            })
        );
    }

    #[test]
    fn test_zero_y_primary() {
        let p = SRGB.with_chromaticity(Component::Blue, (0.15, 0.0));
        assert_eq!(
            rgb_to_xyz_matrix(&p),
            Err(ProfileError::ZeroChromaticityY {
                component: Component::Blue
            })
        );
    }

    #[test]
    fn test_collinear_primaries() {
        let p = ColorProfile::new(2.2, (0.3127, 0.3290), (0.2, 0.2), (0.4, 0.4), (0.6, 0.6));
        assert_eq!(p.validate(), Err(ProfileError::SingularPrimaries));
    }

    #[test]
    fn test_non_finite() {
        let p = SRGB.with_chromaticity(Component::Red, (f64::NAN, 0.33));
        assert!(matches!(
            p.validate(),
            Err(ProfileError::NonFinite {
                component: Component::Red,
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_gamma() {
        for gamma in [0.0, -2.2, f64::NAN, f64::INFINITY] {
            let err = SRGB.with_gamma(gamma).validate().unwrap_err();
            assert!(matches!(err, ProfileError::InvalidGamma(_)));
        }
        // The matrix builder ignores gamma
        assert!(rgb_to_xyz_matrix(&SRGB.with_gamma(0.0)).is_ok());
    }

    #[test]
    fn test_white_on_primary_edge() {
        // White on the red-green edge gives a zero blue scale
        let p = SRGB.with_white((0.47, 0.465));
        assert_eq!(ProfileMatrices::new(&p), Err(ProfileError::SingularMatrix));
    }

    #[test]
    fn test_builders() {
        let p = SRGB.with_gamma(1.8).with_white((0.3457, 0.3585));
        assert_eq!(p.gamma, 1.8);
        assert_eq!(p.chromaticity(Component::White), (0.3457, 0.3585));
        assert_eq!(p.red, SRGB.red);
    }
}
