//! Profile validation errors.

use std::fmt;

use thiserror::Error;

/// Result type alias for profile operations.
pub type Result<T> = std::result::Result<T, ProfileError>;

/// One of the four chromaticity coordinates of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Reference white
    White,
    /// Red primary
    Red,
    /// Green primary
    Green,
    /// Blue primary
    Blue,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Component::White => "white point",
            Component::Red => "red primary",
            Component::Green => "green primary",
            Component::Blue => "blue primary",
        })
    }
}

/// Reasons a [`ColorProfile`](crate::ColorProfile) cannot define a working
/// space.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    /// A chromaticity has `y == 0`; the xyY to XYZ mapping divides by it.
    #[error("{component} has y = 0")]
    ZeroChromaticityY {
        /// Offending coordinate
        component: Component,
    },

    /// A chromaticity coordinate is NaN or infinite.
    #[error("{component} has a non-finite coordinate ({x}, {y})")]
    NonFinite {
        /// Offending coordinate
        component: Component,
        /// x value
        x: f64,
        /// y value
        y: f64,
    },

    /// Gamma is zero, negative, NaN or infinite.
    #[error("gamma must be positive and finite, got {0}")]
    InvalidGamma(f64),

    /// The primaries are collinear, so the primaries matrix has no inverse.
    #[error("primaries are collinear (singular primaries matrix)")]
    SingularPrimaries,

    /// The white point lies on an edge of the primaries triangle (or the
    /// scale is non-finite), leaving the RGB to XYZ matrix singular.
    #[error("RGB to XYZ matrix is singular for this white point")]
    SingularMatrix,

    /// The largest XYZ reach of the primaries is not positive on some axis,
    /// so gamut extents cannot be used as a divisor.
    #[error("gamut extents are not positive: ({0}, {1}, {2})")]
    DegenerateExtents(f64, f64, f64),

    /// The white point has a zero cone response, so white adaptation away
    /// from it is undefined.
    #[error("white point has a zero cone response")]
    DegenerateWhite,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ProfileError::ZeroChromaticityY {
            component: Component::White,
        };
        assert_eq!(err.to_string(), "white point has y = 0");

        let err = ProfileError::InvalidGamma(-1.0);
        assert!(err.to_string().contains("-1"));

        let err = ProfileError::NonFinite {
            component: Component::Blue,
            x: f64::NAN,
            y: 0.06,
        };
        assert!(err.to_string().starts_with("blue primary has a non-finite"));
    }
}
