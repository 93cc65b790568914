//! Error types for conversion.
//!
//! Both kinds of failure are detected before the pixel loop starts, so a
//! conversion either produces a full result or nothing.

use std::fmt;

use prism_primaries::ProfileError;
use thiserror::Error;

/// Which side of a conversion a profile belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileRole {
    /// Profile the input pixels are encoded in
    Source,
    /// Profile the output pixels are encoded in
    Target,
}

impl fmt::Display for ProfileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProfileRole::Source => "source",
            ProfileRole::Target => "target",
        })
    }
}

/// Conversion error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A profile cannot define a working space.
    #[error("degenerate {role} profile: {source}")]
    DegenerateProfile {
        /// Side that failed
        role: ProfileRole,
        /// Underlying reason
        #[source]
        source: ProfileError,
    },

    /// The input raster is empty or malformed.
    #[error("invalid image: {0}")]
    InvalidImage(#[from] prism_core::Error),
}

/// Result type for conversion operations.
pub type ColorResult<T> = Result<T, ColorError>;

impl ColorError {
    /// Creates a [`ColorError::DegenerateProfile`] error.
    pub fn degenerate(role: ProfileRole, source: ProfileError) -> Self {
        Self::DegenerateProfile { role, source }
    }

    /// Returns `true` for [`ColorError::DegenerateProfile`].
    pub fn is_degenerate_profile(&self) -> bool {
        matches!(self, Self::DegenerateProfile { .. })
    }

    /// Returns `true` for [`ColorError::InvalidImage`].
    pub fn is_invalid_image(&self) -> bool {
        matches!(self, Self::InvalidImage(_))
    }

    /// Side of the conversion that failed, for profile errors.
    pub fn role(&self) -> Option<ProfileRole> {
        match self {
            Self::DegenerateProfile { role, .. } => Some(*role),
            Self::InvalidImage(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_degenerate_message_and_source() {
        let err = ColorError::degenerate(ProfileRole::Target, ProfileError::SingularPrimaries);
        assert!(err.to_string().starts_with("degenerate target profile"));
        assert!(err.is_degenerate_profile());
        assert_eq!(err.role(), Some(ProfileRole::Target));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_image_from_core() {
        let err: ColorError = prism_core::Error::empty_image(0, 0).into();
        assert!(err.is_invalid_image());
        assert_eq!(err.role(), None);
        assert!(err.to_string().contains("0x0"));
    }
}
