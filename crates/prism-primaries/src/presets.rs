//! Preset working spaces.

use crate::ColorProfile;

/// Reference white shared by every preset.
pub const PRESET_WHITE: (f64, f64) = (0.31273, 0.329020);

/// sRGB primaries with a 2.2 power-law gamma.
pub const SRGB: ColorProfile = ColorProfile::new(
    2.2,
    PRESET_WHITE,
    (0.64, 0.33),
    (0.30, 0.60),
    (0.15, 0.06),
);

/// Adobe RGB (1998).
pub const ADOBE_RGB: ColorProfile = ColorProfile::new(
    2.2,
    PRESET_WHITE,
    (0.64, 0.33),
    (0.21, 0.71),
    (0.15, 0.06),
);

/// Apple RGB.
pub const APPLE_RGB: ColorProfile = ColorProfile::new(
    1.8,
    PRESET_WHITE,
    (0.625, 0.34),
    (0.28, 0.595),
    (0.155, 0.07),
);

/// CIE 1931 RGB.
pub const CIE_RGB: ColorProfile = ColorProfile::new(
    2.2,
    PRESET_WHITE,
    (0.735, 0.265),
    (0.274, 0.717),
    (0.167, 0.009),
);

/// Wide Gamut RGB.
pub const WIDE_GAMUT_RGB: ColorProfile = ColorProfile::new(
    2.2,
    PRESET_WHITE,
    (0.735, 0.265),
    (0.115, 0.826),
    (0.157, 0.018),
);

/// User-editable slot. Every coordinate is zero, so it fails validation
/// until filled in.
pub const CUSTOM: ColorProfile = ColorProfile::new(
    1.0,
    (0.0, 0.0),
    (0.0, 0.0),
    (0.0, 0.0),
    (0.0, 0.0),
);

/// A preset profile and its display name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedProfile {
    /// Display name
    pub name: &'static str,
    /// Profile values
    pub profile: ColorProfile,
}

/// All presets, in display order.
pub const PRESETS: [NamedProfile; 6] = [
    NamedProfile {
        name: "sRGB",
        profile: SRGB,
    },
    NamedProfile {
        name: "Adobe RGB",
        profile: ADOBE_RGB,
    },
    NamedProfile {
        name: "Apple RGB",
        profile: APPLE_RGB,
    },
    NamedProfile {
        name: "CIE RGB",
        profile: CIE_RGB,
    },
    NamedProfile {
        name: "Wide Gamut RGB",
        profile: WIDE_GAMUT_RGB,
    },
    NamedProfile {
        name: "Custom",
        profile: CUSTOM,
    },
];

fn lookup_key(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Finds a preset by name.
///
/// Matching ignores case, spaces, dashes and underscores, so `"adobe-rgb"`,
/// `"Adobe RGB"` and `"ADOBE_RGB"` all resolve to [`ADOBE_RGB`].
///
/// # Example
///
/// ```rust
/// use prism_primaries::{WIDE_GAMUT_RGB, find_preset};
///
/// let p = find_preset("wide-gamut-rgb").unwrap();
/// assert_eq!(p.profile, WIDE_GAMUT_RGB);
/// assert!(find_preset("rec2020").is_none());
/// ```
pub fn find_preset(name: &str) -> Option<&'static NamedProfile> {
    let key = lookup_key(name);
    PRESETS.iter().find(|p| lookup_key(p.name) == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_preset_variants() {
        for name in ["srgb", "SRGB", "s-rgb"] {
            assert_eq!(find_preset(name).unwrap().profile, SRGB);
        }
        assert_eq!(find_preset("Apple_RGB").unwrap().profile, APPLE_RGB);
        assert_eq!(find_preset("CIERGB").unwrap().profile, CIE_RGB);
        assert_eq!(find_preset("custom").unwrap().profile, CUSTOM);
        assert!(find_preset("").is_none());
    }

    #[test]
    fn test_presets_share_white() {
        for preset in PRESETS.iter().filter(|p| p.name != "Custom") {
            assert_eq!(preset.profile.white, PRESET_WHITE, "{}", preset.name);
            assert!(preset.profile.validate().is_ok(), "{}", preset.name);
        }
    }

    #[test]
    fn test_preset_gammas() {
        assert_eq!(APPLE_RGB.gamma, 1.8);
        assert_eq!(CUSTOM.gamma, 1.0);
        assert!(
            [SRGB, ADOBE_RGB, CIE_RGB, WIDE_GAMUT_RGB]
                .iter()
                .all(|p| p.gamma == 2.2)
        );
    }
}
