//! Rendering intents.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when parsing an unknown [`RenderingIntent`] name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rendering intent '{0}' (expected: absolute, relative, perceptual, saturation)")]
pub struct ParseIntentError(pub String);

/// Policy for mapping colors between working spaces.
///
/// | Intent | Pixel transform | Mask |
/// |--------|-----------------|------|
/// | `AbsoluteColorimetric` | source RGB -> XYZ -> target RGB | yes |
/// | `RelativeColorimetric` | Bradford white adaptation, then absolute | yes |
/// | `Perceptual` | XYZ scaled per axis by target/source gamut extents | yes |
/// | `Saturation` | absolute, then source HSL saturation restored | yes (from the absolute pass) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderingIntent {
    /// Colorimetric match through XYZ, whites not adapted.
    AbsoluteColorimetric,
    /// Colorimetric match after adapting the source white to the target
    /// white.
    RelativeColorimetric,
    /// Whole gamut compressed or expanded toward the target extents.
    Perceptual,
    /// Hue and lightness from the colorimetric result, saturation from the
    /// source.
    Saturation,
}

impl RenderingIntent {
    /// All intents, in display order.
    pub const ALL: [RenderingIntent; 4] = [
        RenderingIntent::AbsoluteColorimetric,
        RenderingIntent::RelativeColorimetric,
        RenderingIntent::Perceptual,
        RenderingIntent::Saturation,
    ];

    /// Short name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            RenderingIntent::AbsoluteColorimetric => "absolute",
            RenderingIntent::RelativeColorimetric => "relative",
            RenderingIntent::Perceptual => "perceptual",
            RenderingIntent::Saturation => "saturation",
        }
    }
}

impl fmt::Display for RenderingIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RenderingIntent {
    type Err = ParseIntentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "absolute" | "absolutecolorimetric" => Ok(RenderingIntent::AbsoluteColorimetric),
            "relative" | "relativecolorimetric" => Ok(RenderingIntent::RelativeColorimetric),
            "perceptual" => Ok(RenderingIntent::Perceptual),
            "saturation" | "preservesaturation" => Ok(RenderingIntent::Saturation),
            _ => Err(ParseIntentError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for intent in RenderingIntent::ALL {
            assert_eq!(intent.name().parse::<RenderingIntent>(), Ok(intent));
        }
        assert_eq!(
            "Relative-Colorimetric".parse::<RenderingIntent>(),
            Ok(RenderingIntent::RelativeColorimetric)
        );
        assert_eq!(
            "absolute_colorimetric".parse::<RenderingIntent>(),
            Ok(RenderingIntent::AbsoluteColorimetric)
        );
        assert!("vivid".parse::<RenderingIntent>().is_err());
    }
}
