//! CLI command implementations

pub mod check;
pub mod convert;
pub mod profiles;

use anyhow::{Context, Result, bail};
use prism_core::{GamutMask, RgbImage};
use prism_math::Mat3;
use prism_primaries::{ColorProfile, Component, PRESETS, find_preset};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// A CIE xy pair parsed from `x,y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chromaticity(pub f64, pub f64);

impl FromStr for Chromaticity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected x,y but got '{s}'"))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid coordinate '{}': {e}", v.trim()))
        };
        Ok(Chromaticity(parse(x)?, parse(y)?))
    }
}

impl From<Chromaticity> for (f64, f64) {
    fn from(c: Chromaticity) -> Self {
        (c.0, c.1)
    }
}

/// Field-level replacements for a loaded profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileEdits {
    pub gamma: Option<f64>,
    pub white: Option<Chromaticity>,
    pub red: Option<Chromaticity>,
    pub green: Option<Chromaticity>,
    pub blue: Option<Chromaticity>,
}

impl ProfileEdits {
    /// Applies every present edit to `profile`.
    pub fn apply(&self, mut profile: ColorProfile) -> ColorProfile {
        if let Some(gamma) = self.gamma {
            profile = profile.with_gamma(gamma);
        }
        for (component, value) in [
            (Component::White, self.white),
            (Component::Red, self.red),
            (Component::Green, self.green),
            (Component::Blue, self.blue),
        ] {
            if let Some(xy) = value {
                profile = profile.with_chromaticity(component, xy.into());
            }
        }
        profile
    }
}

/// Resolves a profile argument: an existing file is parsed as JSON (by
/// `.json` extension) or YAML, anything else is looked up as a preset.
pub fn load_profile(arg: &str) -> Result<ColorProfile> {
    let path = Path::new(arg);
    if path.is_file() {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile: {}", path.display()))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let profile: ColorProfile = if is_json {
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse JSON profile: {}", path.display()))?
        } else {
            serde_yaml::from_str(&text)
                .with_context(|| format!("Failed to parse YAML profile: {}", path.display()))?
        };
        debug!(path = %path.display(), ?profile, "Loaded profile file");
        return Ok(profile);
    }

    match find_preset(arg) {
        Some(preset) => {
            debug!(name = preset.name, "Using preset profile");
            Ok(preset.profile)
        }
        None => {
            let names: Vec<&str> = PRESETS.iter().map(|p| p.name).collect();
            bail!(
                "Unknown profile '{}': not a file and not a preset ({})",
                arg,
                names.join(", ")
            )
        }
    }
}

/// Load image from path as 8-bit RGB
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let decoded = image::open(path)
        .with_context(|| format!("Failed to load: {}", path.display()))?
        .to_rgb8();
    let (width, height) = decoded.dimensions();
    RgbImage::from_raw(width, height, decoded.into_raw())
        .with_context(|| format!("Bad pixel buffer in {}", path.display()))
}

/// Save image to path; format follows the extension
pub fn save_image(path: &Path, img: &RgbImage) -> Result<()> {
    let buffer = image::RgbImage::from_raw(img.width(), img.height(), img.as_raw().to_vec())
        .context("Pixel buffer does not match image size")?;
    buffer
        .save(path)
        .with_context(|| format!("Failed to save: {}", path.display()))
}

/// Save a gamut mask as grayscale: white = out of gamut, black = in gamut
pub fn save_mask(path: &Path, mask: &GamutMask) -> Result<()> {
    let buffer = image::GrayImage::from_raw(mask.width(), mask.height(), mask.to_luma8())
        .context("Mask buffer does not match mask size")?;
    buffer
        .save(path)
        .with_context(|| format!("Failed to save mask: {}", path.display()))
}

/// Formats a matrix as three indented rows.
pub fn format_matrix(m: &Mat3) -> String {
    m.m.iter()
        .map(|row| format!("  [{:>10.6} {:>10.6} {:>10.6}]", row[0], row[1], row[2]))
        .collect::<Vec<_>>()
        .join("\n")
}
