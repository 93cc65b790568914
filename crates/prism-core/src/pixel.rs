//! 8-bit pixel helpers.
//!
//! The engine works on `f64` triplets in `[0, 1]`; rasters store `u8`.
//! [`normalize`] and [`quantize`] are the only two places values cross that
//! boundary.

/// An encoded 8-bit RGB pixel.
pub type Rgb8 = [u8; 3];

/// Pure black.
pub const BLACK: Rgb8 = [0, 0, 0];

/// Magenta, the out-of-gamut sentinel used by mask overlays.
pub const MAGENTA: Rgb8 = [255, 0, 255];

/// Converts a byte to `[0, 1]`.
#[inline]
pub fn normalize_channel(v: u8) -> f64 {
    v as f64 / 255.0
}

/// Converts a `[0, 1]` value to a byte.
///
/// Values are clamped to `[0, 1]`, scaled by 255 and rounded half away from
/// zero. NaN maps to 0.
#[inline]
pub fn quantize_channel(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Converts an 8-bit pixel to normalized channels.
#[inline]
pub fn normalize(px: Rgb8) -> [f64; 3] {
    px.map(normalize_channel)
}

/// Converts normalized channels to an 8-bit pixel.
#[inline]
pub fn quantize(v: [f64; 3]) -> Rgb8 {
    v.map(quantize_channel)
}
