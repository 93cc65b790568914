//! sRGB-style piecewise gamma codec.
//!
//! A linear segment near black joined to an offset power curve. Unlike the
//! fixed IEC 61966-2-1 curve, the exponent comes from the profile's gamma;
//! the linear slope, offset and break points are the sRGB ones.
//!
//! ```text
//! linearize(V)   = V / 12.92                       if V <= 0.04045
//!                  ((V + 0.055) / 1.055)^gamma     otherwise
//! delinearize(L) = L * 12.92                       if L <= 0.0031308
//!                  1.055 * L^(1/gamma) - 0.055     otherwise
//! ```
//!
//! With `gamma <= 2.4` the two branches of `linearize` do not overlap and the
//! pair round-trips exactly. Larger exponents make the decode non-injective
//! just above the break point.
//!
//! Values below the break point stay on the linear segment, negatives
//! included, so the codec is total and never clamps.

/// Encoded break point between the linear and power segments.
pub const ENCODED_BREAK: f64 = 0.04045;

/// Linear-light break point between the linear and power segments.
pub const LINEAR_BREAK: f64 = 0.0031308;

/// Slope of the linear segment.
pub const LINEAR_SLOPE: f64 = 12.92;

const OFFSET: f64 = 0.055;
const SCALE: f64 = 1.055;

/// Decodes an encoded value to linear light.
///
/// # Example
///
/// ```rust
/// use prism_transfer::piecewise::linearize;
///
/// let linear = linearize(0.5, 2.4);
/// assert!((linear - 0.214).abs() < 0.001);
/// ```
#[inline]
pub fn linearize(v: f64, gamma: f64) -> f64 {
    if v <= ENCODED_BREAK {
        v / LINEAR_SLOPE
    } else {
        ((v + OFFSET) / SCALE).powf(gamma)
    }
}

/// Encodes linear light.
///
/// # Example
///
/// ```rust
/// use prism_transfer::piecewise::delinearize;
///
/// let encoded = delinearize(0.214, 2.4);
/// assert!((encoded - 0.5).abs() < 0.001);
/// ```
#[inline]
pub fn delinearize(l: f64, gamma: f64) -> f64 {
    if l <= LINEAR_BREAK {
        l * LINEAR_SLOPE
    } else {
        SCALE * l.powf(1.0 / gamma) - OFFSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for gamma in [1.8, 2.2, 2.4] {
            for i in 0..=255 {
                let v = i as f64 / 255.0;
                let back = delinearize(linearize(v, gamma), gamma);
                assert!((v - back).abs() < 1e-9, "gamma={gamma}, v={v}, back={back}");
            }
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(linearize(0.0, 2.4), 0.0);
        assert!((linearize(1.0, 2.4) - 1.0).abs() < 1e-12);
        assert_eq!(delinearize(0.0, 2.4), 0.0);
        assert!((delinearize(1.0, 2.4) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_linear_segment() {
        assert_eq!(linearize(ENCODED_BREAK, 2.2), ENCODED_BREAK / LINEAR_SLOPE);
        assert_eq!(delinearize(0.001, 2.2), 0.001 * LINEAR_SLOPE);
    }

    #[test]
    fn test_negative_stays_linear() {
        assert_eq!(delinearize(-0.1, 2.2), -0.1 * LINEAR_SLOPE);
        assert_eq!(linearize(-0.1, 2.2), -0.1 / LINEAR_SLOPE);
    }
}
