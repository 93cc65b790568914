//! Pure power-law gamma codec.
//!
//! ```text
//! linearize(v)   = v^gamma
//! delinearize(l) = l^(1/gamma)
//! ```
//!
//! Negative values are mirrored (`sign(v) * |v|^p`) so the codec is total:
//! a matrix transform can push a channel below zero and the encoded value
//! must stay finite for the gamut classification downstream. Nothing is
//! clamped here.
//!
//! # Range
//!
//! - Input/Output: [0, 1] nominal, any finite value accepted

/// Mirrored power function: `sign(v) * |v|^exponent`.
#[inline]
fn mirrored_pow(v: f64, exponent: f64) -> f64 {
    if v < 0.0 {
        -(-v).powf(exponent)
    } else {
        v.powf(exponent)
    }
}

/// Decodes a gamma-encoded value to linear light: `v^gamma`.
///
/// # Example
///
/// ```rust
/// use prism_transfer::gamma::linearize;
///
/// let linear = linearize(0.5, 2.2);
/// assert!((linear - 0.2176).abs() < 1e-4);
/// ```
#[inline]
pub fn linearize(v: f64, gamma: f64) -> f64 {
    mirrored_pow(v, gamma)
}

/// Encodes linear light with a gamma: `l^(1/gamma)`.
///
/// # Example
///
/// ```rust
/// use prism_transfer::gamma::delinearize;
///
/// let encoded = delinearize(0.2176, 2.2);
/// assert!((encoded - 0.5).abs() < 1e-3);
/// ```
#[inline]
pub fn delinearize(l: f64, gamma: f64) -> f64 {
    mirrored_pow(l, 1.0 / gamma)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for gamma in [1.0, 1.8, 2.2, 2.4, 2.6] {
            for i in 0..=255 {
                let v = i as f64 / 255.0;
                let back = delinearize(linearize(v, gamma), gamma);
                assert!((v - back).abs() < 1e-12, "gamma={gamma}, v={v}, back={back}");
            }
        }
    }

    #[test]
    fn test_gamma_identity() {
        assert_eq!(linearize(0.5, 1.0), 0.5);
        assert_eq!(delinearize(0.5, 1.0), 0.5);
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(linearize(0.0, 2.2), 0.0);
        assert_eq!(linearize(1.0, 2.2), 1.0);
        assert_eq!(delinearize(1.0, 1.8), 1.0);
    }

    #[test]
    fn test_negative_mirrored() {
        let pos = delinearize(0.25, 2.2);
        let neg = delinearize(-0.25, 2.2);
        assert!(neg.is_finite());
        assert_eq!(pos, -neg);
    }

    #[test]
    fn test_out_of_range_not_clamped() {
        assert!(delinearize(1.5, 2.2) > 1.0);
        assert!(linearize(1.2, 2.2) > 1.2);
    }
}
