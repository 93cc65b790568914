//! RGB <-> HSL for encoded `[0, 1]` triples.
//!
//! All three HSL components are in `[0, 1]`; hue is a fraction of a turn.
//! Achromatic input (`max == min`) yields hue and saturation 0.

/// Hue, saturation, lightness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue as a fraction of a full turn, `[0, 1)`
    pub h: f64,
    /// Saturation, `[0, 1]`
    pub s: f64,
    /// Lightness, `[0, 1]`
    pub l: f64,
}

/// Converts encoded RGB to HSL.
///
/// # Example
///
/// ```rust
/// use prism_color::hsl::rgb_to_hsl;
///
/// let hsl = rgb_to_hsl([1.0, 0.0, 0.0]);
/// assert_eq!((hsl.h, hsl.s, hsl.l), (0.0, 1.0, 0.5));
/// ```
pub fn rgb_to_hsl(rgb: [f64; 3]) -> Hsl {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let delta = max - min;
    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let h = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl { h: h / 6.0, s, l }
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Converts HSL back to encoded RGB.
pub fn hsl_to_rgb(hsl: Hsl) -> [f64; 3] {
    let Hsl { h, s, l } = hsl;
    if s == 0.0 {
        return [l, l, l];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_rgb_eq(a: [f64; 3], b: [f64; 3]) {
        for i in 0..3 {
            assert_abs_diff_eq!(a[i], b[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_primaries() {
        let green = rgb_to_hsl([0.0, 1.0, 0.0]);
        assert_abs_diff_eq!(green.h, 1.0 / 3.0, epsilon = 1e-12);
        let blue = rgb_to_hsl([0.0, 0.0, 1.0]);
        assert_abs_diff_eq!(blue.h, 2.0 / 3.0, epsilon = 1e-12);
        assert_eq!(blue.s, 1.0);
        assert_eq!(blue.l, 0.5);
    }

    #[test]
    fn test_achromatic() {
        let gray = rgb_to_hsl([0.4, 0.4, 0.4]);
        assert_eq!(gray, Hsl { h: 0.0, s: 0.0, l: 0.4 });
        assert_eq!(hsl_to_rgb(gray), [0.4, 0.4, 0.4]);
    }

    #[test]
    fn test_magenta_wraps() {
        // max == r and g < b takes the +6 branch
        let hsl = rgb_to_hsl([1.0, 0.0, 0.5]);
        assert!(hsl.h > 0.9 && hsl.h < 1.0);
    }

    #[test]
    fn test_roundtrip() {
        let samples = [
            [0.8, 0.2, 0.1],
            [0.1, 0.7, 0.3],
            [0.25, 0.3, 0.9],
            [0.9, 0.85, 0.1],
            [0.6, 0.1, 0.55],
            [0.05, 0.02, 0.03],
        ];
        for rgb in samples {
            assert_rgb_eq(hsl_to_rgb(rgb_to_hsl(rgb)), rgb);
        }
    }

    #[test]
    fn test_light_saturation_branch() {
        let hsl = rgb_to_hsl([1.0, 0.8, 0.8]);
        assert_abs_diff_eq!(hsl.l, 0.9, epsilon = 1e-12);
        assert_abs_diff_eq!(hsl.s, 1.0, epsilon = 1e-12);
    }
}
