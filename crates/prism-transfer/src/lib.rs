//! # prism-transfer
//!
//! Gamma codecs: per-channel linearization and re-encoding.
//!
//! A profile carries a single `gamma` number; how that number is applied is
//! a [`TransferPolicy`]:
//!
//! | Policy | Decode | Encode |
//! |--------|--------|--------|
//! | [`PowerLaw`](TransferPolicy::PowerLaw) (default) | `v^g` | `l^(1/g)` |
//! | [`Piecewise`](TransferPolicy::Piecewise) | sRGB-style linear toe + `((v+0.055)/1.055)^g` | inverse |
//!
//! A conversion uses one policy for both directions. Mixing them breaks the
//! round trip.
//!
//! # Usage
//!
//! ```rust
//! use prism_transfer::TransferPolicy;
//!
//! let policy = TransferPolicy::default();
//! let linear = policy.linearize(0.5, 2.2);
//! let encoded = policy.delinearize(linear, 2.2);
//! assert!((encoded - 0.5).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `prism-color` - Conversion engine pixel loop

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gamma;
pub mod piecewise;

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unknown [`TransferPolicy`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transfer policy '{0}' (expected: power, piecewise)")]
pub struct ParsePolicyError(pub String);

/// How a profile's gamma is applied to each channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransferPolicy {
    /// Pure power law, `v^gamma` and `v^(1/gamma)`.
    #[default]
    PowerLaw,
    /// sRGB-style linear segment near black plus an offset power curve.
    Piecewise,
}

impl TransferPolicy {
    /// All policies, in display order.
    pub const ALL: [TransferPolicy; 2] = [TransferPolicy::PowerLaw, TransferPolicy::Piecewise];

    /// Decodes an encoded channel value to linear light.
    #[inline]
    pub fn linearize(self, v: f64, gamma: f64) -> f64 {
        match self {
            TransferPolicy::PowerLaw => gamma::linearize(v, gamma),
            TransferPolicy::Piecewise => piecewise::linearize(v, gamma),
        }
    }

    /// Encodes a linear channel value.
    #[inline]
    pub fn delinearize(self, l: f64, gamma: f64) -> f64 {
        match self {
            TransferPolicy::PowerLaw => gamma::delinearize(l, gamma),
            TransferPolicy::Piecewise => piecewise::delinearize(l, gamma),
        }
    }

    /// Short name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            TransferPolicy::PowerLaw => "power",
            TransferPolicy::Piecewise => "piecewise",
        }
    }
}

impl fmt::Display for TransferPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransferPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "power" | "power-law" | "powerlaw" | "gamma" => Ok(TransferPolicy::PowerLaw),
            "piecewise" | "srgb" => Ok(TransferPolicy::Piecewise),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_is_power_law() {
        assert_eq!(TransferPolicy::default(), TransferPolicy::PowerLaw);
    }

    #[test]
    fn test_policy_dispatch() {
        assert_eq!(
            TransferPolicy::PowerLaw.linearize(0.5, 2.2),
            gamma::linearize(0.5, 2.2)
        );
        assert_eq!(
            TransferPolicy::Piecewise.delinearize(0.2, 2.4),
            piecewise::delinearize(0.2, 2.4)
        );
    }

    #[test]
    fn test_policy_roundtrip() {
        for policy in TransferPolicy::ALL {
            for i in 0..=100 {
                let v = i as f64 / 100.0;
                let back = policy.delinearize(policy.linearize(v, 2.2), 2.2);
                assert_abs_diff_eq!(v, back, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("power".parse::<TransferPolicy>(), Ok(TransferPolicy::PowerLaw));
        assert_eq!(" sRGB ".parse::<TransferPolicy>(), Ok(TransferPolicy::Piecewise));
        let err = "cubic".parse::<TransferPolicy>().unwrap_err();
        assert!(err.to_string().contains("cubic"));
        for policy in TransferPolicy::ALL {
            assert_eq!(policy.to_string().parse::<TransferPolicy>(), Ok(policy));
        }
    }
}
