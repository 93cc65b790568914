//! Profile check command.
//!
//! Validates a profile and prints its derived matrices, white point and
//! gamut extents.

use super::{ProfileEdits, format_matrix, load_profile};
use crate::CheckArgs;
use anyhow::{Context, Result};
use prism_color::gamut::max_extents;
use prism_primaries::ProfileMatrices;
use tracing::{debug, trace};

pub fn run(args: CheckArgs, verbose: u8) -> Result<()> {
    trace!(profile = %args.profile, "check::run");

    let edits = ProfileEdits {
        gamma: args.gamma,
        white: args.white,
        ..Default::default()
    };
    let profile = edits.apply(load_profile(&args.profile)?);
    debug!(?profile, "Checking profile");

    let matrices = ProfileMatrices::new(&profile)
        .with_context(|| format!("Profile '{}' is degenerate", args.profile))?;
    let white = profile
        .white_xyz()
        .with_context(|| format!("Profile '{}' has no usable white", args.profile))?;
    let extents = max_extents(&matrices.to_xyz);

    println!("{}: ok", args.profile);
    println!("  gamma {:.4}", profile.gamma);
    println!(
        "  white XYZ ({:.6}, {:.6}, {:.6})",
        white.x, white.y, white.z
    );
    println!("  RGB -> XYZ:\n{}", format_matrix(&matrices.to_xyz));
    println!("  XYZ -> RGB:\n{}", format_matrix(&matrices.from_xyz));
    println!(
        "  gamut extents ({:.6}, {:.6}, {:.6})",
        extents.x, extents.y, extents.z
    );

    if verbose > 0 {
        let det = matrices.to_xyz.determinant();
        println!("  det(RGB -> XYZ) {:.6e}", det);
    }

    Ok(())
}
