//! Working-space conversion command.
//!
//! Loads an image, converts it from the `--from` profile to the `--to`
//! profile under the chosen intent, then writes the result and, on request,
//! the out-of-gamut mask.

use super::{ProfileEdits, load_image, load_profile, save_image, save_mask};
use crate::{ConvertArgs, OverrideArgs};
use anyhow::{Context, Result};
use prism_color::mask::overlay_mask;
use prism_color::{
    ConvertOptions, ProfileRole, RenderingIntent, TransferPolicy, convert_with_options,
};
use tracing::{debug, info, trace, warn};

impl OverrideArgs {
    fn source_edits(&self) -> ProfileEdits {
        ProfileEdits {
            gamma: self.src_gamma,
            white: self.src_white,
            red: self.src_red,
            green: self.src_green,
            blue: self.src_blue,
        }
    }

    fn target_edits(&self) -> ProfileEdits {
        ProfileEdits {
            gamma: self.dst_gamma,
            white: self.dst_white,
            red: self.dst_red,
            green: self.dst_green,
            blue: self.dst_blue,
        }
    }
}

pub fn run(args: ConvertArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), output = %args.output.display(), "convert::run");

    let intent: RenderingIntent = args.intent.parse()?;
    let transfer: TransferPolicy = args.transfer.parse()?;

    let source = args
        .overrides
        .source_edits()
        .apply(load_profile(&args.from).context("Bad --from profile")?);
    let target = args
        .overrides
        .target_edits()
        .apply(load_profile(&args.to).context("Bad --to profile")?);
    debug!(?source, ?target, "Resolved profiles");

    let img = load_image(&args.input)?;
    let (width, height) = img.dimensions();

    info!(
        input = %args.input.display(),
        width,
        height,
        from = %args.from,
        to = %args.to,
        %intent,
        %transfer,
        "Converting image"
    );

    if verbose > 0 {
        println!(
            "Converting {} ({}x{}) {} -> {} [{}, {}]",
            args.input.display(),
            width,
            height,
            args.from,
            args.to,
            intent,
            transfer
        );
    }

    let mut result = match convert_with_options(
        &img,
        &source,
        &target,
        intent,
        ConvertOptions::with_transfer(transfer),
    ) {
        Ok(result) => result,
        Err(err) => {
            if let Some(role) = err.role() {
                let flags = match role {
                    ProfileRole::Source => "--src-*",
                    ProfileRole::Target => "--dst-*",
                };
                warn!(%role, "Fill the profile from a file or with {} overrides", flags);
            }
            return Err(err)
                .with_context(|| format!("Failed to convert {}", args.input.display()));
        }
    };

    match &result.gamut_mask {
        Some(mask) => {
            let count = mask.count_out_of_gamut();
            println!(
                "Out of gamut: {} of {} pixels ({:.2}%)",
                count,
                img.pixel_count(),
                mask.out_of_gamut_ratio() * 100.0
            );

            if let Some(path) = &args.mask {
                save_mask(path, mask)?;
                if verbose > 0 {
                    println!("  Mask: {}", path.display());
                }
            }

            if args.show_out_of_gamut {
                let painted = overlay_mask(&mut result.image, mask)?;
                debug!(painted, "Painted out-of-gamut pixels");
            }
        }
        None => warn!(%intent, "Conversion returned no gamut mask"),
    }

    save_image(&args.output, &result.image)?;

    if verbose > 0 {
        println!("Done.");
    }

    Ok(())
}
