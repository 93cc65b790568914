//! Preset listing command.

use crate::ProfilesArgs;
use anyhow::Result;
use prism_primaries::{ColorProfile, PRESETS, rgb_to_xyz_matrix};
use serde::Serialize;
use tracing::trace;

#[derive(Serialize)]
struct PresetInfo {
    name: &'static str,
    #[serde(flatten)]
    profile: ColorProfile,
    rgb_to_xyz: Option<[[f64; 3]; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn collect() -> Vec<PresetInfo> {
    PRESETS
        .iter()
        .map(|preset| {
            let matrix = rgb_to_xyz_matrix(&preset.profile);
            PresetInfo {
                name: preset.name,
                profile: preset.profile,
                rgb_to_xyz: matrix.as_ref().ok().map(|m| m.m),
                error: matrix.err().map(|e| e.to_string()),
            }
        })
        .collect()
}

pub fn run(args: ProfilesArgs, verbose: u8) -> Result<()> {
    trace!(json = args.json, "profiles::run");
    let presets = collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&presets)?);
        return Ok(());
    }

    for info in &presets {
        let p = &info.profile;
        println!("{}", info.name);
        println!("  gamma  {:.2}", p.gamma);
        println!("  white  ({:.5}, {:.5})", p.white.0, p.white.1);
        println!("  red    ({:.5}, {:.5})", p.red.0, p.red.1);
        println!("  green  ({:.5}, {:.5})", p.green.0, p.green.1);
        println!("  blue   ({:.5}, {:.5})", p.blue.0, p.blue.1);
        if verbose > 0 {
            match (&info.rgb_to_xyz, &info.error) {
                (Some(m), _) => {
                    println!("  RGB -> XYZ:");
                    for row in m {
                        println!("    [{:>10.6} {:>10.6} {:>10.6}]", row[0], row[1], row[2]);
                    }
                }
                (None, Some(err)) => println!("  (unusable: {})", err),
                (None, None) => {}
            }
        }
    }

    Ok(())
}
