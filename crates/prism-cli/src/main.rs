//! prism - RGB working-space conversion CLI
//!
//! Converts 8-bit images between RGB working spaces under a rendering
//! intent and reports gamut violations.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::Chromaticity;

#[derive(Parser)]
#[command(name = "prism")]
#[command(author, version, about = "RGB working-space conversion with rendering intents")]
#[command(long_about = "
Converts images between RGB working spaces (gamma + white point + primaries)
using absolute colorimetric, relative colorimetric, perceptual or saturation
intents, and reports which pixels fall outside the target gamut.

Profiles are preset names (sRGB, Adobe RGB, Apple RGB, CIE RGB,
Wide Gamut RGB, Custom) or YAML/JSON profile files.

Examples:
  prism profiles                                  # List presets
  prism check adobe-rgb                           # Show matrices and extents
  prism convert in.png -o out.png --from srgb --to adobe-rgb
  prism convert in.png -o out.png --from wide-gamut-rgb --to srgb \\
        --intent perceptual --mask oog.png --show-out-of-gamut
  prism convert in.png -o out.png --from my_space.yaml --to srgb --src-gamma 2.4

Logging: -v (info), -vv (debug), -vvv (trace), or PRISM_LOG=<filter>.
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image between working spaces
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// List preset profiles
    #[command(visible_alias = "p")]
    Profiles(ProfilesArgs),

    /// Validate a profile and print its matrices
    Check(CheckArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Input image (PNG, JPEG, BMP)
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Source profile: preset name or YAML/JSON file
    #[arg(long = "from", default_value = "sRGB")]
    from: String,

    /// Target profile: preset name or YAML/JSON file
    #[arg(long = "to")]
    to: String,

    /// Rendering intent: absolute, relative, perceptual, saturation
    #[arg(short, long, default_value = "relative")]
    intent: String,

    /// Gamma policy: power, piecewise
    #[arg(long, default_value = "power")]
    transfer: String,

    /// Write the out-of-gamut mask (white = out of gamut) to this path
    #[arg(long)]
    mask: Option<PathBuf>,

    /// Paint out-of-gamut pixels magenta in the output
    #[arg(long)]
    show_out_of_gamut: bool,

    #[command(flatten)]
    overrides: OverrideArgs,
}

/// Per-field profile overrides applied after loading `--from` / `--to`.
#[derive(Args, Default)]
struct OverrideArgs {
    /// Source gamma override
    #[arg(long)]
    src_gamma: Option<f64>,

    /// Source white point override, as x,y
    #[arg(long, value_name = "X,Y")]
    src_white: Option<Chromaticity>,

    /// Source red primary override, as x,y
    #[arg(long, value_name = "X,Y")]
    src_red: Option<Chromaticity>,

    /// Source green primary override, as x,y
    #[arg(long, value_name = "X,Y")]
    src_green: Option<Chromaticity>,

    /// Source blue primary override, as x,y
    #[arg(long, value_name = "X,Y")]
    src_blue: Option<Chromaticity>,

    /// Target gamma override
    #[arg(long)]
    dst_gamma: Option<f64>,

    /// Target white point override, as x,y
    #[arg(long, value_name = "X,Y")]
    dst_white: Option<Chromaticity>,

    /// Target red primary override, as x,y
    #[arg(long, value_name = "X,Y")]
    dst_red: Option<Chromaticity>,

    /// Target green primary override, as x,y
    #[arg(long, value_name = "X,Y")]
    dst_green: Option<Chromaticity>,

    /// Target blue primary override, as x,y
    #[arg(long, value_name = "X,Y")]
    dst_blue: Option<Chromaticity>,
}

#[derive(Args)]
struct ProfilesArgs {
    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct CheckArgs {
    /// Preset name or YAML/JSON profile file
    profile: String,

    /// Gamma override
    #[arg(long)]
    gamma: Option<f64>,

    /// White point override, as x,y
    #[arg(long, value_name = "X,Y")]
    white: Option<Chromaticity>,
}

/// Installs the fmt subscriber. `PRISM_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("PRISM_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
        Commands::Profiles(args) => commands::profiles::run(args, cli.verbose),
        Commands::Check(args) => commands::check::run(args, cli.verbose),
    }
}
