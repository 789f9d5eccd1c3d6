use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use schemjson_blocks::PaletteKind;

/// Bare words older launch scripts pass instead of flags.
const LEGACY_WORDS: [&str; 3] = ["nonoise", "noscale", "nopause"];

#[derive(Parser, Debug)]
#[command(
    name = "schemjson",
    version,
    about = "Convert MCEdit schematics into block-model JSON"
)]
pub struct Cli {
    /// Schematic file; prompted for when omitted
    pub path: Option<PathBuf>,

    /// Disable random UV offsets
    #[arg(long = "nonoise", alias = "no-noise")]
    pub no_noise: bool,

    /// Keep original coordinates even past the model bound
    #[arg(long = "noscale", alias = "no-scale")]
    pub no_scale: bool,

    /// Exit without waiting for a key press
    #[arg(long = "nopause", alias = "no-pause")]
    pub no_pause: bool,

    #[arg(long, value_enum)]
    pub palette: Option<PaletteArg>,

    /// Largest coordinate after rescaling
    #[arg(long)]
    pub bound: Option<f32>,

    /// Seed for reproducible UV offsets
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file (default: input with a .json extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML config file (default: ./schemjson.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PaletteArg {
    Basic,
    Extended,
}

impl From<PaletteArg> for PaletteKind {
    fn from(p: PaletteArg) -> Self {
        match p {
            PaletteArg::Basic => PaletteKind::Basic,
            PaletteArg::Extended => PaletteKind::Extended,
        }
    }
}

/// Rewrites legacy bare words (`nopause`) into their flag form (`--nopause`).
pub fn normalize_args<I: IntoIterator<Item = String>>(args: I) -> Vec<String> {
    args.into_iter()
        .enumerate()
        .map(|(i, a)| {
            if i > 0 && LEGACY_WORDS.contains(&a.as_str()) {
                format!("--{}", a)
            } else {
                a
            }
        })
        .collect()
}
