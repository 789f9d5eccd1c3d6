use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use schemjson_blocks::PaletteKind;
use schemjson_model::{ConvertOptions, DEFAULT_COMMENT, MODEL_BOUND};
use serde::Deserialize;

use crate::cli::Cli;

pub const DEFAULT_CONFIG_FILE: &str = "schemjson.toml";

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub jitter: bool,
    pub rescale: bool,
    pub bound: f32,
    pub palette: PaletteKind,
    pub seed: Option<u64>,
    pub pause: bool,
    pub comment: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            jitter: true,
            rescale: true,
            bound: MODEL_BOUND,
            palette: PaletteKind::Extended,
            seed: None,
            pause: true,
            comment: DEFAULT_COMMENT.to_string(),
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<FileConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let cfg: FileConfig = toml::from_str(&s)?;
    Ok(cfg)
}

/// Explicit `--config` must exist; the default file is optional.
pub fn load_config(explicit: Option<&Path>) -> Result<FileConfig, Box<dyn Error>> {
    match explicit {
        Some(p) => load_config_from_path(p),
        None => {
            let p = Path::new(DEFAULT_CONFIG_FILE);
            if p.is_file() {
                log::debug!("using config {:?}", p);
                load_config_from_path(p)
            } else {
                Ok(FileConfig::default())
            }
        }
    }
}

/// Effective run settings: config file overridden by CLI flags.
#[derive(Clone, Debug)]
pub struct Settings {
    pub convert: ConvertOptions,
    pub seed: Option<u64>,
    pub pause: bool,
    pub output: Option<PathBuf>,
}

impl Settings {
    pub fn resolve(cli: &Cli, file: FileConfig) -> Result<Self, String> {
        let bound = cli.bound.unwrap_or(file.bound);
        if !bound.is_finite() || bound <= 0.0 {
            return Err(format!("bound must be a positive number, got {}", bound));
        }
        Ok(Self {
            convert: ConvertOptions {
                jitter: file.jitter && !cli.no_noise,
                rescale: file.rescale && !cli.no_scale,
                bound,
                palette: cli.palette.map(PaletteKind::from).unwrap_or(file.palette),
                comment: file.comment,
            },
            seed: cli.seed.or(file.seed),
            pause: file.pause && !cli.no_pause,
            output: cli.output.clone(),
        })
    }
}
