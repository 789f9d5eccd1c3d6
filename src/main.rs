mod cli;
mod config;

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use schemjson_io::{error_report, output_path_for, read_schematic, write_crash_log, write_model};
use schemjson_model::{JitterSource, NoJitter, RngJitter, convert_tags};

use cli::Cli;
use config::{Settings, load_config};

const EXIT_NOT_FOUND: i32 = 1;
const EXIT_FAILED: i32 = 2;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse_from(cli::normalize_args(std::env::args()));
    std::process::exit(run(cli));
}

fn run(cli: Cli) -> i32 {
    let settings = match load_config(cli.config.as_deref())
        .map_err(|e| e.to_string())
        .and_then(|file| Settings::resolve(&cli, file))
    {
        Ok(s) => s,
        Err(e) => {
            log::error!("config: {}", e);
            return EXIT_FAILED;
        }
    };

    let path = match cli.path.clone().or_else(prompt_path) {
        Some(p) if p.is_file() => p,
        _ => {
            println!("File not found.");
            pause(settings.pause);
            return EXIT_NOT_FOUND;
        }
    };

    println!("Converting...");
    match convert_file(&path, &settings) {
        Ok(out) => {
            println!("Written json to file: {}", out.display());
            pause(settings.pause);
            0
        }
        Err(e) => {
            println!("There was an error while trying to convert the schematic file.");
            let report = error_report(e.as_ref());
            match write_crash_log(Path::new("."), &report) {
                Ok(p) => log::info!("crash log written to {}", p.display()),
                Err(we) => log::error!("could not write crash log: {}", we),
            }
            println!("{}", report);
            pause(settings.pause);
            EXIT_FAILED
        }
    }
}

fn convert_file(path: &Path, settings: &Settings) -> Result<PathBuf, Box<dyn Error>> {
    let tags = read_schematic(path)?;
    let mut jitter: Box<dyn JitterSource> = match (settings.convert.jitter, settings.seed) {
        (false, _) => Box::new(NoJitter),
        (true, Some(seed)) => Box::new(RngJitter::seeded(seed)),
        (true, None) => Box::new(RngJitter::from_entropy()),
    };
    let model = convert_tags(&tags, &settings.convert, jitter.as_mut())?;
    log::info!(
        "Serializing... {} element(s), {} texture(s)",
        model.elements.len(),
        model.textures.len()
    );
    let out = settings
        .output
        .clone()
        .unwrap_or_else(|| output_path_for(path));
    write_model(&model, &out)?;
    Ok(out)
}

fn prompt_path() -> Option<PathBuf> {
    print!("Schematic file path: ");
    io::stdout().flush().ok()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).ok()?;
    println!();
    let trimmed = line.trim().trim_matches('"');
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

fn pause(enabled: bool) {
    if !enabled {
        return;
    }
    println!("Press Enter to continue...");
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}
