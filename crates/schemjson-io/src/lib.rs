//! File I/O around the converter: schematic reading, model writing, crash logs.
#![forbid(unsafe_code)]

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use schemjson_model::{ConvertError, Model};
use schemjson_nbt::TagReader;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[derive(Debug)]
pub enum IoError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Convert(ConvertError),
    Json(serde_json::Error),
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            IoError::Convert(e) => write!(f, "convert: {}", e),
            IoError::Json(e) => write!(f, "json: {}", e),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IoError::Io { source, .. } => Some(source),
            IoError::Convert(e) => Some(e),
            IoError::Json(e) => Some(e),
        }
    }
}

impl From<ConvertError> for IoError {
    fn from(e: ConvertError) -> Self {
        IoError::Convert(e)
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Json(e)
    }
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> IoError + '_ {
    move |source| IoError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Inflates gzip payloads; anything else is returned unchanged.
pub fn decompress(bytes: Vec<u8>) -> std::io::Result<Vec<u8>> {
    if !bytes.starts_with(&GZIP_MAGIC) {
        return Ok(bytes);
    }
    let mut out = Vec::new();
    GzDecoder::new(bytes.as_slice()).read_to_end(&mut out)?;
    Ok(out)
}

/// Reads a `.schematic` file, gzip-compressed or raw.
pub fn read_schematic(path: &Path) -> Result<TagReader, IoError> {
    let raw = fs::read(path).map_err(io_err(path))?;
    let compressed = raw.starts_with(&GZIP_MAGIC);
    let bytes = decompress(raw).map_err(io_err(path))?;
    log::debug!(
        "read {:?}: {} byte(s){}",
        path,
        bytes.len(),
        if compressed { " after gunzip" } else { "" }
    );
    TagReader::from_bytes(&bytes).map_err(|e| IoError::Convert(e.into()))
}

/// `foo/bar.schematic` -> `foo/bar.json`.
pub fn output_path_for(input: &Path) -> PathBuf {
    input.with_extension("json")
}

pub fn model_to_json(model: &Model) -> Result<String, IoError> {
    Ok(serde_json::to_string_pretty(model)?)
}

pub fn write_model(model: &Model, path: &Path) -> Result<(), IoError> {
    let json = model_to_json(model)?;
    fs::write(path, json).map_err(io_err(path))?;
    log::debug!("wrote {} element(s) to {:?}", model.elements.len(), path);
    Ok(())
}

/// Writes `<timestamp>-crash.txt` in `dir` and returns its path.
pub fn write_crash_log(dir: &Path, report: &str) -> Result<PathBuf, IoError> {
    let stamp = chrono::Local::now().format("%Y%m%d%H%M%S%3f");
    let path = dir.join(format!("{}-crash.txt", stamp));
    fs::write(&path, report).map_err(io_err(&path))?;
    Ok(path)
}

/// Error message followed by its `source()` chain, one cause per line.
pub fn error_report(err: &(dyn std::error::Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut cur = err.source();
    while let Some(e) = cur {
        out.push_str("\ncaused by: ");
        out.push_str(&e.to_string());
        cur = e.source();
    }
    out
}
