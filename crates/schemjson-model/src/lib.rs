//! Schematic grid to cuboid model conversion.
#![forbid(unsafe_code)]

pub mod build;
pub mod convert;
pub mod element;
pub mod error;
pub mod grid;
pub mod jitter;
pub mod prune;
pub mod rescale;

pub use build::{Build, build};
pub use convert::{ConvertOptions, DEFAULT_COMMENT, convert, convert_tags};
pub use element::{Cuboid, Direction, Face, Faces, Model};
pub use error::ConvertError;
pub use grid::Grid;
pub use jitter::{JITTER_RANGE, JitterSource, NoJitter, RngJitter};
pub use prune::prune;
pub use rescale::{MODEL_BOUND, Rescale, max_coord, rescale};
