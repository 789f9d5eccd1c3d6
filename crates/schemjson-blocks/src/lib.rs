//! Block palette: texture catalog and block-to-texture mapping.
#![forbid(unsafe_code)]

pub mod mapper;
pub mod textures;

pub use mapper::{PaletteMapper, Variant};
pub use textures::{PaletteEntry, PaletteKind, TextureTable};
