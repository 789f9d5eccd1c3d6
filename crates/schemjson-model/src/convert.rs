use schemjson_blocks::{PaletteKind, PaletteMapper, TextureTable};
use schemjson_nbt::TagReader;

use crate::build::build;
use crate::element::Model;
use crate::error::ConvertError;
use crate::grid::Grid;
use crate::jitter::JitterSource;
use crate::prune::prune;
use crate::rescale::{MODEL_BOUND, max_coord, rescale};

pub const DEFAULT_COMMENT: &str = "Converted with schemjson. NBT data read with fastnbt. JSON written with serde_json.";

#[derive(Clone, Debug, PartialEq)]
pub struct ConvertOptions {
    pub jitter: bool,
    pub rescale: bool,
    pub bound: f32,
    pub palette: PaletteKind,
    pub comment: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            jitter: true,
            rescale: true,
            bound: MODEL_BOUND,
            palette: PaletteKind::Extended,
            comment: DEFAULT_COMMENT.to_string(),
        }
    }
}

/// Build, prune, then rescale.
pub fn convert(grid: &Grid, opts: &ConvertOptions, jitter: &mut dyn JitterSource) -> Model {
    log::info!(
        "Converting {}x{}x{} grid ({} block(s))",
        grid.width,
        grid.height,
        grid.length,
        grid.non_air_count()
    );
    let mapper = PaletteMapper::new(opts.palette);
    let mut built = build(grid, &mapper, opts.jitter, jitter);
    let textures = prune(&TextureTable::for_kind(opts.palette), &built.used_keys);

    if opts.rescale {
        if let Some(r) = rescale(&mut built.cuboids, opts.bound) {
            log::info!(
                "Scaling... max {} shrink {} -> max {}",
                r.max,
                r.shrink,
                max_coord(&built.cuboids)
            );
        }
    }

    Model {
        comment: opts.comment.clone(),
        textures,
        elements: built.cuboids,
    }
}

pub fn convert_tags(
    tags: &TagReader,
    opts: &ConvertOptions,
    jitter: &mut dyn JitterSource,
) -> Result<Model, ConvertError> {
    let grid = Grid::from_tags(tags)?;
    Ok(convert(&grid, opts, jitter))
}
