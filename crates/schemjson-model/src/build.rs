use hashbrown::HashSet;
use schemjson_blocks::{PaletteMapper, Variant};
use schemjson_geom::Aabb;

use crate::element::{Cuboid, Face, Faces};
use crate::grid::Grid;
use crate::jitter::JitterSource;

/// Elements emitted for a grid, plus every texture key they reference.
#[derive(Clone, Debug, Default)]
pub struct Build {
    pub cuboids: Vec<Cuboid>,
    pub used_keys: HashSet<String>,
}

/// Box for a voxel; slabs keep the lower or upper half.
pub fn voxel_bounds(x: usize, y: usize, z: usize, variant: Variant) -> Aabb {
    let mut b = Aabb::voxel(x, y, z);
    match variant {
        Variant::Full => {}
        Variant::TopSlab => b.min.y += 0.5,
        Variant::BottomSlab => b.max.y -= 0.5,
    }
    b
}

/// One cuboid per non-air voxel, visited x, then y, then z.
///
/// A single jitter draw is shared by all UV components of all six faces of a voxel.
pub fn build(
    grid: &Grid,
    mapper: &PaletteMapper,
    jitter_enabled: bool,
    jitter: &mut dyn JitterSource,
) -> Build {
    let mut out = Build::default();
    for x in 0..grid.width {
        for y in 0..grid.height {
            for z in 0..grid.length {
                let (block, data) = grid.get(x, y, z);
                if block == 0 {
                    continue;
                }
                let (key, variant) = mapper.map(block, data);
                let r = if jitter_enabled { jitter.draw() } else { 0.0 };
                let face = Face::new(&key, r);
                out.used_keys.insert(key);
                out.cuboids
                    .push(Cuboid::new(voxel_bounds(x, y, z, variant), Faces::uniform(face)));
            }
        }
    }
    log::debug!(
        "built {} element(s) using {} texture(s)",
        out.cuboids.len(),
        out.used_keys.len()
    );
    out
}
