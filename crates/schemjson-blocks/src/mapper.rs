use crate::textures::{CLAY_BASE, PaletteKind, SLAB_BASE};

pub const WOOL_ID: u8 = 35;
pub const STAINED_CLAY_ID: u8 = 159;
pub const SLAB_ID: u8 = 44;

/// Data bit marking the upper half of a slab.
const SLAB_TOP_BIT: u8 = 8;

/// Geometric variant of an emitted voxel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    #[default]
    Full,
    TopSlab,
    BottomSlab,
}

/// Maps legacy `(block id, data value)` pairs onto the fixed texture catalog.
#[derive(Clone, Copy, Debug, Default)]
pub struct PaletteMapper {
    kind: PaletteKind,
}

impl PaletteMapper {
    pub fn new(kind: PaletteKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> PaletteKind {
        self.kind
    }

    /// Texture index and variant for a non-air block.
    pub fn map_index(&self, block_id: u8, data: u8) -> (u16, Variant) {
        let extended = self.kind == PaletteKind::Extended;
        match block_id {
            WOOL_ID => (data as u16, Variant::Full),
            STAINED_CLAY_ID if extended => (data as u16 + CLAY_BASE as u16, Variant::Full),
            STAINED_CLAY_ID => (data as u16, Variant::Full),
            SLAB_ID if extended => {
                let variant = if data >= SLAB_TOP_BIT {
                    Variant::TopSlab
                } else {
                    Variant::BottomSlab
                };
                (slab_texture(data % 8) as u16, variant)
            }
            _ => (0, Variant::Full),
        }
    }

    /// Texture key (decimal index) and variant for a non-air block.
    pub fn map(&self, block_id: u8, data: u8) -> (String, Variant) {
        let (index, variant) = self.map_index(block_id, data);
        (index.to_string(), variant)
    }
}

// Slab material by the low three data bits; wooden (2) has no surface of its own.
fn slab_texture(material: u8) -> u8 {
    match material {
        0 => SLAB_BASE,
        1 => SLAB_BASE + 1,
        3 => SLAB_BASE + 2,
        4 => SLAB_BASE + 3,
        5 => SLAB_BASE + 4,
        6 => SLAB_BASE + 5,
        7 => SLAB_BASE + 6,
        _ => SLAB_BASE,
    }
}
