use hashbrown::HashSet;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Which palette rule set and texture table a conversion uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKind {
    /// Wool colours only; stained clay renders with the wool texture of the same colour.
    Basic,
    /// Wool, stained clay and slab surfaces.
    #[default]
    Extended,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
    pub index: u8,
    pub path: &'static str,
}

impl PaletteEntry {
    const fn new(index: u8, path: &'static str) -> Self {
        Self { index, path }
    }
}

pub const WOOL_BASE: u8 = 0;
pub const CLAY_BASE: u8 = 16;
pub const SLAB_BASE: u8 = 32;

pub static WOOL: [PaletteEntry; 16] = [
    PaletteEntry::new(0, "blocks/wool_colored_white"),
    PaletteEntry::new(1, "blocks/wool_colored_orange"),
    PaletteEntry::new(2, "blocks/wool_colored_magenta"),
    PaletteEntry::new(3, "blocks/wool_colored_light_blue"),
    PaletteEntry::new(4, "blocks/wool_colored_yellow"),
    PaletteEntry::new(5, "blocks/wool_colored_lime"),
    PaletteEntry::new(6, "blocks/wool_colored_pink"),
    PaletteEntry::new(7, "blocks/wool_colored_gray"),
    PaletteEntry::new(8, "blocks/wool_colored_silver"),
    PaletteEntry::new(9, "blocks/wool_colored_cyan"),
    PaletteEntry::new(10, "blocks/wool_colored_purple"),
    PaletteEntry::new(11, "blocks/wool_colored_blue"),
    PaletteEntry::new(12, "blocks/wool_colored_brown"),
    PaletteEntry::new(13, "blocks/wool_colored_green"),
    PaletteEntry::new(14, "blocks/wool_colored_red"),
    PaletteEntry::new(15, "blocks/wool_colored_black"),
];

pub static STAINED_CLAY: [PaletteEntry; 16] = [
    PaletteEntry::new(16, "blocks/hardened_clay_stained_white"),
    PaletteEntry::new(17, "blocks/hardened_clay_stained_orange"),
    PaletteEntry::new(18, "blocks/hardened_clay_stained_magenta"),
    PaletteEntry::new(19, "blocks/hardened_clay_stained_light_blue"),
    PaletteEntry::new(20, "blocks/hardened_clay_stained_yellow"),
    PaletteEntry::new(21, "blocks/hardened_clay_stained_lime"),
    PaletteEntry::new(22, "blocks/hardened_clay_stained_pink"),
    PaletteEntry::new(23, "blocks/hardened_clay_stained_gray"),
    PaletteEntry::new(24, "blocks/hardened_clay_stained_silver"),
    PaletteEntry::new(25, "blocks/hardened_clay_stained_cyan"),
    PaletteEntry::new(26, "blocks/hardened_clay_stained_purple"),
    PaletteEntry::new(27, "blocks/hardened_clay_stained_blue"),
    PaletteEntry::new(28, "blocks/hardened_clay_stained_brown"),
    PaletteEntry::new(29, "blocks/hardened_clay_stained_green"),
    PaletteEntry::new(30, "blocks/hardened_clay_stained_red"),
    PaletteEntry::new(31, "blocks/hardened_clay_stained_black"),
];

pub static SLAB_SURFACES: [PaletteEntry; 7] = [
    PaletteEntry::new(32, "blocks/stone_slab_top"),
    PaletteEntry::new(33, "blocks/sandstone_top"),
    PaletteEntry::new(34, "blocks/cobblestone"),
    PaletteEntry::new(35, "blocks/brick"),
    PaletteEntry::new(36, "blocks/stonebrick"),
    PaletteEntry::new(37, "blocks/nether_brick"),
    PaletteEntry::new(38, "blocks/quartz_block_top"),
];

/// Texture key -> resource path, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TextureTable {
    entries: IndexMap<String, String>,
}

impl TextureTable {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Default table for a palette: wool only, or wool + clay + slabs.
    pub fn for_kind(kind: PaletteKind) -> Self {
        let mut table = TextureTable::new();
        let groups: &[&[PaletteEntry]] = match kind {
            PaletteKind::Basic => &[&WOOL],
            PaletteKind::Extended => &[&WOOL, &STAINED_CLAY, &SLAB_SURFACES],
        };
        for entry in groups.iter().flat_map(|g| g.iter()) {
            table.insert(entry.index.to_string(), entry.path);
        }
        table
    }

    pub fn insert(&mut self, key: impl Into<String>, path: impl Into<String>) {
        self.entries.insert(key.into(), path.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy holding only entries whose key is in `used`, in original order.
    pub fn pruned(&self, used: &HashSet<String>) -> TextureTable {
        let entries = self
            .entries
            .iter()
            .filter(|(k, _)| used.contains(k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        TextureTable { entries }
    }

    /// Used keys that have no entry in this table, sorted.
    pub fn missing_keys(&self, used: &HashSet<String>) -> Vec<String> {
        let mut missing: Vec<String> = used
            .iter()
            .filter(|k| !self.entries.contains_key(k.as_str()))
            .cloned()
            .collect();
        missing.sort();
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_table_is_wool_only() {
        let t = TextureTable::for_kind(PaletteKind::Basic);
        assert_eq!(t.len(), 16);
        assert_eq!(t.get("0"), Some("blocks/wool_colored_white"));
        assert_eq!(t.get("15"), Some("blocks/wool_colored_black"));
        assert!(!t.contains_key("16"));
    }

    #[test]
    fn extended_table_has_all_groups_in_index_order() {
        let t = TextureTable::for_kind(PaletteKind::Extended);
        assert_eq!(t.len(), 39);
        let keys: Vec<&str> = t.keys().collect();
        let want: Vec<String> = (0..39).map(|i| i.to_string()).collect();
        assert_eq!(keys, want.iter().map(String::as_str).collect::<Vec<_>>());
        assert_eq!(t.get("20"), Some("blocks/hardened_clay_stained_yellow"));
        assert_eq!(t.get("32"), Some("blocks/stone_slab_top"));
        assert_eq!(t.get("38"), Some("blocks/quartz_block_top"));
    }

    #[test]
    fn static_groups_are_contiguous() {
        for (i, e) in WOOL.iter().enumerate() {
            assert_eq!(e.index, WOOL_BASE + i as u8);
        }
        for (i, e) in STAINED_CLAY.iter().enumerate() {
            assert_eq!(e.index, CLAY_BASE + i as u8);
        }
        for (i, e) in SLAB_SURFACES.iter().enumerate() {
            assert_eq!(e.index, SLAB_BASE + i as u8);
        }
    }

    #[test]
    fn missing_keys_reports_unknown_textures() {
        let t = TextureTable::for_kind(PaletteKind::Basic);
        let used: HashSet<String> = ["3", "16", "40"].iter().map(|s| s.to_string()).collect();
        assert_eq!(t.missing_keys(&used), vec!["16".to_string(), "40".to_string()]);
    }
}
