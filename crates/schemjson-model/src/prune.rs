use hashbrown::HashSet;
use schemjson_blocks::TextureTable;

/// Drops texture entries no element references.
pub fn prune(table: &TextureTable, used_keys: &HashSet<String>) -> TextureTable {
    let missing = table.missing_keys(used_keys);
    if !missing.is_empty() {
        log::warn!(
            "{} texture key(s) have no palette entry: {}",
            missing.len(),
            missing.join(", ")
        );
    }
    let pruned = table.pruned(used_keys);
    log::debug!("pruned textures {} -> {}", table.len(), pruned.len());
    pruned
}
