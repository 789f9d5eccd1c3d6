use schemjson_nbt::TagReader;

use crate::error::ConvertError;

/// Immutable block grid read from a schematic.
#[derive(Clone, Debug)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub length: usize,
    blocks: Vec<u8>,
    data: Vec<u8>,
}

impl Grid {
    pub fn new(
        width: usize,
        height: usize,
        length: usize,
        blocks: Vec<u8>,
        data: Vec<u8>,
    ) -> Result<Self, ConvertError> {
        let volume = width
            .checked_mul(height)
            .and_then(|v| v.checked_mul(length))
            .ok_or_else(|| {
                ConvertError::InvalidGrid(format!(
                    "dimensions {}x{}x{} overflow",
                    width, height, length
                ))
            })?;
        if blocks.len() != volume {
            return Err(ConvertError::InvalidGrid(format!(
                "Blocks has {} entries, expected {} for {}x{}x{}",
                blocks.len(),
                volume,
                width,
                height,
                length
            )));
        }
        if data.len() != volume {
            return Err(ConvertError::InvalidGrid(format!(
                "Data has {} entries, expected {} for {}x{}x{}",
                data.len(),
                volume,
                width,
                height,
                length
            )));
        }
        Ok(Self {
            width,
            height,
            length,
            blocks,
            data,
        })
    }

    /// Reads `Width`, `Height`, `Length`, `Blocks` and `Data`.
    pub fn from_tags(tags: &TagReader) -> Result<Self, ConvertError> {
        let width = dimension(tags, "Width")?;
        let height = dimension(tags, "Height")?;
        let length = dimension(tags, "Length")?;
        let blocks = tags.get_byte_array("Blocks")?;
        let data = tags.get_byte_array("Data")?;
        Self::new(width, height, length, blocks, data)
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        (y * self.length + z) * self.width + x
    }

    /// `(block id, data value)` at a voxel.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> (u8, u8) {
        let i = self.idx(x, y, z);
        (self.blocks[i], self.data[i])
    }

    #[inline]
    pub fn volume(&self) -> usize {
        self.blocks.len()
    }

    pub fn non_air_count(&self) -> usize {
        self.blocks.iter().filter(|&&b| b != 0).count()
    }
}

fn dimension(tags: &TagReader, name: &str) -> Result<usize, ConvertError> {
    let v = tags.get_short(name)?;
    usize::try_from(v)
        .map_err(|_| ConvertError::InvalidGrid(format!("{} is negative ({})", name, v)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_y_major_then_z_then_x() {
        let g = Grid::new(3, 2, 4, vec![0; 24], vec![0; 24]).unwrap();
        assert_eq!(g.idx(0, 0, 0), 0);
        assert_eq!(g.idx(1, 0, 0), 1);
        assert_eq!(g.idx(0, 0, 1), 3);
        assert_eq!(g.idx(0, 1, 0), 12);
        assert_eq!(g.idx(2, 1, 3), 1 * 3 * 4 + 3 * 3 + 2);
    }

    #[test]
    fn mismatched_arrays_rejected() {
        assert!(matches!(
            Grid::new(2, 2, 2, vec![0; 8], vec![0; 7]),
            Err(ConvertError::InvalidGrid(_))
        ));
        assert!(matches!(
            Grid::new(2, 2, 2, vec![0; 9], vec![0; 8]),
            Err(ConvertError::InvalidGrid(_))
        ));
    }

    #[test]
    fn empty_grid_is_valid() {
        let g = Grid::new(0, 5, 5, Vec::new(), Vec::new()).unwrap();
        assert_eq!(g.volume(), 0);
        assert_eq!(g.non_air_count(), 0);
    }
}
