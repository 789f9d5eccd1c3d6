//! Typed field lookups over a decoded NBT root compound.
#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::fmt;

use fastnbt::Value;

#[derive(Debug)]
pub enum TagError {
    /// Field absent, or present with a different tag type.
    MissingField {
        name: String,
        expected: &'static str,
    },
    NotACompound,
    Decode(fastnbt::error::Error),
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagError::MissingField { name, expected } => {
                write!(f, "missing {} field '{}'", expected, name)
            }
            TagError::NotACompound => write!(f, "root tag is not a compound"),
            TagError::Decode(e) => write!(f, "nbt decode: {}", e),
        }
    }
}

impl std::error::Error for TagError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TagError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<fastnbt::error::Error> for TagError {
    fn from(e: fastnbt::error::Error) -> Self {
        TagError::Decode(e)
    }
}

/// Read-only view over the root compound of a schematic.
#[derive(Clone, Debug)]
pub struct TagReader {
    root: HashMap<String, Value>,
}

impl TagReader {
    pub fn new(root: Value) -> Result<Self, TagError> {
        match root {
            Value::Compound(root) => Ok(Self { root }),
            _ => Err(TagError::NotACompound),
        }
    }

    /// Decodes uncompressed NBT bytes. Gzip is the caller's concern.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TagError> {
        let root: Value = fastnbt::from_bytes(bytes)?;
        let reader = Self::new(root)?;
        log::debug!("decoded nbt root with {} field(s)", reader.root.len());
        Ok(reader)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.root.contains_key(name)
    }

    pub fn get_short(&self, name: &str) -> Result<i16, TagError> {
        match self.root.get(name) {
            Some(Value::Short(v)) => Ok(*v),
            _ => Err(missing(name, "short")),
        }
    }

    /// Byte arrays are signed in NBT; the bit pattern is kept as `u8`.
    pub fn get_byte_array(&self, name: &str) -> Result<Vec<u8>, TagError> {
        match self.root.get(name) {
            Some(Value::ByteArray(arr)) => Ok(arr.iter().map(|&b| b as u8).collect()),
            _ => Err(missing(name, "byte array")),
        }
    }
}

fn missing(name: &str, expected: &'static str) -> TagError {
    TagError::MissingField {
        name: name.to_string(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastnbt::ByteArray;

    fn reader(fields: Vec<(&str, Value)>) -> TagReader {
        let map = fields
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect::<HashMap<_, _>>();
        TagReader::new(Value::Compound(map)).unwrap()
    }

    #[test]
    fn short_lookup() {
        let r = reader(vec![("Width", Value::Short(7))]);
        assert_eq!(r.get_short("Width").unwrap(), 7);
    }

    #[test]
    fn absent_short_is_missing_field() {
        let r = reader(vec![]);
        match r.get_short("Height") {
            Err(TagError::MissingField { name, expected }) => {
                assert_eq!(name, "Height");
                assert_eq!(expected, "short");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn mistyped_field_is_missing_field() {
        let r = reader(vec![
            ("Width", Value::Int(7)),
            ("Blocks", Value::Short(1)),
        ]);
        assert!(matches!(
            r.get_short("Width"),
            Err(TagError::MissingField { .. })
        ));
        assert!(matches!(
            r.get_byte_array("Blocks"),
            Err(TagError::MissingField { .. })
        ));
    }

    #[test]
    fn byte_array_keeps_bit_pattern() {
        let r = reader(vec![(
            "Blocks",
            Value::ByteArray(ByteArray::new(vec![0, 35, -97, -1])),
        )]);
        assert_eq!(r.get_byte_array("Blocks").unwrap(), vec![0, 35, 159, 255]);
    }

    #[test]
    fn non_compound_root_rejected() {
        assert!(matches!(
            TagReader::new(Value::Short(1)),
            Err(TagError::NotACompound)
        ));
    }
}
