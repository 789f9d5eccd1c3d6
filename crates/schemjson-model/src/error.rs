use std::fmt;

use schemjson_nbt::TagError;

#[derive(Debug)]
pub enum ConvertError {
    /// A required tag is absent or has the wrong type.
    MissingField {
        name: String,
        expected: &'static str,
    },
    /// Dimensions and block/data arrays disagree.
    InvalidGrid(String),
    Tag(TagError),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::MissingField { name, expected } => {
                write!(f, "missing {} field '{}'", expected, name)
            }
            ConvertError::InvalidGrid(msg) => write!(f, "invalid grid: {}", msg),
            ConvertError::Tag(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Tag(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TagError> for ConvertError {
    fn from(e: TagError) -> Self {
        match e {
            TagError::MissingField { name, expected } => {
                ConvertError::MissingField { name, expected }
            }
            other => ConvertError::Tag(other),
        }
    }
}
