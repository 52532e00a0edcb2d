//! The compiled, reusable form of a field path.
use crate::ast::{PathSegment, Selection};
use crate::error::JPathError;
use crate::parser::parse_selection;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;

/// A parsed field path, e.g. `basics.location.city` or `profiles[0].url`.
///
/// Parsing happens once, when a template is compiled; resolution against a
/// document can then never fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    raw: String,
    selection: Selection,
}

impl FieldPath {
    pub fn parse(raw: &str) -> Result<Self, JPathError> {
        let selection = parse_selection(raw)?;
        Ok(Self {
            raw: raw.trim().to_string(),
            selection,
        })
    }

    /// The path that selects the context node itself.
    pub fn current() -> Self {
        Self {
            raw: ".".to_string(),
            selection: Selection::CurrentContext,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns a new path with `key` appended as a final key segment.
    pub fn child(&self, key: &str) -> Self {
        let segment = PathSegment::Key(key.to_string());
        match &self.selection {
            Selection::CurrentContext => Self {
                raw: key.to_string(),
                selection: Selection::Path(vec![segment]),
            },
            Selection::Path(segments) => {
                let mut segments = segments.clone();
                segments.push(segment);
                Self {
                    raw: format!("{}.{}", self.raw, key),
                    selection: Selection::Path(segments),
                }
            }
        }
    }
}

impl FromStr for FieldPath {
    type Err = JPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for FieldPath {
    type Error = JPathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}
