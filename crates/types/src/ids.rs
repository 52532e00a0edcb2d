//! Newtype wrappers for semantic IDs
//!
//! These types keep section identifiers and list item keys from being mixed
//! up with ordinary display strings.

use serde::Serialize;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// The stable key of a list item, used by layout emitters for diffing.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(Arc<str>);

impl ItemId {
    /// Creates a new ItemId from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Key used when an item carries no `id` of its own.
    pub fn positional(index: usize) -> Self {
        Self(format!("item-{}", index).into())
    }

    /// Returns the string representation of this item ID
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The identifier of a resume section (`work`, `skills`, `custom-1`, ...).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(transparent)]
pub struct SectionId(Arc<str>);

impl SectionId {
    /// Creates a new SectionId from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation of this section ID
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if this is one of the given well-known section ids.
    pub fn is_one_of(&self, ids: &[&str]) -> bool {
        ids.contains(&self.as_str())
    }
}

impl From<String> for SectionId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
