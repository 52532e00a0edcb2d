//! Defines the parsed representation of field paths.

/// Represents a segment in a field path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object key (e.g., `.name`). All-digit keys also index sequences.
    Key(String),
    /// An array index (e.g., `[0]`).
    Index(usize),
}

/// Represents a path for selecting data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection {
    /// Selects the current context node (`.`).
    CurrentContext,
    /// Selects a node using a sequence of key/index lookups.
    Path(Vec<PathSegment>),
}
