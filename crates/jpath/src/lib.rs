//! Field path parsing and total resolution over JSON documents.
//!
//! Paths such as `basics.location.city` or `profiles[0].url` are parsed once
//! into a [`FieldPath`] and then resolved against any number of documents.
//! Resolution never fails: a missing key, an out-of-range index, or a `null`
//! anywhere along the path yields [`Resolved::Absent`].

pub mod ast;
pub mod engine;
pub mod error;
mod parser;
pub mod path;

// --- Public API ---
pub use ast::{PathSegment, Selection};
pub use engine::{Resolved, resolve, resolve_str, select};
pub use error::JPathError;
pub use path::FieldPath;
