//! The resolver that walks a parsed field path through a document.
use super::ast::{PathSegment, Selection};
use super::path::FieldPath;
use serde_json::Value;

/// The outcome of resolving a path: a borrowed value, or the absence sentinel.
///
/// `Absent` is distinct from an empty string or a zero; it means there is no
/// data at the path at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    Present(&'a Value),
    Absent,
}

impl<'a> Resolved<'a> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Resolved::Absent)
    }

    pub fn value(self) -> Option<&'a Value> {
        match self {
            Resolved::Present(v) => Some(v),
            Resolved::Absent => None,
        }
    }

    /// Absent, an empty string, or an empty sequence.
    pub fn is_blank(&self) -> bool {
        match self {
            Resolved::Absent => true,
            Resolved::Present(Value::String(s)) => s.is_empty(),
            Resolved::Present(Value::Array(a)) => a.is_empty(),
            Resolved::Present(_) => false,
        }
    }

    pub fn as_str(self) -> Option<&'a str> {
        self.value().and_then(Value::as_str)
    }

    pub fn as_bool(self) -> Option<bool> {
        self.value().and_then(Value::as_bool)
    }

    pub fn as_array(self) -> Option<&'a Vec<Value>> {
        self.value().and_then(Value::as_array)
    }
}

impl<'a> From<Option<&'a Value>> for Resolved<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        match value {
            Some(Value::Null) | None => Resolved::Absent,
            Some(v) => Resolved::Present(v),
        }
    }
}

/// Resolves `path` against `context`. Never fails: any missing or null
/// container along the way yields `Resolved::Absent`.
pub fn resolve<'a>(context: &'a Value, path: &FieldPath) -> Resolved<'a> {
    select(path.selection(), context)
}

/// Parses and resolves `path` in one step. A malformed path is logged and
/// treated as absent.
pub fn resolve_str<'a>(context: &'a Value, path: &str) -> Resolved<'a> {
    match FieldPath::parse(path) {
        Ok(parsed) => resolve(context, &parsed),
        Err(e) => {
            log::warn!("Ignoring malformed field path: {}", e);
            Resolved::Absent
        }
    }
}

/// Selects a value based on a `Selection`.
pub fn select<'a>(sel: &Selection, context: &'a Value) -> Resolved<'a> {
    match sel {
        Selection::CurrentContext => Some(context).into(),
        Selection::Path(segments) => {
            let mut current = context;
            for segment in segments {
                let next_val = match (segment, current) {
                    (PathSegment::Key(k), Value::Object(map)) => map.get(k),
                    (PathSegment::Key(k), Value::Array(items)) => {
                        k.parse::<usize>().ok().and_then(|i| items.get(i))
                    }
                    (PathSegment::Index(i), Value::Array(items)) => items.get(*i),
                    _ => None,
                };
                match next_val {
                    Some(Value::Null) | None => return Resolved::Absent,
                    Some(next) => current = next,
                }
            }
            Resolved::Present(current)
        }
    }
}
