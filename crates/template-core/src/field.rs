use crate::TemplateError;
use serde::{Deserialize, Serialize};
use vitae_jpath::FieldPath;

/// How a field is presented, and which values count as "no value".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    #[default]
    Text,
    /// Rich text handed to a markdown-capable emitter.
    Markdown,
    /// A link whose target gets the default scheme when it has none.
    Link,
    /// An email address linked with `mailto:`.
    Email,
    /// A phone number linked with `tel:`.
    Phone,
    /// A numeric level where zero or absence means "omit", drawn as marks.
    Magnitude,
}

impl FieldKind {
    pub fn is_magnitude(&self) -> bool {
        matches!(self, FieldKind::Magnitude)
    }
}

/// One path, or several whose non-blank renderings are joined with `" / "`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldPaths {
    One(FieldPath),
    Many(Vec<FieldPath>),
}

impl FieldPaths {
    pub fn as_slice(&self) -> &[FieldPath] {
        match self {
            FieldPaths::One(path) => std::slice::from_ref(path),
            FieldPaths::Many(paths) => paths,
        }
    }
}

impl From<FieldPath> for FieldPaths {
    fn from(path: FieldPath) -> Self {
        FieldPaths::One(path)
    }
}

/// Declarative description of a single field: where it lives in the data,
/// how it is formatted, and how it is presented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub name: String,
    pub path: FieldPaths,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,
    #[serde(default)]
    pub kind: FieldKind,
    /// Link target taken from another path instead of the display value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_path: Option<FieldPath>,
}

impl FieldSpec {
    pub fn new(name: &str, path: impl Into<FieldPaths>) -> Self {
        Self {
            name: name.to_string(),
            path: path.into(),
            formatter: None,
            kind: FieldKind::Text,
            link_path: None,
        }
    }

    /// Builds a spec from a path string, failing on malformed paths.
    pub fn parse(name: &str, path: &str) -> Result<Self, TemplateError> {
        Ok(Self::new(name, FieldPath::parse(path)?))
    }

    /// Builds a spec whose renderings of several paths are joined.
    pub fn parse_many(name: &str, paths: &[&str]) -> Result<Self, TemplateError> {
        let paths = paths
            .iter()
            .map(|p| FieldPath::parse(p))
            .collect::<Result<Vec<_>, _>>()?;
        let path = match <[FieldPath; 1]>::try_from(paths) {
            Ok([single]) => FieldPaths::One(single),
            Err(many) => FieldPaths::Many(many),
        };
        Ok(Self::new(name, path))
    }

    pub fn with_formatter(mut self, formatter: &str) -> Self {
        self.formatter = Some(formatter.to_string());
        self
    }

    pub fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    /// Makes this a link field whose target is read from `path`.
    pub fn linked_to(mut self, path: &str) -> Result<Self, TemplateError> {
        self.kind = FieldKind::Link;
        self.link_path = Some(FieldPath::parse(path)?);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_single_and_multi_paths() {
        let spec: FieldSpec = serde_json::from_str(
            r#"{ "name": "subtitle", "path": ["degree", "area"], "kind": "markdown" }"#,
        )
        .unwrap();
        assert_eq!(spec.path.as_slice().len(), 2);
        assert_eq!(spec.kind, FieldKind::Markdown);
        assert_eq!(spec.formatter, None);

        let spec: FieldSpec =
            serde_json::from_str(r#"{ "name": "date", "path": "date", "formatter": "date" }"#).unwrap();
        assert_eq!(spec.path.as_slice()[0].as_str(), "date");
        assert_eq!(spec.kind, FieldKind::Text);

        let spec: FieldSpec = serde_json::from_str(
            r#"{ "name": "username", "path": "username", "kind": "link", "linkPath": "url" }"#,
        )
        .unwrap();
        assert_eq!(spec.link_path.unwrap().as_str(), "url");
    }

    #[test]
    fn rejects_bad_paths() {
        assert!(FieldSpec::parse("title", "a..b").is_err());
        assert!(serde_json::from_str::<FieldSpec>(r#"{ "name": "x", "path": "" }"#).is_err());
    }

    #[test]
    fn parse_many_collapses_single_path() {
        let spec = FieldSpec::parse_many("title", &["name"]).unwrap();
        assert!(matches!(spec.path, FieldPaths::One(_)));
        let spec = FieldSpec::parse_many("subtitle", &["degree", "area"]).unwrap();
        assert!(matches!(spec.path, FieldPaths::Many(ref p) if p.len() == 2));
    }
}
