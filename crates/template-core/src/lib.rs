//! Core abstractions for field projection and conditional rendering
//!
//! This crate defines the contract between template definitions (the built-in
//! Gengar layout, JSON template files) and the layout emitters that draw the
//! result.
//!
//! ## Key Abstractions
//!
//! - **`FieldSpec`**: a semantic field name bound to a path, a formatter and a kind
//! - **`RenderTree`**: the explicit tree of rendered nodes a template produces
//! - **`RenderSettings`**: theme, date format and indicator settings for a pass
//! - **`CompiledTemplate`**: an executable template artifact
//! - **`TemplateParser`**: turns template source into a `CompiledTemplate`

pub mod field;
pub mod settings;
pub mod tree;

pub use field::{FieldKind, FieldPaths, FieldSpec};
pub use settings::RenderSettings;
pub use tree::{
    LevelIndicator, MAX_LEVEL_MARKS, PhotoShape, RenderNode, RenderTree, RenderedColumn, RenderedField,
    RenderedGroup, RenderedImage, RenderedItem, RenderedList, RenderedPage, RenderedSection,
    SectionStyle,
};

use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use vitae_jpath::JPathError;

/// Errors that can occur while parsing or compiling a template.
///
/// Rendering itself never fails; these only describe defects in template
/// configuration.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template parsing failed: {0}")]
    ParseError(String),

    #[error("Invalid field path: {0}")]
    PathError(#[from] JPathError),

    #[error("Invalid template configuration: {0}")]
    ConfigError(String),
}

/// A reusable, data-agnostic, compiled template artifact.
pub trait CompiledTemplate: Send + Sync {
    /// A short name identifying the template (e.g. `gengar`).
    fn name(&self) -> &str;

    /// Projects `document` into a render tree. Missing or blank data only
    /// ever removes nodes from the tree.
    fn execute(&self, document: &Value, settings: &RenderSettings) -> RenderTree;
}

/// A parser responsible for compiling template source into a `CompiledTemplate`.
pub trait TemplateParser {
    fn parse(&self, template_source: &str) -> Result<Arc<dyn CompiledTemplate>, TemplateError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_errors_surface_as_template_errors() {
        let err = FieldSpec::parse("title", "a..b").unwrap_err();
        assert!(matches!(err, TemplateError::PathError(_)));
        assert!(err.to_string().starts_with("Invalid field path"));
    }
}
