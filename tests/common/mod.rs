#![allow(dead_code)]

pub mod fixtures;

use serde_json::Value;
use vitae::{OutputFormat, PipelineBuilder, PipelineError, RenderTree};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Render a document with the built-in template into a render tree
pub fn gengar_tree(document: &Value) -> Result<RenderTree, PipelineError> {
    Ok(PipelineBuilder::new().build()?.render_tree(document))
}

/// Render a document with the built-in template as text
pub fn gengar_text(document: &Value) -> Result<String, PipelineError> {
    PipelineBuilder::new()
        .with_output_format(OutputFormat::Text)
        .build()?
        .render_to_string(document)
}

/// Render a document with a JSON template definition into a render tree
pub fn json_template_tree(template: &Value, document: &Value) -> Result<RenderTree, PipelineError> {
    let source = serde_json::to_string(template)?;
    Ok(PipelineBuilder::new()
        .with_template_source(&source)
        .build()?
        .render_tree(document))
}
