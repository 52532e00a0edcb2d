// src/error.rs
use thiserror::Error;
use vitae_render_core::RenderError;
use vitae_template_core::TemplateError;

/// Errors surfaced by the render pipeline and the CLI.
///
/// Data problems never end up here: missing or blank fields are simply not
/// rendered. These are configuration, template and I/O failures.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
