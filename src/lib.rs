//! Resume rendering: declarative field specs projected over a resume
//! document, with missing and blank values suppressed before anything
//! reaches an emitter.
//!
//! ```ignore
//! use vitae::PipelineBuilder;
//!
//! let pipeline = PipelineBuilder::new().build()?;
//! let text = pipeline.render_to_string(&resume)?;
//! ```

pub mod error;
pub mod gengar;
pub mod pipeline;

pub use error::PipelineError;
pub use gengar::{GENGAR, GengarTemplate};
pub use pipeline::{OutputFormat, PipelineBuilder, RenderPipeline, SettingsOverrides};

pub use vitae_json_template::{FormatContext, FormatFunction, FormatterRegistry, JsonParser, JsonTemplateError};
pub use vitae_render_core::{DocumentRenderer, RenderError};
pub use vitae_template_core::{CompiledTemplate, RenderSettings, RenderTree, TemplateError, TemplateParser};
pub use vitae_types::{Color, Theme};
