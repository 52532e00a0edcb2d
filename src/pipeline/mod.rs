//! Wires a compiled template to an emitter and runs render passes.
mod builder;
mod config;
mod orchestrator;

pub use builder::PipelineBuilder;
pub use config::{OutputFormat, SettingsOverrides};
pub use orchestrator::RenderPipeline;
