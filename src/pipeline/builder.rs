// src/pipeline/builder.rs
use super::config::{OutputFormat, SettingsOverrides};
use super::orchestrator::RenderPipeline;
use crate::error::PipelineError;
use crate::gengar::{GENGAR, GengarTemplate};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;
use vitae_json_template::{FormatFunction, FormatterRegistry, JsonParser};
use vitae_template_core::{CompiledTemplate, MAX_LEVEL_MARKS, TemplateParser};
use vitae_types::Theme;

/// A template waiting for `build`, so formatters registered later in the
/// chain still apply to it.
enum PendingTemplate {
    Builtin(String),
    Json(String),
    Compiled(Arc<dyn CompiledTemplate>),
}

/// A builder for creating a `RenderPipeline`.
pub struct PipelineBuilder {
    template: Option<PendingTemplate>,
    registry: FormatterRegistry,
    output_format: OutputFormat,
    overrides: SettingsOverrides,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self {
            template: None,
            registry: FormatterRegistry::default(),
            output_format: OutputFormat::default(),
            overrides: SettingsOverrides::default(),
        }
    }
}

impl PipelineBuilder {
    /// Creates a new `PipelineBuilder` that renders the Gengar template as text.
    pub fn new() -> Self { Default::default() }

    /// Selects a built-in template by name.
    pub fn with_builtin_template(mut self, name: &str) -> Self {
        self.template = Some(PendingTemplate::Builtin(name.to_string()));
        self
    }

    /// Loads a JSON template definition from a file.
    pub fn with_template_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        let path_ref = path.as_ref();
        let extension = path_ref.extension().and_then(|s| s.to_str()).unwrap_or("");
        if extension != "json" {
            return Err(PipelineError::Config(format!(
                "Unsupported template file extension: .{}",
                extension
            )));
        }
        let source = fs::read_to_string(path_ref).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read template from '{}': {}", path_ref.display(), e),
            ))
        })?;
        self.template = Some(PendingTemplate::Json(source));
        Ok(self)
    }

    /// Configures the pipeline with a JSON template definition held in memory.
    pub fn with_template_source(mut self, source: &str) -> Self {
        self.template = Some(PendingTemplate::Json(source.to_string()));
        self
    }

    /// Uses an already compiled template as-is.
    pub fn with_template(mut self, template: Arc<dyn CompiledTemplate>) -> Self {
        self.template = Some(PendingTemplate::Compiled(template));
        self
    }

    /// Registers a formatter for templates compiled by this builder.
    /// Replaces any built-in formatter of the same name.
    pub fn with_formatter(mut self, name: &str, formatter: FormatFunction) -> Self {
        self.registry.register(name, formatter);
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self { self.output_format = format; self }

    pub fn with_date_format(mut self, format: &str) -> Self {
        self.overrides.date_format = Some(format.to_string());
        self
    }

    /// Number of marks in level indicators, from 1 to `MAX_LEVEL_MARKS`.
    pub fn with_level_marks(mut self, marks: usize) -> Self { self.overrides.level_marks = Some(marks); self }

    pub fn with_default_scheme(mut self, scheme: &str) -> Self {
        self.overrides.default_scheme = Some(scheme.to_string());
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self { self.overrides.theme = Some(theme); self }

    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Self { self.overrides = overrides; self }

    /// Consumes the builder, compiling the template and choosing the emitter.
    pub fn build(self) -> Result<RenderPipeline, PipelineError> {
        if let Some(marks) = self.overrides.level_marks
            && !(1..=MAX_LEVEL_MARKS).contains(&marks)
        {
            return Err(PipelineError::Config(format!(
                "Level indicators need between 1 and {} marks, got {}",
                MAX_LEVEL_MARKS, marks
            )));
        }

        let pending = self
            .template
            .unwrap_or_else(|| PendingTemplate::Builtin(GENGAR.to_string()));
        let template = Self::compile(pending, &self.registry)?;

        log::info!(
            "Built pipeline: template '{}', output {:?}",
            template.name(),
            self.output_format
        );
        Ok(RenderPipeline::new(template, self.output_format.renderer(), self.overrides))
    }

    fn compile(
        pending: PendingTemplate,
        registry: &FormatterRegistry,
    ) -> Result<Arc<dyn CompiledTemplate>, PipelineError> {
        match pending {
            PendingTemplate::Builtin(name) if name.eq_ignore_ascii_case(GENGAR) => {
                Ok(Arc::new(GengarTemplate::with_registry(registry)?))
            }
            PendingTemplate::Builtin(name) => Err(PipelineError::Config(format!(
                "Unknown built-in template '{}'",
                name
            ))),
            PendingTemplate::Json(source) => {
                let parser = JsonParser::with_registry(registry.clone());
                Ok(parser.parse(&source)?)
            }
            PendingTemplate::Compiled(template) => Ok(template),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_gengar() {
        let pipeline = PipelineBuilder::new().build().unwrap();
        assert_eq!(pipeline.template_name(), GENGAR);
    }

    #[test]
    fn rejects_unknown_builtin_and_zero_marks() {
        let err = PipelineBuilder::new()
            .with_builtin_template("pikachu")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, PipelineError::Config(_)));

        let err = PipelineBuilder::new().with_level_marks(0).build().err().unwrap();
        assert!(matches!(err, PipelineError::Config(_)));
    }

    #[test]
    fn level_marks_are_bounded() {
        for marks in [MAX_LEVEL_MARKS + 1, usize::MAX] {
            let err = PipelineBuilder::new().with_level_marks(marks).build().err().unwrap();
            assert!(matches!(err, PipelineError::Config(_)));
        }
        assert!(PipelineBuilder::new().with_level_marks(MAX_LEVEL_MARKS).build().is_ok());
        assert!(PipelineBuilder::new().with_level_marks(1).build().is_ok());
    }

    #[test]
    fn rejects_non_json_template_files() {
        let result = PipelineBuilder::new().with_template_file("resume.xsl");
        assert!(matches!(result, Err(PipelineError::Config(_))));
    }
}
