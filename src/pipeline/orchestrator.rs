// src/pipeline/orchestrator.rs
use super::config::SettingsOverrides;
use crate::error::PipelineError;
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use vitae_render_core::DocumentRenderer;
use vitae_template_core::{CompiledTemplate, RenderSettings, RenderTree};

/// A compiled template paired with an emitter.
///
/// Immutable once built: render passes share nothing mutable, so one
/// pipeline can serve any number of documents from any number of threads.
#[derive(Clone)]
pub struct RenderPipeline {
    template: Arc<dyn CompiledTemplate>,
    renderer: Arc<dyn DocumentRenderer>,
    overrides: SettingsOverrides,
}

impl RenderPipeline {
    pub fn new(
        template: Arc<dyn CompiledTemplate>,
        renderer: Arc<dyn DocumentRenderer>,
        overrides: SettingsOverrides,
    ) -> Self {
        Self {
            template,
            renderer,
            overrides,
        }
    }

    pub fn template_name(&self) -> &str {
        self.template.name()
    }

    pub fn renderer_name(&self) -> &str {
        self.renderer.name()
    }

    /// Document metadata first, then the pipeline's overrides on top.
    pub fn settings_for(&self, document: &Value) -> RenderSettings {
        let mut settings = RenderSettings::from_document(document);
        self.overrides.apply(&mut settings);
        settings
    }

    /// Runs the template without emitting anything.
    pub fn render_tree(&self, document: &Value) -> RenderTree {
        let settings = self.settings_for(document);
        self.template.execute(document, &settings)
    }

    pub fn render(&self, document: &Value, writer: &mut dyn Write) -> Result<(), PipelineError> {
        let start = Instant::now();
        let tree = self.render_tree(document);
        self.renderer.render(&tree, writer)?;
        log::debug!(
            "Rendered '{}' as {} in {:.2?}",
            self.template.name(),
            self.renderer.name(),
            start.elapsed()
        );
        Ok(())
    }

    pub fn render_to_string(&self, document: &Value) -> Result<String, PipelineError> {
        let tree = self.render_tree(document);
        Ok(self.renderer.render_to_string(&tree)?)
    }

    pub fn render_to_file<P: AsRef<Path>>(&self, document: &Value, path: P) -> Result<(), PipelineError> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        self.render(document, &mut writer)?;
        writer.flush()?;
        log::info!("Wrote {}", path.as_ref().display());
        Ok(())
    }

    /// Renders a batch of documents, in parallel when the `rayon-executor`
    /// feature is enabled. Results keep the input order.
    pub fn render_many(&self, documents: &[Value]) -> Vec<Result<String, PipelineError>> {
        let start = Instant::now();

        #[cfg(feature = "rayon-executor")]
        let results: Vec<_> = {
            use rayon::prelude::*;
            documents.par_iter().map(|doc| self.render_to_string(doc)).collect()
        };

        #[cfg(not(feature = "rayon-executor"))]
        let results: Vec<_> = documents.iter().map(|doc| self.render_to_string(doc)).collect();

        log::info!(
            "Rendered {} documents in {:.2?}",
            documents.len(),
            start.elapsed()
        );
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{OutputFormat, PipelineBuilder};
    use serde_json::json;

    #[test]
    fn overrides_win_over_metadata() {
        let pipeline = PipelineBuilder::new()
            .with_date_format("YYYY")
            .build()
            .unwrap();
        let doc = json!({ "metadata": { "date": { "format": "MM/YYYY" } } });
        assert_eq!(pipeline.settings_for(&doc).date_format, "YYYY");

        let plain = PipelineBuilder::new().build().unwrap();
        assert_eq!(plain.settings_for(&doc).date_format, "MM/YYYY");
    }

    #[test]
    fn render_many_keeps_input_order() {
        let pipeline = PipelineBuilder::new()
            .with_output_format(OutputFormat::Text)
            .build()
            .unwrap();
        let docs: Vec<Value> = (0..8)
            .map(|i| json!({ "basics": { "name": format!("Person {}", i) } }))
            .collect();

        let outputs = pipeline.render_many(&docs);
        assert_eq!(outputs.len(), 8);
        for (i, output) in outputs.into_iter().enumerate() {
            assert!(output.unwrap().contains(&format!("Person {}", i)));
        }
    }
}
