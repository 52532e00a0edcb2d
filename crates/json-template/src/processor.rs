// Processor that implements TemplateParser trait for JSON templates
use crate::ast::JsonTemplateFile;
use crate::compiler::{CompiledField, Compiler};
use crate::error::JsonTemplateError;
use crate::executor::{SectionData, TemplateExecutor};
use crate::functions::FormatterRegistry;
use serde_json::Value;
use std::sync::Arc;
use vitae_jpath::{FieldPath, resolve_str};
use vitae_template_core::{
    CompiledTemplate, RenderNode, RenderSettings, RenderTree, RenderedColumn, RenderedGroup,
    RenderedPage, SectionStyle, TemplateError, TemplateParser,
};

/// JSON template parser
#[derive(Clone, Default)]
pub struct JsonParser {
    registry: FormatterRegistry,
}

impl JsonParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a custom formatter registry, e.g. one with extra formatters.
    pub fn with_registry(registry: FormatterRegistry) -> Self {
        Self { registry }
    }

    pub fn compile(&self, file: JsonTemplateFile) -> Result<CompiledJsonTemplate, JsonTemplateError> {
        let compiler = Compiler::new(&self.registry);
        let header = compiler.compile(&file.header)?;
        let item_fields = compiler.compile(&file.item_fields)?;

        let mut sections = Vec::with_capacity(file.sections.len());
        for (id, section) in file.sections {
            let path = match section.path {
                Some(path) => path,
                None => FieldPath::parse("sections")?.child(&id),
            };
            let fields = match &section.fields {
                Some(fields) => compiler.compile(fields)?,
                None => item_fields.clone(),
            };
            sections.push(CompiledSection {
                id,
                path,
                fields,
                compact: section.compact,
                emphasized_title: section.emphasized_title,
            });
        }

        Ok(CompiledJsonTemplate {
            name: file.name,
            header,
            item_fields,
            sections,
        })
    }
}

#[derive(Debug)]
struct CompiledSection {
    id: String,
    path: FieldPath,
    fields: Vec<CompiledField>,
    compact: bool,
    emphasized_title: bool,
}

/// Compiled JSON template
#[derive(Debug)]
pub struct CompiledJsonTemplate {
    name: String,
    header: Vec<CompiledField>,
    item_fields: Vec<CompiledField>,
    sections: Vec<CompiledSection>,
}

impl CompiledJsonTemplate {
    fn render_sections(&self, exec: &TemplateExecutor, document: &Value, column: &mut RenderedColumn) {
        let accent = Some(exec.settings().theme.primary);

        if self.sections.is_empty() {
            let Some(Value::Object(found)) = resolve_str(document, "sections").value() else {
                return;
            };
            let style = SectionStyle {
                accent,
                ..SectionStyle::default()
            };
            for (id, value) in found {
                let section = SectionData::from_value(value, id);
                if let Some(rendered) = exec.render_section(&section, &self.item_fields, style) {
                    column.nodes.push(RenderNode::Section(rendered));
                }
            }
            return;
        }

        for compiled in &self.sections {
            let Some(section) = SectionData::at(document, &compiled.path, &compiled.id) else {
                log::debug!("Section '{}' not found at '{}'", compiled.id, compiled.path);
                continue;
            };
            let style = SectionStyle {
                compact: compiled.compact,
                emphasized_title: compiled.emphasized_title,
                accent,
            };
            if let Some(rendered) = exec.render_section(&section, &compiled.fields, style) {
                column.nodes.push(RenderNode::Section(rendered));
            }
        }
    }
}

impl CompiledTemplate for CompiledJsonTemplate {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self, document: &Value, settings: &RenderSettings) -> RenderTree {
        let exec = TemplateExecutor::new(settings);
        let mut column = RenderedColumn::new("main");

        let mut header = RenderedGroup::new("header");
        for field in &self.header {
            header.push_field(exec.render_field(document, field));
        }
        if !header.is_empty() {
            column.nodes.push(RenderNode::Group(header));
        }

        self.render_sections(&exec, document, &mut column);

        RenderTree {
            template: self.name.clone(),
            pages: vec![RenderedPage {
                columns: vec![column],
            }],
        }
    }
}

impl TemplateParser for JsonParser {
    fn parse(&self, template_source: &str) -> Result<Arc<dyn CompiledTemplate>, TemplateError> {
        let file: JsonTemplateFile = serde_json::from_str(template_source)
            .map_err(|e| TemplateError::ParseError(format!("JSON parse error: {}", e)))?;
        let compiled = self.compile(file).map_err(TemplateError::from)?;
        Ok(Arc::new(compiled))
    }
}
