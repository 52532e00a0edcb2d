//! The built-in two-column "Gengar" resume template.
//!
//! Page one opens with the masthead: photo, contact details and profiles in
//! the sidebar, the summary over the main column. Sections follow the page
//! layout from `metadata.layout`.

mod layout;
mod masthead;
mod section;
mod section_map;

pub use layout::{Layout, PageLayout, MAIN_COLUMN, SIDEBAR_COLUMN};
pub use masthead::{DEFAULT_PHOTO_SIZE, Masthead};
pub use section::SectionWidget;
pub use section_map::{COMPACT_SECTIONS, EMPHASIZED_SECTIONS, SectionPaths, section_paths};

use serde_json::Value;
use std::collections::HashMap;
use vitae_jpath::FieldPath;
use vitae_json_template::{Compiler, FormatterRegistry, SectionData, TemplateExecutor};
use vitae_template_core::{
    CompiledTemplate, RenderNode, RenderSettings, RenderTree, RenderedColumn, RenderedPage,
    TemplateError,
};

pub const GENGAR: &str = "gengar";

/// Section ids with their own path defaults.
const BUILTIN_SECTIONS: &[&str] = &[
    "work",
    "education",
    "awards",
    "certifications",
    "publications",
    "skills",
    "languages",
    "interests",
    "projects",
    "volunteer",
    "references",
];

#[derive(Debug)]
pub struct GengarTemplate {
    masthead: Masthead,
    sections_root: FieldPath,
    widgets: HashMap<&'static str, SectionWidget>,
    fallback: SectionWidget,
}

impl GengarTemplate {
    pub fn new() -> Result<Self, TemplateError> {
        Self::with_registry(&FormatterRegistry::default())
    }

    /// Compiles every field against `registry`, so custom formatters that
    /// shadow built-in names apply here too.
    pub fn with_registry(registry: &FormatterRegistry) -> Result<Self, TemplateError> {
        let compiler = Compiler::new(registry);
        let mut widgets = HashMap::with_capacity(BUILTIN_SECTIONS.len());
        for id in BUILTIN_SECTIONS {
            widgets.insert(*id, SectionWidget::new(section_paths(id), &compiler)?);
        }
        Ok(Self {
            masthead: Masthead::new(&compiler)?,
            sections_root: FieldPath::parse("sections")?,
            widgets,
            fallback: SectionWidget::new(SectionPaths::DEFAULT, &compiler)?,
        })
    }

    fn widget(&self, id: &str) -> &SectionWidget {
        self.widgets.get(id).unwrap_or(&self.fallback)
    }

    fn render_sections(&self, exec: &TemplateExecutor, document: &Value, ids: &[String], column: &mut RenderedColumn) {
        for id in ids {
            let path = self.sections_root.child(id);
            let Some(section) = SectionData::at(document, &path, id) else {
                log::debug!("Layout names section '{}' but the document has none", id);
                continue;
            };
            if let Some(rendered) = self.widget(id).render(exec, &section) {
                column.nodes.push(RenderNode::Section(rendered));
            }
        }
    }
}

impl CompiledTemplate for GengarTemplate {
    fn name(&self) -> &str {
        GENGAR
    }

    fn execute(&self, document: &Value, settings: &RenderSettings) -> RenderTree {
        let exec = TemplateExecutor::new(settings);
        let layout = Layout::from_document(document);

        let pages = layout
            .pages()
            .iter()
            .enumerate()
            .map(|(index, page)| {
                let mut sidebar = RenderedColumn::new("sidebar");
                let mut main = RenderedColumn::new("main");
                if index == 0 {
                    if let Some(group) = self.masthead.sidebar(&exec, document) {
                        sidebar.nodes.push(RenderNode::Group(group));
                    }
                    if let Some(group) = self.masthead.main(&exec, document) {
                        main.nodes.push(RenderNode::Group(group));
                    }
                }
                self.render_sections(&exec, document, &page.sidebar, &mut sidebar);
                self.render_sections(&exec, document, &page.main, &mut main);
                RenderedPage {
                    columns: vec![sidebar, main],
                }
            })
            .collect();

        RenderTree {
            template: GENGAR.to_string(),
            pages,
        }
    }
}
