use super::section_map::{COMPACT_SECTIONS, EMPHASIZED_SECTIONS, SectionPaths};
use vitae_json_template::{CompiledField, Compiler, SectionData, TemplateExecutor};
use vitae_template_core::{FieldKind, FieldSpec, RenderedSection, SectionStyle, TemplateError};
use vitae_types::{Color, SectionId};

/// Renders one resume section as a grid of items.
///
/// Every item gets the same field set in the same order: the four
/// configurable slots from [`SectionPaths`] interleaved with fixed fields.
#[derive(Debug, Clone)]
pub struct SectionWidget {
    fields: Vec<CompiledField>,
}

impl SectionWidget {
    pub fn new(paths: SectionPaths, compiler: &Compiler) -> Result<Self, TemplateError> {
        let specs = vec![
            FieldSpec::parse_many("title", paths.title)?.with_formatter("auto"),
            FieldSpec::parse("description", "description")?.with_kind(FieldKind::Markdown),
            FieldSpec::parse("url", "url")?.with_kind(FieldKind::Link),
            FieldSpec::parse_many("subtitle", paths.subtitle)?.with_formatter("auto"),
            FieldSpec::parse("date", "date")?.with_formatter("date"),
            FieldSpec::parse_many("headline", paths.headline)?.with_formatter("auto"),
            FieldSpec::parse("level", "level")?,
            FieldSpec::parse("levelNum", "levelNum")?.with_kind(FieldKind::Magnitude),
            FieldSpec::parse("summary", "summary")?.with_kind(FieldKind::Markdown),
            FieldSpec::parse_many("keywords", paths.keywords)?.with_formatter("keywords"),
            FieldSpec::parse("phone", "phone")?.with_kind(FieldKind::Phone),
            FieldSpec::parse("email", "email")?.with_kind(FieldKind::Email),
        ];
        Ok(Self {
            fields: compiler.compile(&specs)?,
        })
    }

    pub fn fields(&self) -> &[CompiledField] {
        &self.fields
    }

    pub fn style(id: &SectionId, accent: Color) -> SectionStyle {
        SectionStyle {
            compact: id.is_one_of(COMPACT_SECTIONS),
            emphasized_title: id.is_one_of(EMPHASIZED_SECTIONS),
            accent: Some(accent),
        }
    }

    /// `None` when the section is hidden or has no items.
    pub fn render(&self, exec: &TemplateExecutor, section: &SectionData) -> Option<RenderedSection> {
        let style = Self::style(&section.id, exec.settings().theme.primary);
        exec.render_section(section, &self.fields, style)
    }
}
