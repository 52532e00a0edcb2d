use itertools::Itertools;
use std::io::Write;
use vitae_render_core::{DocumentRenderer, RenderError};
use vitae_template_core::{
    FieldKind, LevelIndicator, RenderNode, RenderTree, RenderedField, RenderedItem,
    RenderedSection,
};

const INDENT: &str = "  ";

/// Writes the render tree as an indented plain-text outline.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    show_links: bool,
    filled_mark: char,
    empty_mark: char,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            show_links: true,
            filled_mark: '●',
            empty_mark: '○',
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether link targets are printed after their display text.
    pub fn with_links(mut self, show_links: bool) -> Self {
        self.show_links = show_links;
        self
    }

    pub fn with_marks(mut self, filled: char, empty: char) -> Self {
        self.filled_mark = filled;
        self.empty_mark = empty;
        self
    }

    fn marks(&self, level: &LevelIndicator) -> String {
        level
            .marks()
            .map(|filled| if filled { self.filled_mark } else { self.empty_mark })
            .collect()
    }

    fn field_text(&self, field: &RenderedField) -> String {
        if let Some(level) = &field.level {
            return format!("{} {}", self.marks(level), field.value);
        }
        match &field.link {
            Some(link) if self.show_links && *link != field.value => {
                format!("{} <{}>", field.value, link)
            }
            _ => field.value.clone(),
        }
    }

    fn write_field(&self, w: &mut dyn Write, depth: usize, field: &RenderedField) -> Result<(), RenderError> {
        let indent = INDENT.repeat(depth);
        self.write_lines(w, &indent, &indent, field)
    }

    /// Writes `field` with `first` before its first line and `rest` before
    /// any further markdown lines.
    fn write_lines(
        &self,
        w: &mut dyn Write,
        first: &str,
        rest: &str,
        field: &RenderedField,
    ) -> Result<(), RenderError> {
        if field.kind != FieldKind::Markdown {
            writeln!(w, "{}{}", first, self.field_text(field))?;
            return Ok(());
        }
        for (index, line) in field.value.lines().enumerate() {
            let prefix = if index == 0 { first } else { rest };
            writeln!(w, "{}{}", prefix, line)?;
        }
        Ok(())
    }

    fn write_item(&self, w: &mut dyn Write, depth: usize, item: &RenderedItem) -> Result<(), RenderError> {
        let mut fields = item.present();
        let Some(first) = fields.next() else {
            return Ok(());
        };
        let bullet = format!("{}- ", INDENT.repeat(depth));
        self.write_lines(w, &bullet, &INDENT.repeat(depth + 1), first)?;
        for field in fields {
            self.write_field(w, depth + 1, field)?;
        }
        Ok(())
    }

    fn write_section(&self, w: &mut dyn Write, depth: usize, section: &RenderedSection) -> Result<(), RenderError> {
        let title = if section.name.is_empty() {
            section.id.as_str()
        } else {
            section.name.as_str()
        };
        writeln!(w, "{}## {}", INDENT.repeat(depth), title)?;
        for item in &section.items {
            self.write_item(w, depth, item)?;
        }
        writeln!(w)?;
        Ok(())
    }

    fn write_node(&self, w: &mut dyn Write, depth: usize, node: &RenderNode) -> Result<(), RenderError> {
        match node {
            RenderNode::Field(field) => self.write_field(w, depth, field)?,
            RenderNode::Image(image) => writeln!(
                w,
                "{}[photo {} {}px {:?}]",
                INDENT.repeat(depth),
                image.src,
                image.size,
                image.shape
            )?,
            RenderNode::List(list) => {
                for item in &list.items {
                    let line = item.present().map(|f| self.field_text(f)).join(" · ");
                    if !line.is_empty() {
                        writeln!(w, "{}{}", INDENT.repeat(depth), line)?;
                    }
                }
            }
            RenderNode::Group(group) => {
                for child in &group.children {
                    self.write_node(w, depth, child)?;
                }
                writeln!(w)?;
            }
            RenderNode::Section(section) => self.write_section(w, depth, section)?,
        }
        Ok(())
    }
}

impl DocumentRenderer for TextRenderer {
    fn name(&self) -> &str {
        "text"
    }

    fn render(&self, tree: &RenderTree, writer: &mut dyn Write) -> Result<(), RenderError> {
        let multi_page = tree.pages.len() > 1;
        for (index, page) in tree.pages.iter().enumerate() {
            if multi_page {
                writeln!(writer, "=== Page {} ===", index + 1)?;
            }
            let multi_column = page.columns.len() > 1;
            for column in &page.columns {
                if column.nodes.is_empty() {
                    continue;
                }
                let depth = usize::from(multi_column);
                if multi_column {
                    writeln!(writer, "[{}]", column.role)?;
                }
                for node in &column.nodes {
                    self.write_node(writer, depth, node)?;
                }
            }
        }
        log::debug!("Text rendering of '{}' complete", tree.template);
        Ok(())
    }
}
