//! Resolves compiled fields against data and decides what gets rendered.
use crate::compiler::CompiledField;
use crate::functions::FormatContext;
use itertools::Itertools;
use serde_json::Value;
use vitae_format::{display_text, mailto, normalize_url, tel};
use vitae_jpath::{FieldPath, Resolved, resolve};
use vitae_template_core::{
    FieldKind, LevelIndicator, RenderSettings, RenderedField, RenderedItem, RenderedList,
    RenderedSection, SectionStyle,
};
use vitae_types::{ItemId, SectionId};

/// Joins the renderings of a multi-path field.
pub const MULTI_PATH_SEPARATOR: &str = " / ";

/// A resume section as found in the document, borrowed for one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionData<'a> {
    pub id: SectionId,
    pub name: String,
    pub visible: bool,
    pub columns: u32,
    pub items: &'a [Value],
}

impl<'a> SectionData<'a> {
    /// Reads the section stored at `path`. `fallback_id` is used when the
    /// section carries no `id`. Returns `None` when nothing is there.
    pub fn at(document: &'a Value, path: &FieldPath, fallback_id: &str) -> Option<Self> {
        let section = resolve(document, path).value()?;
        Some(Self::from_value(section, fallback_id))
    }

    pub fn from_value(section: &'a Value, fallback_id: &str) -> Self {
        let id = section
            .get("id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .unwrap_or(fallback_id);
        let items = section
            .get("items")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        let columns = section
            .get("columns")
            .and_then(Value::as_u64)
            .and_then(|c| u32::try_from(c).ok())
            .unwrap_or(1)
            .max(1);

        Self {
            id: SectionId::new(id),
            name: section
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            visible: section.get("visible").and_then(Value::as_bool).unwrap_or(false),
            columns,
            items,
        }
    }
}

/// Executes compiled fields against documents and list items.
///
/// Stateless apart from the borrowed settings; one executor can serve any
/// number of documents.
pub struct TemplateExecutor<'a> {
    settings: &'a RenderSettings,
}

impl<'a> TemplateExecutor<'a> {
    pub fn new(settings: &'a RenderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RenderSettings {
        self.settings
    }

    /// Renders one field against `context`, or `None` when it is absent,
    /// blank, or formats to nothing.
    pub fn render_field(&self, context: &Value, field: &CompiledField) -> Option<RenderedField> {
        if field.spec.kind.is_magnitude() {
            return self.render_magnitude(context, field);
        }

        // Each part is non-empty, so an empty join means every path was blank.
        let value = field
            .spec
            .path
            .as_slice()
            .iter()
            .filter_map(|path| self.format_path(context, path, field))
            .join(MULTI_PATH_SEPARATOR);
        if value.is_empty() {
            return None;
        }

        let link = match field.spec.kind {
            FieldKind::Link => match &field.spec.link_path {
                Some(link_path) => resolve(context, link_path)
                    .value()
                    .map(|target| normalize_url(&display_text(target), &self.settings.default_scheme)),
                None => Some(normalize_url(&value, &self.settings.default_scheme)),
            },
            FieldKind::Email => Some(mailto(&value)),
            FieldKind::Phone => Some(tel(&value)),
            _ => None,
        }
        .filter(|target| !target.is_empty());

        Some(RenderedField {
            name: field.spec.name.clone(),
            value,
            kind: field.spec.kind,
            link,
            level: None,
        })
    }

    fn format_path(&self, context: &Value, path: &FieldPath, field: &CompiledField) -> Option<String> {
        let resolved = resolve(context, path);
        if resolved.is_blank() {
            return None;
        }
        let value = resolved.value()?;
        self.apply_formatter(context, value, field)
    }

    fn apply_formatter(&self, context: &Value, value: &Value, field: &CompiledField) -> Option<String> {
        let f_ctx = FormatContext {
            settings: self.settings,
            context_node: context,
        };
        match (field.formatter)(&f_ctx, value) {
            Ok(text) if text.is_empty() => None,
            Ok(text) => Some(text),
            Err(e) => {
                log::warn!(
                    "Formatter '{}' failed on field '{}', omitting it: {}",
                    field.formatter_name,
                    field.name(),
                    e
                );
                None
            }
        }
    }

    /// Magnitude fields use the first path that yields a positive number.
    fn render_magnitude(&self, context: &Value, field: &CompiledField) -> Option<RenderedField> {
        let (value, level) = field.spec.path.as_slice().iter().find_map(|path| {
            let value = resolve(context, path).value()?;
            let level = magnitude_of(value)?;
            Some((value, level))
        })?;
        let indicator = LevelIndicator::new(level, self.settings.level_marks)?;

        let display = if field.spec.formatter.is_some() {
            self.apply_formatter(context, value, field)
        } else {
            Some(display_text(value))
        };

        Some(RenderedField {
            name: field.spec.name.clone(),
            value: display.unwrap_or_default(),
            kind: FieldKind::Magnitude,
            link: None,
            level: Some(indicator),
        })
    }

    /// Renders every field of one list item, keyed by the item's `id`.
    pub fn render_item(&self, item: &Value, index: usize, fields: &[CompiledField]) -> RenderedItem {
        let mut rendered = RenderedItem::new(item_id(item, index));
        for field in fields {
            rendered
                .fields
                .insert(field.spec.name.clone(), self.render_field(item, field));
        }
        rendered
    }

    pub fn render_items(&self, items: &[Value], fields: &[CompiledField]) -> Vec<RenderedItem> {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| self.render_item(item, index, fields))
            .collect()
    }

    /// Renders a section, or `None` when it is hidden or has no items.
    /// Visibility is checked before any item is looked at.
    pub fn render_section(
        &self,
        section: &SectionData,
        fields: &[CompiledField],
        style: SectionStyle,
    ) -> Option<RenderedSection> {
        if !section.visible {
            log::debug!("Section '{}' is hidden, skipping", section.id);
            return None;
        }
        if section.items.is_empty() {
            log::debug!("Section '{}' has no items, skipping", section.id);
            return None;
        }

        Some(RenderedSection {
            id: section.id.clone(),
            name: section.name.clone(),
            columns: section.columns,
            style,
            items: self.render_items(section.items, fields),
        })
    }

    /// Renders a keyed list found at `path`, or `None` when it is empty.
    pub fn render_list(
        &self,
        role: &str,
        context: &Value,
        path: &FieldPath,
        fields: &[CompiledField],
    ) -> Option<RenderedList> {
        let items = match resolve(context, path) {
            Resolved::Present(Value::Array(items)) if !items.is_empty() => items,
            _ => return None,
        };
        Some(RenderedList {
            role: role.to_string(),
            items: self.render_items(items, fields),
        })
    }
}

fn item_id(item: &Value, index: usize) -> ItemId {
    match item.get("id") {
        Some(Value::String(id)) if !id.is_empty() => ItemId::new(id.as_str()),
        Some(Value::Number(n)) => ItemId::from(n.to_string()),
        _ => ItemId::positional(index),
    }
}

fn magnitude_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
