//! Defines the registry and built-in implementations for field formatters.
use crate::error::JsonTemplateError;
use serde_json::Value;
use std::collections::HashMap;
use vitae_format::{display_text, format_date, format_location, join_keywords, normalize_url};
use vitae_template_core::RenderSettings;

/// Everything a formatter may consult besides the value itself.
pub struct FormatContext<'a> {
    pub settings: &'a RenderSettings,
    /// The node the field path was resolved against (document or list item).
    pub context_node: &'a Value,
}

/// The signature for a field formatter implementation.
pub type FormatFunction =
    fn(f_ctx: &FormatContext, value: &Value) -> Result<String, JsonTemplateError>;

/// Formatter used when a field names none.
pub const DEFAULT_FORMATTER: &str = "text";

/// A registry to hold all available formatters.
#[derive(Clone)]
pub struct FormatterRegistry {
    functions: HashMap<String, FormatFunction>,
}

impl FormatterRegistry {
    /// Creates a new, empty formatter registry.
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Registers a new formatter, replacing any existing one with that name.
    pub fn register(&mut self, name: &str, func: FormatFunction) {
        self.functions.insert(name.to_lowercase(), func);
    }

    /// Finds a formatter by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<FormatFunction> {
        self.functions.get(&name.to_lowercase()).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }
}

// --- Built-in Formatter Implementations ---

fn text(_f_ctx: &FormatContext, value: &Value) -> Result<String, JsonTemplateError> {
    Ok(display_text(value))
}

/// Date ranges (`{start, end}` objects) are formatted as dates, everything
/// else as plain text.
fn auto(f_ctx: &FormatContext, value: &Value) -> Result<String, JsonTemplateError> {
    match value {
        Value::Object(map) if map.contains_key("start") => date(f_ctx, value),
        other => Ok(display_text(other)),
    }
}

fn date(f_ctx: &FormatContext, value: &Value) -> Result<String, JsonTemplateError> {
    Ok(format_date(Some(value), &f_ctx.settings.date_format))
}

fn location(f_ctx: &FormatContext, value: &Value) -> Result<String, JsonTemplateError> {
    Ok(format_location(Some(value), &f_ctx.settings.location_separator))
}

fn url(f_ctx: &FormatContext, value: &Value) -> Result<String, JsonTemplateError> {
    Ok(normalize_url(&display_text(value), &f_ctx.settings.default_scheme))
}

fn keywords(_f_ctx: &FormatContext, value: &Value) -> Result<String, JsonTemplateError> {
    Ok(join_keywords(value, vitae_format::DEFAULT_SEPARATOR))
}

fn upper(_f_ctx: &FormatContext, value: &Value) -> Result<String, JsonTemplateError> {
    Ok(display_text(value).to_uppercase())
}

fn lower(_f_ctx: &FormatContext, value: &Value) -> Result<String, JsonTemplateError> {
    Ok(display_text(value).to_lowercase())
}

impl Default for FormatterRegistry {
    /// Creates a new registry populated with all built-in formatters.
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(DEFAULT_FORMATTER, text);
        registry.register("auto", auto);
        registry.register("date", date);
        registry.register("location", location);
        registry.register("url", url);
        registry.register("keywords", keywords);
        registry.register("upper", upper);
        registry.register("lower", lower);
        registry
    }
}
