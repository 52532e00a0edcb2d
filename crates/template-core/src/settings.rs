use crate::tree::DEFAULT_LEVEL_MARKS;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use vitae_jpath::resolve_str;
use vitae_types::Theme;

pub const DEFAULT_DATE_FORMAT: &str = "MMMM YYYY";

/// Everything a render pass needs besides the document itself.
///
/// Passed explicitly to every template; nothing is read from global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderSettings {
    /// dayjs-style date pattern, e.g. `MMMM YYYY`.
    pub date_format: String,
    /// Number of marks in a level indicator.
    pub level_marks: usize,
    /// Scheme prepended to links without one.
    pub default_scheme: String,
    pub location_separator: String,
    pub theme: Theme,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            level_marks: DEFAULT_LEVEL_MARKS,
            default_scheme: "http://".to_string(),
            location_separator: ", ".to_string(),
            theme: Theme::default(),
        }
    }
}

impl RenderSettings {
    /// Reads `metadata.date.format` and `metadata.theme` from the document,
    /// keeping defaults for anything missing or malformed.
    pub fn from_document(document: &Value) -> Self {
        let mut settings = Self::default();

        if let Some(format) = resolve_str(document, "metadata.date.format").as_str() {
            if !format.trim().is_empty() {
                settings.date_format = format.to_string();
            }
        }

        if let Some(theme) = resolve_str(document, "metadata.theme").value() {
            match serde_json::from_value::<Theme>(theme.clone()) {
                Ok(theme) => settings.theme = theme,
                Err(e) => log::warn!("Ignoring malformed metadata.theme: {}", e),
            }
        }

        settings
    }
}
