use serde::{Deserialize, Serialize};
use std::sync::Arc;
use vitae_render_core::DocumentRenderer;
use vitae_render_text::{JsonRenderer, TextRenderer};
use vitae_template_core::RenderSettings;
use vitae_types::Theme;

/// The emitter a pipeline hands its render tree to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Indented plain-text outline. (Default)
    #[default]
    Text,
    /// Pretty-printed render tree.
    Json,
    /// Render tree on a single line.
    JsonCompact,
}

impl OutputFormat {
    pub(crate) fn renderer(self) -> Arc<dyn DocumentRenderer> {
        match self {
            OutputFormat::Text => Arc::new(TextRenderer::new()),
            OutputFormat::Json => Arc::new(JsonRenderer::new(true)),
            OutputFormat::JsonCompact => Arc::new(JsonRenderer::new(false)),
        }
    }
}

/// Settings that win over whatever the document's metadata says.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsOverrides {
    pub date_format: Option<String>,
    pub level_marks: Option<usize>,
    pub default_scheme: Option<String>,
    pub location_separator: Option<String>,
    pub theme: Option<Theme>,
}

impl SettingsOverrides {
    pub fn apply(&self, settings: &mut RenderSettings) {
        if let Some(format) = &self.date_format {
            settings.date_format = format.clone();
        }
        if let Some(marks) = self.level_marks {
            settings.level_marks = marks;
        }
        if let Some(scheme) = &self.default_scheme {
            settings.default_scheme = scheme.clone();
        }
        if let Some(separator) = &self.location_separator {
            settings.location_separator = separator.clone();
        }
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_types::Color;

    #[test]
    fn overrides_replace_only_what_is_set() {
        let mut settings = RenderSettings {
            date_format: "YYYY".into(),
            ..RenderSettings::default()
        };
        let overrides = SettingsOverrides {
            level_marks: Some(10),
            theme: Some(Theme {
                primary: Color::gray(0x33),
                ..Theme::default()
            }),
            ..SettingsOverrides::default()
        };
        overrides.apply(&mut settings);

        assert_eq!(settings.date_format, "YYYY");
        assert_eq!(settings.level_marks, 10);
        assert_eq!(settings.theme.primary, Color::gray(0x33));
        assert_eq!(settings.default_scheme, "http://");
    }
}
