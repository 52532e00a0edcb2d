use crate::color::{Color, Contrast};
use serde::{Deserialize, Serialize};

/// Alpha applied to the primary color behind the masthead summary.
pub const SUMMARY_BACKGROUND_ALPHA: f32 = 0.15;

/// The resume theme, as stored under `metadata.theme`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub primary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::white(),
            text: Color::rgb(0, 0, 0),
            primary: Color::rgb(0xf4, 0x43, 0x36),
        }
    }
}

impl Theme {
    /// Text tone for content drawn on top of the primary color.
    pub fn primary_contrast(&self) -> Contrast {
        self.primary.contrast()
    }

    /// Color for icons drawn on the primary-colored sidebar.
    pub fn icon_color(&self) -> Color {
        match self.primary_contrast() {
            Contrast::Dark => self.text,
            Contrast::Light => self.background,
        }
    }

    /// Tinted background behind the summary block.
    pub fn summary_background(&self) -> Color {
        self.primary.with_alpha(SUMMARY_BACKGROUND_ALPHA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_color_switches_with_primary() {
        let mut theme = Theme::default();
        assert_eq!(theme.icon_color(), theme.background);

        theme.primary = Color::rgb(0xff, 0xeb, 0x3b);
        assert_eq!(theme.icon_color(), theme.text);
    }

    #[test]
    fn partial_theme_fills_defaults() {
        let theme: Theme = serde_json::from_str(r##"{ "primary": "#03a9f4" }"##).unwrap();
        assert_eq!(theme.primary, Color::rgb(0x03, 0xa9, 0xf4));
        assert_eq!(theme.background, Color::white());
        assert_eq!(theme.summary_background().a, SUMMARY_BACKGROUND_ALPHA);
    }
}
