//! The masthead: identity and contact details in the sidebar, the summary
//! across the top of the main column.
use serde_json::Value;
use vitae_jpath::{FieldPath, resolve_str};
use vitae_json_template::{CompiledField, Compiler, TemplateExecutor};
use vitae_template_core::{
    FieldKind, FieldSpec, PhotoShape, RenderNode, RenderedGroup, RenderedImage, TemplateError,
};

pub const DEFAULT_PHOTO_SIZE: u32 = 128;

#[derive(Debug, Clone)]
pub struct Masthead {
    sidebar_fields: Vec<CompiledField>,
    profiles_path: FieldPath,
    profile_fields: Vec<CompiledField>,
    summary: CompiledField,
}

impl Masthead {
    pub fn new(compiler: &Compiler) -> Result<Self, TemplateError> {
        let sidebar = vec![
            FieldSpec::parse("name", "basics.name")?,
            FieldSpec::parse("headline", "basics.headline")?,
            FieldSpec::parse("location", "basics.location")?.with_formatter("location"),
            FieldSpec::parse("birthdate", "basics.birthdate")?.with_formatter("date"),
            FieldSpec::parse("email", "basics.email")?.with_kind(FieldKind::Email),
            FieldSpec::parse("phone", "basics.phone")?.with_kind(FieldKind::Phone),
            FieldSpec::parse("website", "basics.website")?.with_kind(FieldKind::Link),
        ];
        let profiles = vec![
            FieldSpec::parse("username", "username")?.linked_to("url")?,
            FieldSpec::parse("network", "network")?,
        ];
        let summary = FieldSpec::parse("summary", "basics.summary")?.with_kind(FieldKind::Markdown);

        Ok(Self {
            sidebar_fields: compiler.compile(&sidebar)?,
            profiles_path: FieldPath::parse("basics.profiles")?,
            profile_fields: compiler.compile(&profiles)?,
            summary: compiler.compile_field(&summary)?,
        })
    }

    /// The profile photo, when it is switched on and has a source.
    pub fn photo(&self, document: &Value) -> Option<RenderedImage> {
        let photo = resolve_str(document, "basics.photo").value()?;
        let visible = photo.get("visible").and_then(Value::as_bool).unwrap_or(false);
        let src = photo.get("url").and_then(Value::as_str).unwrap_or_default();
        if !visible || src.is_empty() {
            return None;
        }

        let filters = photo.get("filters");
        let filter = |key: &str| filters.and_then(|f| f.get(key));
        let size = filter("size")
            .and_then(Value::as_u64)
            .and_then(|s| u32::try_from(s).ok())
            .unwrap_or(DEFAULT_PHOTO_SIZE);
        let shape = match filter("shape").and_then(Value::as_str) {
            Some("rounded") => PhotoShape::Rounded,
            Some("circle") => PhotoShape::Circle,
            _ => PhotoShape::Square,
        };

        Some(RenderedImage {
            src: src.to_string(),
            alt: resolve_str(document, "basics.name")
                .as_str()
                .unwrap_or_default()
                .to_string(),
            size,
            shape,
            grayscale: filter("grayscale").and_then(Value::as_bool).unwrap_or(false),
            border: filter("border").and_then(Value::as_bool).unwrap_or(false),
        })
    }

    /// Photo, identity, contact details and profiles, with icons tinted to
    /// stand out against the primary color.
    pub fn sidebar(&self, exec: &TemplateExecutor, document: &Value) -> Option<RenderedGroup> {
        let mut group = RenderedGroup::new("masthead-sidebar");
        group.icon_color = Some(exec.settings().theme.icon_color());

        if let Some(photo) = self.photo(document) {
            group.children.push(RenderNode::Image(photo));
        }
        for field in &self.sidebar_fields {
            group.push_field(exec.render_field(document, field));
        }
        if let Some(profiles) = exec.render_list("profiles", document, &self.profiles_path, &self.profile_fields) {
            group.children.push(RenderNode::List(profiles));
        }

        (!group.is_empty()).then_some(group)
    }

    /// The summary on a tinted background, or nothing when it is blank.
    pub fn main(&self, exec: &TemplateExecutor, document: &Value) -> Option<RenderedGroup> {
        let summary = exec.render_field(document, &self.summary)?;
        let mut group = RenderedGroup::new("masthead-main");
        group.background = Some(exec.settings().theme.summary_background());
        group.children.push(RenderNode::Field(summary));
        Some(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vitae_json_template::FormatterRegistry;
    use vitae_template_core::RenderSettings;
    use vitae_types::{Color, Theme};

    fn masthead() -> Masthead {
        let registry = FormatterRegistry::default();
        Masthead::new(&Compiler::new(&registry)).unwrap()
    }

    fn basics(photo: Value) -> Value {
        json!({
            "basics": {
                "name": "Ada Lovelace",
                "headline": "",
                "email": "ada@example.com",
                "website": "ada.dev",
                "location": { "city": "London", "country": "" },
                "birthdate": "1815-12-10",
                "photo": photo,
                "profiles": [
                    { "id": "p1", "network": "GitHub", "username": "ada", "url": "github.com/ada" }
                ]
            }
        })
    }

    #[test]
    fn photo_requires_visibility_and_source() {
        let m = masthead();
        let hidden = basics(json!({ "visible": false, "url": "https://img/ada.png" }));
        assert!(m.photo(&hidden).is_none());

        let no_src = basics(json!({ "visible": true, "url": "" }));
        assert!(m.photo(&no_src).is_none());

        let shown = basics(json!({
            "visible": true,
            "url": "https://img/ada.png",
            "filters": { "size": 96, "shape": "circle", "grayscale": true }
        }));
        let photo = m.photo(&shown).unwrap();
        assert_eq!(photo.size, 96);
        assert_eq!(photo.shape, PhotoShape::Circle);
        assert!(photo.grayscale);
        assert!(!photo.border);
        assert_eq!(photo.alt, "Ada Lovelace");
    }

    #[test]
    fn sidebar_skips_blank_details() {
        let settings = RenderSettings::default();
        let exec = TemplateExecutor::new(&settings);
        let group = masthead().sidebar(&exec, &basics(json!({ "visible": false }))).unwrap();

        let names: Vec<&str> = group
            .children
            .iter()
            .filter_map(|n| match n {
                RenderNode::Field(f) => Some(f.name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(names, vec!["name", "location", "birthdate", "email", "website"]);

        let Some(RenderNode::List(profiles)) = group.children.last() else {
            panic!("expected profiles list");
        };
        let username = profiles.items[0].get("username").unwrap();
        assert_eq!(username.link.as_deref(), Some("http://github.com/ada"));
        assert_eq!(profiles.items[0].id.as_str(), "p1");
    }

    #[test]
    fn icon_color_follows_primary_contrast() {
        let light_primary = RenderSettings {
            theme: Theme {
                primary: Color::gray(0xee),
                ..Theme::default()
            },
            ..RenderSettings::default()
        };
        let exec = TemplateExecutor::new(&light_primary);
        let group = masthead().sidebar(&exec, &basics(json!(null))).unwrap();
        assert_eq!(group.icon_color, Some(light_primary.theme.text));
    }

    #[test]
    fn summary_gets_tinted_background() {
        let settings = RenderSettings::default();
        let exec = TemplateExecutor::new(&settings);
        let m = masthead();

        assert!(m.main(&exec, &json!({ "basics": { "summary": "" } })).is_none());

        let group = m
            .main(&exec, &json!({ "basics": { "summary": "Wrote the first program." } }))
            .unwrap();
        assert_eq!(group.background, Some(settings.theme.summary_background()));
        assert_eq!(group.children.len(), 1);
    }
}
