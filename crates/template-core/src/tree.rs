//! The render tree: what a template decided to show, before anything is drawn.
//!
//! Every node here exists only because its data was present and non-blank.
//! Emitters walk the tree and decide how to draw it.

use crate::field::FieldKind;
use indexmap::IndexMap;
use serde::Serialize;
use vitae_types::{Color, ItemId, SectionId};

/// Marks used for a level indicator unless configured otherwise.
pub const DEFAULT_LEVEL_MARKS: usize = 5;

/// Most marks a level indicator may be configured with: one per level step.
pub const MAX_LEVEL_MARKS: usize = 10;

/// The upper bound of the level scale.
pub const LEVEL_SCALE: f64 = 10.0;

/// A 0..10 level drawn as a row of discrete marks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelIndicator {
    pub level: f64,
    pub filled: usize,
    pub total: usize,
}

impl LevelIndicator {
    /// Builds the indicator for `level` out of `total` marks. Returns `None`
    /// when there is nothing to draw (zero, negative or non-finite level, or
    /// no marks at all).
    pub fn new(level: f64, total: usize) -> Option<Self> {
        if !level.is_finite() || level <= 0.0 || total == 0 {
            return None;
        }
        let filled = ((level * total as f64) / LEVEL_SCALE).floor() as usize;
        Some(Self {
            level,
            filled: filled.min(total),
            total,
        })
    }

    /// Whether the mark at the 0-based `index` is filled.
    pub fn is_filled(&self, index: usize) -> bool {
        index < self.filled
    }

    /// Fill state of each mark, in drawing order.
    pub fn marks(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.total).map(|i| self.is_filled(i))
    }
}

/// A field that survived blank suppression, with its display value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedField {
    pub name: String,
    pub value: String,
    pub kind: FieldKind,
    /// Link target for link, email and phone fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<LevelIndicator>,
}

impl RenderedField {
    pub fn text(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            kind: FieldKind::Text,
            link: None,
            level: None,
        }
    }
}

/// One list item: every configured field, in configuration order, mapped to
/// its rendering or to `None` when it was suppressed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedItem {
    pub id: ItemId,
    pub fields: IndexMap<String, Option<RenderedField>>,
}

impl RenderedItem {
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            fields: IndexMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&RenderedField> {
        self.fields.get(name).and_then(Option::as_ref)
    }

    /// Rendered fields in configuration order, skipping suppressed ones.
    pub fn present(&self) -> impl Iterator<Item = &RenderedField> {
        self.fields.values().flatten()
    }

    /// True when every field was suppressed.
    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}

/// Presentation hints a template attaches to a section.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStyle {
    /// Tighter spacing between items.
    pub compact: bool,
    /// Stronger weight for item titles.
    pub emphasized_title: bool,
    /// Color for level marks and other accents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedSection {
    pub id: SectionId,
    pub name: String,
    pub columns: u32,
    pub style: SectionStyle,
    pub items: Vec<RenderedItem>,
}

/// A keyed list outside of any section, such as social profiles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedList {
    pub role: String,
    pub items: Vec<RenderedItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoShape {
    #[default]
    Square,
    Rounded,
    Circle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedImage {
    pub src: String,
    pub alt: String,
    pub size: u32,
    pub shape: PhotoShape,
    pub grayscale: bool,
    pub border: bool,
}

/// A named container with optional colors, e.g. the masthead.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedGroup {
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<Color>,
    pub children: Vec<RenderNode>,
}

impl RenderedGroup {
    pub fn new(role: &str) -> Self {
        Self {
            role: role.to_string(),
            background: None,
            icon_color: None,
            children: Vec::new(),
        }
    }

    /// Appends a field node if the field was rendered.
    pub fn push_field(&mut self, field: Option<RenderedField>) {
        if let Some(field) = field {
            self.children.push(RenderNode::Field(field));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "node", rename_all = "camelCase")]
pub enum RenderNode {
    Field(RenderedField),
    Image(RenderedImage),
    List(RenderedList),
    Group(RenderedGroup),
    Section(RenderedSection),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedColumn {
    pub role: String,
    pub nodes: Vec<RenderNode>,
}

impl RenderedColumn {
    pub fn new(role: &str) -> Self {
        Self {
            role: role.to_string(),
            nodes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RenderedPage {
    pub columns: Vec<RenderedColumn>,
}

/// The output of one render pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RenderTree {
    pub template: String,
    pub pages: Vec<RenderedPage>,
}

impl RenderTree {
    /// All sections in page and column order.
    pub fn sections(&self) -> impl Iterator<Item = &RenderedSection> {
        self.pages
            .iter()
            .flat_map(|p| p.columns.iter())
            .flat_map(|c| c.nodes.iter())
            .filter_map(|n| match n {
                RenderNode::Section(s) => Some(s),
                _ => None,
            })
    }

    pub fn section(&self, id: &str) -> Option<&RenderedSection> {
        self.sections().find(|s| s.id.as_str() == id)
    }
}
