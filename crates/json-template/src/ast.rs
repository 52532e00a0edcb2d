//! Serde model of a JSON template definition file.
use indexmap::IndexMap;
use serde::Deserialize;
use vitae_jpath::FieldPath;
use vitae_template_core::FieldSpec;

fn default_name() -> String {
    "json".to_string()
}

/// The top-level template file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JsonTemplateFile {
    #[serde(default = "default_name")]
    pub name: String,
    /// Fields rendered against the document root, in a `header` group.
    #[serde(default)]
    pub header: Vec<FieldSpec>,
    /// Item fields for sections that do not list their own.
    #[serde(default)]
    pub item_fields: Vec<FieldSpec>,
    /// Sections in display order. When empty, every section found under
    /// `sections` in the document is rendered with `item_fields`.
    #[serde(default)]
    pub sections: IndexMap<String, SectionTemplate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SectionTemplate {
    /// Where the section lives; defaults to `sections.<id>`.
    #[serde(default)]
    pub path: Option<FieldPath>,
    #[serde(default)]
    pub fields: Option<Vec<FieldSpec>>,
    #[serde(default)]
    pub compact: bool,
    #[serde(default)]
    pub emphasized_title: bool,
}
