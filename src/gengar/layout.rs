//! Page layout read from `metadata.layout`: pages of columns of section ids.
use serde_json::Value;
use vitae_jpath::resolve_str;

/// Index of the main column in a layout page.
pub const MAIN_COLUMN: usize = 0;
/// Index of the sidebar column in a layout page.
pub const SIDEBAR_COLUMN: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageLayout {
    pub main: Vec<String>,
    pub sidebar: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pages: Vec<PageLayout>,
}

impl Layout {
    /// Reads the layout from the document. Without a usable layout, every
    /// section under `sections` goes into the main column of a single page,
    /// in document order.
    pub fn from_document(document: &Value) -> Self {
        match resolve_str(document, "metadata.layout").value() {
            Some(raw) => match serde_json::from_value::<Vec<Vec<Vec<String>>>>(raw.clone()) {
                Ok(pages) if !pages.is_empty() => return Self::from_pages(pages),
                Ok(_) => log::debug!("metadata.layout is empty, using document order"),
                Err(e) => log::warn!("Ignoring malformed metadata.layout: {}", e),
            },
            None => log::debug!("No metadata.layout, using document order"),
        }
        Self::document_order(document)
    }

    fn from_pages(pages: Vec<Vec<Vec<String>>>) -> Self {
        let pages = pages
            .into_iter()
            .map(|columns| {
                let mut page = PageLayout::default();
                for (index, ids) in columns.into_iter().enumerate() {
                    // Anything past the sidebar is folded into the main column.
                    match index {
                        SIDEBAR_COLUMN => page.sidebar.extend(ids),
                        _ => page.main.extend(ids),
                    }
                }
                page
            })
            .collect();
        Self { pages }
    }

    fn document_order(document: &Value) -> Self {
        let main = match resolve_str(document, "sections").value() {
            Some(Value::Object(sections)) => sections.keys().cloned().collect(),
            _ => Vec::new(),
        };
        Self {
            pages: vec![PageLayout {
                main,
                sidebar: Vec::new(),
            }],
        }
    }

    /// Always at least one page.
    pub fn pages(&self) -> &[PageLayout] {
        &self.pages
    }
}
