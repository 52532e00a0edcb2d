use crate::error::RenderError;
use std::io::Write;
use vitae_template_core::RenderTree;

/// A trait for layout emitters, turning a render tree into bytes.
pub trait DocumentRenderer: Send + Sync {
    /// Short name used for selection, e.g. `text` or `json`.
    fn name(&self) -> &str;

    fn render(&self, tree: &RenderTree, writer: &mut dyn Write) -> Result<(), RenderError>;

    /// Renders into an in-memory string.
    fn render_to_string(&self, tree: &RenderTree) -> Result<String, RenderError> {
        let mut buffer = Vec::new();
        self.render(tree, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
