use std::io::Write;
use vitae_render_core::{DocumentRenderer, RenderError};
use vitae_template_core::RenderTree;

/// Serializes the render tree as JSON.
#[derive(Debug, Clone, Copy)]
pub struct JsonRenderer {
    pretty: bool,
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonRenderer {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl DocumentRenderer for JsonRenderer {
    fn name(&self) -> &str {
        "json"
    }

    fn render(&self, tree: &RenderTree, writer: &mut dyn Write) -> Result<(), RenderError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, tree)?;
        } else {
            serde_json::to_writer(&mut *writer, tree)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_template_core::{RenderNode, RenderedColumn, RenderedField, RenderedPage};

    #[test]
    fn emits_tagged_nodes() {
        let mut column = RenderedColumn::new("main");
        column.nodes.push(RenderNode::Field(RenderedField::text("name", "Ada")));
        let tree = RenderTree {
            template: "test".into(),
            pages: vec![RenderedPage { columns: vec![column] }],
        };

        let out = JsonRenderer::new(false).render_to_string(&tree).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let node = &value["pages"][0]["columns"][0]["nodes"][0];
        assert_eq!(node["type"], "field");
        assert_eq!(node["node"]["value"], "Ada");
        assert_eq!(node["node"]["kind"], "text");
        assert!(node["node"].get("link").is_none());
    }
}
