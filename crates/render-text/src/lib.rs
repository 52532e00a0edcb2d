//! Reference emitters for render trees: an indented plain-text outline for
//! terminals and a JSON dump for downstream markup renderers.

mod json;
mod text;

pub use json::JsonRenderer;
pub use text::TextRenderer;
