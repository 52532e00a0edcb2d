pub mod color;
pub mod ids;
pub mod theme;

pub use color::{Color, Contrast};
pub use ids::{ItemId, SectionId};
pub use theme::Theme;
