//! Core layout-emission abstractions.
//!
//! A template decides *what* to show and produces a `RenderTree`; a
//! `DocumentRenderer` decides *how* to draw it. Emitters are swappable and
//! never see the source document.

mod error;
mod traits;

pub use error::RenderError;
pub use traits::DocumentRenderer;
