//! JSON template engine built on field paths.
//!
//! This crate holds the executor that turns compiled field specs into
//! rendered fields, items and sections, the formatter registry those specs
//! refer to, and a parser for declarative JSON template definitions.

pub mod ast;
pub mod compiler;
pub mod error;
pub mod executor;
pub mod functions;
pub mod processor;

pub use ast::{JsonTemplateFile, SectionTemplate};
pub use compiler::{CompiledField, Compiler};
pub use error::JsonTemplateError;
pub use executor::{SectionData, TemplateExecutor, MULTI_PATH_SEPARATOR};
pub use functions::{FormatContext, FormatFunction, FormatterRegistry, DEFAULT_FORMATTER};
pub use processor::{CompiledJsonTemplate, JsonParser};
