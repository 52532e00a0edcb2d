//! Pure formatting helpers used by field formatters.
//!
//! Every function here is total: bad or missing input produces an empty
//! string, never an error, so a single malformed value can only ever hide
//! its own field.

pub mod contact;
pub mod date;
pub mod location;
pub mod text;
pub mod url;

pub use contact::{mailto, tel};
pub use date::{format_date, format_date_range, format_date_str, parse_date, PRESENT};
pub use location::{format_location, LOCATION_FIELDS};
pub use text::{display_text, join_keywords};
pub use url::{has_scheme, normalize_url, DEFAULT_SCHEME};

/// Separator used between location parts and keywords.
pub const DEFAULT_SEPARATOR: &str = ", ";
