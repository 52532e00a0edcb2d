use crate::text::scalar_text;
use itertools::Itertools;
use serde_json::Value;

/// Location sub-fields, in display order.
pub const LOCATION_FIELDS: [&str; 5] = ["address", "city", "region", "postalCode", "country"];

/// Joins the present location parts with `separator`, skipping absent and
/// blank ones. Returns "" when nothing is present.
pub fn format_location(location: Option<&Value>, separator: &str) -> String {
    let Some(Value::Object(parts)) = location else {
        return String::new();
    };
    LOCATION_FIELDS
        .iter()
        .filter_map(|key| parts.get(*key).and_then(scalar_text))
        .filter(|part| !part.trim().is_empty())
        .join(separator)
}
