//! Date parsing and dayjs-style pattern formatting.
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Shown in place of a missing end date in a range.
pub const PRESENT: &str = "Present";

/// Pattern tokens, longest first within each letter.
const TOKENS: [&str; 10] = ["YYYY", "YY", "MMMM", "MMM", "MM", "M", "DD", "D", "dddd", "ddd"];

/// Parses the date shapes found in resume data: `YYYY`, `YYYY-MM`,
/// `YYYY-MM-DD`, `YYYY/MM/DD` and ISO 8601 / RFC 3339 date-times.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y/%m/%d") {
        return Some(date);
    }

    let mut parts = raw.splitn(2, '-');
    let year = parse_year(parts.next()?)?;
    match parts.next() {
        None => NaiveDate::from_ymd_opt(year, 1, 1),
        Some(month) if (1..=2).contains(&month.len()) => {
            let month = month.parse::<u32>().ok()?;
            NaiveDate::from_ymd_opt(year, month, 1)
        }
        Some(_) => None,
    }
}

fn parse_year(raw: &str) -> Option<i32> {
    if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
        raw.parse().ok()
    } else {
        None
    }
}

fn date_from_value(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(s) => parse_date(s),
        Value::Number(n) => n
            .as_i64()
            .and_then(|y| i32::try_from(y).ok())
            .filter(|y| (1000..=9999).contains(y))
            .and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1)),
        _ => None,
    }
}

/// Formats `date` with a dayjs-style pattern. Text inside `[...]` is copied
/// verbatim; any character that is not part of a token is copied as-is.
pub fn format_with_pattern(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut rest = pattern;

    while !rest.is_empty() {
        if let Some(escaped) = rest.strip_prefix('[') {
            if let Some(end) = escaped.find(']') {
                out.push_str(&escaped[..end]);
                rest = &escaped[end + 1..];
                continue;
            }
        }

        if let Some(token) = TOKENS.iter().find(|t| rest.starts_with(**t)) {
            out.push_str(&render_token(date, token));
            rest = &rest[token.len()..];
            continue;
        }

        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            out.push(ch);
        }
        rest = chars.as_str();
    }
    out
}

fn render_token(date: NaiveDate, token: &str) -> String {
    match token {
        "YYYY" => format!("{:04}", date.year()),
        "YY" => format!("{:02}", date.year().rem_euclid(100)),
        "MMMM" => date.format("%B").to_string(),
        "MMM" => date.format("%b").to_string(),
        "MM" => format!("{:02}", date.month()),
        "M" => date.month().to_string(),
        "DD" => format!("{:02}", date.day()),
        "D" => date.day().to_string(),
        "dddd" => date.format("%A").to_string(),
        "ddd" => date.format("%a").to_string(),
        _ => token.to_string(),
    }
}

/// Formats a single raw date string; "" when it cannot be parsed.
pub fn format_date_str(raw: &str, pattern: &str) -> String {
    parse_date(raw)
        .map(|d| format_with_pattern(d, pattern))
        .unwrap_or_default()
}

/// Formats a `{start, end}` range as `"<start> - <end>"`. A blank or
/// unparseable end reads as [`PRESENT`]; an unusable start hides the range.
pub fn format_date_range(start: Option<&Value>, end: Option<&Value>, pattern: &str) -> String {
    let Some(start) = start.and_then(date_from_value) else {
        return String::new();
    };
    let start = format_with_pattern(start, pattern);
    match end.and_then(date_from_value) {
        Some(end) => format!("{} - {}", start, format_with_pattern(end, pattern)),
        None => format!("{} - {}", start, PRESENT),
    }
}

/// Formats either a plain date value or a `{start, end}` range object.
pub fn format_date(raw: Option<&Value>, pattern: &str) -> String {
    match raw {
        Some(Value::Object(range)) if range.contains_key("start") => {
            format_date_range(range.get("start"), range.get("end"), pattern)
        }
        Some(value) => date_from_value(value)
            .map(|d| format_with_pattern(d, pattern))
            .unwrap_or_default(),
        None => String::new(),
    }
}
