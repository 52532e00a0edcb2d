//! A `nom`-based parser for the field path grammar.
use super::ast::{PathSegment, Selection};
use crate::error::JPathError;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, u64 as nom_u64},
    combinator::map,
    multi::many0,
    sequence::{delimited, pair, preceded},
};

// --- Main Public Parser ---

pub fn parse_selection(input: &str) -> Result<Selection, JPathError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(JPathError::EmptyPath);
    }
    if trimmed == "." {
        return Ok(Selection::CurrentContext);
    }
    match full_path(trimmed) {
        Ok(("", sel)) => Ok(sel),
        Ok((rem, _)) => Err(JPathError::JPathParse(
            input.to_string(),
            format!("Parser did not consume all input. Remainder: '{}'", rem),
        )),
        Err(e) => Err(JPathError::JPathParse(input.to_string(), e.to_string())),
    }
}

// --- Combinators ---

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-').parse(input)
}

fn key_segment(input: &str) -> IResult<&str, PathSegment> {
    map(preceded(char('.'), identifier), |s| {
        PathSegment::Key(s.to_string())
    })
    .parse(input)
}

fn index_segment(input: &str) -> IResult<&str, PathSegment> {
    map(delimited(char('['), nom_u64, char(']')), |i| {
        PathSegment::Index(i as usize)
    })
    .parse(input)
}

fn path_segment(input: &str) -> IResult<&str, PathSegment> {
    alt((key_segment, index_segment)).parse(input)
}

fn full_path(input: &str) -> IResult<&str, Selection> {
    map(
        pair(identifier, many0(path_segment)),
        |(start, mut rest)| {
            let mut segments = vec![PathSegment::Key(start.to_string())];
            segments.append(&mut rest);
            Selection::Path(segments)
        },
    )
    .parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> PathSegment {
        PathSegment::Key(s.to_string())
    }

    #[test]
    fn parses_dotted_and_indexed_segments() {
        let sel = parse_selection("basics.profiles[2].url").unwrap();
        assert_eq!(
            sel,
            Selection::Path(vec![key("basics"), key("profiles"), PathSegment::Index(2), key("url")])
        );
    }

    #[test]
    fn accepts_dashes_and_digit_keys() {
        let sel = parse_selection("sections.custom-1.items.0").unwrap();
        assert_eq!(
            sel,
            Selection::Path(vec![key("sections"), key("custom-1"), key("items"), key("0")])
        );
    }

    #[test]
    fn current_context() {
        assert_eq!(parse_selection(" . ").unwrap(), Selection::CurrentContext);
    }

    #[test]
    fn rejects_malformed_paths() {
        assert_eq!(parse_selection("   "), Err(JPathError::EmptyPath));
        assert!(parse_selection("basics..email").is_err());
        assert!(parse_selection("items[x]").is_err());
        assert!(parse_selection(".basics").is_err());
        assert!(parse_selection("basics.email extra").is_err());
    }
}
