use crate::parsing::attributes::{Annotated, split_attributes};

/// Div boundary lines: `<<-TAG{#id .class}` opens, a bare `<<-TAG` closes.
///
/// The sentinel is configurable, see [`crate::ParseOptions::div_sentinel`].
pub struct Div;

impl Div {
    /// Returns the tag name and attribute groups of a div boundary line.
    ///
    /// Anything other than annotation groups after the tag name means the
    /// line is not a div boundary.
    pub fn parse<'a>(line: &'a str, sentinel: &str) -> Option<(&'a str, Annotated)> {
        let rest = line.trim().strip_prefix(sentinel)?;
        let tag_len = rest
            .find(|c: char| !(c.is_alphanumeric() || c == '-' || c == '_'))
            .unwrap_or(rest.len());
        if tag_len == 0 {
            return None;
        }
        let (tag, tail) = rest.split_at(tag_len);

        let attrs = split_attributes(tail);
        if !attrs.line.trim().is_empty() {
            return None;
        }
        Some((tag, attrs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opener_with_groups() {
        let (tag, attrs) = Div::parse("<<-DIV{#id .class}", "<<-").unwrap();
        assert_eq!(tag, "DIV");
        assert!(attrs.has_groups());
        assert_eq!(attrs.own.unwrap().id.as_deref(), Some("id"));
    }

    #[test]
    fn bare_sentinel() {
        let (tag, attrs) = Div::parse("<<-TWO", "<<-").unwrap();
        assert_eq!(tag, "TWO");
        assert!(!attrs.has_groups());
    }

    #[test]
    fn trailing_prose_is_not_a_div() {
        assert!(Div::parse("<<-DIV and more", "<<-").is_none());
        assert!(Div::parse("<<-", "<<-").is_none());
        assert!(Div::parse("<<-{#x}", "<<-").is_none());
    }

    #[test]
    fn custom_sentinel() {
        let (tag, _) = Div::parse(":::note {.aside}", ":::").unwrap();
        assert_eq!(tag, "note");
        assert!(Div::parse("<<-DIV", ":::").is_none());
    }
}
