use std::sync::OnceLock;

use regex::Regex;

use crate::element::ElementKind;

/// The marker that introduced a list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMarker {
    /// `1.`, `42.`; holds the digits.
    Ordered(String),
    /// `*`, `-` or `+`.
    Bullet(char),
}

impl ListMarker {
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Ordered(_) => ElementKind::Ol,
            Self::Bullet(_) => ElementKind::Ul,
        }
    }
}

/// A list item line split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLine<'a> {
    /// Indentation in columns (a tab counts as one indent level).
    pub indent: usize,
    pub marker: ListMarker,
    pub text: &'a str,
}

pub struct List;

impl List {
    pub fn parse(line: &str, indent_width: usize) -> Option<ListLine<'_>> {
        static ITEM_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = ITEM_REGEX.get_or_init(|| {
            Regex::new(r"^([ \t]*)(\d+\.|[*+\-])[ \t]+(.*)$").expect("Invalid list item regex")
        });

        let caps = re.captures(line)?;
        let indent = caps.get(1)?.as_str();
        let marker = caps.get(2)?.as_str();
        let text = caps.get(3)?.as_str();

        let indent = indent
            .chars()
            .map(|c| if c == '\t' { indent_width } else { 1 })
            .sum();
        let marker = match marker.strip_suffix('.') {
            Some(digits) => ListMarker::Ordered(digits.to_string()),
            None => ListMarker::Bullet(marker.chars().next()?),
        };

        Some(ListLine {
            indent,
            marker,
            text,
        })
    }
}
