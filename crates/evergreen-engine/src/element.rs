use std::fmt;

use serde::Serialize;

/// The closed set of element kinds the parser produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    P,
    Ul,
    Ol,
    Li,
    Blockquote,
    Div,
    Table,
    Tr,
    Th,
    Td,
    Pre,
    Code,
    Img,
    A,
    B,
    I,
    Hr,
    Br,
    Text,
}

impl ElementKind {
    /// Heading kind for a level, clamped into `1..=6`.
    pub fn heading(level: u8) -> Self {
        match level {
            0 | 1 => Self::H1,
            2 => Self::H2,
            3 => Self::H3,
            4 => Self::H4,
            5 => Self::H5,
            _ => Self::H6,
        }
    }

    /// Lowercase tag name, e.g. `"blockquote"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::P => "p",
            Self::Ul => "ul",
            Self::Ol => "ol",
            Self::Li => "li",
            Self::Blockquote => "blockquote",
            Self::Div => "div",
            Self::Table => "table",
            Self::Tr => "tr",
            Self::Th => "th",
            Self::Td => "td",
            Self::Pre => "pre",
            Self::Code => "code",
            Self::Img => "img",
            Self::A => "a",
            Self::B => "b",
            Self::I => "i",
            Self::Hr => "hr",
            Self::Br => "br",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column alignment declared by a table separator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
    #[default]
    None,
}

/// A node of the parsed tree.
///
/// One struct covers every [`ElementKind`]; the kind-specific fields are
/// `None` wherever they do not apply. Children are owned, so a tree has no
/// sharing and no cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub element: ElementKind,
    /// Own text, with inline children replaced by their placeholder tokens.
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
    /// Link or image destination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest: Option<String>,
    /// Link or image title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Placeholder token this node replaced in its parent's `text`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_columns: Option<usize>,
    /// Tag name of a div block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl Element {
    pub fn new(element: ElementKind) -> Self {
        Self {
            element,
            text: String::new(),
            id: None,
            classes: Vec::new(),
            children: Vec::new(),
            dest: None,
            title: None,
            identifier: None,
            alignment: None,
            num_columns: None,
            tag: None,
        }
    }

    pub fn with_text(element: ElementKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::new(element)
        }
    }

    /// Depth-first search for the node carrying `identifier`.
    pub fn find_by_identifier(&self, identifier: &str) -> Option<&Element> {
        self.children.iter().find_map(|child| {
            if child.identifier.as_deref() == Some(identifier) {
                Some(child)
            } else {
                child.find_by_identifier(identifier)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_levels_clamp() {
        assert_eq!(ElementKind::heading(1), ElementKind::H1);
        assert_eq!(ElementKind::heading(6), ElementKind::H6);
        assert_eq!(ElementKind::heading(9), ElementKind::H6);
    }

    #[test]
    fn kind_displays_as_tag() {
        assert_eq!(ElementKind::Blockquote.to_string(), "blockquote");
        assert_eq!(ElementKind::Img.as_str(), "img");
    }

    #[test]
    fn find_by_identifier_descends() {
        let mut inner = Element::with_text(ElementKind::I, "deep");
        inner.identifier = Some("@@ref-2@@".into());
        let mut bold = Element::with_text(ElementKind::B, "@@ref-2@@");
        bold.identifier = Some("@@ref-1@@".into());
        bold.children.push(inner);
        let mut p = Element::with_text(ElementKind::P, "x @@ref-1@@");
        p.children.push(bold);

        let found = p.find_by_identifier("@@ref-2@@").unwrap();
        assert_eq!(found.text, "deep");
        assert!(p.find_by_identifier("missing").is_none());
    }
}
