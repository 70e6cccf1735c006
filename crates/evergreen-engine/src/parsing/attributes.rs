//! Trailing `{#id .class}` and `{{#id .class}}` annotation groups.
//!
//! A line may end with an own group (applied to the element the line
//! produces) optionally followed by a parent group (applied to the enclosing
//! container). Only balanced groups at the very end of the line whose tokens
//! all start with `#` or `.` are recognised; anything else stays in the text.

use crate::element::Element;

/// Delimiters of annotation groups.
pub struct AttributeGroup;

impl AttributeGroup {
    pub const OPEN: char = '{';
    pub const CLOSE: char = '}';
    pub const ID: char = '#';
    pub const CLASS: char = '.';
}

/// Identifier and classes carried by one annotation group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl Attributes {
    /// Writes these attributes onto `element`.
    ///
    /// A present id replaces the current one; a non-empty class list replaces
    /// the current classes. Absent values leave the element untouched.
    pub fn apply_to(&self, element: &mut Element) {
        if let Some(id) = &self.id {
            element.id = Some(id.clone());
        }
        if !self.classes.is_empty() {
            element.classes = self.classes.clone();
        }
    }

    /// Folds a later group into this one with the same replace rules as
    /// [`Attributes::apply_to`].
    pub fn merge(&mut self, later: Attributes) {
        if later.id.is_some() {
            self.id = later.id;
        }
        if !later.classes.is_empty() {
            self.classes = later.classes;
        }
    }

    /// Parses a group body such as ` .c2 #id `. `None` if any token is not
    /// an identifier or class.
    fn parse_body(body: &str) -> Option<Self> {
        let mut attrs = Self::default();
        for token in body.split_whitespace() {
            if let Some(id) = token.strip_prefix(AttributeGroup::ID)
                && !id.is_empty()
            {
                attrs.id = Some(id.to_string());
            } else if let Some(class) = token.strip_prefix(AttributeGroup::CLASS)
                && !class.is_empty()
            {
                attrs.classes.push(class.to_string());
            } else {
                return None;
            }
        }
        Some(attrs)
    }
}

/// A line with its annotation groups split off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotated {
    /// The remaining text, trailing whitespace trimmed.
    pub line: String,
    pub own: Option<Attributes>,
    pub parent: Option<Attributes>,
}

impl Annotated {
    pub fn has_groups(&self) -> bool {
        self.own.is_some() || self.parent.is_some()
    }

    pub fn apply_own(&self, element: &mut Element) {
        if let Some(own) = &self.own {
            own.apply_to(element);
        }
    }

    pub fn apply_parent(&self, element: &mut Element) {
        if let Some(parent) = &self.parent {
            parent.apply_to(element);
        }
    }
}

/// Result of [`split_identifiers`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identifiers {
    pub line: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

/// Splits both trailing groups off `line`.
///
/// The parent group is only recognised directly after an own group; use an
/// empty own group (`{} {{#list}}`) to annotate just the container.
pub fn split_attributes(line: &str) -> Annotated {
    let trimmed = line.trim_end();

    let (rest, parent) = match trailing_group(trimmed, true) {
        Some((before, parent)) if trailing_group(before, false).is_some() => (before, Some(parent)),
        _ => (trimmed, None),
    };
    let (rest, own) = match trailing_group(rest, false) {
        Some((before, own)) => (before, Some(own)),
        None => (rest, None),
    };

    Annotated {
        line: rest.trim_end().to_string(),
        own,
        parent,
    }
}

/// Splits only the trailing own group off `line`.
pub fn split_identifiers(line: &str) -> Identifiers {
    let trimmed = line.trim_end();
    match trailing_group(trimmed, false) {
        Some((before, attrs)) => Identifiers {
            line: before.trim_end().to_string(),
            id: attrs.id,
            classes: attrs.classes,
        },
        None => Identifiers {
            line: trimmed.to_string(),
            ..Identifiers::default()
        },
    }
}

/// Finds a group at the end of `s`, returning the text before it.
fn trailing_group(s: &str, double: bool) -> Option<(&str, Attributes)> {
    let s = s.trim_end();
    let inner = if double {
        s.strip_suffix("}}")?
    } else {
        let inner = s.strip_suffix(AttributeGroup::CLOSE)?;
        if inner.ends_with(AttributeGroup::CLOSE) {
            return None;
        }
        inner
    };

    let start = inner.rfind(AttributeGroup::OPEN)?;
    let body = &inner[start + 1..];
    if body.contains(AttributeGroup::CLOSE) {
        return None;
    }

    let before = &inner[..start];
    let before = if double {
        before.strip_suffix(AttributeGroup::OPEN)?
    } else if before.ends_with(AttributeGroup::OPEN) {
        return None;
    } else {
        before
    };

    Some((before, Attributes::parse_body(body)?))
}
