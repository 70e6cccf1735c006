use crate::{
    element::Element,
    error::ParseError,
    options::ParseOptions,
    parsing::{
        self,
        attributes::{self, Identifiers},
        inline,
    },
};

/// Owns a line sequence and the tree most recently parsed from it.
///
/// The lines can be replaced at any time; nothing is parsed until
/// [`Processor::parse`] is called, and every parse builds a fresh tree.
#[derive(Debug, Clone, Default)]
pub struct Processor {
    lines: Vec<String>,
    options: ParseOptions,
    elements: Vec<Element>,
}

impl Processor {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Replaces the input lines. Does not parse.
    pub fn set_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines = lines.into_iter().map(Into::into).collect();
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Parses the current lines into root-level elements.
    ///
    /// On error the previous result is discarded, so [`Processor::elements`]
    /// is empty until the next successful parse.
    pub fn parse(&mut self) -> Result<&[Element], ParseError> {
        self.elements.clear();
        self.elements = parsing::parse_lines(self.lines.as_slice(), &self.options)?;
        log::debug!(
            "parsed {} lines into {} root elements",
            self.lines.len(),
            self.elements.len()
        );
        Ok(&self.elements)
    }

    /// Result of the last successful [`Processor::parse`].
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn parse_list_item(&self, line: &str) -> Element {
        parsing::parse_list_item(line, &self.options)
    }

    pub fn split_identifiers(&self, line: &str) -> Identifiers {
        attributes::split_identifiers(line)
    }

    /// Runs the inline tokenizer over `text`, appending children to `node`.
    pub fn tokenize_inline(&self, node: &mut Element, text: &str) -> String {
        inline::tokenize_inline(node, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;

    #[test]
    fn set_lines_does_not_parse() {
        let mut processor = Processor::new(["# One"]);
        processor.parse().unwrap();
        processor.set_lines(["# Two", "text"]);
        assert_eq!(processor.elements().len(), 1);
        assert_eq!(processor.lines().len(), 2);

        processor.parse().unwrap();
        assert_eq!(processor.elements()[0].text, "Two");
    }

    #[test]
    fn failed_parse_clears_previous_result() {
        let mut processor = Processor::new(["para"]);
        processor.parse().unwrap();
        processor.set_lines(["<<-A{#a}", "<<-B"]);
        assert!(processor.parse().is_err());
        assert!(processor.elements().is_empty());
    }

    #[test]
    fn options_change_list_indentation() {
        let lines = ["- top", "    - four spaces"];
        let options = ParseOptions {
            indent_width: 4,
            ..ParseOptions::default()
        };
        let mut processor = Processor::new(lines).with_options(options);
        let list = &processor.parse().unwrap()[0];
        assert_eq!(list.children.len(), 1);
        assert_eq!(list.children[0].children[0].element, ElementKind::Ul);
    }
}
