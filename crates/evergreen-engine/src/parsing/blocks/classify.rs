use crate::{
    element::Alignment,
    options::ParseOptions,
    parsing::attributes::{Annotated, split_attributes},
};

use super::kinds::{
    BlockQuote, CodeFence, Div, Heading, List, ListMarker, Paragraph, Rule, Table,
};

/// Classification of a single line.
///
/// This is phase 1 of block parsing: each line is classified on its own,
/// carrying the captured text and annotation groups the builder needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// A code fence opener; the info string is kept but not interpreted.
    FenceOpen { info: String },
    /// The fence closing an open code block.
    FenceClose,
    /// A verbatim line inside a code block.
    Code(String),
    Heading { level: u8, text: Annotated },
    Rule,
    TableRow { cells: Vec<String>, attrs: Annotated },
    TableSeparator { alignments: Vec<Alignment>, raw: String },
    /// A quoted line; `text.line` is empty for a bare `>`.
    Quote { depth: usize, text: Annotated },
    /// A div boundary; without annotation groups it may close a div.
    Div { tag: String, attrs: Annotated },
    ListItem {
        /// Nesting level (indentation divided by the indent width).
        level: usize,
        marker: ListMarker,
        text: Annotated,
    },
    Blank,
    Paragraph { text: Annotated, line_break: bool },
}

/// Classifies lines for the block parsing phase.
///
/// The only state kept between lines is whether a code fence is open: inside
/// one every line is verbatim code until the closing fence.
pub struct LineClassifier {
    indent_width: usize,
    div_sentinel: String,
    in_fence: bool,
}

impl LineClassifier {
    pub fn new(options: &ParseOptions) -> Self {
        Self {
            indent_width: options.indent_width.max(1),
            div_sentinel: options.div_sentinel.clone(),
            in_fence: false,
        }
    }

    /// Classifies a raw line. Precedence follows the order of the checks:
    /// fence, blank, heading, rule, table, blockquote, div, list item,
    /// paragraph.
    pub fn classify(&mut self, raw: &str) -> LineClass {
        let line = raw.trim_end_matches(['\r', '\n']);

        let class = if self.in_fence {
            if CodeFence::closes(line) {
                self.in_fence = false;
                LineClass::FenceClose
            } else {
                LineClass::Code(line.to_string())
            }
        } else if let Some(info) = CodeFence::opens(line) {
            self.in_fence = true;
            LineClass::FenceOpen {
                info: info.to_string(),
            }
        } else {
            self.classify_block(line)
        };

        log::trace!("classified {line:?} as {class:?}");
        class
    }

    fn classify_block(&self, line: &str) -> LineClass {
        if line.trim().is_empty() {
            return LineClass::Blank;
        }

        if let Some((level, rest)) = Heading::parse(line) {
            return LineClass::Heading {
                level,
                text: split_attributes(rest.trim_start()),
            };
        }

        if Rule::matches(line) {
            return LineClass::Rule;
        }

        let attrs = split_attributes(line.trim());
        if let Some(cells) = Table::cells(&attrs.line) {
            if Table::is_separator(&cells) {
                return LineClass::TableSeparator {
                    alignments: cells.iter().map(|c| Table::alignment(c)).collect(),
                    raw: line.trim().to_string(),
                };
            }
            return LineClass::TableRow { cells, attrs };
        }

        let (depth, quoted) = BlockQuote::split(line);
        if depth > 0 {
            return LineClass::Quote {
                depth,
                text: split_attributes(quoted.trim_start()),
            };
        }

        if let Some((tag, attrs)) = Div::parse(line, &self.div_sentinel) {
            return LineClass::Div {
                tag: tag.to_string(),
                attrs,
            };
        }

        if let Some(item) = List::parse(line, self.indent_width) {
            return LineClass::ListItem {
                level: item.indent / self.indent_width,
                marker: item.marker,
                text: split_attributes(item.text.trim_start()),
            };
        }

        LineClass::Paragraph {
            text: attrs,
            line_break: Paragraph::requests_break(line),
        }
    }
}
