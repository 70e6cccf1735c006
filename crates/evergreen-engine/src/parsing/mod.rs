pub mod attributes;
pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

use crate::{element::Element, error::ParseError, options::ParseOptions};

use attributes::split_attributes;
use blocks::{BlockBuilder, LineClassifier, kinds::List, list_item_element};

/// Parses a full line sequence into root-level elements.
pub fn parse_lines<S: AsRef<str>>(
    lines: &[S],
    options: &ParseOptions,
) -> Result<Vec<Element>, ParseError> {
    let mut classifier = LineClassifier::new(options);
    let mut builder = BlockBuilder::new();

    for line in lines {
        builder.push(classifier.classify(line.as_ref()))?;
    }

    Ok(builder.finish())
}

/// Parses one line as a standalone `li`, marker and indentation stripped.
///
/// A line without a list marker is taken as the item text as a whole.
pub fn parse_list_item(line: &str, options: &ParseOptions) -> Element {
    let line = line.trim_end_matches(['\r', '\n']);
    let text = match List::parse(line, options.indent_width.max(1)) {
        Some(item) => item.text,
        None => line.trim_start(),
    };
    list_item_element(&split_attributes(text))
}
