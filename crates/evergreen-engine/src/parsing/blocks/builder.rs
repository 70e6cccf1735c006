use crate::{
    element::{Alignment, Element, ElementKind},
    error::ParseError,
    parsing::{
        attributes::{Annotated, split_attributes},
        inline::tokenize_inline,
    },
};

use super::{
    classify::LineClass,
    containers::{DivFrame, ListStack, OpenParagraph, QuoteStack, TableState},
    kinds::{CodeFence, ListMarker},
};

/// The single leaf or container block currently accepting lines.
#[derive(Debug, Default)]
enum OpenBlock {
    #[default]
    None,
    Paragraph(OpenParagraph),
    List(ListStack),
    Quote(QuoteStack),
    Table(TableState),
    Code(Vec<String>),
}

/// Assembles classified lines into a forest of elements.
///
/// Divs are tracked separately from the open block: finished blocks are
/// emitted into the innermost open div, or the root when none is open.
pub struct BlockBuilder {
    line: usize,
    divs: Vec<DivFrame>,
    open: OpenBlock,
    out: Vec<Element>,
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            line: 0,
            divs: vec![],
            open: OpenBlock::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, class: LineClass) -> Result<(), ParseError> {
        self.line += 1;

        match class {
            LineClass::FenceOpen { info } => {
                self.close_block();
                log::debug!("line {}: open code fence {info:?}", self.line);
                self.open = OpenBlock::Code(vec![]);
            }
            LineClass::Code(text) => {
                if let OpenBlock::Code(lines) = &mut self.open {
                    lines.push(text);
                }
            }
            LineClass::FenceClose => self.close_block(),
            LineClass::Heading { level, text } => {
                self.close_block();
                self.close_divs();
                let mut heading = Element::new(ElementKind::heading(level));
                text.apply_own(&mut heading);
                heading.text = tokenize_inline(&mut heading, &text.line);
                self.out.push(heading);
            }
            LineClass::Rule => {
                self.close_block();
                self.emit(Element::new(ElementKind::Hr));
            }
            LineClass::TableRow { cells, attrs } => self.table_row(cells, &attrs),
            LineClass::TableSeparator { alignments, raw } => self.table_separator(alignments, &raw),
            LineClass::Quote { depth, text } => self.quote_line(depth, &text),
            LineClass::Div { tag, attrs } => self.div_line(tag, &attrs)?,
            LineClass::ListItem {
                level,
                marker,
                text,
            } => self.list_item(level, &marker, &text),
            LineClass::Blank => {
                self.close_block();
                self.close_divs();
            }
            LineClass::Paragraph { text, line_break } => self.paragraph_line(text, line_break),
        }
        Ok(())
    }

    pub fn finish(mut self) -> Vec<Element> {
        // EOF flush
        if matches!(self.open, OpenBlock::Code(_)) {
            log::warn!("unterminated code fence at end of input");
        }
        self.close_block();
        for div in &self.divs {
            log::warn!("unterminated div `{}` at end of input", div.tag);
        }
        self.close_divs();
        self.out
    }

    fn emit(&mut self, element: Element) {
        match self.divs.last_mut() {
            Some(div) => div.node.children.push(element),
            None => self.out.push(element),
        }
    }

    fn close_block(&mut self) {
        let element = match std::mem::take(&mut self.open) {
            OpenBlock::None => return,
            OpenBlock::Paragraph(p) => paragraph_element(p),
            OpenBlock::List(stack) => stack.close(),
            OpenBlock::Quote(stack) => stack.close(),
            OpenBlock::Table(table) => table.close(),
            OpenBlock::Code(lines) => {
                let mut pre = Element::new(ElementKind::Pre);
                pre.children.push(Element::with_text(
                    ElementKind::Code,
                    CodeFence::body(&lines),
                ));
                pre
            }
        };
        log::debug!("line {}: close {}", self.line, element.element);
        self.emit(element);
    }

    fn close_divs(&mut self) {
        while let Some(frame) = self.divs.pop() {
            self.emit(frame.node);
        }
    }

    fn paragraph_line(&mut self, text: Annotated, line_break: bool) {
        if !matches!(self.open, OpenBlock::Paragraph(_)) {
            self.close_block();
            self.open = OpenBlock::Paragraph(OpenParagraph::default());
        }
        if let Some(div) = self.divs.last_mut() {
            text.apply_parent(&mut div.node);
        }
        if let OpenBlock::Paragraph(p) = &mut self.open {
            p.extend(&text);
        }
        if line_break {
            self.close_block();
            self.emit(Element::new(ElementKind::Br));
        }
    }

    fn list_item(&mut self, level: usize, marker: &ListMarker, text: &Annotated) {
        let item = list_item_element(text);
        if !matches!(self.open, OpenBlock::List(_)) {
            self.close_block();
            log::debug!("line {}: open {} at level {level}", self.line, marker.kind());
            self.open = OpenBlock::List(ListStack::new(marker.kind(), level));
        }
        if let OpenBlock::List(stack) = &mut self.open {
            stack.push_item(level, marker.kind(), item, text.parent.as_ref());
        }
    }

    fn quote_line(&mut self, depth: usize, text: &Annotated) {
        if !matches!(self.open, OpenBlock::Quote(_)) {
            self.close_block();
            self.open = OpenBlock::Quote(QuoteStack::new(depth));
        }
        if let OpenBlock::Quote(stack) = &mut self.open {
            stack.push_line(depth, text);
        }
    }

    fn table_row(&mut self, cells: Vec<String>, attrs: &Annotated) {
        if !matches!(self.open, OpenBlock::Table(_)) {
            self.close_block();
            self.open = OpenBlock::Table(TableState::new());
        }
        if let OpenBlock::Table(table) = &mut self.open {
            table.row(cells, attrs);
        }
    }

    fn table_separator(&mut self, alignments: Vec<Alignment>, raw: &str) {
        match &mut self.open {
            OpenBlock::Table(table) => {
                if !table.separator(alignments) {
                    log::debug!("line {}: ignoring separator inside table body", self.line);
                }
            }
            _ => {
                log::warn!("line {}: separator row without a table", self.line);
                self.paragraph_line(split_attributes(raw), false);
            }
        }
    }

    fn div_line(&mut self, tag: String, attrs: &Annotated) -> Result<(), ParseError> {
        self.close_block();

        if attrs.has_groups() {
            if let Some(outer) = self.divs.last_mut() {
                attrs.apply_parent(&mut outer.node);
            }
            log::debug!("line {}: open div `{tag}`", self.line);
            self.divs.push(DivFrame::new(tag, attrs.own.as_ref()));
            return Ok(());
        }

        match self.divs.last() {
            Some(frame) if frame.tag == tag => {
                log::debug!("line {}: close div `{tag}`", self.line);
                if let Some(frame) = self.divs.pop() {
                    self.emit(frame.node);
                }
                Ok(())
            }
            Some(frame) => Err(ParseError::StructuralMismatch {
                line: self.line,
                expected: frame.tag.clone(),
                found: tag,
            }),
            None => {
                log::warn!("line {}: ignoring close of `{tag}` with no open div", self.line);
                Ok(())
            }
        }
    }
}

/// A list item element: own group applied, text tokenized.
pub fn list_item_element(text: &Annotated) -> Element {
    let mut li = Element::new(ElementKind::Li);
    text.apply_own(&mut li);
    li.text = tokenize_inline(&mut li, &text.line);
    li
}

/// Finishes a paragraph. A one-line paragraph made of a single image becomes
/// that image, carrying the paragraph's attributes.
fn paragraph_element(paragraph: OpenParagraph) -> Element {
    let single_line = paragraph.lines == 1;
    let p = paragraph.into_element();

    if single_line
        && let [child] = p.children.as_slice()
        && child.element == ElementKind::Img
        && child.identifier.as_deref() == Some(p.text.trim())
    {
        let mut img = child.clone();
        img.identifier = None;
        if p.id.is_some() {
            img.id = p.id;
        }
        if !p.classes.is_empty() {
            img.classes = p.classes;
        }
        return img;
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{options::ParseOptions, parsing::blocks::classify::LineClassifier};
    use pretty_assertions::assert_eq;

    fn build(lines: &[&str]) -> Result<Vec<Element>, ParseError> {
        let mut classifier = LineClassifier::new(&ParseOptions::default());
        let mut builder = BlockBuilder::new();
        for line in lines {
            builder.push(classifier.classify(line))?;
        }
        Ok(builder.finish())
    }

    fn kinds(elements: &[Element]) -> Vec<ElementKind> {
        elements.iter().map(|e| e.element).collect()
    }

    #[test]
    fn heading_closes_divs() {
        let out = build(&["<<-DIV{#d}", "inside", "# Title", "after"]).unwrap();
        assert_eq!(
            kinds(&out),
            vec![ElementKind::Div, ElementKind::H1, ElementKind::P]
        );
        assert_eq!(out[0].children.len(), 1);
    }

    #[test]
    fn paragraph_parent_group_targets_div() {
        let out = build(&["<<-DIV{}", "text {} {{#outer .wide}}", "<<-DIV"]).unwrap();
        assert_eq!(out[0].id.as_deref(), Some("outer"));
        assert_eq!(out[0].classes, vec!["wide"]);
        assert_eq!(out[0].tag.as_deref(), Some("DIV"));
    }

    #[test]
    fn mismatched_div_close_reports_line() {
        let err = build(&["<<-DIV{#a}", "<<-TWO{#b}", "text", "<<-DIV"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::StructuralMismatch {
                line: 4,
                expected: "TWO".into(),
                found: "DIV".into(),
            }
        );
    }

    #[test]
    fn close_without_open_div_is_ignored() {
        let out = build(&["<<-NOTE", "body", "<<-NOTE"]).unwrap();
        assert_eq!(kinds(&out), vec![ElementKind::P]);
        assert_eq!(out[0].text, "body");
    }

    #[test]
    fn close_after_heading_does_not_swallow_rest() {
        let out = build(&["<<-DIV{#a}", "# Title", "para", "<<-DIV", "after", "", "more"]).unwrap();
        assert_eq!(
            kinds(&out),
            vec![
                ElementKind::Div,
                ElementKind::H1,
                ElementKind::P,
                ElementKind::P,
                ElementKind::P
            ]
        );
        assert_eq!(out[2].text, "para");
        assert_eq!(out[3].text, "after");
        assert_eq!(out[4].text, "more");
    }

    #[test]
    fn close_after_blank_line_does_not_swallow_rest() {
        let out = build(&["<<-DIV{#a}", "one", "", "two", "<<-DIV", "after"]).unwrap();
        assert_eq!(
            kinds(&out),
            vec![ElementKind::Div, ElementKind::P, ElementKind::P]
        );
        assert_eq!(out[0].children.len(), 1);
        assert_eq!(out[2].text, "after");
    }

    #[test]
    fn unterminated_blocks_are_flushed() {
        let out = build(&["<<-DIV{#d}", "```", "let x = 1;"]).unwrap();
        assert_eq!(kinds(&out), vec![ElementKind::Div]);
        let pre = &out[0].children[0];
        assert_eq!(pre.element, ElementKind::Pre);
        assert_eq!(pre.children[0].text, "let x = 1;");
    }

    #[test]
    fn stray_separator_is_paragraph_text() {
        let out = build(&["|---|---|"]).unwrap();
        assert_eq!(kinds(&out), vec![ElementKind::P]);
        assert_eq!(out[0].text, "|---|---|");
    }

    #[test]
    fn image_paragraph_keeps_attributes() {
        let out = build(&["![alt](pic.png) {#hero .wide}"]).unwrap();
        assert_eq!(out[0].element, ElementKind::Img);
        assert_eq!(out[0].id.as_deref(), Some("hero"));
        assert_eq!(out[0].classes, vec!["wide"]);
        assert_eq!(out[0].identifier, None);
        assert_eq!(out[0].dest.as_deref(), Some("pic.png"));
    }

    #[test]
    fn multi_line_image_paragraph_stays_paragraph() {
        let out = build(&["![alt](pic.png)", "caption"]).unwrap();
        assert_eq!(out[0].element, ElementKind::P);
        assert_eq!(out[0].children.len(), 1);
    }

    #[test]
    fn rule_splits_lists() {
        let out = build(&["- a", "---", "- b"]).unwrap();
        assert_eq!(
            kinds(&out),
            vec![ElementKind::Ul, ElementKind::Hr, ElementKind::Ul]
        );
    }
}
