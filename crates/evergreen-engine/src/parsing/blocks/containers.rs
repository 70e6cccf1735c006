use crate::{
    element::{Alignment, Element, ElementKind},
    parsing::{
        attributes::{Annotated, Attributes},
        inline::tokenize_inline,
    },
};

/// Paragraph text accumulated across lines.
#[derive(Debug, Clone, Default)]
pub struct OpenParagraph {
    pub text: String,
    pub attrs: Attributes,
    pub lines: usize,
}

impl OpenParagraph {
    /// Space-joins the line's text and folds in its own group.
    pub fn extend(&mut self, text: &Annotated) {
        if !text.line.is_empty() {
            if !self.text.is_empty() {
                self.text.push(' ');
            }
            self.text.push_str(&text.line);
        }
        if let Some(own) = &text.own {
            self.attrs.merge(own.clone());
        }
        self.lines += 1;
    }

    pub fn into_element(self) -> Element {
        let mut p = Element::new(ElementKind::P);
        self.attrs.apply_to(&mut p);
        p.text = tokenize_inline(&mut p, &self.text);
        p
    }
}

/// An open `<<-TAG` div collecting finished blocks.
#[derive(Debug)]
pub struct DivFrame {
    pub node: Element,
    pub tag: String,
}

impl DivFrame {
    pub fn new(tag: String, own: Option<&Attributes>) -> Self {
        let mut node = Element::new(ElementKind::Div);
        node.tag = Some(tag.clone());
        if let Some(own) = own {
            own.apply_to(&mut node);
        }
        Self { node, tag }
    }
}

#[derive(Debug)]
pub struct ListFrame {
    pub node: Element,
    pub level: usize,
}

/// Nested lists, outermost first.
///
/// The outermost list is never popped: items shallower than it snap onto it.
#[derive(Debug)]
pub struct ListStack {
    outer: ListFrame,
    nested: Vec<ListFrame>,
}

impl ListStack {
    pub fn new(kind: ElementKind, level: usize) -> Self {
        Self {
            outer: ListFrame {
                node: Element::new(kind),
                level,
            },
            nested: Vec::new(),
        }
    }

    /// Adds an item at `level`, closing deeper lists and opening a nested one
    /// when the item is deeper than the current list.
    pub fn push_item(
        &mut self,
        level: usize,
        kind: ElementKind,
        item: Element,
        parent: Option<&Attributes>,
    ) {
        while self.nested.last().is_some_and(|f| f.level > level) {
            self.pop_nested();
        }
        if self.top_mut().level < level {
            log::debug!("open nested {kind} at level {level}");
            self.nested.push(ListFrame {
                node: Element::new(kind),
                level,
            });
        }

        let top = self.top_mut();
        if let Some(parent) = parent {
            parent.apply_to(&mut top.node);
        }
        top.node.children.push(item);
    }

    pub fn close(mut self) -> Element {
        while !self.nested.is_empty() {
            self.pop_nested();
        }
        self.outer.node
    }

    fn top_mut(&mut self) -> &mut ListFrame {
        self.nested.last_mut().unwrap_or(&mut self.outer)
    }

    /// Moves the innermost list into the last item of its parent list.
    fn pop_nested(&mut self) {
        let Some(frame) = self.nested.pop() else {
            return;
        };
        let parent = &mut self.top_mut().node;
        match parent.children.last_mut() {
            Some(li) => li.children.push(frame.node),
            None => parent.children.push(frame.node),
        }
    }
}

#[derive(Debug)]
pub struct QuoteFrame {
    pub node: Element,
    pub depth: usize,
    pub paragraph: Option<OpenParagraph>,
}

impl QuoteFrame {
    fn new(depth: usize) -> Self {
        Self {
            node: Element::new(ElementKind::Blockquote),
            depth,
            paragraph: None,
        }
    }

    fn close_paragraph(&mut self) {
        if let Some(p) = self.paragraph.take() {
            self.node.children.push(p.into_element());
        }
    }

    /// Applies a bare `>` line's own group to the open paragraph, or to the
    /// most recent one when none is open.
    fn annotate_paragraph(&mut self, own: &Attributes) {
        if let Some(p) = &mut self.paragraph {
            p.attrs.merge(own.clone());
        } else if let Some(last) = self
            .node
            .children
            .iter_mut()
            .rev()
            .find(|c| c.element == ElementKind::P)
        {
            own.apply_to(last);
        }
    }
}

/// Nested blockquotes, outermost first.
///
/// Deeper frames pop as in [`ListStack`]. A line shallower than the outermost
/// frame re-roots the stack: a new outer frame at that depth takes the old
/// one as its first child.
#[derive(Debug)]
pub struct QuoteStack {
    outer: QuoteFrame,
    nested: Vec<QuoteFrame>,
}

impl QuoteStack {
    pub fn new(depth: usize) -> Self {
        Self {
            outer: QuoteFrame::new(depth),
            nested: Vec::new(),
        }
    }

    pub fn push_line(&mut self, depth: usize, text: &Annotated) {
        while self.nested.last().is_some_and(|f| f.depth > depth) {
            self.pop_nested();
        }
        if self.nested.is_empty() && self.outer.depth > depth {
            self.reroot(depth);
        }
        if self.top_mut().depth < depth {
            log::debug!("open nested blockquote at depth {depth}");
            self.top_mut().close_paragraph();
            self.nested.push(QuoteFrame::new(depth));
        }

        let top = self.top_mut();
        text.apply_parent(&mut top.node);
        if text.line.is_empty() {
            if let Some(own) = &text.own {
                top.annotate_paragraph(own);
            }
            top.close_paragraph();
        } else {
            top.paragraph
                .get_or_insert_with(OpenParagraph::default)
                .extend(text);
        }
    }

    pub fn close(mut self) -> Element {
        while !self.nested.is_empty() {
            self.pop_nested();
        }
        self.outer.close_paragraph();
        self.outer.node
    }

    fn top_mut(&mut self) -> &mut QuoteFrame {
        self.nested.last_mut().unwrap_or(&mut self.outer)
    }

    fn reroot(&mut self, depth: usize) {
        log::debug!("re-root blockquote at depth {depth}");
        let mut old = std::mem::replace(&mut self.outer, QuoteFrame::new(depth));
        old.close_paragraph();
        self.outer.node.children.push(old.node);
    }

    fn pop_nested(&mut self) {
        let Some(mut frame) = self.nested.pop() else {
            return;
        };
        frame.close_paragraph();
        let parent = self.top_mut();
        parent.close_paragraph();
        parent.node.children.push(frame.node);
    }
}

/// A table being assembled row by row.
#[derive(Debug)]
pub struct TableState {
    node: Element,
    /// First row, held until we know whether a separator follows.
    pending_header: Option<Element>,
    num_columns: usize,
}

impl TableState {
    pub fn new() -> Self {
        Self {
            node: Element::new(ElementKind::Table),
            pending_header: None,
            num_columns: 0,
        }
    }

    pub fn row(&mut self, cells: Vec<String>, attrs: &Annotated) {
        self.widen(cells.len());
        attrs.apply_parent(&mut self.node);

        if self.node.children.is_empty() && self.pending_header.is_none() {
            self.pending_header = Some(Self::build_row(cells, ElementKind::Th, attrs));
            return;
        }
        self.flush_header();
        self.node
            .children
            .push(Self::build_row(cells, ElementKind::Td, attrs));
    }

    /// Applies a separator row to the pending header. Returns `false` when
    /// there is no header waiting for one.
    pub fn separator(&mut self, alignments: Vec<Alignment>) -> bool {
        let Some(mut header) = self.pending_header.take() else {
            return false;
        };
        self.widen(alignments.len());
        for (cell, alignment) in header.children.iter_mut().zip(alignments) {
            cell.alignment = Some(alignment);
        }
        self.node.children.push(header);
        true
    }

    pub fn close(mut self) -> Element {
        self.flush_header();
        self.node.num_columns = Some(self.num_columns);
        self.node
    }

    fn flush_header(&mut self) {
        if let Some(header) = self.pending_header.take() {
            self.node.children.push(header);
        }
    }

    fn widen(&mut self, columns: usize) {
        self.num_columns = self.num_columns.max(columns);
    }

    fn build_row(cells: Vec<String>, cell_kind: ElementKind, attrs: &Annotated) -> Element {
        let mut tr = Element::new(ElementKind::Tr);
        attrs.apply_own(&mut tr);
        tr.children = cells
            .into_iter()
            .map(|text| {
                let mut cell = Element::new(cell_kind);
                if cell_kind == ElementKind::Th {
                    cell.alignment = Some(Alignment::None);
                }
                cell.text = tokenize_inline(&mut cell, &text);
                cell
            })
            .collect();
        tr
    }
}
