use std::collections::HashMap;

use crate::element::{Element, ElementKind};

use super::{
    cursor::Cursor,
    kinds::{Emphasis, Link, Placeholder},
};

/// Extracts inline markup from `text` into children of `node`.
///
/// Returns the rewritten text, in which every extracted construct is replaced
/// by the placeholder token stored as the child's `identifier`. New children
/// are appended to `node.children`.
///
/// # Precedence
/// Passes run in order: images, links, then emphasis runs of three, two and
/// one `*`. Each pass scans left to right without overlap, so children are
/// ordered by pass and then by position. Unmatched delimiters stay literal.
///
/// # Nesting
/// Link text and emphasis bodies are tokenized recursively. Children from an
/// earlier pass whose placeholder ends up inside a later construct are moved
/// into it, so every token appears exactly once in its direct parent's text.
pub fn tokenize_inline(node: &mut Element, text: &str) -> String {
    let text = extract_links(node, text, true);
    let mut text = extract_links(node, &text, false);
    for run in (1..=Emphasis::MAX_RUN).rev() {
        text = extract_emphasis(node, &text, run);
    }
    text
}

/// Children extracted by earlier passes, indexed by placeholder so a
/// construct found later can adopt the ones it encloses.
struct Extracted {
    slots: Vec<Option<Element>>,
    by_token: HashMap<String, usize>,
}

impl Extracted {
    fn take(node: &mut Element) -> Self {
        let slots: Vec<Option<Element>> = std::mem::take(&mut node.children)
            .into_iter()
            .map(Some)
            .collect();
        let by_token = slots
            .iter()
            .enumerate()
            .filter_map(|(i, child)| Some((child.as_ref()?.identifier.clone()?, i)))
            .collect();
        Self { slots, by_token }
    }

    /// Removes the children whose tokens occur in `inner`, keeping their
    /// extraction order.
    fn adopt(&mut self, inner: &str) -> Vec<Element> {
        if self.by_token.is_empty() {
            return vec![];
        }
        let mut indices: Vec<usize> = Placeholder::tokens(inner)
            .filter_map(|token| self.by_token.remove(token))
            .collect();
        indices.sort_unstable();
        indices
            .into_iter()
            .filter_map(|i| self.slots.get_mut(i).and_then(Option::take))
            .collect()
    }

    /// Puts the children nobody adopted back on `node`, ahead of `found`.
    fn restore(self, node: &mut Element, found: Vec<Element>) {
        node.children = self.slots.into_iter().flatten().chain(found).collect();
    }
}

/// Replaces every image (`image == true`) or link in `text`.
fn extract_links(node: &mut Element, text: &str, image: bool) -> String {
    let mut earlier = Extracted::take(node);
    let mut found = vec![];
    let mut cur = Cursor::new(text);
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;

    while !cur.eof() {
        let start = cur.pos();
        if let Some(target) = try_parse_link(&mut cur, image) {
            out.push_str(&text[copied..start]);
            // Image text is alt text and is not tokenized further.
            let mut child = if image {
                let mut img = Element::with_text(ElementKind::Img, target.label);
                img.identifier = Some(Placeholder::fresh());
                img
            } else {
                wrap(&mut earlier, ElementKind::A, target.label)
            };
            child.dest = Some(target.dest);
            child.title = Some(target.title);
            out.push_str(child.identifier.as_deref().unwrap_or_default());
            found.push(child);
            copied = cur.pos();
            continue;
        }
        cur.bump();
    }

    out.push_str(&text[copied..]);
    earlier.restore(node, found);
    out
}

struct LinkTarget<'a> {
    label: &'a str,
    dest: String,
    title: String,
}

/// Attempts to parse `[label](target)` (or `![label](target)`) at the cursor.
///
/// On failure, cursor position is restored.
fn try_parse_link<'a>(cur: &mut Cursor<'a>, image: bool) -> Option<LinkTarget<'a>> {
    let saved = cur.clone();
    if image {
        if !cur.starts_with(Link::IMAGE) {
            return None;
        }
        cur.bump(); // !
    } else if cur.peek() != Some(Link::OPEN) {
        return None;
    }

    let label_start = cur.pos() + 1;
    let Some(label_end) = cur.skip_group(Link::OPEN, Link::CLOSE) else {
        *cur = saved;
        return None;
    };
    if cur.peek() != Some(Link::TARGET_OPEN) {
        *cur = saved;
        return None;
    }
    let target_start = cur.pos() + 1;
    let Some(target_end) = cur.skip_group(Link::TARGET_OPEN, Link::TARGET_CLOSE) else {
        *cur = saved;
        return None;
    };

    let (dest, title) = Link::split_target(&cur.s[target_start..target_end]);
    Some(LinkTarget {
        label: &cur.s[label_start..label_end],
        dest,
        title,
    })
}

/// Replaces every `run`-star emphasis span in `text`.
fn extract_emphasis(node: &mut Element, text: &str, run: usize) -> String {
    let mut earlier = Extracted::take(node);
    let mut found = vec![];
    let mut cur = Cursor::new(text);
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;

    while !cur.eof() {
        if cur.peek() != Some(Emphasis::STAR) {
            cur.bump();
            continue;
        }
        let open = cur.pos();
        let len = cur.run_len(Emphasis::STAR);
        if len != run {
            cur.bump_n(len);
            continue;
        }

        let inner_start = open + len;
        // No closer after this opener means none after any later one either.
        let Some(close) = find_closing_run(text, inner_start, run) else {
            break;
        };

        out.push_str(&text[copied..open]);
        let child = emphasis(&mut earlier, &text[inner_start..close], run);
        out.push_str(child.identifier.as_deref().unwrap_or_default());
        found.push(child);

        copied = close + run;
        cur = Cursor::at(text, copied);
    }

    out.push_str(&text[copied..]);
    earlier.restore(node, found);
    out
}

/// Finds the next star run of exactly `run` length at or after `from`.
fn find_closing_run(text: &str, from: usize, run: usize) -> Option<usize> {
    let mut cur = Cursor::at(text, from);
    while !cur.eof() {
        if cur.peek() == Some(Emphasis::STAR) {
            let len = cur.run_len(Emphasis::STAR);
            if len == run {
                return Some(cur.pos());
            }
            cur.bump_n(len);
        } else {
            cur.bump();
        }
    }
    None
}

/// Builds the node for an emphasis span; a triple run is `b` wrapping `i`.
fn emphasis(earlier: &mut Extracted, inner: &str, run: usize) -> Element {
    if run < Emphasis::MAX_RUN {
        return wrap(earlier, Emphasis::kind(run), inner);
    }
    let italic = wrap(earlier, ElementKind::I, inner);
    let mut bold = Element::with_text(
        ElementKind::B,
        italic.identifier.clone().unwrap_or_default(),
    );
    bold.identifier = Some(Placeholder::fresh());
    bold.children.push(italic);
    bold
}

/// Creates an inline node around `inner`, adopting the earlier children
/// whose placeholders it contains, then tokenizes its body.
fn wrap(earlier: &mut Extracted, kind: ElementKind, inner: &str) -> Element {
    let mut child = Element::new(kind);
    child.identifier = Some(Placeholder::fresh());
    child.children = earlier.adopt(inner);
    child.text = tokenize_inline(&mut child, inner);
    child
}
