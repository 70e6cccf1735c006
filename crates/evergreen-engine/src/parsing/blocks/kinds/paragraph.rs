/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default leaf block when no
/// other block opener matches. Two or more trailing spaces request a line
/// break after the paragraph.
pub struct Paragraph;

impl Paragraph {
    pub const LINE_BREAK: &'static str = "  ";

    pub fn requests_break(raw: &str) -> bool {
        raw.ends_with(Self::LINE_BREAK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_spaces() {
        assert!(Paragraph::requests_break("text  "));
        assert!(Paragraph::requests_break("text {#id}   "));
        assert!(!Paragraph::requests_break("text "));
    }
}
