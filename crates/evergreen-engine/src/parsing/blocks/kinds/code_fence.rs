/// Fenced code block delimiters.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// If `line` opens a fence, returns its info string (language tag).
    pub fn opens(line: &str) -> Option<&str> {
        let info = line.trim_end().strip_prefix(Self::BACKTICKS)?;
        if info.contains('`') {
            return None;
        }
        Some(info.trim())
    }

    /// Whether `line` closes an open fence.
    pub fn closes(line: &str) -> bool {
        line.trim() == Self::BACKTICKS
    }

    /// Joins raw code lines and escapes `&`, `<` and `>`.
    pub fn body(lines: &[String]) -> String {
        html_escape::encode_text(&lines.join("\n")).into_owned()
    }
}
