use serde::{Deserialize, Serialize};

/// Tunables of the markup dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Spaces of indentation per list nesting level.
    pub indent_width: usize,
    /// Prefix that opens and closes a div block, followed by its tag name.
    pub div_sentinel: String,
}

impl ParseOptions {
    pub const DEFAULT_INDENT_WIDTH: usize = 2;
    pub const DEFAULT_DIV_SENTINEL: &'static str = "<<-";
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            indent_width: Self::DEFAULT_INDENT_WIDTH,
            div_sentinel: Self::DEFAULT_DIV_SENTINEL.to_string(),
        }
    }
}
