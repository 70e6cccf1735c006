use uuid::Uuid;

/// Tokens substituted into a parent's text for extracted inline children.
///
/// The token contains none of the inline delimiters, so re-tokenizing
/// rewritten text leaves it alone.
pub struct Placeholder;

impl Placeholder {
    pub const OPEN: &'static str = "@@ref-";
    pub const CLOSE: &'static str = "@@";

    /// A new globally unique token.
    pub fn fresh() -> String {
        format!("{}{}{}", Self::OPEN, Uuid::new_v4(), Self::CLOSE)
    }

    /// Every `@@ref-...@@` token in `text`, left to right, in one scan.
    pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
        let mut rest = 0;
        std::iter::from_fn(move || {
            let start = rest + text[rest..].find(Self::OPEN)?;
            let body = start + Self::OPEN.len();
            let end = body + text[body..].find(Self::CLOSE)? + Self::CLOSE.len();
            rest = end;
            Some(&text[start..end])
        })
    }
}
