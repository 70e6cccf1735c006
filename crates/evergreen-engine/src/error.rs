/// Errors that abort a parse call.
///
/// Everything else the parser meets (unmatched emphasis, missing table
/// separators, odd indentation, malformed attribute groups) degrades into a
/// best-effort tree instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: closing div `{found}` does not match open div `{expected}`")]
    StructuralMismatch {
        /// 1-based line number of the offending close sentinel.
        line: usize,
        expected: String,
        found: String,
    },
}
