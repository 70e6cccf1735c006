use crate::element::ElementKind;

/// Emphasis runs: `*italic*`, `**bold**`, `***bold italic***`.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    /// Longest run that means anything; longer runs stay literal.
    pub const MAX_RUN: usize = 3;

    /// Outer element kind for a run length.
    pub fn kind(run: usize) -> ElementKind {
        if run == 1 {
            ElementKind::I
        } else {
            ElementKind::B
        }
    }
}
