/// Horizontal rule: a line of three or more `-`.
pub struct Rule;

impl Rule {
    pub const MARKER: char = '-';
    pub const MIN_LEN: usize = 3;

    pub fn matches(line: &str) -> bool {
        let line = line.trim();
        line.len() >= Self::MIN_LEN && line.chars().all(|c| c == Self::MARKER)
    }
}
