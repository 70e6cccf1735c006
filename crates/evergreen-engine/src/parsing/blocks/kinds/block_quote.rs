/// Quote lines: one `>` per nesting level.
pub struct BlockQuote;

impl BlockQuote {
    pub const MARKER: char = '>';

    /// Counts leading `>` markers and returns the depth with the quoted text.
    ///
    /// Spaces may sit before each marker, and one space after a marker is
    /// eaten, so `> > a`, `>> a` and `>>>>>> a` all quote `a`. Depth 0 means
    /// the line is not quoted.
    pub fn split(line: &str) -> (usize, &str) {
        let mut depth = 0;
        let mut rest = line;
        while let Some(after) = rest.trim_start_matches(' ').strip_prefix(Self::MARKER) {
            depth += 1;
            rest = after.strip_prefix(' ').unwrap_or(after);
        }
        if depth == 0 { (0, line) } else { (depth, rest) }
    }
}
