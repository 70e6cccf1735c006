/// A byte cursor over an inline text fragment.
///
/// All delimiters the tokenizer looks for are ASCII, so every position the
/// cursor reports at a delimiter is also a valid `str` slice boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Creates a cursor positioned at byte `i` of `s`.
    pub fn at(s: &'a str, i: usize) -> Self {
        Self { s, i }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Length of the run of `b` bytes starting at the current position.
    pub fn run_len(&self, b: u8) -> usize {
        self.s
            .as_bytes()
            .get(self.i..)
            .map_or(0, |rest| rest.iter().take_while(|&&c| c == b).count())
    }

    /// Skips a balanced `open`..`close` group starting under the cursor.
    ///
    /// Nested pairs are counted, so `[a [b] c]` is one group. Returns the
    /// index of the matching `close` and leaves the cursor just past it. On
    /// failure the cursor does not move.
    pub fn skip_group(&mut self, open: u8, close: u8) -> Option<usize> {
        if self.peek() != Some(open) {
            return None;
        }
        let saved = self.i;
        let mut depth = 0usize;
        while let Some(b) = self.bump() {
            if b == open {
                depth += 1;
            } else if b == close {
                depth -= 1;
                if depth == 0 {
                    return Some(self.i - 1);
                }
            }
        }
        self.i = saved;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("![alt](x)");
        assert!(cur.starts_with(b"!["));
        assert!(!cur.starts_with(b"[("));
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.run_len(b'*'), 0);
    }

    #[test]
    fn starts_with_past_end() {
        let mut cur = Cursor::new("ab");
        cur.bump_n(10);
        assert!(cur.eof());
        assert!(!cur.starts_with(b"a"));
        assert_eq!(cur.run_len(b'a'), 0);
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x");
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn run_len_counts_only_the_run() {
        let cur = Cursor::at("a***b*", 1);
        assert_eq!(cur.run_len(b'*'), 3);
    }

    #[test]
    fn skip_group_handles_nesting() {
        let mut cur = Cursor::new("[a [b] c](d)");
        assert_eq!(cur.skip_group(b'[', b']'), Some(8));
        assert_eq!(cur.peek(), Some(b'('));
    }

    #[test]
    fn skip_group_unbalanced_restores() {
        let mut cur = Cursor::at("x[a [b] c", 1);
        assert_eq!(cur.skip_group(b'[', b']'), None);
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn skip_group_requires_opener() {
        let mut cur = Cursor::new("a]");
        assert_eq!(cur.skip_group(b'[', b']'), None);
        assert_eq!(cur.pos(), 0);
    }
}
