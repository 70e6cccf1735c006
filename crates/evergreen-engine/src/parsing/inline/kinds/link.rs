/// Link and image inline type with owned delimiter constants.
///
/// `[text](dest title words)` is a link, the same with a leading `!` is an
/// image.
pub struct Link;

impl Link {
    pub const IMAGE: &'static [u8; 2] = b"![";
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const TARGET_OPEN: u8 = b'(';
    pub const TARGET_CLOSE: u8 = b')';

    /// Splits a target body into `(dest, title)`.
    ///
    /// The destination is the first whitespace-delimited token, the title is
    /// everything after it (empty when absent).
    pub fn split_target(body: &str) -> (String, String) {
        let body = body.trim();
        match body.split_once(char::is_whitespace) {
            Some((dest, title)) => (dest.to_string(), title.trim().to_string()),
            None => (body.to_string(), String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dest_and_title() {
        assert_eq!(
            Link::split_target("title two links"),
            ("title".to_string(), "two links".to_string())
        );
    }

    #[test]
    fn dest_only() {
        assert_eq!(
            Link::split_target(" reffin "),
            ("reffin".to_string(), String::new())
        );
    }

    #[test]
    fn empty_target() {
        assert_eq!(Link::split_target(""), (String::new(), String::new()));
    }
}
