/// ATX-style heading: `#` markers followed by a space.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: u8 = 6;

    /// Returns `(level, rest)` for a heading line. Seven or more markers
    /// still give a level-six heading.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let markers = line.bytes().take_while(|&b| b == Self::MARKER).count();
        if markers == 0 {
            return None;
        }
        let rest = line[markers..].strip_prefix(' ')?;
        let level = markers.min(Self::MAX_LEVEL as usize) as u8;
        Some((level, rest))
    }
}
