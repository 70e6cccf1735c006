use crate::element::Alignment;

/// Pipe table rows and separator rows.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';
    pub const RULE: char = '-';
    pub const ALIGN: char = ':';

    /// Cells of a `|a|b|` row, trimmed. `None` unless the line starts and
    /// ends with a pipe.
    pub fn cells(line: &str) -> Option<Vec<String>> {
        let inner = line
            .strip_prefix(Self::PIPE)?
            .strip_suffix(Self::PIPE)?;
        Some(inner.split(Self::PIPE).map(|c| c.trim().to_string()).collect())
    }

    /// Whether every cell is a `---`, `:--`, `:-:` or `--:` rule.
    pub fn is_separator(cells: &[String]) -> bool {
        !cells.is_empty()
            && cells.iter().all(|cell| {
                cell.contains(Self::RULE)
                    && cell.chars().all(|c| c == Self::RULE || c == Self::ALIGN)
            })
    }

    pub fn alignment(cell: &str) -> Alignment {
        match (cell.starts_with(Self::ALIGN), cell.ends_with(Self::ALIGN)) {
            (true, true) => Alignment::Center,
            (true, false) => Alignment::Left,
            (false, true) => Alignment::Right,
            (false, false) => Alignment::None,
        }
    }
}
