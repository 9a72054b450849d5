//! Header matching for the column that holds the values to extract

use super::grid::Cell;

/// A required column: the label shown to operators and the tokens a header
/// cell must contain to match it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub label: &'static str,
    pub tokens: &'static [&'static str],
}

/// Activity numbers for the FQNP load, e.g. a header of "Ref Number (ACTNUM)"
pub const ACTIVITY_NUMBER_COLUMN: ColumnSpec = ColumnSpec {
    label: "Ref Number (ACTNUM)",
    tokens: &["ref number", "actnum"],
};

impl ColumnSpec {
    pub fn resolve(&self, header: &[Cell]) -> Option<usize> {
        resolve_column(header, self.tokens)
    }
}

/// Find the first header cell containing every token, case-insensitively
///
/// Only text cells can match. When several columns match, the leftmost wins.
pub fn resolve_column<S: AsRef<str>>(header: &[Cell], tokens: &[S]) -> Option<usize> {
    let tokens: Vec<String> = tokens.iter().map(|t| t.as_ref().to_lowercase()).collect();

    header.iter().position(|cell| match cell.as_text() {
        Some(text) if !text.is_empty() => {
            let text = text.to_lowercase();
            tokens.iter().all(|token| text.contains(token.as_str()))
        }
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(cells: &[&str]) -> Vec<Cell> {
        cells.iter().map(|c| Cell::Text(c.to_string())).collect()
    }

    #[test]
    fn test_case_insensitive() {
        let upper = header(&["Member", "REF NUMBER (ACTNUM)"]);
        let lower = header(&["Member", "ref number (actnum)"]);

        assert_eq!(ACTIVITY_NUMBER_COLUMN.resolve(&upper), Some(1));
        assert_eq!(
            ACTIVITY_NUMBER_COLUMN.resolve(&upper),
            ACTIVITY_NUMBER_COLUMN.resolve(&lower)
        );
    }

    #[test]
    fn test_requires_all_tokens() {
        let cells = header(&["Ref Number", "ACTNUM", "Activity Ref Number / actnum"]);
        assert_eq!(ACTIVITY_NUMBER_COLUMN.resolve(&cells), Some(2));

        let cells = header(&["Ref Number", "ACTNUM", "Points"]);
        assert_eq!(ACTIVITY_NUMBER_COLUMN.resolve(&cells), None);
    }

    #[test]
    fn test_first_match_wins() {
        let cells = header(&["x", "Ref Number (ACTNUM)", "ref number actnum copy"]);
        assert_eq!(ACTIVITY_NUMBER_COLUMN.resolve(&cells), Some(1));
    }

    #[test]
    fn test_non_text_cells_never_match() {
        let cells = vec![Cell::Empty, Cell::Int(7), Cell::Bool(true)];
        assert_eq!(resolve_column(&cells, &["7"]), None);
        assert_eq!(resolve_column(&cells, &["true"]), None);
    }

    #[test]
    fn test_not_found_for_any_width() {
        for width in 0..20 {
            let cells: Vec<Cell> = (0..width)
                .map(|i| Cell::Text(format!("Column {}", i)))
                .collect();
            assert_eq!(ACTIVITY_NUMBER_COLUMN.resolve(&cells), None);
        }
    }
}
