//! Pull the non-empty values of one column out of a grid

use super::grid::Grid;
use crate::error::ExtractionError;

/// Ordered, trimmed, non-empty values of one column
///
/// Row order is kept and duplicates are retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedValues {
    values: Vec<String>,
}

impl ExtractedValues {
    /// Wrap already-extracted values, rejecting an empty list
    pub fn new(values: Vec<String>, column: &str) -> Result<Self, ExtractionError> {
        if values.is_empty() {
            return Err(ExtractionError::NoData {
                column: column.to_string(),
            });
        }
        Ok(Self { values })
    }

    pub fn as_slice(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.values.iter()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> Vec<String> {
        self.values
    }
}

/// Extract the values below the header in `column`
///
/// `label` names the column in the `NoData` error.
pub fn extract_values(
    grid: &Grid,
    column: usize,
    label: &str,
) -> Result<ExtractedValues, ExtractionError> {
    let mut values = Vec::new();
    let mut skipped = 0usize;

    for row in grid.data_rows() {
        let value = row
            .get(column)
            .map(|cell| cell.to_string().trim().to_string())
            .unwrap_or_default();

        if value.is_empty() {
            skipped += 1;
            continue;
        }
        values.push(value);
    }

    log::debug!(
        "Extracted {} values from column {} ({} blank rows skipped)",
        values.len(),
        column,
        skipped
    );

    ExtractedValues::new(values, label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::grid::Cell;

    #[test]
    fn test_blank_cells_dropped_order_preserved() {
        let grid = Grid::from_strings(vec![
            vec!["Ref Number (ACTNUM)"],
            vec!["A1"],
            vec![""],
            vec!["  "],
            vec!["B2"],
        ]);

        let values = extract_values(&grid, 0, "Ref Number (ACTNUM)").unwrap();
        assert_eq!(values.as_slice(), &["A1".to_string(), "B2".to_string()]);
    }

    #[test]
    fn test_values_are_trimmed_and_duplicates_kept() {
        let grid = Grid::from_strings(vec![
            vec!["id", "Ref Number (ACTNUM)"],
            vec!["1", "  X9 "],
            vec!["2", "X9"],
            vec!["3", "\tY1\n"],
        ]);

        let values = extract_values(&grid, 1, "Ref Number (ACTNUM)").unwrap();
        assert_eq!(values.into_inner(), vec!["X9", "X9", "Y1"]);
    }

    #[test]
    fn test_numbers_are_coerced() {
        let grid = Grid::new(vec![
            vec![Cell::Text("Ref Number (ACTNUM)".into())],
            vec![Cell::Float(123.0)],
            vec![Cell::Int(456)],
            vec![Cell::Float(7.25)],
        ]);

        let values = extract_values(&grid, 0, "Ref Number (ACTNUM)").unwrap();
        assert_eq!(values.into_inner(), vec!["123", "456", "7.25"]);
    }

    #[test]
    fn test_empty_column_is_no_data() {
        let grid = Grid::from_strings(vec![vec!["Ref Number (ACTNUM)", "other"], vec!["", "x"]]);

        let err = extract_values(&grid, 0, "Ref Number (ACTNUM)").unwrap_err();
        assert_eq!(
            err,
            ExtractionError::NoData {
                column: "Ref Number (ACTNUM)".to_string()
            }
        );
    }

    #[test]
    fn test_header_only_is_no_data() {
        let grid = Grid::from_strings(vec![vec!["Ref Number (ACTNUM)"]]);
        assert!(extract_values(&grid, 0, "Ref Number (ACTNUM)").is_err());
    }

    #[test]
    fn test_out_of_range_column_is_no_data() {
        let grid = Grid::from_strings(vec![vec!["a"], vec!["b"]]);
        assert!(matches!(
            extract_values(&grid, 5, "a"),
            Err(ExtractionError::NoData { .. })
        ));
    }
}
