//! In-memory representation of one decoded sheet

use calamine::Data;

/// A single spreadsheet cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    /// Empty cell (also used for padding and spreadsheet errors)
    #[default]
    Empty,
    /// Text value
    Text(String),
    /// Whole number
    Int(i64),
    /// Floating point number (also date-time serials)
    Float(f64),
    /// Boolean
    Bool(bool),
}

impl Cell {
    /// Text content of a text cell, `None` for every other kind
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Int(i) => Cell::Int(*i),
            Data::Float(f) => Cell::Float(*f),
            Data::Bool(b) => Cell::Bool(*b),
            // Raw serial number, the same thing a plain rows export yields
            Data::DateTime(dt) => Cell::Float(dt.as_f64()),
            Data::DateTimeIso(s) => Cell::Text(s.clone()),
            Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Error(_) => Cell::Empty,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Int(i) => write!(f, "{}", i),
            Cell::Float(fl) => {
                // Whole numbers come back from Excel as floats
                if fl.fract() == 0.0 && *fl >= i64::MIN as f64 && *fl <= i64::MAX as f64 {
                    write!(f, "{}", *fl as i64)
                } else {
                    write!(f, "{}", fl)
                }
            }
            Cell::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Rows of cells, row 0 being the header row
///
/// Every row is padded to the width of the widest row, so a column index
/// that is valid for one row is valid for all of them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
    width: usize,
}

impl Grid {
    /// Build a grid from ragged rows
    pub fn new(mut rows: Vec<Vec<Cell>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, Cell::Empty);
        }
        Self { rows, width }
    }

    /// Build a grid of text cells, empty strings becoming empty cells
    #[cfg(test)]
    pub fn from_strings<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|s| match s.as_ref() {
                        "" => Cell::Empty,
                        text => Cell::Text(text.to_string()),
                    })
                    .collect()
            })
            .collect();
        Self::new(rows)
    }

    pub fn header(&self) -> &[Cell] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Rows after the header
    pub fn data_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().skip(1).map(Vec::as_slice)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }
}
