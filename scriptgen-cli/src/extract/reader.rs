//! Decode uploaded spreadsheet bytes into a Grid
//!
//! Accepts the two Excel containers:
//! - Office Open XML workbooks (.xlsx)
//! - Legacy binary workbooks (.xls)
//!
//! Only the first sheet in document order is decoded.

use std::io::Cursor;
use std::path::Path;

use calamine::{Reader, Xls, Xlsx};

use super::grid::{Cell, Grid};
use crate::error::ExtractionError;

/// Content type of Office Open XML workbooks
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
/// Content type of legacy binary workbooks
pub const XLS_CONTENT_TYPE: &str = "application/vnd.ms-excel";

/// Spreadsheet container variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Xlsx,
    Xls,
}

impl DocumentFormat {
    /// Parse a declared content type, ignoring case and any `;` parameters
    pub fn from_content_type(content_type: &str) -> Result<Self, ExtractionError> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        match essence.as_str() {
            XLSX_CONTENT_TYPE => Ok(DocumentFormat::Xlsx),
            XLS_CONTENT_TYPE => Ok(DocumentFormat::Xls),
            _ => Err(ExtractionError::UnsupportedFormat {
                content_type: content_type.to_string(),
            }),
        }
    }

    /// Declared content type for a file, derived from its extension
    ///
    /// Unknown extensions map to `application/octet-stream`, which
    /// `from_content_type` rejects.
    pub fn content_type_for_path(path: &Path) -> &'static str {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("xlsx") => XLSX_CONTENT_TYPE,
            Some("xls") => XLS_CONTENT_TYPE,
            _ => "application/octet-stream",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Xlsx => write!(f, "xlsx"),
            DocumentFormat::Xls => write!(f, "xls"),
        }
    }
}

/// Decode the first sheet of a workbook
pub fn read_grid(bytes: &[u8], format: DocumentFormat) -> Result<Grid, ExtractionError> {
    log::debug!("Decoding {} byte {} workbook", bytes.len(), format);

    match format {
        DocumentFormat::Xlsx => read_first_sheet::<Xlsx<_>>(bytes),
        DocumentFormat::Xls => read_first_sheet::<Xls<_>>(bytes),
    }
}

fn read_first_sheet<'a, R>(bytes: &'a [u8]) -> Result<Grid, ExtractionError>
where
    R: Reader<Cursor<&'a [u8]>>,
    R::Error: std::fmt::Display,
{
    let mut workbook = R::new(Cursor::new(bytes)).map_err(corrupt)?;

    if let Some(name) = workbook.sheet_names().first() {
        log::debug!("Reading first sheet '{}'", name);
    }

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ExtractionError::CorruptDocument {
            cause: "workbook has no sheets".to_string(),
        })?
        .map_err(corrupt)?;

    let rows: Vec<Vec<Cell>> = range
        .rows()
        .map(|row| row.iter().map(Cell::from).collect())
        .collect();

    let grid = Grid::new(rows);
    log::debug!("Decoded {} rows x {} columns", grid.row_count(), grid.width());
    Ok(grid)
}

fn corrupt(err: impl std::fmt::Display) -> ExtractionError {
    ExtractionError::CorruptDocument {
        cause: err.to_string(),
    }
}
