//! Blank upload workbook with the header the FQNP flow looks for

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook};

use super::column::ACTIVITY_NUMBER_COLUMN;

const SHEET_NAME: &str = "Activities";

/// Build the upload template workbook
///
/// The first sheet carries the activity number header in A1, optionally
/// followed by the given values one per row.
pub fn build_upload_template(values: &[&str]) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    worksheet.write_string_with_format(0, 0, ACTIVITY_NUMBER_COLUMN.label, &header_format)?;
    worksheet.set_column_width(0, 24)?;

    for (idx, value) in values.iter().enumerate() {
        worksheet.write_string((idx + 1) as u32, 0, *value)?;
    }

    Ok(workbook)
}

/// Write the upload template to `path`
pub fn write_upload_template(path: &Path) -> Result<()> {
    let mut workbook = build_upload_template(&[])?;
    workbook
        .save(path)
        .with_context(|| format!("Failed to save Excel file: {}", path.display()))?;
    log::info!("Wrote upload template to {}", path.display());
    Ok(())
}
