//! Spreadsheet extraction: bytes to grid, grid to column values, values to batches

pub mod batch;
pub mod column;
pub mod grid;
pub mod reader;
pub mod sample;
pub mod values;

pub use batch::{DEFAULT_BATCH_SIZE, batch};
pub use column::ACTIVITY_NUMBER_COLUMN;
pub use reader::{DocumentFormat, read_grid};
pub use sample::write_upload_template;
pub use values::{ExtractedValues, extract_values};
