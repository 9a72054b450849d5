//! Error taxonomy for the extraction and rendering pipeline

/// Failure of a spreadsheet or scalar script generation run
///
/// Every variant is terminal for the run that produced it. The messages are
/// written for operators and can be shown without further interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// Declared content type is not one of the accepted spreadsheet containers
    UnsupportedFormat { content_type: String },
    /// The container could not be decoded
    CorruptDocument { cause: String },
    /// No header cell satisfied the required tokens
    ColumnNotFound { expected: String },
    /// The column was found but held no non-empty values
    NoData { column: String },
    /// Contract violation by the caller (unknown template, zero batch size, ...)
    InvalidArgument(String),
}

impl ExtractionError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ExtractionError::InvalidArgument(message.into())
    }

    /// Short machine-friendly name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractionError::UnsupportedFormat { .. } => "unsupported-format",
            ExtractionError::CorruptDocument { .. } => "corrupt-document",
            ExtractionError::ColumnNotFound { .. } => "column-not-found",
            ExtractionError::NoData { .. } => "no-data",
            ExtractionError::InvalidArgument(_) => "invalid-argument",
        }
    }
}

impl std::fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionError::UnsupportedFormat { content_type } => write!(
                f,
                "Please upload a valid Excel file (.xlsx or .xls), got content type '{}'",
                content_type
            ),
            ExtractionError::CorruptDocument { cause } => {
                write!(f, "Error processing Excel file: {}", cause)
            }
            ExtractionError::ColumnNotFound { expected } => {
                write!(f, "Column \"{}\" not found in the Excel file", expected)
            }
            ExtractionError::NoData { column } => {
                write!(f, "No activity numbers found in the \"{}\" column", column)
            }
            ExtractionError::InvalidArgument(message) => write!(f, "Invalid argument: {}", message),
        }
    }
}

impl std::error::Error for ExtractionError {}
