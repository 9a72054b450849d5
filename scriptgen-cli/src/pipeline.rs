//! Script generation flows
//!
//! - Spreadsheet flow: upload -> grid -> activity number column -> values ->
//!   batches -> `fqnp-load-and-verify`
//! - Scalar flow: one identifier -> `account-reopen` or `sr-closure`
//!
//! Each run is independent and either yields a complete artifact or a typed
//! error; nothing partial is ever returned.

use crate::error::ExtractionError;
use crate::extract::{
    ACTIVITY_NUMBER_COLUMN, DocumentFormat, ExtractedValues, batch, extract_values, read_grid,
};
use crate::script::{Clock, ScriptArtifact, Substitutions, TemplateId, render, render_value_list};

/// Source label used when the upload has no name
pub const DEFAULT_SOURCE_LABEL: &str = "uploaded_file";

/// The generation sections offered to operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    Fqnp,
    AccountReopen,
    SrClosure,
}

impl FlowKind {
    pub fn template_id(&self) -> TemplateId {
        match self {
            FlowKind::Fqnp => TemplateId::FqnpLoadAndVerify,
            FlowKind::AccountReopen => TemplateId::AccountReopen,
            FlowKind::SrClosure => TemplateId::SrClosure,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FlowKind::Fqnp => "FQNP",
            FlowKind::AccountReopen => "Account Reopen",
            FlowKind::SrClosure => "SR Closure",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FlowKind::Fqnp => "Upload Excel file with activity numbers",
            FlowKind::AccountReopen => "Enter membership number to generate reopen script",
            FlowKind::SrClosure => "Enter SR number to generate closure script",
        }
    }
}

impl From<ScalarFlow> for FlowKind {
    fn from(flow: ScalarFlow) -> Self {
        match flow {
            ScalarFlow::AccountReopen => FlowKind::AccountReopen,
            ScalarFlow::SrClosure => FlowKind::SrClosure,
        }
    }
}

/// Single-identifier script kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarFlow {
    /// Input is a membership number
    AccountReopen,
    /// Input is a service request number
    SrClosure,
}

impl ScalarFlow {
    pub fn template_id(&self) -> TemplateId {
        match self {
            ScalarFlow::AccountReopen => TemplateId::AccountReopen,
            ScalarFlow::SrClosure => TemplateId::SrClosure,
        }
    }

    /// Human name of the identifier this flow takes
    pub fn input_label(&self) -> &'static str {
        match self {
            ScalarFlow::AccountReopen => "Membership Number",
            ScalarFlow::SrClosure => "SR Number",
        }
    }
}

/// Raw bytes of an uploaded document plus what the uploader declared about it
#[derive(Debug, Clone)]
pub struct Upload {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub source_label: String,
}

impl Upload {
    pub fn new(
        bytes: Vec<u8>,
        content_type: impl Into<String>,
        source_label: impl Into<String>,
    ) -> Self {
        Self {
            bytes,
            content_type: content_type.into(),
            source_label: source_label.into(),
        }
    }
}

/// Outcome of the spreadsheet flow
#[derive(Debug, Clone)]
pub struct SpreadsheetRun {
    /// Activity numbers the script was rendered from
    pub values: ExtractedValues,
    pub artifact: ScriptArtifact,
}

/// Runs the generation flows with a fixed batch size and clock
#[derive(Debug, Clone)]
pub struct ScriptGenerator<C> {
    batch_size: usize,
    clock: C,
}

impl<C: Clock> ScriptGenerator<C> {
    pub fn new(batch_size: usize, clock: C) -> Result<Self, ExtractionError> {
        if batch_size == 0 {
            return Err(ExtractionError::invalid_argument(
                "batch size must be a positive integer",
            ));
        }
        Ok(Self { batch_size, clock })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Decode the upload and pull out its activity numbers
    pub fn extract_values(&self, upload: &Upload) -> Result<ExtractedValues, ExtractionError> {
        let format = DocumentFormat::from_content_type(&upload.content_type)?;
        let grid = read_grid(&upload.bytes, format)?;

        let column = ACTIVITY_NUMBER_COLUMN.resolve(grid.header()).ok_or_else(|| {
            ExtractionError::ColumnNotFound {
                expected: ACTIVITY_NUMBER_COLUMN.label.to_string(),
            }
        })?;
        log::debug!("Found '{}' at column {}", ACTIVITY_NUMBER_COLUMN.label, column);

        extract_values(&grid, column, ACTIVITY_NUMBER_COLUMN.label)
    }

    /// Render the FQNP load and verification script for extracted values
    pub fn render_load_and_verify(
        &self,
        values: &ExtractedValues,
        source_label: &str,
    ) -> Result<ScriptArtifact, ExtractionError> {
        let batches = batch(values.as_slice(), self.batch_size)?;

        // One rendering shared by the load and both verification queries
        let activity_numbers = render_value_list(&batches);

        let source_label = match source_label.trim() {
            "" => DEFAULT_SOURCE_LABEL,
            label => label,
        };

        let substitutions = Substitutions::new()
            .with("activity_numbers", activity_numbers)
            .with("total_count", values.len().to_string())
            .with("source_label", source_label);

        render(TemplateId::FqnpLoadAndVerify, &substitutions, &self.clock)
    }

    /// Full spreadsheet flow
    pub fn run_spreadsheet_flow(&self, upload: &Upload) -> Result<SpreadsheetRun, ExtractionError> {
        let values = self.extract_values(upload)?;
        log::info!(
            "Extracted {} activity numbers from {}",
            values.len(),
            upload.source_label
        );
        let artifact = self.render_load_and_verify(&values, &upload.source_label)?;
        Ok(SpreadsheetRun { values, artifact })
    }

    /// Render the scalar flow's template; blank input yields no artifact
    pub fn run_scalar_flow(
        &self,
        flow: ScalarFlow,
        value: &str,
    ) -> Result<Option<ScriptArtifact>, ExtractionError> {
        let value = value.trim();
        if value.is_empty() {
            log::debug!("Blank {} input, nothing generated", flow.input_label());
            return Ok(None);
        }

        let template = flow.template_id();
        let placeholder = template.identifier_placeholder().ok_or_else(|| {
            ExtractionError::invalid_argument(format!("template '{}' takes no identifier", template))
        })?;

        let substitutions = Substitutions::new().with(placeholder, value);
        render(template, &substitutions, &self.clock).map(Some)
    }
}
