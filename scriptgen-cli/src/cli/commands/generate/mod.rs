//! Script generation commands

pub mod handler;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

pub use handler::{handle_fqnp_command, handle_scalar_command};

/// How much to print around the generated script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DisplayStyle {
    /// Summary and script
    #[default]
    Normal,
    /// Script only, suitable for piping
    Quiet,
    /// Summary, timings and script
    Verbose,
}

/// Where the generated script goes
#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    /// Save the script under its suggested file name
    #[arg(long)]
    pub save: bool,

    /// Directory for saved scripts (overrides config, needs --save)
    #[arg(long, value_name = "DIR", requires = "save")]
    pub output_dir: Option<PathBuf>,

    /// Output style
    #[arg(long, value_enum, default_value_t = DisplayStyle::Normal)]
    pub style: DisplayStyle,
}

/// Generate the FQNP load and verification script from a spreadsheet
#[derive(Debug, Clone, Args)]
pub struct FqnpCommands {
    /// Excel file (.xlsx or .xls) with a "Ref Number (ACTNUM)" column
    pub file: PathBuf,

    /// Declared content type (derived from the file extension by default)
    #[arg(long)]
    pub content_type: Option<String>,

    /// Activity numbers per list row (overrides config)
    #[arg(long)]
    pub batch_size: Option<usize>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Generate a script for a single identifier
#[derive(Debug, Clone, Args)]
pub struct ScalarCommands {
    /// The identifier to embed in the script
    pub value: String,

    #[command(flatten)]
    pub output: OutputArgs,
}
