//! `scriptgen template` - write a blank upload workbook

use anyhow::Result;
use clap::Args;
use colored::*;
use std::path::PathBuf;

use crate::extract::{ACTIVITY_NUMBER_COLUMN, write_upload_template};

#[derive(Debug, Clone, Args)]
pub struct TemplateCommands {
    /// Where to write the workbook
    #[arg(default_value = "activity_numbers.xlsx")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

pub fn handle_template_command(args: TemplateCommands) -> Result<()> {
    if args.path.exists() && !args.force {
        anyhow::bail!(
            "File already exists: {} (use --force to overwrite)",
            args.path.display()
        );
    }

    write_upload_template(&args.path)?;
    println!(
        "Wrote upload template with a \"{}\" header to {}",
        ACTIVITY_NUMBER_COLUMN.label,
        args.path.display().to_string().bright_green()
    );
    Ok(())
}
