//! Generation command handlers

use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use super::{DisplayStyle, FqnpCommands, OutputArgs, ScalarCommands};
use crate::config::Config;
use crate::extract::{DocumentFormat, ExtractedValues};
use crate::pipeline::{FlowKind, ScalarFlow, ScriptGenerator, Upload};
use crate::script::{ScriptArtifact, SystemClock};

/// Number of activity numbers shown in the extraction summary
const PREVIEW_COUNT: usize = 5;

/// Handle `scriptgen fqnp`
pub async fn handle_fqnp_command(args: FqnpCommands, config: &Config) -> Result<()> {
    let style = args.output.style;

    if !args.file.exists() {
        anyhow::bail!("Excel file does not exist: {}", args.file.display());
    }

    let start = Instant::now();
    let bytes = tokio::fs::read(&args.file)
        .await
        .with_context(|| format!("Failed to read Excel file: {}", args.file.display()))?;

    let content_type = args
        .content_type
        .clone()
        .unwrap_or_else(|| DocumentFormat::content_type_for_path(&args.file).to_string());
    let source_label = args
        .file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if matches!(style, DisplayStyle::Verbose) {
        println!("{}", FlowKind::Fqnp.description().dimmed());
        println!("Reading: {}", args.file.display().to_string().cyan());
        println!("Content type: {}", content_type.dimmed());
    }

    let upload = Upload::new(bytes, content_type, source_label);
    let batch_size = args.batch_size.unwrap_or(config.batch_size);
    let generator = ScriptGenerator::new(batch_size, SystemClock)?;

    let run = generator
        .run_spreadsheet_flow(&upload)
        .inspect_err(|e| log::debug!("Spreadsheet flow stopped: {}", e.kind()))
        .with_context(|| {
            format!("Failed to generate FQNP script from {}", upload.source_label)
        })?;

    if !matches!(style, DisplayStyle::Quiet) {
        print_summary(&run.values);
    }

    if matches!(style, DisplayStyle::Verbose) {
        println!(
            "Generated in {:.2}ms ({} per row)",
            start.elapsed().as_secs_f64() * 1000.0,
            generator.batch_size()
        );
    }

    emit(FlowKind::Fqnp, &run.artifact, &args.output, config)
}

/// Handle `scriptgen account-reopen` and `scriptgen sr-closure`
pub async fn handle_scalar_command(
    flow: ScalarFlow,
    args: ScalarCommands,
    config: &Config,
) -> Result<()> {
    let generator = ScriptGenerator::new(config.batch_size, SystemClock)?;

    match generator.run_scalar_flow(flow, &args.value)? {
        Some(artifact) => {
            if !matches!(args.output.style, DisplayStyle::Quiet) {
                println!("{}: {}", flow.input_label().bold(), args.value.trim());
            }
            emit(FlowKind::from(flow), &artifact, &args.output, config)
        }
        None => {
            eprintln!(
                "{} {} is empty, no script generated",
                "warning:".yellow().bold(),
                flow.input_label()
            );
            Ok(())
        }
    }
}

fn print_summary(values: &ExtractedValues) {
    println!(
        "{}",
        format!("Found {} activity numbers:", values.len()).bold()
    );

    let preview: Vec<&str> = values
        .iter()
        .take(PREVIEW_COUNT)
        .map(String::as_str)
        .collect();
    let mut line = preview.join("  ");
    if values.len() > PREVIEW_COUNT {
        line.push_str(&format!("  +{} more", values.len() - PREVIEW_COUNT));
    }
    println!("  {}", line.bright_green());
    println!();
}

/// Print the script and save it when asked
fn emit(kind: FlowKind, artifact: &ScriptArtifact, output: &OutputArgs, config: &Config) -> Result<()> {
    if matches!(output.style, DisplayStyle::Quiet) {
        println!("{}", artifact.content());
    } else {
        println!("{}", format!("Generated {} Script", kind.title()).bold());
        println!("{}", format!("-- {}", kind.template_id()).dimmed());
        println!();
        println!("{}", artifact.content());
        println!();
    }

    if output.save {
        let dir = output.output_dir.clone().unwrap_or_else(|| config.output_dir());
        let path = save_artifact(artifact, &dir)?;
        if !matches!(output.style, DisplayStyle::Quiet) {
            println!("Script saved to: {}", path.display().to_string().bright_green());
        }
    }

    Ok(())
}

/// Write the artifact into `dir` under its suggested file name
pub fn save_artifact(artifact: &ScriptArtifact, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let path = dir.join(artifact.file_name());
    fs::write(&path, artifact.content())
        .with_context(|| format!("Failed to write script to: {}", path.display()))?;

    log::info!("Saved {} to {}", artifact.template(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::FixedClock;

    #[test]
    fn test_save_artifact() {
        let clock = FixedClock::parse("2024-03-01T09:30:00+10:00").unwrap();
        let generator = ScriptGenerator::new(7, clock).unwrap();
        let artifact = generator
            .run_scalar_flow(ScalarFlow::SrClosure, "77001")
            .unwrap()
            .unwrap();

        let dir = std::env::temp_dir()
            .join(format!("scriptgen-save-{}", std::process::id()))
            .join("nested");
        let path = save_artifact(&artifact, &dir).unwrap();

        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("sr_closure_77001_1709249400000.sql")
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), artifact.content());

        if let Some(parent) = dir.parent() {
            fs::remove_dir_all(parent).ok();
        }
    }
}
