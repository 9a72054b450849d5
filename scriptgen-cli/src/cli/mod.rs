//! Command-line interface

pub mod commands;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::generate::{FqnpCommands, ScalarCommands};
use commands::template::TemplateCommands;

#[derive(Debug, Parser)]
#[command(name = "scriptgen", version, about = "Loyalty back-office maintenance script generator")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// FQNP: load activity numbers from an Excel file and verify the correction
    Fqnp(FqnpCommands),
    /// Account Reopen: reactivate a membership number
    AccountReopen(ScalarCommands),
    /// SR Closure: close a service request number
    SrClosure(ScalarCommands),
    /// Write a blank upload workbook with the expected header
    Template(TemplateCommands),
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use commands::generate::DisplayStyle;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_fqnp() {
        let cli = Cli::try_parse_from([
            "scriptgen",
            "fqnp",
            "march.xlsx",
            "--batch-size",
            "5",
            "--save",
            "--style",
            "quiet",
        ])
        .unwrap();

        match cli.command {
            Commands::Fqnp(args) => {
                assert_eq!(args.file.to_str(), Some("march.xlsx"));
                assert_eq!(args.batch_size, Some(5));
                assert!(args.output.save);
                assert_eq!(args.output.style, DisplayStyle::Quiet);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_scalar() {
        let cli = Cli::try_parse_from(["scriptgen", "-v", "account-reopen", "9991234567"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::AccountReopen(args) => assert_eq!(args.value, "9991234567"),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_output_dir_requires_save() {
        let err = Cli::try_parse_from(["scriptgen", "sr-closure", "77001", "--output-dir", "out"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let cli = Cli::try_parse_from([
            "scriptgen",
            "sr-closure",
            "77001",
            "--save",
            "--output-dir",
            "out",
        ])
        .unwrap();
        match cli.command {
            Commands::SrClosure(args) => {
                assert!(args.output.save);
                assert_eq!(args.output.output_dir, Some(std::path::PathBuf::from("out")));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
