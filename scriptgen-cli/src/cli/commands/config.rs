//! `scriptgen config` - inspect configuration

use anyhow::Result;
use clap::Subcommand;
use colored::*;

use crate::config::{BATCH_SIZE_ENV, Config, OUTPUT_DIR_ENV};

#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
}

/// `load` runs for `show` only; `path` works even when the file is malformed
pub fn handle_config_command(
    cmd: ConfigCommands,
    load: impl FnOnce() -> Result<Config>,
) -> Result<()> {
    match cmd {
        ConfigCommands::Show => {
            let config = load()?;
            println!("{}", format!("# {}", Config::default_path().display()).dimmed());
            println!(
                "{}",
                format!("# environment overrides: {}, {}", BATCH_SIZE_ENV, OUTPUT_DIR_ENV).dimmed()
            );
            print!("{}", config.to_toml()?);
        }
        ConfigCommands::Path => {
            println!("{}", Config::default_path().display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn broken() -> Result<Config> {
        Config::from_toml("batch_size = \"seven\"")
    }

    #[test]
    fn test_path_does_not_load_config() {
        assert!(broken().is_err());
        handle_config_command(ConfigCommands::Path, broken).unwrap();
    }

    #[test]
    fn test_show_reports_load_failure() {
        assert!(handle_config_command(ConfigCommands::Show, broken).is_err());
        handle_config_command(ConfigCommands::Show, || Ok(Config::default())).unwrap();
    }
}
