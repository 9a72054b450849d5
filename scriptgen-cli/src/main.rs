//! scriptgen - maintenance script generator for the loyalty back office

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;

mod cli;
mod config;
mod error;
mod extract;
mod pipeline;
mod script;

use cli::commands::config::handle_config_command;
use cli::commands::generate::{handle_fqnp_command, handle_scalar_command};
use cli::commands::template::handle_template_command;
use cli::{Cli, Commands};
use config::Config;
use pipeline::ScalarFlow;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    if cli.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Fqnp(args) => handle_fqnp_command(args, &load_config()?).await,
        Commands::AccountReopen(args) => {
            handle_scalar_command(ScalarFlow::AccountReopen, args, &load_config()?).await
        }
        Commands::SrClosure(args) => {
            handle_scalar_command(ScalarFlow::SrClosure, args, &load_config()?).await
        }
        Commands::Template(args) => handle_template_command(args),
        Commands::Config { cmd } => handle_config_command(cmd, load_config),
    }
}

fn load_config() -> Result<Config> {
    let config = Config::load()?;
    log::debug!("Effective config: {:?}", config);
    Ok(config)
}
