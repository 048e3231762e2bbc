mod cli;
mod color;
mod commands;
mod config;
mod logging;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use directory_core::SortOrder;
use http_source::HttpUserSource;
use output::output_error;
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse();
    color::init(cli.color);
    logging::init(cli.verbose);

    let format = cli.format;
    if let Err(e) = run(cli) {
        output_error(&e, format);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Completions { shell } => {
            Cli::generate_completions(*shell);
            Ok(())
        }
        Commands::Config { action } => {
            let config = load_config(&cli)?;
            commands::config::handle_config(&config, cli.config.as_deref(), action, cli.format)
        }
        Commands::List { search, sort } => {
            let config = load_config(&cli)?;
            config.validate()?;
            let source = HttpUserSource::with_timeout(&config.url, config.timeout());
            commands::list::handle_list(
                &source,
                config.mapping,
                search.as_deref(),
                sort.map(SortOrder::from).unwrap_or(config.sort),
                cli.format,
            )
        }
        Commands::Browse { sort } => {
            let config = load_config(&cli)?;
            config.validate()?;
            let source = HttpUserSource::with_timeout(&config.url, config.timeout());
            commands::browse::handle_browse(
                &source,
                config.mapping,
                sort.map(SortOrder::from).unwrap_or(config.sort),
                cli.format,
                std::io::stdin().lock(),
                std::io::stdout().lock(),
            )
        }
    }
}

/// Config files and environment, with command-line overrides applied
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.clone())?;
    config.merge_with_cli(cli.url.clone());
    debug!(url = %config.url, timeout_secs = config.timeout_secs, "configuration loaded");
    Ok(config)
}
