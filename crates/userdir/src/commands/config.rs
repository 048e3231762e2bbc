use crate::cli::{ConfigCommands, OutputFormat};
use crate::config::{config_paths, Config};
use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct ConfigPath {
    path: PathBuf,
    exists: bool,
}

pub fn handle_config(
    config: &Config,
    explicit_path: Option<&Path>,
    action: &ConfigCommands,
    format: OutputFormat,
) -> Result<()> {
    match action {
        ConfigCommands::Show => handle_show(config, format),
        ConfigCommands::Path => handle_path(explicit_path, format),
    }
}

fn handle_show(config: &Config, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(config)?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            let text = toml::to_string_pretty(config).context("Failed to render config")?;
            print!("{}", text);
        }
    }
    Ok(())
}

fn handle_path(explicit_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let paths: Vec<ConfigPath> = config_paths(explicit_path)
        .into_iter()
        .map(|path| ConfigPath {
            exists: path.exists(),
            path,
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&paths)?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for entry in &paths {
                let marker = if entry.exists {
                    "(found)".green().to_string()
                } else {
                    "(missing)".dimmed().to_string()
                };
                println!("{} {}", entry.path.display(), marker);
            }
        }
    }
    Ok(())
}
