use anyhow::{anyhow, Result};
use directories::{BaseDirs, ProjectDirs};
use directory_core::{FieldMapping, SortOrder};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use http_source::{DEFAULT_TIMEOUT_SECS, DEFAULT_USERS_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Effective configuration: built-in defaults, then config files, then
/// `USERDIR_*` environment variables, then command-line flags
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Endpoint returning the JSON array of users
    pub url: String,
    /// Global request timeout in seconds
    pub timeout_secs: u64,
    /// Initial sort order when none is given on the command line
    pub sort: SortOrder,
    /// Source field names per directory field
    #[serde(default)]
    pub mapping: FieldMapping,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_USERS_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            sort: SortOrder::default(),
            mapping: FieldMapping::default(),
        }
    }
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let explicit_path = config_path.as_deref();
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
        }

        for path in config_paths(explicit_path) {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        // USERDIR_CONFIG names the file itself; nested keys use "__" (USERDIR_MAPPING__NAME__DEFAULT)
        figment = figment.merge(Env::prefixed("USERDIR_").ignore(&["config"]).split("__"));

        figment
            .extract()
            .map_err(|e| anyhow!("Failed to load config: {}", e))
    }

    pub fn merge_with_cli(&mut self, cli_url: Option<String>) {
        if let Some(url) = cli_url {
            self.url = url;
        }
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(anyhow!(
                "Users URL not configured. Set via --url, USERDIR_URL env var, or config file"
            ));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(anyhow!(
                "Users URL must start with http:// or https://, got '{}'",
                url
            ));
        }
        if self.timeout_secs == 0 {
            return Err(anyhow!("timeout_secs must be greater than zero"));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Config files in merge order (later files win)
pub fn config_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
        return paths;
    }

    if let Some(path) = get_project_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_xdg_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_local_config_path() {
        push_unique(&mut paths, path);
    }

    paths
}

fn push_unique(paths: &mut Vec<PathBuf>, path: PathBuf) {
    if !paths.contains(&path) {
        paths.push(path);
    }
}

fn get_project_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "userdir").map(|d| d.config_dir().join("config.toml"))
}

fn get_xdg_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(dir).join("userdir").join("config.toml"));
    }

    BaseDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(".config")
            .join("userdir")
            .join("config.toml")
    })
}

fn get_local_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|dir| dir.join("userdir.toml"))
}
