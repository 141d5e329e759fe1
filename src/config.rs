//! Configuration for reelbase paths and logging.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (REELBASE_HOME, REELBASE_DATA_FILE, REELBASE_LOG)
//! 2. Config file (.reelbase/config.yaml)
//! 3. Defaults (~/.reelbase, ~/.reelbase/catalog.csv, info)
//!
//! Config file discovery:
//! - Searches current directory and parents for .reelbase/config.yaml
//! - Relative paths in the config file resolve against the project root
//!   (the directory that contains .reelbase/)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Directory name searched for during discovery
pub const CONFIG_DIR: &str = ".reelbase";

/// Catalog file name used when none is configured
pub const DEFAULT_DATA_FILE: &str = "catalog.csv";

/// Log filter used when none is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// State directory
    pub home: Option<String>,
    /// Catalog file the CLI loads and saves
    pub data_file: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive
    pub level: Option<String>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub home: PathBuf,
    pub data_file: PathBuf,
    pub log_level: String,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

/// Find config file by searching `start` and its parents
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_DIR).join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to `base`
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Merge the three sources. `env` looks up an environment variable.
fn resolve(
    file: Option<(&Path, ConfigFile)>,
    env: impl Fn(&str) -> Option<String>,
    default_home: PathBuf,
) -> ResolvedConfig {
    let (config_file, paths, logging) = match file {
        Some((path, config)) => {
            // Project root is the parent of .reelbase/
            let base_dir = path
                .parent()
                .and_then(|p| p.parent())
                .unwrap_or(Path::new("."))
                .to_path_buf();
            (Some((path.to_path_buf(), base_dir)), config.paths, config.logging)
        }
        None => (None, PathsConfig::default(), LoggingConfig::default()),
    };
    let base_dir = config_file.as_ref().map(|(_, base)| base.as_path());

    let home = match (env("REELBASE_HOME"), &paths.home, base_dir) {
        (Some(env_home), _, _) => PathBuf::from(env_home),
        (None, Some(home), Some(base)) => resolve_path(base, home),
        _ => default_home,
    };

    let data_file = match (env("REELBASE_DATA_FILE"), &paths.data_file, base_dir) {
        (Some(env_file), _, _) => PathBuf::from(env_file),
        (None, Some(file), Some(base)) => resolve_path(base, file),
        _ => home.join(DEFAULT_DATA_FILE),
    };

    let log_level = env("REELBASE_LOG")
        .or(logging.level)
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    ResolvedConfig {
        home,
        data_file,
        log_level,
        config_file: config_file.map(|(path, _)| path),
    }
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let default_home = dirs::home_dir()
        .context("Failed to determine home directory")?
        .join(CONFIG_DIR);

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let file = match find_config_file(&cwd) {
        Some(path) => {
            let parsed = load_config_file(&path)?;
            Some((path, parsed))
        }
        None => None,
    };

    Ok(resolve(
        file.as_ref().map(|(path, parsed)| (path.as_path(), parsed.clone())),
        |key| std::env::var(key).ok(),
        default_home,
    ))
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}

/// Get the catalog file the CLI works on
pub fn data_file() -> Result<PathBuf> {
    Ok(config()?.data_file.clone())
}
