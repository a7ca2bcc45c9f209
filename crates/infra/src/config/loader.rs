//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `VEGGIEWORLD_EXPORT_DIR` is not set, falls back to a config file
//! 3. Probes multiple paths for config files (JSON or TOML)
//! 4. If no file exists either, uses [`Config::default`]
//!
//! ## Environment Variables
//! - `VEGGIEWORLD_EXPORT_DIR`: Directory exported files are written to
//!   (required for environment loading)
//! - `VEGGIEWORLD_EXPORT_SAMPLE_ROWS`: Generated rows per orders export
//! - `VEGGIEWORLD_EXPORT_FORMAT`: Preselected format (`csv`, `excel`, `json`)
//! - `VEGGIEWORLD_PRIMARY_ADMIN_ID`: Team member id that cannot be removed
//! - `VEGGIEWORLD_LOG_LEVEL`: Default log level
//! - `VEGGIEWORLD_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./veggieworld.json` or `./veggieworld.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use veggieworld_domain::{Config, DashboardError, ExportConfig, LoggingConfig, Result, RosterConfig};

/// Load configuration with automatic fallback strategy
///
/// Environment first, then a probed config file, then defaults. An invalid
/// value in whichever source is chosen is an error rather than a fallback.
///
/// # Errors
/// Returns `DashboardError::Config` if the chosen source holds an invalid
/// value or the config file cannot be parsed.
pub fn load() -> Result<Config> {
    if std::env::var_os("VEGGIEWORLD_EXPORT_DIR").is_some() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        return Ok(config);
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from environment variables
///
/// `VEGGIEWORLD_EXPORT_DIR` must be set; every other variable falls back to
/// its default when unset.
///
/// # Errors
/// Returns `DashboardError::Config` if the export directory is missing or a
/// variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let defaults = Config::default();

    let output_dir = env_var("VEGGIEWORLD_EXPORT_DIR")?;
    let sample_rows = env_parse("VEGGIEWORLD_EXPORT_SAMPLE_ROWS", defaults.export.sample_rows)?;
    let default_format = env_parse("VEGGIEWORLD_EXPORT_FORMAT", defaults.export.default_format)?;

    let primary_admin_id = std::env::var("VEGGIEWORLD_PRIMARY_ADMIN_ID")
        .unwrap_or(defaults.roster.primary_admin_id);
    let level = std::env::var("VEGGIEWORLD_LOG_LEVEL").unwrap_or(defaults.logging.level);
    let json = env_bool("VEGGIEWORLD_LOG_JSON", defaults.logging.json);

    let config = Config {
        export: ExportConfig { output_dir, sample_rows, default_format },
        roster: RosterConfig { primary_admin_id },
        logging: LoggingConfig { level, json },
    };
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
/// Sections and fields missing from the file take their defaults.
///
/// # Errors
/// Returns `DashboardError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DashboardError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            DashboardError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DashboardError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`). The parsed
/// config is validated the same way as one built from the environment.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let config: Config = match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DashboardError::Config(format!("Invalid TOML format: {}", e)))?,
        "json" => serde_json::from_str(contents)
            .map_err(|e| DashboardError::Config(format!("Invalid JSON format: {}", e)))?,
        _ => {
            return Err(DashboardError::Config(format!(
                "Unsupported config format: {}",
                extension
            )))
        }
    };

    config.validate()?;
    Ok(config)
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidate_files(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidate_files(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidate_files(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("veggieworld.json"),
        dir.join("veggieworld.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
    ]
}

/// Get required environment variable
///
/// # Errors
/// Returns `DashboardError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        DashboardError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse an optional environment variable, using `default` when unset.
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| DashboardError::Config(format!("Invalid value for {}: {}", key, e))),
        Err(_) => Ok(default),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
