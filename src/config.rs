//! Configuration for the fact-checker.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (FACTCHECK_PACING_MS, FACTCHECK_SEARCH_LIMIT,
//!    FACTCHECK_HISTORY_MAX, FACTCHECK_DISPLAY_WINDOW)
//! 2. Config file (.factcheck/config.yaml)
//! 3. Defaults
//!
//! Config file discovery:
//! - Searches current directory and parents for .factcheck/config.yaml
//! - Falls back to ~/.factcheck/config.yaml

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::adapters::DEFAULT_SEARCH_LIMIT;
use crate::core::history::DEFAULT_MAX_RECORDS;
use crate::core::{CheckSettings, InputLimits};

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

const DEFAULT_PACING_MS: u64 = 2000;
const DEFAULT_DISPLAY_WINDOW: usize = 5;

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub limits: Option<LimitsConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelineConfig {
    /// Artificial delay before each evidence lookup
    pub pacing_ms: Option<u64>,
    /// Evidence items requested per claim
    pub search_limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryConfig {
    /// Retention cap (0 = unbounded)
    pub max_records: Option<usize>,
    /// How many recent checks to display
    pub display_window: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    pub max_input_bytes: Option<usize>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub pacing_ms: u64,
    pub search_limit: usize,
    pub max_records: usize,
    pub display_window: usize,
    pub limits: InputLimits,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            pacing_ms: DEFAULT_PACING_MS,
            search_limit: DEFAULT_SEARCH_LIMIT,
            max_records: DEFAULT_MAX_RECORDS,
            display_window: DEFAULT_DISPLAY_WINDOW,
            limits: InputLimits::default(),
            config_file: None,
        }
    }
}

impl ResolvedConfig {
    /// Orchestrator settings derived from this config
    pub fn check_settings(&self) -> CheckSettings {
        CheckSettings {
            pacing: Duration::from_millis(self.pacing_ms),
            search_limit: self.search_limit,
        }
    }
}

/// Find config file by searching current directory and parents, then home
fn find_config_file() -> Option<PathBuf> {
    if let Ok(mut current) = std::env::current_dir() {
        loop {
            let config_path = current.join(".factcheck").join("config.yaml");
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }
    }

    let home_config = dirs::home_dir()?.join(".factcheck").join("config.yaml");
    home_config.exists().then_some(home_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse a numeric env override, if set
fn env_override<T>(env: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Invalid value for {}: {:?}", key, raw)),
        None => Ok(None),
    }
}

/// Merge file and environment over defaults
fn resolve(
    file: Option<(PathBuf, ConfigFile)>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig> {
    let mut resolved = ResolvedConfig::default();

    if let Some((path, config)) = file {
        if let Some(pacing_ms) = config.pipeline.pacing_ms {
            resolved.pacing_ms = pacing_ms;
        }
        if let Some(search_limit) = config.pipeline.search_limit {
            resolved.search_limit = search_limit;
        }
        if let Some(max_records) = config.history.max_records {
            resolved.max_records = max_records;
        }
        if let Some(display_window) = config.history.display_window {
            resolved.display_window = display_window;
        }
        if let Some(max_input_bytes) = config.limits.and_then(|l| l.max_input_bytes) {
            resolved.limits.max_input_bytes = max_input_bytes;
        }
        resolved.config_file = Some(path);
    }

    if let Some(v) = env_override(&env, "FACTCHECK_PACING_MS")? {
        resolved.pacing_ms = v;
    }
    if let Some(v) = env_override(&env, "FACTCHECK_SEARCH_LIMIT")? {
        resolved.search_limit = v;
    }
    if let Some(v) = env_override(&env, "FACTCHECK_HISTORY_MAX")? {
        resolved.max_records = v;
    }
    if let Some(v) = env_override(&env, "FACTCHECK_DISPLAY_WINDOW")? {
        resolved.display_window = v;
    }

    Ok(resolved)
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let file = match find_config_file() {
        Some(path) => {
            let config = load_config_file(&path)?;
            Some((path, config))
        }
        None => None,
    };

    resolve(file, |key| std::env::var(key).ok())
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}
