use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::discovery::HttpOptions;
use crate::locator::{LocatorTemplate, DEFAULT_PACK_LINK};
use crate::retry::RetryPolicy;

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Base delay in seconds for exponential backoff (e.g. 0.25 = 250ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_secs: 0.25,
            max_delay_secs: 5,
        }
    }
}

/// Global configuration loaded from `~/.config/langpack/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LangpackConfig {
    /// Pack index URL with one `%ps_version%` placeholder.
    pub pack_link: String,
    /// Application version used when none is given on the command line.
    #[serde(default)]
    pub version: Option<String>,
    pub connect_timeout_secs: u64,
    /// Whole-request timeout.
    pub timeout_secs: u64,
    #[serde(default = "default_max_redirections")]
    pub max_redirections: u32,
    /// Optional retry policy; if missing, each lookup is a single attempt.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

fn default_max_redirections() -> u32 {
    HttpOptions::default().max_redirections
}

impl Default for LangpackConfig {
    fn default() -> Self {
        let http = HttpOptions::default();
        Self {
            pack_link: DEFAULT_PACK_LINK.to_string(),
            version: None,
            connect_timeout_secs: http.connect_timeout.as_secs(),
            timeout_secs: http.timeout.as_secs(),
            max_redirections: http.max_redirections,
            retry: None,
        }
    }
}

impl LangpackConfig {
    pub fn template(&self) -> Result<LocatorTemplate> {
        LocatorTemplate::new(self.pack_link.clone())
    }

    pub fn http_options(&self) -> HttpOptions {
        HttpOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.timeout_secs),
            max_redirections: self.max_redirections,
        }
    }

    pub fn retry_policy(&self) -> Option<RetryPolicy> {
        self.retry.as_ref().map(RetryPolicy::from)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("langpack")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LangpackConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<LangpackConfig> {
    if !path.exists() {
        let default_cfg = LangpackConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: LangpackConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
