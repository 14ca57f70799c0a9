use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

use crate::{
    fetch::{BASE_URL, REQUEST_TIMEOUT_SECS},
    locale::Lang,
};

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// default_lang = "tc"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HKO open-data endpoint.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Language used when none is requested, e.g. "en" or "tc".
    pub default_lang: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout_secs: REQUEST_TIMEOUT_SECS,
            default_lang: None,
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Stored default language; unknown codes fall back like any other request.
    pub fn default_lang(&self) -> Lang {
        Lang::resolve(self.default_lang.as_deref())
    }

    pub fn set_default_lang(&mut self, lang: Lang) {
        self.default_lang = Some(lang.as_str().to_string());
    }

    /// The requested language if given, otherwise the configured default.
    pub fn lang_for(&self, requested: Option<&str>) -> Lang {
        match requested {
            Some(code) => code.parse().unwrap_or_else(|_| self.default_lang()),
            None => self.default_lang(),
        }
    }

    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)?;

        if cfg.timeout_secs == 0 {
            return Err(anyhow!("timeout_secs must be greater than zero"));
        }

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("hk", "hko-weather", "hko-weather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
