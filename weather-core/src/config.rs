use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

use crate::theme::{BackgroundResolver, StaticAssets, UnsplashHotlink};

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_ASSET_BASE_URL: &str = "https://assets.example.com/weather";

/// Where background images come from.
///
/// Example TOML:
/// [background]
/// kind = "static"
/// base_url = "https://cdn.example.com/weather"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BackgroundSource {
    Static { base_url: String },
    Unsplash,
}

impl Default for BackgroundSource {
    fn default() -> Self {
        BackgroundSource::Static { base_url: DEFAULT_ASSET_BASE_URL.to_string() }
    }
}

impl BackgroundSource {
    pub fn resolver(&self) -> Box<dyn BackgroundResolver> {
        match self {
            BackgroundSource::Static { base_url } => Box::new(StaticAssets::new(base_url.clone())),
            BackgroundSource::Unsplash => Box::new(UnsplashHotlink),
        }
    }
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Open-Meteo geocoding search endpoint.
    pub geocoding_url: String,

    /// Open-Meteo forecast endpoint.
    pub forecast_url: String,

    /// Per-request HTTP timeout.
    pub timeout_secs: u64,

    pub background: BackgroundSource,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
            timeout_secs: 10,
            background: BackgroundSource::default(),
        }
    }
}

impl Config {
    /// Load config from the platform config dir, or defaults on first run.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load config from `path`, or defaults if the file doesn't exist yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
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
        let dirs = ProjectDirs::from("dev", "weather-lookup", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
