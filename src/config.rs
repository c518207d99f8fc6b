//! Application configuration persisted as TOML under the app directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings loaded at startup; a missing file yields (and writes) defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub report: ReportSettings,
}

/// Where the GenAI backend lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Base URL of the backend exposing `/genai-api/*`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Option sets for the report request form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Districts offered in the region selector.
    #[serde(default = "default_districts")]
    pub districts: Vec<String>,
    /// First selectable start year.
    #[serde(default = "default_year_floor")]
    pub year_floor: i32,
    /// Last selectable year for both dropdowns.
    #[serde(default = "default_year_ceiling")]
    pub year_ceiling: i32,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            districts: default_districts(),
            year_floor: default_year_floor(),
            year_ceiling: default_year_ceiling(),
        }
    }
}

/// Errors that may occur while loading or persisting the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The app directory could not be resolved or created.
    #[error(transparent)]
    Dirs(#[from] app_dirs::AppDirError),
    /// Failed to read the config file.
    #[error("Failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write the config file.
    #[error("Failed to write config at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The config file is not valid TOML for this schema.
    #[error("Failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Failed to serialize the default configuration.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// The configured base URL does not parse.
    #[error("Invalid base URL {url}: {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
}

/// Load the configuration, writing a default file on first run.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let dir = app_dirs::app_root_dir()?;
    load_from(&dir)
}

pub(crate) fn load_from(dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        let config = AppConfig::default();
        save_to(dir, &config)?;
        return Ok(config);
    }
    let text = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let config: AppConfig =
        toml::from_str(&text).map_err(|source| ConfigError::Parse { path, source })?;
    validate_base_url(&config.server.base_url)?;
    Ok(config)
}

pub(crate) fn save_to(dir: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    let text = toml::to_string_pretty(config)?;
    fs::write(&path, text).map_err(|source| ConfigError::Write { path, source })
}

fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    url::Url::parse(base_url)
        .map(|_| ())
        .map_err(|source| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_year_floor() -> i32 {
    2015
}

fn default_year_ceiling() -> i32 {
    2030
}

fn default_districts() -> Vec<String> {
    [
        "강남구", "강동구", "강북구", "강서구", "관악구", "광진구", "구로구", "금천구",
        "노원구", "도봉구", "동대문구", "동작구", "마포구", "서대문구", "서초구", "성동구",
        "성북구", "송파구", "양천구", "영등포구", "용산구", "은평구", "종로구", "중구",
        "중랑구",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
