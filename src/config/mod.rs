//! Configuration management.
//!
//! Settings come from three places, strongest last: built-in defaults, an
//! optional TOML file, and `PUBGRID_*` environment variables. Command-line
//! flags override all of these in the binary.
//!
//! # Configuration File Format
//!
//! ```toml
//! url = "https://example.com/feed.csv"
//! page_size = 10
//!
//! [http]
//! timeout_secs = 30
//! connect_timeout_secs = 10
//! user_agent = "pubgrid/0.2"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The feed the explorer points at when nothing else is configured.
pub const DEFAULT_FEED_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vSHAAiPFIlWiXooENqd4nDAqOzUfUNUlQoH-qQlCdnFTVmtnyeh1fbS-HNvnCtWb2Xp4YP0Ws8Xm_xS/pub?output=csv";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// CSV feed to fetch publications from
    #[serde(default = "default_feed_url")]
    pub url: String,

    /// Records shown per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
            page_size: default_page_size(),
            http: HttpConfig::default(),
        }
    }
}

impl AppConfig {
    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

fn default_page_size() -> usize {
    10
}

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Total request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection timeout (seconds)
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// User-Agent override; the crate name and version otherwise
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            user_agent: None,
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

/// Load configuration from a file, with `PUBGRID_*` environment overrides.
pub fn load_config(path: &Path) -> Result<AppConfig, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(config::Environment::with_prefix("PUBGRID").try_parsing(true))
        .build()?;

    settings.try_deserialize()
}

/// Configuration from environment overrides alone, when no file exists.
pub fn get_config() -> Result<AppConfig, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::Environment::with_prefix("PUBGRID").try_parsing(true))
        .build()?;

    settings.try_deserialize()
}

/// Look for a config file in the default locations: `pubgrid.toml` in the
/// working directory, then `pubgrid/config.toml` under the platform config
/// directory.
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from("pubgrid.toml");
    if local.exists() {
        return Some(local);
    }

    let path = dirs::config_dir()?.join("pubgrid").join("config.toml");
    path.exists().then_some(path)
}
