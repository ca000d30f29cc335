//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub page: PageConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the page and its data documents live
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Static directory holding the page, its assets and `data/`
    #[serde(default = "default_site_root")]
    pub root: String,

    /// Biography document, relative to the page
    #[serde(default = "default_bio_path")]
    pub bio_path: String,

    /// Project list document, relative to the page
    #[serde(default = "default_projects_path")]
    pub projects_path: String,
}

fn default_site_root() -> String {
    "./site".to_string()
}

fn default_bio_path() -> String {
    "./data/aboutMeData.json".to_string()
}

fn default_projects_path() -> String {
    "./data/projectsData.json".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: default_site_root(),
            bio_path: default_bio_path(),
            projects_path: default_projects_path(),
        }
    }
}

/// Interaction tuning for the page
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    /// Distance the project list moves per arrow press
    #[serde(default = "default_scroll_step")]
    pub scroll_step: f64,

    /// Viewport width at and above which the project list scrolls vertically
    #[serde(default = "default_wide_breakpoint")]
    pub wide_breakpoint: f64,

    /// Maximum contact message length
    #[serde(default = "default_message_limit")]
    pub message_limit: usize,
}

fn default_scroll_step() -> f64 {
    150.0
}

fn default_wide_breakpoint() -> f64 {
    1024.0
}

fn default_message_limit() -> usize {
    300
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            scroll_step: default_scroll_step(),
            wide_breakpoint: default_wide_breakpoint(),
            message_limit: default_message_limit(),
        }
    }
}

/// Dev server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8084
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Socket address string for binding
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("folio").join("config.toml")),
            Some(PathBuf::from("./folio.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Site overrides
        if let Some(root) = var("FOLIO_SITE_ROOT") {
            self.site.root = root;
        }
        if let Some(path) = var("FOLIO_BIO_PATH") {
            self.site.bio_path = path;
        }
        if let Some(path) = var("FOLIO_PROJECTS_PATH") {
            self.site.projects_path = path;
        }

        // Server overrides
        if let Some(host) = var("FOLIO_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("FOLIO_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid FOLIO_PORT value {:?}", port),
            }
        }

        // Logging overrides
        if let Some(level) = var("FOLIO_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("FOLIO_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Folio Configuration
#
# Environment variables override these settings:
# - FOLIO_SITE_ROOT
# - FOLIO_BIO_PATH
# - FOLIO_PROJECTS_PATH
# - FOLIO_HOST
# - FOLIO_PORT
# - FOLIO_LOG_LEVEL
# - FOLIO_LOG_FORMAT

[site]
# Directory holding index.html, images, the wasm bundle and data/
root = "./site"

# Data documents, relative to the page
bio_path = "./data/aboutMeData.json"
projects_path = "./data/projectsData.json"

[page]
# Distance the project list moves per arrow press
scroll_step = 150.0

# Viewport width at and above which the project list scrolls vertically
wide_breakpoint = 1024.0

# Maximum contact message length
message_limit = 300

[server]
# Dev server host
host = "127.0.0.1"

# Dev server port
port = 8084

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
