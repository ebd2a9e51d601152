//! Configuration and settings management for Courtside
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Designer settings (zoom range, history depth, guides, render size)
//! - API settings (endpoint base URL, timeout, idempotency keys)
//! - Logging settings (level, output format)

use courtside_core::{ConfigError, Error, Result};
use courtside_designer::ZoomLimits;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "courtside";
const CONFIG_FILE: &str = "config.toml";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Designer canvas settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignerSettings {
    /// Smallest zoom in percent
    pub zoom_min: u32,
    /// Largest zoom in percent
    pub zoom_max: u32,
    /// Zoom in/out increment in percent
    pub zoom_step: u32,
    /// Zoom a new session starts at
    pub default_zoom: u32,
    /// Undo steps to keep; unbounded when absent
    pub history_capacity: Option<usize>,
    /// Show the printable-area guide in new sessions
    pub show_guides: bool,
    /// Default render width in pixels
    pub render_width: u32,
    /// Default render height in pixels
    pub render_height: u32,
}

impl Default for DesignerSettings {
    fn default() -> Self {
        Self {
            zoom_min: 50,
            zoom_max: 200,
            zoom_step: 10,
            default_zoom: 100,
            history_capacity: None,
            show_guides: true,
            render_width: 600,
            render_height: 600,
        }
    }
}

impl DesignerSettings {
    /// Zoom range for the designer state
    pub fn zoom_limits(&self) -> ZoomLimits {
        ZoomLimits {
            min: self.zoom_min,
            max: self.zoom_max,
            step: self.zoom_step,
        }
    }
}

/// Storefront API settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL the endpoint paths are joined to
    pub base_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// Send an `Idempotency-Key` header with every save
    pub idempotency_keys: bool,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_ms: 30_000,
            idempotency_keys: true,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default level when RUST_LOG is unset
    pub level: String,
    /// Emit JSON lines instead of the pretty format
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Designer settings
    pub designer: DesignerSettings,
    /// API settings
    pub api: ApiSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

fn invalid(setting: &str, reason: impl Into<String>) -> Error {
    ConfigError::InvalidSetting {
        setting: setting.to_string(),
        reason: reason.into(),
    }
    .into()
}

fn parse_error(e: impl std::fmt::Display) -> Error {
    ConfigError::Parse {
        reason: e.to_string(),
    }
    .into()
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Result<Format> {
    if path.extension().is_some_and(|ext| ext == "json") {
        Ok(Format::Json)
    } else if path.extension().is_some_and(|ext| ext == "toml") {
        Ok(Format::Toml)
    } else {
        Err(ConfigError::UnsupportedFormat {
            path: path.display().to_string(),
        }
        .into())
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config location: `<config dir>/courtside/config.toml`
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR);
        path.push(CONFIG_FILE);
        path
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content).map_err(parse_error)?,
            Format::Toml => toml::from_str(&content).map_err(parse_error)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the config at `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self).map_err(parse_error)?,
            Format::Toml => toml::to_string_pretty(self).map_err(parse_error)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let designer = &self.designer;
        if designer.zoom_min == 0 {
            return Err(invalid("designer.zoom_min", "must be > 0"));
        }
        if designer.zoom_min > designer.zoom_max {
            return Err(invalid("designer.zoom_max", "must be >= zoom_min"));
        }
        if designer.zoom_step == 0 {
            return Err(invalid("designer.zoom_step", "must be > 0"));
        }
        if !(designer.zoom_min..=designer.zoom_max).contains(&designer.default_zoom) {
            return Err(invalid(
                "designer.default_zoom",
                format!("must be within {}..={}", designer.zoom_min, designer.zoom_max),
            ));
        }
        if designer.history_capacity == Some(0) {
            return Err(invalid("designer.history_capacity", "must be > 0"));
        }
        if designer.render_width == 0 || designer.render_height == 0 {
            return Err(invalid("designer.render_width", "render size must be > 0"));
        }

        let base_url = self.api.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(invalid("api.base_url", "must start with http:// or https://"));
        }
        if self.api.timeout_ms == 0 {
            return Err(invalid("api.timeout_ms", "must be > 0"));
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(invalid(
                "logging.level",
                format!("must be one of {}", LOG_LEVELS.join(", ")),
            ));
        }

        Ok(())
    }
}
