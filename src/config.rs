//! Application configuration.
//!
//! All settings have fixed defaults matching the original tool (600x400
//! window, 100-sweep history, `ubertooth-specan -g`). An optional
//! `specview.toml` in the working directory can override them; any problem
//! reading or parsing it falls back to the defaults with a warning.

use crate::error::{Result, SpecViewError};
use serde::Deserialize;
use std::path::Path;

/// Default config file looked up in the working directory.
pub const CONFIG_FILE: &str = "specview.toml";

pub const DEFAULT_WINDOW_WIDTH: f32 = 600.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 400.0;

/// How the external scanner process is launched.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SourceConfig {
    /// Executable name, resolved via the OS search path.
    pub command: String,
    pub args: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            command: "ubertooth-specan".to_string(),
            // -g selects the scanner's continuous streaming output
            args: vec!["-g".to_string()],
        }
    }
}

/// Top-level application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: f32,
    pub window_height: f32,
    /// Number of recent sweeps kept for display.
    pub history_depth: usize,
    pub source: SourceConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            history_depth: crate::history::DEFAULT_HISTORY_DEPTH,
            source: SourceConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SpecViewError::Config(format!("Failed to read config: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| SpecViewError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load `specview.toml` from the working directory if present,
    /// returning defaults otherwise (or on any load error).
    pub fn load_or_default() -> Self {
        if !Path::new(CONFIG_FILE).exists() {
            return Self::default();
        }
        Self::load(CONFIG_FILE).unwrap_or_else(|e| {
            tracing::warn!("Failed to load {}, using defaults: {}", CONFIG_FILE, e);
            Self::default()
        })
    }
}
