//! Configuration management for Pexelist
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CARD_SPACING_MAX, CONFIG_GENERATED, PER_PAGE_MAX, PER_PAGE_MIN, TICK_RATE_MAX_MS, TICK_RATE_MIN_MS,
};
use crate::icons::IconTheme;
use crate::utils::color;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub api: ApiConfig,
    pub logging: LoggingConfig,
    pub theme: ThemeConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Event loop tick in milliseconds
    pub tick_rate_ms: u64,
    /// Icon set: "ascii", "unicode" or "emoji"
    pub icon_theme: IconTheme,
}

/// Photo provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend type (only "pexels" for now)
    pub backend: String,
    pub base_url: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Results requested per query
    pub per_page: u32,
    pub timeout_secs: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
}

/// Colors and spacing used by the components.
///
/// Colors accept terminal color names ("cyan", "dark_gray") or `#RRGGBB`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub accent: String,
    pub text: String,
    pub muted: String,
    pub border: String,
    /// Blank rows between cards
    pub card_spacing: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            tick_rate_ms: 100,
            icon_theme: IconTheme::Unicode,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            backend: "pexels".to_string(),
            base_url: "https://api.pexels.com/v1".to_string(),
            api_key_env: "PEXELS_API_KEY".to_string(),
            per_page: 30,
            timeout_secs: 10,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: "yellow".to_string(),
            text: "white".to_string(),
            muted: "gray".to_string(),
            border: "dark_gray".to_string(),
            card_spacing: 1,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("pexelist.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("pexelist").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.tick_rate_ms < TICK_RATE_MIN_MS || self.ui.tick_rate_ms > TICK_RATE_MAX_MS {
            anyhow::bail!(
                "tick_rate_ms must be between {} and {}, got {}",
                TICK_RATE_MIN_MS,
                TICK_RATE_MAX_MS,
                self.ui.tick_rate_ms
            );
        }

        if self.api.per_page < PER_PAGE_MIN || self.api.per_page > PER_PAGE_MAX {
            anyhow::bail!(
                "per_page must be between {} and {}, got {}",
                PER_PAGE_MIN,
                PER_PAGE_MAX,
                self.api.per_page
            );
        }

        if self.api.api_key_env.trim().is_empty() {
            anyhow::bail!("api_key_env cannot be empty");
        }

        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            anyhow::bail!("base_url must be an http(s) URL, got '{}'", self.api.base_url);
        }

        if self.api.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be greater than 0");
        }

        for (name, value) in [
            ("accent", &self.theme.accent),
            ("text", &self.theme.text),
            ("muted", &self.theme.muted),
            ("border", &self.theme.border),
        ] {
            if color::parse_color(value).is_none() {
                anyhow::bail!("Invalid theme color for '{}': '{}'", name, value);
            }
        }

        if self.theme.card_spacing > CARD_SPACING_MAX {
            anyhow::bail!("card_spacing cannot exceed {}", CARD_SPACING_MAX);
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# Pexelist Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("pexelist"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
