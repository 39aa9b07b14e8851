//! Configuration Management Module
//!
//! File-based configuration for the web server and the terminal pacing, with
//! environment variable overrides and validation. A missing configuration file
//! is not an error: the defaults are used.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::{Error, Result};

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "REFEREE_";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const MAX_TYPING_DELAY_MS: u64 = 1000;

/// Configuration file format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub enum ConfigFormat {
    Json,
    #[default]
    Toml,
    Yaml,
}

impl ConfigFormat {
    fn extension(self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            ConfigFormat::Toml => "toml",
            ConfigFormat::Yaml => "yaml",
        }
    }

    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl std::str::FromStr for ConfigFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ConfigFormat::Json),
            "toml" => Ok(ConfigFormat::Toml),
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct RefereeConfig {
    /// Web shell settings
    pub server: ServerSettings,
    /// Terminal and demo pacing
    pub pacing: PacingSettings,
    /// Global settings
    pub settings: ConfigSettings,
}

/// Web shell settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Open a browser window once the server is up
    pub open_browser: bool,
    /// Delay before the browser is opened
    pub browser_delay_ms: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            open_browser: true,
            browser_delay_ms: 1500,
        }
    }
}

impl ServerSettings {
    pub fn browser_delay(&self) -> Duration {
        Duration::from_millis(self.browser_delay_ms)
    }

    /// URL a local browser should open
    pub fn local_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}

/// Delays used by the terminal shells
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PacingSettings {
    /// Delay between characters of a typed answer
    pub typing_delay_ms: u64,
    /// Delay between the dots of the "analyzing" indicator
    pub thinking_step_ms: u64,
    /// Pause after a recommendation banner
    pub result_pause_ms: u64,
    /// Pause before the next demo scenario
    pub scenario_pause_ms: u64,
    /// Clear the terminal between demo scenarios
    pub clear_screen: bool,
}

impl Default for PacingSettings {
    fn default() -> Self {
        Self {
            typing_delay_ms: 30,
            thinking_step_ms: 500,
            result_pause_ms: 2000,
            scenario_pause_ms: 3000,
            clear_screen: true,
        }
    }
}

impl PacingSettings {
    /// No delays and no screen clearing
    pub fn instant() -> Self {
        Self {
            typing_delay_ms: 0,
            thinking_step_ms: 0,
            result_pause_ms: 0,
            scenario_pause_ms: 0,
            clear_screen: false,
        }
    }
}

/// Global configuration settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfigSettings {
    pub log_level: String,
}

impl Default for ConfigSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
    config_format: ConfigFormat,
    config: RefereeConfig,
}

impl ConfigManager {
    /// Load from the default location, then apply environment overrides
    pub fn new() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        Self::with_path(config_path)
    }

    /// Load from `path`, then apply environment overrides
    ///
    /// The format follows the file extension; a path without a recognised
    /// extension is treated as TOML.
    pub fn with_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_path = path.as_ref().to_path_buf();
        let config_format = match config_path.extension() {
            Some(ext) => ConfigFormat::from_path(&config_path)
                .ok_or_else(|| Error::UnsupportedFormat(ext.to_string_lossy().into_owned()))?,
            None => ConfigFormat::default(),
        };

        let mut manager = Self {
            config_path,
            config_format,
            config: RefereeConfig::default(),
        };

        if manager.config_exists() {
            manager.load_config()?;
        } else {
            debug!(
                "No configuration at {:?}, using defaults",
                manager.config_path
            );
        }

        manager.apply_env_overrides();
        manager.validate_config()?;

        Ok(manager)
    }

    /// `<config_dir>/model-referee/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            Error::InvalidConfig("Could not determine config directory".to_string())
        })?;
        Ok(config_dir
            .join("model-referee")
            .join("config")
            .with_extension(ConfigFormat::default().extension()))
    }

    /// Check if configuration file exists
    pub fn config_exists(&self) -> bool {
        self.config_path.exists()
    }

    /// Load configuration from file
    pub fn load_config(&mut self) -> Result<()> {
        let content = fs::read_to_string(&self.config_path)?;
        self.config = Self::parse(&content, self.config_format)?;
        info!("Loaded configuration from {:?}", self.config_path);
        Ok(())
    }

    /// Parse configuration text in the given format
    pub fn parse(content: &str, format: ConfigFormat) -> Result<RefereeConfig> {
        let config = match format {
            ConfigFormat::Toml => {
                toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))?
            }
            ConfigFormat::Json => {
                serde_json::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))?
            }
            ConfigFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))?
            }
        };
        Ok(config)
    }

    /// Serialize the current configuration in the manager's format
    pub fn to_string_pretty(&self) -> Result<String> {
        let content = match self.config_format {
            ConfigFormat::Toml => toml::to_string_pretty(&self.config)
                .map_err(|e| Error::ConfigSerialize(e.to_string()))?,
            ConfigFormat::Json => serde_json::to_string_pretty(&self.config)
                .map_err(|e| Error::ConfigSerialize(e.to_string()))?,
            ConfigFormat::Yaml => serde_yaml::to_string(&self.config)
                .map_err(|e| Error::ConfigSerialize(e.to_string()))?,
        };
        Ok(content)
    }

    /// Save configuration to file
    pub fn save_config(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.config_path, self.to_string_pretty()?)?;

        info!("Saved configuration to {:?}", self.config_path);
        Ok(())
    }

    /// Apply `REFEREE_*` environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| lookup(&format!("{ENV_PREFIX}{suffix}"));

        if let Some(host) = var("HOST") {
            self.config.server.host = host;
            debug!("Applied env override for host");
        }

        if let Some(port) = var("PORT") {
            match port.parse::<u16>() {
                Ok(port) => {
                    self.config.server.port = port;
                    debug!("Applied env override for port");
                }
                Err(_) => warn!("Ignoring invalid {ENV_PREFIX}PORT value '{}'", port),
            }
        }

        if let Some(open_browser) = var("OPEN_BROWSER") {
            match parse_bool(&open_browser) {
                Some(open_browser) => {
                    self.config.server.open_browser = open_browser;
                    debug!("Applied env override for open_browser");
                }
                None => warn!(
                    "Ignoring invalid {ENV_PREFIX}OPEN_BROWSER value '{}'",
                    open_browser
                ),
            }
        }

        if let Some(log_level) = var("LOG_LEVEL") {
            let normalized = log_level.to_lowercase();
            if LOG_LEVELS.contains(&normalized.as_str()) {
                self.config.settings.log_level = normalized;
                debug!("Applied env override for log level");
            } else {
                warn!(
                    "Ignoring invalid {ENV_PREFIX}LOG_LEVEL value '{}'",
                    log_level
                );
            }
        }

        if let Some(delay) = var("TYPING_DELAY_MS") {
            match delay.parse::<u64>() {
                Ok(delay) => {
                    self.config.pacing.typing_delay_ms = delay;
                    debug!("Applied env override for typing delay");
                }
                Err(_) => warn!(
                    "Ignoring invalid {ENV_PREFIX}TYPING_DELAY_MS value '{}'",
                    delay
                ),
            }
        }

        if let Some(clear_screen) = var("CLEAR_SCREEN") {
            match parse_bool(&clear_screen) {
                Some(clear_screen) => {
                    self.config.pacing.clear_screen = clear_screen;
                    debug!("Applied env override for clear_screen");
                }
                None => warn!(
                    "Ignoring invalid {ENV_PREFIX}CLEAR_SCREEN value '{}'",
                    clear_screen
                ),
            }
        }
    }

    /// Validate configuration
    pub fn validate_config(&self) -> Result<()> {
        validate(&self.config)
    }

    /// Get the current configuration
    pub fn get_config(&self) -> &RefereeConfig {
        &self.config
    }

    /// Get mutable configuration
    pub fn get_config_mut(&mut self) -> &mut RefereeConfig {
        &mut self.config
    }

    /// Consume the manager, keeping the configuration
    pub fn into_config(self) -> RefereeConfig {
        self.config
    }

    /// Get configuration file path
    pub fn get_config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get configuration format
    pub fn get_config_format(&self) -> ConfigFormat {
        self.config_format
    }
}

/// Validate a configuration value
pub fn validate(config: &RefereeConfig) -> Result<()> {
    if config.server.host.trim().is_empty() {
        return Err(Error::InvalidConfig("Server host must not be empty".to_string()));
    }

    if !LOG_LEVELS.contains(&config.settings.log_level.as_str()) {
        return Err(Error::InvalidConfig(format!(
            "Unknown log level '{}' (expected one of {})",
            config.settings.log_level,
            LOG_LEVELS.join(", ")
        )));
    }

    if config.pacing.typing_delay_ms > MAX_TYPING_DELAY_MS {
        return Err(Error::InvalidConfig(format!(
            "Typing delay must be at most {} ms, got: {}",
            MAX_TYPING_DELAY_MS, config.pacing.typing_delay_ms
        )));
    }

    Ok(())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
