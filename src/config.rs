//! Configuration management for Neuron Chat
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{NeuronError, Result};
use crate::session::{ResponseStyle, Theme, UserSettings};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Neuron Chat
///
/// Holds everything the application needs: responder behavior, chat
/// session limits, and the user-settings defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Responder configuration (kind, simulated latency, RNG seed)
    #[serde(default)]
    pub responder: ResponderConfig,

    /// Chat session configuration
    #[serde(default)]
    pub chat: ChatConfig,

    /// User-settings defaults
    #[serde(default)]
    pub settings: SettingsConfig,
}

/// Responder configuration
///
/// Specifies which responder to build and how it behaves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponderConfig {
    /// Kind of responder to use ("mock" is the only built-in)
    #[serde(default = "default_responder_kind")]
    pub kind: String,

    /// Lower bound of the simulated reply latency (milliseconds)
    #[serde(default = "default_min_delay_ms")]
    pub min_delay_ms: u64,

    /// Upper bound of the simulated reply latency (milliseconds)
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,

    /// Optional RNG seed for reproducible greeting selection and latency
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_responder_kind() -> String {
    "mock".to_string()
}

fn default_min_delay_ms() -> u64 {
    1000
}

fn default_max_delay_ms() -> u64 {
    2000
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            kind: default_responder_kind(),
            min_delay_ms: default_min_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            seed: None,
        }
    }
}

/// Chat session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Maximum input length in characters; longer entries are silently
    /// truncated rather than rejected
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,

    /// Pre-populate the store with the built-in demo conversations
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
}

fn default_max_input_chars() -> usize {
    4000
}

fn default_seed_demo_data() -> bool {
    true
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_input_chars: default_max_input_chars(),
            seed_demo_data: default_seed_demo_data(),
        }
    }
}

/// User-settings defaults
///
/// The session starts from these values; in-chat commands can change
/// them for the lifetime of the session only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsConfig {
    /// Default assistant tone
    #[serde(default = "default_response_style")]
    pub response_style: ResponseStyle,

    /// Default interface theme
    #[serde(default = "default_theme")]
    pub theme: Theme,

    /// Default notifications toggle
    #[serde(default = "default_notifications")]
    pub notifications: bool,

    /// Average session length shown in the settings view (minutes)
    #[serde(default = "default_average_session_length")]
    pub average_session_length: u32,
}

fn default_response_style() -> ResponseStyle {
    ResponseStyle::Formal
}

fn default_theme() -> Theme {
    Theme::Dark
}

fn default_notifications() -> bool {
    true
}

fn default_average_session_length() -> u32 {
    12
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            response_style: default_response_style(),
            theme: default_theme(),
            notifications: default_notifications(),
            average_session_length: default_average_session_length(),
        }
    }
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| NeuronError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| NeuronError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(kind) = std::env::var("NEURON_RESPONDER") {
            self.responder.kind = kind;
        }

        if let Ok(min_delay) = std::env::var("NEURON_MIN_DELAY_MS") {
            if let Ok(value) = min_delay.parse() {
                self.responder.min_delay_ms = value;
            } else {
                tracing::warn!("Invalid NEURON_MIN_DELAY_MS: {}", min_delay);
            }
        }

        if let Ok(max_delay) = std::env::var("NEURON_MAX_DELAY_MS") {
            if let Ok(value) = max_delay.parse() {
                self.responder.max_delay_ms = value;
            } else {
                tracing::warn!("Invalid NEURON_MAX_DELAY_MS: {}", max_delay);
            }
        }

        if let Ok(seed) = std::env::var("NEURON_RESPONDER_SEED") {
            if let Ok(value) = seed.parse() {
                self.responder.seed = Some(value);
            } else {
                tracing::warn!("Invalid NEURON_RESPONDER_SEED: {}", seed);
            }
        }

        if let Ok(max_input) = std::env::var("NEURON_MAX_INPUT_CHARS") {
            if let Ok(value) = max_input.parse() {
                self.chat.max_input_chars = value;
            } else {
                tracing::warn!("Invalid NEURON_MAX_INPUT_CHARS: {}", max_input);
            }
        }

        if let Ok(seed_demo) = std::env::var("NEURON_SEED_DEMO") {
            match seed_demo.parse::<bool>() {
                Ok(value) => self.chat.seed_demo_data = value,
                Err(_) => tracing::warn!("Invalid NEURON_SEED_DEMO: {}", seed_demo),
            }
        }

        if let Ok(style) = std::env::var("NEURON_RESPONSE_STYLE") {
            match ResponseStyle::parse_str(&style) {
                Ok(value) => self.settings.response_style = value,
                Err(_) => tracing::warn!("Invalid NEURON_RESPONSE_STYLE: {}", style),
            }
        }

        if let Ok(theme) = std::env::var("NEURON_THEME") {
            match Theme::parse_str(&theme) {
                Ok(value) => self.settings.theme = value,
                Err(_) => tracing::warn!("Invalid NEURON_THEME: {}", theme),
            }
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if cli.verbose {
            tracing::debug!("Verbose mode enabled");
        }
    }

    /// Validate the configuration
    ///
    /// Ensures the delay bounds are ordered and the input cap is usable.
    ///
    /// # Errors
    ///
    /// Returns [`NeuronError::Config`] describing the first violation.
    pub fn validate(&self) -> Result<()> {
        if self.responder.kind.is_empty() {
            return Err(NeuronError::Config("responder.kind must not be empty".to_string()).into());
        }

        if self.responder.min_delay_ms > self.responder.max_delay_ms {
            return Err(NeuronError::Config(format!(
                "responder.min_delay_ms ({}) exceeds responder.max_delay_ms ({})",
                self.responder.min_delay_ms, self.responder.max_delay_ms
            ))
            .into());
        }

        if self.chat.max_input_chars == 0 {
            return Err(
                NeuronError::Config("chat.max_input_chars must be greater than zero".to_string())
                    .into(),
            );
        }

        Ok(())
    }

    /// Builds the session's user settings from the configured defaults
    ///
    /// `total_conversations` is captured once here as a display-only
    /// snapshot; it is not recomputed as the store changes.
    pub fn user_settings(&self, total_conversations: usize) -> UserSettings {
        UserSettings {
            response_style: self.settings.response_style,
            theme: self.settings.theme,
            notifications: self.settings.notifications,
            average_session_length: self.settings.average_session_length,
            total_conversations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "NEURON_RESPONDER",
            "NEURON_MIN_DELAY_MS",
            "NEURON_MAX_DELAY_MS",
            "NEURON_RESPONDER_SEED",
            "NEURON_MAX_INPUT_CHARS",
            "NEURON_SEED_DEMO",
            "NEURON_RESPONSE_STYLE",
            "NEURON_THEME",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.responder.kind, "mock");
        assert_eq!(config.responder.min_delay_ms, 1000);
        assert_eq!(config.responder.max_delay_ms, 2000);
        assert_eq!(config.responder.seed, None);
        assert_eq!(config.chat.max_input_chars, 4000);
        assert!(config.chat.seed_demo_data);
        assert_eq!(config.settings.response_style, ResponseStyle::Formal);
        assert_eq!(config.settings.theme, Theme::Dark);
        assert!(config.settings.notifications);
        assert_eq!(config.settings.average_session_length, 12);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_parse_partial_yaml_fills_defaults() {
        let yaml = r#"
responder:
  min_delay_ms: 0
  max_delay_ms: 0
settings:
  response_style: casual
"#;
        let config: Config = serde_yaml::from_str(yaml).expect("parse failed");
        assert_eq!(config.responder.kind, "mock");
        assert_eq!(config.responder.min_delay_ms, 0);
        assert_eq!(config.responder.max_delay_ms, 0);
        assert_eq!(config.settings.response_style, ResponseStyle::Casual);
        assert_eq!(config.settings.theme, Theme::Dark);
        assert_eq!(config.chat.max_input_chars, 4000);
    }

    #[test]
    fn test_validate_rejects_inverted_delay_bounds() {
        let mut config = Config::default();
        config.responder.min_delay_ms = 3000;
        config.responder.max_delay_ms = 1000;

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("min_delay_ms"));
    }

    #[test]
    fn test_validate_rejects_zero_input_cap() {
        let mut config = Config::default();
        config.chat.max_input_chars = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_responder_kind() {
        let mut config = Config::default();
        config.responder.kind = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_equal_delay_bounds() {
        let mut config = Config::default();
        config.responder.min_delay_ms = 0;
        config.responder.max_delay_ms = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_user_settings_snapshot() {
        let config = Config::default();
        let settings = config.user_settings(5);
        assert_eq!(settings.total_conversations, 5);
        assert_eq!(settings.response_style, ResponseStyle::Formal);
        assert_eq!(settings.average_session_length, 12);
    }

    #[test]
    #[serial]
    fn test_env_overrides_delays_and_seed() {
        clear_env();
        std::env::set_var("NEURON_MIN_DELAY_MS", "0");
        std::env::set_var("NEURON_MAX_DELAY_MS", "5");
        std::env::set_var("NEURON_RESPONDER_SEED", "42");

        let mut config = Config::default();
        config.apply_env_vars();
        assert_eq!(config.responder.min_delay_ms, 0);
        assert_eq!(config.responder.max_delay_ms, 5);
        assert_eq!(config.responder.seed, Some(42));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_env_overrides_settings() {
        clear_env();
        std::env::set_var("NEURON_RESPONSE_STYLE", "creative");
        std::env::set_var("NEURON_THEME", "light");
        std::env::set_var("NEURON_SEED_DEMO", "false");

        let mut config = Config::default();
        config.apply_env_vars();
        assert_eq!(config.settings.response_style, ResponseStyle::Creative);
        assert_eq!(config.settings.theme, Theme::Light);
        assert!(!config.chat.seed_demo_data);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_env_invalid_values_keep_defaults() {
        clear_env();
        std::env::set_var("NEURON_MIN_DELAY_MS", "not-a-number");
        std::env::set_var("NEURON_RESPONSE_STYLE", "verbose");

        let mut config = Config::default();
        config.apply_env_vars();
        assert_eq!(config.responder.min_delay_ms, 1000);
        assert_eq!(config.settings.response_style, ResponseStyle::Formal);

        clear_env();
    }
}
