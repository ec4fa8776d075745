//! Configuration file support for chronopick.
//!
//! Configuration is loaded from `~/.config/chronopick/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/chronopick/config.toml
//! help_input = "?"
//! color = true
//! log = true
//! log_dir = "/tmp/chronopick-logs"
//! output_format = "%Y-%m-%d %H:%M:%S"
//! ```

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Result;

const DEFAULT_HELP_INPUT: &str = "?";

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Key that reveals the help text; only the first character is used
    pub help_input: Option<String>,

    /// Force color on or off (unset = detect from NO_COLOR and the terminal)
    pub color: Option<bool>,

    /// Write a log file for each run
    pub log: bool,

    /// Directory for log files
    pub log_dir: Option<PathBuf>,

    /// strftime format used when printing the selected value
    pub output_format: Option<String>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chronopick")
            .join("config.toml")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, color: Option<bool>, output_format: Option<String>) -> Self {
        if color.is_some() {
            self.color = color;
        }
        if output_format.is_some() {
            self.output_format = output_format;
        }
        self
    }

    /// The help key, or None when help input is disabled with an empty string.
    pub fn help_key(&self) -> Option<char> {
        self.help_input
            .as_deref()
            .unwrap_or(DEFAULT_HELP_INPUT)
            .chars()
            .next()
    }

    /// Whether logging is enabled, by file or by `CHRONOPICK_LOG`.
    pub fn logging_enabled(&self) -> bool {
        self.log || Self::env_flag(std::env::var("CHRONOPICK_LOG").ok().as_deref())
    }

    /// Get the log directory, falling back to `~/.chronopick/logs`.
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(crate::log::default_dir)
    }

    fn env_flag(value: Option<&str>) -> bool {
        matches!(value, Some("1" | "true" | "yes"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.help_input.is_none());
        assert!(config.color.is_none());
        assert!(!config.log);
        assert_eq!(config.help_key(), Some('?'));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            help_input = "h"
            color = false
            log = true
            log_dir = "/tmp/logs"
            output_format = "%Y-%m-%d"
        "#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.help_key(), Some('h'));
        assert_eq!(config.color, Some(false));
        assert!(config.log);
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/logs"));
        assert_eq!(config.output_format.as_deref(), Some("%Y-%m-%d"));
    }

    #[test]
    fn test_empty_help_input_disables_help_key() {
        let config = Config::parse(r#"help_input = """#).unwrap();
        assert_eq!(config.help_key(), None);
    }

    #[test]
    fn test_parse_error_is_config_error() {
        let err = Config::parse("log = \"nope\"").unwrap_err();
        assert!(matches!(err, crate::error::PickerError::Config(_)));
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = Config::parse("color = true").unwrap();
        let config = config.with_overrides(Some(false), Some("%H:%M".to_string()));
        assert_eq!(config.color, Some(false));
        assert_eq!(config.output_format.as_deref(), Some("%H:%M"));

        let config = config.with_overrides(None, None);
        assert_eq!(config.color, Some(false));
    }

    #[test]
    fn test_env_flag_values() {
        assert!(Config::env_flag(Some("1")));
        assert!(Config::env_flag(Some("true")));
        assert!(!Config::env_flag(Some("0")));
        assert!(!Config::env_flag(None));
    }
}
