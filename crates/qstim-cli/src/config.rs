//! Configuration management for the qstim CLI.
//!
//! Supports loading configuration from:
//! 1. Configuration files (YAML)
//! 2. Environment variables (with QSTIM_ prefix)
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line flags
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use qstim_qasm2::{LineEnding, TranslateOptions};

/// Conversion settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Line terminator for Stim output ("lf" or "crlf")
    pub line_ending: LineEnding,

    /// Directory for Stim files; next to the input when unset
    pub out_dir: Option<PathBuf>,

    /// Extension of files picked up in directory mode, without the dot
    pub input_extension: String,

    /// Extension of written files, without the dot
    pub output_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_ending: LineEnding::default(),
            out_dir: None,
            input_extension: default_input_extension(),
            output_extension: default_output_extension(),
        }
    }
}

fn default_input_extension() -> String {
    "qasm".to_string()
}

fn default_output_extension() -> String {
    "stim".to_string()
}

/// Location of the user configuration file (`<config dir>/qstim/config.yaml`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("qstim").join("config.yaml"))
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::IoError(format!("{}: {e}", path.as_ref().display()))
        })?;

        let config: Config = serde_yaml_ng::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with environment overrides.
    ///
    /// An explicit `config_file` must exist; the default location is only
    /// read when present.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::from_file(path)?,
                _ => Self::default(),
            },
        };

        let config = config.merge_vars(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `QSTIM_*` overrides from `lookup`.
    fn merge_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(value) = lookup("QSTIM_LINE_ENDING") {
            self.line_ending = value.parse().map_err(ConfigError::ValidationError)?;
        }
        if let Some(value) = lookup("QSTIM_OUT_DIR").filter(|v| !v.is_empty()) {
            self.out_dir = Some(PathBuf::from(value));
        }
        Ok(self)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, ext) in [
            ("input_extension", &self.input_extension),
            ("output_extension", &self.output_extension),
        ] {
            if ext.is_empty() {
                return Err(ConfigError::ValidationError(format!("{key} must not be empty")));
            }
            if ext.starts_with('.') {
                return Err(ConfigError::ValidationError(format!(
                    "{key} must not start with '.': {ext}"
                )));
            }
        }
        if self.input_extension == self.output_extension {
            return Err(ConfigError::ValidationError(format!(
                "input and output extension are both '{}'",
                self.input_extension
            )));
        }
        Ok(())
    }

    /// Options passed to the translator.
    pub fn translate_options(&self) -> TranslateOptions {
        TranslateOptions {
            line_ending: self.line_ending,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(String),

    #[error("Failed to parse config: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}
