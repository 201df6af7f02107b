//! # Configuration Module
//!
//! Settings for the `auth-transcoder` binary: how to log and how to render output.
//!
//! ## Key Features
//! - YAML/JSON configuration parsing with serde
//! - Environment variable override support
//! - Validation that reports every problem at once

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::codec::DocumentFormat;
use crate::core::error::{TranscoderError, TranscoderResult};
use crate::observability::config::{LogConfig, LogFormat};
use crate::observability::logging::LOG_LEVELS;

/// Main transcoder configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscoderConfig {
    /// Logging settings (level, format)
    pub logging: LogConfig,

    /// Output document settings
    pub output: OutputConfig,
}

/// How transcoded documents are rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: DocumentFormat,
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: DocumentFormat::Json,
            pretty: true,
        }
    }
}

impl TranscoderConfig {
    /// Load configuration from a YAML file
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> TranscoderResult<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| TranscoderError::config(format!("Failed to read config file: {}", e)))?;

        let mut config: TranscoderConfig = serde_yaml::from_str(&content)
            .map_err(|e| TranscoderError::config(format!("Failed to parse config: {}", e)))?;

        config.apply_env_overrides()?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from JSON
    pub async fn load_from_json<P: AsRef<Path>>(path: P) -> TranscoderResult<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| TranscoderError::config(format!("Failed to read config file: {}", e)))?;

        let mut config: TranscoderConfig = serde_json::from_str(&content)
            .map_err(|e| TranscoderError::config(format!("Failed to parse JSON config: {}", e)))?;

        config.apply_env_overrides()?;

        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given (format chosen by extension), otherwise start from
    /// defaults. Environment overrides and validation apply either way.
    pub async fn load(path: Option<&Path>) -> TranscoderResult<Self> {
        match path {
            Some(path) if DocumentFormat::from_path(path)? == DocumentFormat::Json => {
                Self::load_from_json(path).await
            }
            Some(path) => Self::load_from_file(path).await,
            None => {
                let mut config = Self::default();
                config.apply_env_overrides()?;
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Apply environment variable overrides to configuration
    ///
    /// Environment variables follow the pattern: TRANSCODER_<SECTION>_<FIELD>
    /// For example: TRANSCODER_LOG_LEVEL=debug
    pub fn apply_env_overrides(&mut self) -> TranscoderResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup; `apply_env_overrides` uses the process environment.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> TranscoderResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("TRANSCODER_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Some(format) = lookup("TRANSCODER_LOG_FORMAT") {
            self.logging.format = format
                .parse::<LogFormat>()
                .map_err(|e| TranscoderError::config(format!("Invalid TRANSCODER_LOG_FORMAT: {}", e)))?;
        }

        if let Some(format) = lookup("TRANSCODER_OUTPUT_FORMAT") {
            self.output.format = format
                .parse::<DocumentFormat>()
                .map_err(|e| TranscoderError::config(format!("Invalid TRANSCODER_OUTPUT_FORMAT: {}", e)))?;
        }

        if let Some(pretty) = lookup("TRANSCODER_OUTPUT_PRETTY") {
            self.output.pretty = pretty
                .parse()
                .map_err(|e| TranscoderError::config(format!("Invalid TRANSCODER_OUTPUT_PRETTY: {}", e)))?;
        }

        Ok(())
    }

    /// Configuration validation with detailed error messages
    pub fn validate(&self) -> TranscoderResult<()> {
        let mut errors = Vec::new();

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            errors.push(format!(
                "logging.level '{}' must be one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(TranscoderError::config(errors.join("; ")))
        }
    }
}
