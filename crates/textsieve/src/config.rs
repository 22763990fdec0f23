//! Configuration management for textsieve.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::extract::{Extractor, DEFAULT_INDENT};
use crate::safety::SafetyFilter;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory name under the user config directory.
const APP_DIR_NAME: &str = "textsieve";

/// Default input file, relative to the working directory.
const DEFAULT_INPUT_FILE: &str = "sample_input.txt";

/// Default output file, relative to the working directory.
const DEFAULT_OUTPUT_FILE: &str = "sample_output.json";

/// Largest accepted JSON indent.
const MAX_INDENT: usize = 16;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `TEXTSIEVE_`, sections split on `__`)
/// 2. TOML config file at `~/.config/textsieve/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input and output locations.
    pub io: IoConfig,
    /// JSON output formatting.
    pub output: OutputConfig,
    /// Safety filter configuration.
    pub safety: SafetyConfig,
}

/// Input/output locations used by `sieve run`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IoConfig {
    /// Text file to read. `-` means stdin.
    pub input_path: PathBuf,
    /// JSON file to write.
    pub output_path: PathBuf,
}

/// Output formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Spaces per JSON nesting level. 0 writes compact JSON.
    pub indent: usize,
    /// Write JSON to stdout instead of `io.output_path`.
    pub stdout: bool,
}

/// Safety filter configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyConfig {
    /// Extra denylist patterns (regex), applied after the built-in rules.
    pub extra_rules: Vec<String>,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            stdout: false,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("TEXTSIEVE_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.output.indent > MAX_INDENT {
            return Err(Error::config_validation(format!(
                "output.indent ({}) cannot be greater than {MAX_INDENT}",
                self.output.indent
            )));
        }

        if self.io.input_path.as_os_str().is_empty() {
            return Err(Error::config_validation("io.input_path must not be empty"));
        }

        if !self.output.stdout && self.io.output_path.as_os_str().is_empty() {
            return Err(Error::config_validation(
                "io.output_path must not be empty unless output.stdout is set",
            ));
        }

        self.safety_filter().map(|_| ())
    }

    /// Build the safety filter described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an extra rule is not a valid regex.
    pub fn safety_filter(&self) -> Result<SafetyFilter> {
        SafetyFilter::with_extra_rules(&self.safety.extra_rules)
    }

    /// Build an extractor using this configuration's safety rules.
    ///
    /// # Errors
    ///
    /// Returns an error if an extra rule is not a valid regex.
    pub fn extractor(&self) -> Result<Extractor> {
        Ok(Extractor::with_filter(self.safety_filter()?))
    }
}
