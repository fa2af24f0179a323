//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use prose_stepper_core::{defaults, SplitParams};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// How words are split into fragments
    #[serde(default)]
    pub split: SplitParams,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load and validate a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse and validate TOML configuration text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Check values serde cannot rule out
    pub fn validate(&self) -> Result<()> {
        self.split
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        self.default_format()?;
        Ok(())
    }

    /// The configured default output format
    pub fn default_format(&self) -> Result<OutputFormat> {
        <OutputFormat as clap::ValueEnum>::from_str(&self.output.default_format, true).map_err(
            |_| {
                CliError::ConfigError(format!(
                    "unknown output format '{}' (expected text, json or markdown)",
                    self.output.default_format
                ))
                .into()
            },
        )
    }

    /// Commented configuration template with default values
    pub fn template() -> String {
        format!(
            r#"# prose-stepper configuration

# How words are split into fragments
[split]
# Maximum characters per fragment, separator included (0 disables splitting)
maxNumCharacters = {max}

# Budgets below this length never get a separator
minLengthForSeparator = {min}

# Appended to every fragment except a word's last one
separator = "{separator}"

# A last fragment shorter than this share of the budget is rebalanced
fractionOfMax = {fraction:?}

# Rebalance short trailing fragments
redistribute = {redistribute}

[output]
# text, json or markdown
default_format = "text"

# Pretty print JSON output
pretty_json = true
"#,
            max = defaults::MAX_NUM_CHARACTERS,
            min = defaults::MIN_LENGTH_FOR_SEPARATOR,
            separator = defaults::SEPARATOR,
            fraction = defaults::FRACTION_OF_MAX,
            redistribute = defaults::REDISTRIBUTE,
        )
    }
}
