//! Split parameters: how words are cut into fragments

use crate::error::{Result, StepperError};
use crate::validate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default split parameter values
pub mod defaults {
    /// Character budget per fragment, separator included
    pub const MAX_NUM_CHARACTERS: usize = 13;

    /// Budgets below this length never get a separator appended
    pub const MIN_LENGTH_FOR_SEPARATOR: i64 = 3;

    /// Appended to every fragment except a word's last one
    pub const SEPARATOR: &str = "-";

    /// A last fragment shorter than this share of the budget triggers rebalancing
    pub const FRACTION_OF_MAX: f64 = 0.75;

    /// Rebalance short trailing fragments
    pub const REDISTRIBUTE: bool = true;
}

/// Parameters handed to the splitter for every word.
///
/// This is a plain value: the stepper keeps its own copy and only sees a
/// change when a new value is set explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SplitParams {
    /// Maximum fragment length in characters (0 disables splitting)
    #[serde(alias = "max_num_characters")]
    pub max_num_characters: usize,
    /// Minimum budget for which the separator is appended
    #[serde(alias = "min_length_for_separator")]
    pub min_length_for_separator: i64,
    /// Separator appended to non-final fragments
    pub separator: String,
    /// Fraction of the per-fragment budget a last fragment must reach
    #[serde(alias = "fraction_of_max")]
    pub fraction_of_max: f64,
    /// Whether short trailing fragments are rebalanced
    pub redistribute: bool,
}

impl Default for SplitParams {
    fn default() -> Self {
        Self {
            max_num_characters: defaults::MAX_NUM_CHARACTERS,
            min_length_for_separator: defaults::MIN_LENGTH_FOR_SEPARATOR,
            separator: defaults::SEPARATOR.to_string(),
            fraction_of_max: defaults::FRACTION_OF_MAX,
            redistribute: defaults::REDISTRIBUTE,
        }
    }
}

type ApplyFn = fn(&mut SplitParams, &Value) -> Result<()>;

/// Recognized keys of a loosely typed parameter object, with their validators.
/// Unknown keys are ignored.
const RECOGNIZED_KEYS: &[(&str, ApplyFn)] = &[
    ("maxNumCharacters", apply_max_num_characters),
    ("minLengthForSeparator", apply_min_length_for_separator),
    ("separator", apply_separator),
    ("fractionOfMax", apply_fraction_of_max),
    ("redistribute", apply_redistribute),
];

fn apply_max_num_characters(params: &mut SplitParams, value: &Value) -> Result<()> {
    params.max_num_characters =
        validate::non_negative_integer(value, "a positive integer for maxNumCharacters")?;
    Ok(())
}

fn apply_min_length_for_separator(params: &mut SplitParams, value: &Value) -> Result<()> {
    params.min_length_for_separator =
        validate::integer(value, "an integer for minLengthForSeparator")?;
    Ok(())
}

fn apply_separator(params: &mut SplitParams, value: &Value) -> Result<()> {
    params.separator = validate::string(value, "a string for separator")?.to_string();
    Ok(())
}

fn apply_fraction_of_max(params: &mut SplitParams, value: &Value) -> Result<()> {
    params.fraction_of_max =
        validate::non_negative_number(value, "a non-negative number for fractionOfMax")?;
    Ok(())
}

fn apply_redistribute(params: &mut SplitParams, value: &Value) -> Result<()> {
    params.redistribute = validate::boolean(value, "a boolean for redistribute")?;
    Ok(())
}

impl SplitParams {
    /// Create a parameter builder
    pub fn builder() -> SplitParamsBuilder {
        SplitParamsBuilder::default()
    }

    /// Defaults with a different character budget
    pub fn with_max_chars(max_num_characters: usize) -> Self {
        Self {
            max_num_characters,
            ..Default::default()
        }
    }

    /// Build parameters from a loosely typed object such as
    /// `{"maxNumCharacters": 5, "separator": "%"}`.
    ///
    /// Absent keys keep their defaults; a present key with the wrong type
    /// (including `null`) is rejected.
    pub fn from_json_value(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            StepperError::wrong_shape("an object of split parameters", validate::describe(value))
        })?;

        let mut params = Self::default();
        for (key, apply) in RECOGNIZED_KEYS {
            if let Some(field) = object.get(*key) {
                apply(&mut params, field)?;
            }
        }
        Ok(params)
    }

    /// Parse parameters from TOML, e.g. `maxNumCharacters = 5`
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let params: Self = toml::from_str(text)
            .map_err(|e| StepperError::Configuration(format!("Failed to parse split parameters: {e}")))?;
        params.validate()?;
        Ok(params)
    }

    /// Whether the separator is appended under these parameters
    pub fn separator_applies(&self) -> bool {
        !self.separator.is_empty()
            && i64::try_from(self.max_num_characters).unwrap_or(i64::MAX)
                >= self.min_length_for_separator
    }

    /// Validate values that the type system does not rule out
    pub fn validate(&self) -> Result<()> {
        if !self.fraction_of_max.is_finite() || self.fraction_of_max < 0.0 {
            return Err(StepperError::wrong_shape(
                "a non-negative number for fractionOfMax",
                self.fraction_of_max.to_string(),
            ));
        }
        Ok(())
    }
}

/// Fluent builder for split parameters
#[derive(Debug, Default)]
pub struct SplitParamsBuilder {
    max_num_characters: Option<usize>,
    min_length_for_separator: Option<i64>,
    separator: Option<String>,
    fraction_of_max: Option<f64>,
    redistribute: Option<bool>,
}

impl SplitParamsBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the character budget
    pub fn max_num_characters(mut self, max: usize) -> Self {
        self.max_num_characters = Some(max);
        self
    }

    /// Set the minimum budget for appending the separator
    pub fn min_length_for_separator(mut self, min: i64) -> Self {
        self.min_length_for_separator = Some(min);
        self
    }

    /// Set the separator
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Set the fraction of the budget a last fragment must reach
    pub fn fraction_of_max(mut self, fraction: f64) -> Self {
        self.fraction_of_max = Some(fraction);
        self
    }

    /// Enable or disable rebalancing of short trailing fragments
    pub fn redistribute(mut self, redistribute: bool) -> Self {
        self.redistribute = Some(redistribute);
        self
    }

    /// Build the parameters
    pub fn build(self) -> Result<SplitParams> {
        let mut params = SplitParams::default();

        if let Some(max) = self.max_num_characters {
            params.max_num_characters = max;
        }
        if let Some(min) = self.min_length_for_separator {
            params.min_length_for_separator = min;
        }
        if let Some(separator) = self.separator {
            params.separator = separator;
        }
        if let Some(fraction) = self.fraction_of_max {
            params.fraction_of_max = fraction;
        }
        if let Some(redistribute) = self.redistribute {
            params.redistribute = redistribute;
        }

        params.validate()?;
        Ok(params)
    }
}
