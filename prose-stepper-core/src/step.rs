//! Step descriptors

use crate::error::{Result, StepperError};
use crate::validate;
use serde_json::Value;
use std::fmt;

const EXPECTED_STEP: &str = "an integer or an array of three integers";

/// One navigation request.
///
/// The tuple form `[sentence, word, fragment]` honors only its first non-zero
/// slot, so it always maps onto exactly one of these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Jump to a flat word index; negative values count back from the end
    Jump(i64),
    /// Move by whole sentences
    Sentence(i64),
    /// Move by words, crossing sentence boundaries freely
    Word(i64),
    /// Move by fragments within the current word, carrying into the next or
    /// previous word
    Fragment(i64),
    /// Re-read the current fragment
    Current,
}

impl Step {
    /// Map a `[sentence, word, fragment]` delta tuple onto a step.
    /// Priority is sentence, then word, then fragment.
    pub fn from_deltas([sentence, word, fragment]: [i64; 3]) -> Self {
        if sentence != 0 {
            Step::Sentence(sentence)
        } else if word != 0 {
            Step::Word(word)
        } else if fragment != 0 {
            Step::Fragment(fragment)
        } else {
            Step::Current
        }
    }

    /// Validate a loosely typed step: an integer, or an array of exactly
    /// three integers. Integral floats such as `2.0` are accepted; `1.1` is not.
    pub fn from_value(value: Option<&Value>) -> Result<Self> {
        let value = validate::require(value, EXPECTED_STEP)?;
        let wrong = || StepperError::wrong_shape(EXPECTED_STEP, validate::describe(value));

        if value.is_number() {
            return validate::as_integer(value).map(Step::Jump).ok_or_else(wrong);
        }

        let items = value.as_array().ok_or_else(wrong)?;
        if items.len() != 3 {
            return Err(wrong());
        }

        let mut deltas = [0i64; 3];
        for (slot, item) in deltas.iter_mut().zip(items) {
            *slot = validate::as_integer(item).ok_or_else(|| {
                StepperError::wrong_shape(
                    EXPECTED_STEP,
                    format!("{} inside the array", validate::describe(item)),
                )
            })?;
        }
        Ok(Step::from_deltas(deltas))
    }

    /// Whether this step only reads the current position
    pub fn is_current(&self) -> bool {
        matches!(self, Step::Current)
    }
}

impl From<i64> for Step {
    fn from(index: i64) -> Self {
        Step::Jump(index)
    }
}

impl From<[i64; 3]> for Step {
    fn from(deltas: [i64; 3]) -> Self {
        Step::from_deltas(deltas)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Jump(index) => write!(f, "jump to {index}"),
            Step::Sentence(n) => write!(f, "{n:+} sentence(s)"),
            Step::Word(n) => write!(f, "{n:+} word(s)"),
            Step::Fragment(n) => write!(f, "{n:+} fragment(s)"),
            Step::Current => write!(f, "current"),
        }
    }
}
