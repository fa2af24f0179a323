//! Sentence collections and the flat word index

use crate::error::{Result, StepperError};
use crate::validate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

const EXPECTED_SENTENCES: &str = "an array of arrays of strings";

/// Location of one word inside a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPosition {
    /// Sentence index
    pub sentence: usize,
    /// Word index within the sentence
    pub word: usize,
}

/// Immutable, validated list of sentences, each a non-empty list of words.
///
/// Cloning is cheap: clones share the same storage, so several cursors can
/// walk one collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")]
pub struct SentenceCollection {
    sentences: Arc<[Vec<String>]>,
}

impl SentenceCollection {
    /// Build a collection, rejecting zero sentences and empty sentences
    pub fn new<S, W>(sentences: impl IntoIterator<Item = S>) -> Result<Self>
    where
        S: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let sentences: Vec<Vec<String>> = sentences
            .into_iter()
            .map(|sentence| sentence.into_iter().map(Into::into).collect())
            .collect();

        if sentences.is_empty() {
            return Err(StepperError::wrong_shape(EXPECTED_SENTENCES, "an empty array"));
        }
        if let Some(index) = sentences.iter().position(Vec::is_empty) {
            return Err(StepperError::wrong_shape(
                EXPECTED_SENTENCES,
                format!("an empty sentence at index {index}"),
            ));
        }

        Ok(Self {
            sentences: sentences.into(),
        })
    }

    /// Validate loosely typed input such as `[["Hi", "there."], ["Bye."]]`.
    ///
    /// A bare string is rejected even though it could be read as a sequence.
    pub fn from_value(value: Option<&Value>) -> Result<Self> {
        let value = validate::require(value, EXPECTED_SENTENCES)?;
        let wrong = |received: String| StepperError::wrong_shape(EXPECTED_SENTENCES, received);

        let outer = value
            .as_array()
            .ok_or_else(|| wrong(validate::describe(value)))?;

        let mut sentences = Vec::with_capacity(outer.len());
        for (s, sentence) in outer.iter().enumerate() {
            let words = sentence.as_array().ok_or_else(|| {
                wrong(format!("{} at sentence {s}", validate::describe(sentence)))
            })?;

            let mut owned = Vec::with_capacity(words.len());
            for (w, word) in words.iter().enumerate() {
                let word = word.as_str().ok_or_else(|| {
                    wrong(format!("{} at word {w} of sentence {s}", validate::describe(word)))
                })?;
                owned.push(word.to_string());
            }
            sentences.push(owned);
        }

        Self::new(sentences)
    }

    /// All sentences
    pub fn sentences(&self) -> &[Vec<String>] {
        &self.sentences
    }

    /// Number of sentences
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Number of words in a sentence, 0 when out of range
    pub fn sentence_len(&self, sentence: usize) -> usize {
        self.sentences.get(sentence).map_or(0, Vec::len)
    }

    /// Total number of words
    pub fn word_count(&self) -> usize {
        self.sentences.iter().map(Vec::len).sum()
    }

    /// Word at a position
    pub fn word(&self, position: WordPosition) -> Option<&str> {
        self.sentences
            .get(position.sentence)?
            .get(position.word)
            .map(String::as_str)
    }

    /// Every word position in reading order
    pub fn flat_index(&self) -> Vec<WordPosition> {
        self.sentences
            .iter()
            .enumerate()
            .flat_map(|(sentence, words)| {
                (0..words.len()).map(move |word| WordPosition { sentence, word })
            })
            .collect()
    }
}

impl TryFrom<Vec<Vec<String>>> for SentenceCollection {
    type Error = StepperError;

    fn try_from(sentences: Vec<Vec<String>>) -> Result<Self> {
        Self::new(sentences)
    }
}

impl From<SentenceCollection> for Vec<Vec<String>> {
    fn from(collection: SentenceCollection) -> Self {
        collection.sentences.to_vec()
    }
}
