//! Turning plain prose into a sentence collection

use crate::collection::SentenceCollection;
use crate::error::{Result, StepperError};
use regex::Regex;
use std::sync::OnceLock;

/// A word ending in terminal punctuation, optionally followed by closing
/// quotes or brackets
fn sentence_end() -> &'static Regex {
    static SENTENCE_END: OnceLock<Regex> = OnceLock::new();
    SENTENCE_END.get_or_init(|| {
        Regex::new(r#"[.!?…]+["'”’)\]]*$"#).expect("sentence end pattern is valid")
    })
}

/// Split prose into sentences of whitespace-separated words.
///
/// A sentence ends at any word that ends in `.`, `!`, `?` or `…` (closing
/// quotes and brackets allowed after it). Trailing words without terminal
/// punctuation form a last sentence of their own.
pub fn sentences_from_text(text: &str) -> Vec<Vec<String>> {
    let mut sentences = Vec::new();
    let mut current = Vec::new();

    for word in text.split_whitespace() {
        current.push(word.to_string());
        if sentence_end().is_match(word) {
            sentences.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        sentences.push(current);
    }
    sentences
}

impl SentenceCollection {
    /// Tokenize prose into a collection; text without any words is rejected
    pub fn from_text(text: &str) -> Result<Self> {
        let sentences = sentences_from_text(text);
        if sentences.is_empty() {
            return Err(StepperError::wrong_shape(
                "text containing at least one word",
                "blank text",
            ));
        }
        Self::new(sentences)
    }
}
