//! Position resolution over a sentence collection
//!
//! [`PositionCursor`] knows nothing about splitting: it is told how many
//! fragments the current word has and works purely on indices. Every change
//! is clamped to the collection's edges; nothing here can fail.

use crate::collection::{SentenceCollection, WordPosition};
use crate::step::Step;
use serde::Serialize;

/// A cursor position: sentence, word within the sentence, fragment within the word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Position {
    /// Sentence index
    pub sentence: usize,
    /// Word index within the sentence
    pub word: usize,
    /// Fragment index within the word
    pub fragment: usize,
}

/// Mutable position over an immutable collection
#[derive(Debug, Clone)]
pub struct PositionCursor {
    collection: SentenceCollection,
    flat: Vec<WordPosition>,
    /// Index into `flat`, kept in sync with `position`
    index: usize,
    position: Position,
}

impl PositionCursor {
    /// Create a cursor parked on the first word
    pub fn new(collection: SentenceCollection) -> Self {
        let flat = collection.flat_index();
        Self {
            collection,
            flat,
            index: 0,
            position: Position::default(),
        }
    }

    /// Go back to the first fragment of the first word
    pub fn restart(&mut self) {
        self.seek(0);
        self.position.fragment = 0;
    }

    /// The collection being walked
    pub fn collection(&self) -> &SentenceCollection {
        &self.collection
    }

    /// Current position
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current flat word index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Total number of words
    pub fn len(&self) -> usize {
        self.flat.len()
    }

    /// Always false: collections are never empty
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the cursor is on the last word of the collection
    pub fn is_at_last_word(&self) -> bool {
        self.index + 1 >= self.flat.len()
    }

    /// Word under the cursor
    pub fn current_word(&self) -> &str {
        let sentence = &self.collection.sentences()[self.position.sentence];
        &sentence[self.position.word]
    }

    /// Resolve a step and return the fragment index it lands on.
    ///
    /// `fragment_count` is the number of fragments of the word the cursor is
    /// on before the step; it is only consulted for fragment steps.
    pub fn apply(&mut self, step: Step, fragment_count: usize) -> usize {
        let fragment = match step {
            Step::Jump(index) => {
                self.jump(index);
                0
            }
            Step::Sentence(change) => {
                self.step_sentence(change);
                0
            }
            Step::Word(change) => {
                self.seek((self.index as i64).saturating_add(change));
                0
            }
            Step::Fragment(change) => self.step_fragment(change, fragment_count),
            Step::Current => self.position.fragment,
        };
        self.position.fragment = fragment;

        log::trace!(
            "{step} -> index {} at {:?}",
            self.index,
            self.position
        );
        fragment
    }

    /// Override the fragment index, e.g. after the word was re-split
    pub fn set_fragment(&mut self, fragment: usize) {
        self.position.fragment = fragment;
    }

    /// Word-level progress in `[0, 1]`; a single-word collection is always complete
    pub fn progress(&self) -> f64 {
        if self.flat.len() <= 1 {
            return 1.0;
        }
        self.index as f64 / (self.flat.len() - 1) as f64
    }

    /// 1-based completion at each level: sentence in collection, word in
    /// sentence, fragment in word
    pub fn relative_progress(&self, fragment_count: usize) -> [f64; 3] {
        let sentences = self.collection.sentence_count();
        let words = self.collection.sentence_len(self.position.sentence);
        [
            (self.position.sentence + 1) as f64 / sentences as f64,
            (self.position.word + 1) as f64 / words as f64,
            (self.position.fragment + 1) as f64 / fragment_count.max(1) as f64,
        ]
    }

    /// Negative indices count back from the end, like `-1` for the last word
    fn jump(&mut self, index: i64) {
        let target = if index < 0 {
            (self.flat.len() as i64).saturating_add(index)
        } else {
            index
        };
        self.seek(target);
    }

    /// Move to a flat index, clamped into range
    fn seek(&mut self, target: i64) {
        let last = self.flat.len().saturating_sub(1);
        self.index = usize::try_from(target.max(0)).unwrap_or(usize::MAX).min(last);
        let WordPosition { sentence, word } = self.flat[self.index];
        self.position.sentence = sentence;
        self.position.word = word;
    }

    fn step_sentence(&mut self, change: i64) {
        if change == 0 {
            return;
        }

        let last_sentence = self.collection.sentence_count() - 1;
        let current = self.position.sentence as i64;

        let target = if current.saturating_add(change) > last_sentence as i64 {
            WordPosition {
                sentence: last_sentence,
                word: self.collection.sentence_len(last_sentence) - 1,
            }
        } else {
            // A single step back from mid-sentence only rewinds to its start
            let sentence = if change == -1 && self.position.word > 0 {
                current
            } else {
                current.saturating_add(change)
            };
            WordPosition {
                sentence: sentence.clamp(0, last_sentence as i64) as usize,
                word: 0,
            }
        };

        match self.search(change, target) {
            Some(index) => self.seek(index as i64),
            None => log::debug!("sentence target {target:?} not found, position unchanged"),
        }
    }

    /// Walk from the current index in the direction of `change` until `target` is found
    fn search(&self, change: i64, target: WordPosition) -> Option<usize> {
        if change > 0 {
            (self.index..self.flat.len()).find(|&i| self.flat[i] == target)
        } else {
            (0..=self.index).rev().find(|&i| self.flat[i] == target)
        }
    }

    /// At most one word of carry, whatever the magnitude
    fn step_fragment(&mut self, change: i64, fragment_count: usize) -> usize {
        let target = (self.position.fragment as i64).saturating_add(change);

        if target >= fragment_count as i64 {
            if self.is_at_last_word() {
                // Nothing to carry into: stay on this word's last fragment
                return fragment_count.saturating_sub(1);
            }
            self.seek(self.index as i64 + 1);
            0
        } else if target < 0 {
            self.seek(self.index as i64 - 1);
            0
        } else {
            target as usize
        }
    }
}
