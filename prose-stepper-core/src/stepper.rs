//! The stepper: a cursor plus the fragments of the word it is on

use crate::collection::SentenceCollection;
use crate::cursor::{Position, PositionCursor};
use crate::error::{Result, StepperError};
use crate::params::SplitParams;
use crate::split::{Fragments, Hyphenator, Splitter};
use crate::step::Step;
use serde_json::Value;

/// Walks a sentence collection fragment by fragment.
///
/// The split parameters are a plain value owned by the stepper. When they
/// differ from the ones the previous navigation call split with, the next call
/// to [`get_fragment`](Self::get_fragment) resolves its step as usual, then
/// lands on the first fragment of the resulting word, since old fragment
/// indices mean nothing under the new split. Setting parameters and then
/// setting the old ones back is no change at all.
///
/// # Example
///
/// ```
/// use prose_stepper_core::{ProseStepper, SentenceCollection, SplitParams, Step};
///
/// let collection = SentenceCollection::new([
///     vec!["Victorious,", "you", "brave", "flag."],
///     vec!["Why,", "oh", "walrus?"],
/// ])?;
///
/// let mut stepper = ProseStepper::with_params(SplitParams::with_max_chars(5));
/// stepper.process(collection);
///
/// assert_eq!(stepper.get_fragment(Step::Current)?, "Vict-");
/// assert_eq!(stepper.get_fragment([0, 0, 1])?, "orio-");
/// assert_eq!(stepper.get_fragment([1, 0, 0])?, "Why,");
/// assert_eq!(stepper.get_fragment(-1)?, "walr-");
/// # Ok::<(), prose_stepper_core::StepperError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ProseStepper<S = Hyphenator> {
    splitter: S,
    params: SplitParams,
    /// Parameters the current fragments were split with
    used_params: SplitParams,
    cursor: Option<PositionCursor>,
    fragments: Fragments,
}

impl ProseStepper<Hyphenator> {
    /// Stepper with the default hyphenator and default parameters
    pub fn new() -> Self {
        Self::with_params(SplitParams::default())
    }

    /// Stepper with the default hyphenator and the given parameters
    pub fn with_params(params: SplitParams) -> Self {
        Self::with_splitter(Hyphenator::new(), params)
    }
}

impl Default for ProseStepper<Hyphenator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Splitter> ProseStepper<S> {
    /// Stepper with a custom splitter
    pub fn with_splitter(splitter: S, params: SplitParams) -> Self {
        Self {
            splitter,
            used_params: params.clone(),
            params,
            cursor: None,
            fragments: Fragments::new(),
        }
    }

    /// Load a collection and restart at its first fragment.
    ///
    /// Any previous collection and position are discarded.
    pub fn process(&mut self, collection: SentenceCollection) -> &mut Self {
        log::debug!(
            "Processing {} sentences, {} words",
            collection.sentence_count(),
            collection.word_count()
        );
        self.cursor = Some(PositionCursor::new(collection));
        self.restart()
    }

    /// Validate loosely typed sentences and load them
    pub fn process_value(&mut self, value: Option<&Value>) -> Result<&mut Self> {
        let collection = SentenceCollection::from_value(value)?;
        Ok(self.process(collection))
    }

    /// Back to the first fragment of the first word, split with the current
    /// parameters. Does nothing before a collection is processed.
    pub fn restart(&mut self) -> &mut Self {
        self.used_params = self.params.clone();
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.restart();
            self.fragments = split_word(&self.splitter, cursor.current_word(), &self.params);
        }
        self
    }

    /// Adopt new parameters and restart
    pub fn restart_with(&mut self, params: SplitParams) -> &mut Self {
        self.params = params;
        self.restart()
    }

    /// Replace the split parameters. If they differ from the ones last used
    /// for navigation, the next navigation call lands on the first fragment
    /// of its word.
    pub fn set_split_params(&mut self, params: SplitParams) -> &mut Self {
        if params != self.params {
            log::debug!("Split parameters changed: {params:?}");
            self.params = params;
        }
        self
    }

    /// Change only the character budget
    pub fn set_max_chars(&mut self, max_num_characters: usize) -> &mut Self {
        let params = SplitParams {
            max_num_characters,
            ..self.params.clone()
        };
        self.set_split_params(params)
    }

    /// Current split parameters
    pub fn split_params(&self) -> &SplitParams {
        &self.params
    }

    /// Move by `step` and return the fragment under the cursor.
    ///
    /// Accepts a [`Step`], an absolute index (`i64`) or a
    /// `[sentence, word, fragment]` delta array.
    pub fn get_fragment(&mut self, step: impl Into<Step>) -> Result<&str> {
        let step = step.into();
        let cursor = self.cursor.as_mut().ok_or(StepperError::NotProcessed)?;

        // Carry decisions use the fragments the caller has been seeing
        let mut fragment = cursor.apply(step, self.fragments.len());
        self.fragments = split_word(&self.splitter, cursor.current_word(), &self.params);

        if self.params != self.used_params {
            self.used_params = self.params.clone();
            fragment = 0;
        }
        let fragment = fragment.min(self.fragments.len() - 1);
        cursor.set_fragment(fragment);

        Ok(&self.fragments[fragment])
    }

    /// Validate a loosely typed step and navigate with it
    pub fn get_fragment_value(&mut self, step: Option<&Value>) -> Result<&str> {
        let step = Step::from_value(step)?;
        self.get_fragment(step)
    }

    /// Current flat word index, 0 before processing
    pub fn get_index(&self) -> usize {
        self.cursor.as_ref().map_or(0, PositionCursor::index)
    }

    /// Total number of words, 0 before processing
    pub fn get_length(&self) -> usize {
        self.cursor.as_ref().map_or(0, PositionCursor::len)
    }

    /// Word-granular progress in `[0, 1]`
    pub fn get_progress(&self) -> f64 {
        self.cursor.as_ref().map_or(0.0, PositionCursor::progress)
    }

    /// `[sentence, word, fragment]` 1-based completion fractions
    pub fn get_relative_progress(&self) -> [f64; 3] {
        self.cursor
            .as_ref()
            .map_or([0.0; 3], |cursor| cursor.relative_progress(self.fragments.len()))
    }

    /// Current position, all zeros before processing
    pub fn position(&self) -> Position {
        self.cursor
            .as_ref()
            .map(PositionCursor::position)
            .unwrap_or_default()
    }

    /// Word under the cursor
    pub fn current_word(&self) -> Option<&str> {
        self.cursor.as_ref().map(PositionCursor::current_word)
    }

    /// Fragments of the word under the cursor, as of the last navigation call
    pub fn current_fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Whether the last navigation landed on the final fragment of the final word
    pub fn is_at_end(&self) -> bool {
        self.cursor.as_ref().is_some_and(|cursor| {
            cursor.is_at_last_word() && cursor.position().fragment + 1 >= self.fragments.len()
        })
    }

    /// The processed collection
    pub fn sentences(&self) -> Option<&SentenceCollection> {
        self.cursor.as_ref().map(PositionCursor::collection)
    }
}

/// Split a word, falling back to the whole word if a splitter returns nothing
fn split_word<S: Splitter>(splitter: &S, word: &str, params: &SplitParams) -> Fragments {
    let mut fragments = splitter.split(word, params);
    if fragments.is_empty() {
        log::warn!("Splitter returned no fragments for {word:?}, using the whole word");
        fragments.push(word.to_string());
    }
    fragments
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use smallvec::smallvec;

    fn stepper() -> ProseStepper {
        let collection = SentenceCollection::new([
            vec!["Victorious,", "you", "brave", "flag."],
            vec!["Delirious,", "I", "come", "back."],
            vec!["\n"],
            vec!["Why,", "oh", "walrus?"],
        ])
        .unwrap();
        let mut stepper = ProseStepper::with_params(SplitParams::with_max_chars(5));
        stepper.process(collection);
        stepper
    }

    #[test]
    fn test_not_processed() {
        let mut stepper = ProseStepper::new();
        assert_eq!(stepper.get_fragment(Step::Current), Err(StepperError::NotProcessed));
        assert_eq!(stepper.get_index(), 0);
        assert_eq!(stepper.get_length(), 0);
        assert_eq!(stepper.get_progress(), 0.0);
        assert_eq!(stepper.get_relative_progress(), [0.0; 3]);
        assert_eq!(stepper.position(), Position::default());
        assert!(stepper.current_word().is_none());
        assert!(stepper.current_fragments().is_empty());
        assert!(stepper.sentences().is_none());
        assert!(!stepper.is_at_end());
    }

    #[test]
    fn test_is_at_end() {
        let mut stepper = stepper();
        stepper.get_fragment(Step::Current).unwrap();
        assert!(!stepper.is_at_end());

        stepper.get_fragment(Step::Jump(-1)).unwrap();
        assert!(!stepper.is_at_end());

        stepper.get_fragment(Step::Fragment(100)).unwrap();
        assert!(stepper.is_at_end());
    }

    #[test]
    fn test_defaults_leave_short_words_whole() {
        let mut stepper = ProseStepper::new();
        stepper.process(SentenceCollection::new([vec!["Victorious,"]]).unwrap());
        assert_eq!(stepper.get_fragment([0, 0, 0]).unwrap(), "Victorious,");
    }

    #[test]
    fn test_process_restarts() {
        let mut stepper = stepper();
        stepper.get_fragment(7).unwrap();
        stepper.process(SentenceCollection::new([vec!["again"]]).unwrap());
        assert_eq!(stepper.get_index(), 0);
        assert_eq!(stepper.get_length(), 1);
        assert_eq!(stepper.current_fragments(), ["again"]);
    }

    #[test]
    fn test_process_value_rejects_before_touching_state() {
        let mut stepper = stepper();
        stepper.get_fragment(5).unwrap();
        let err = stepper.process_value(Some(&json!("test"))).unwrap_err();
        assert!(err.is_wrong_shape());
        assert_eq!(stepper.get_index(), 5);
        assert!(stepper.process_value(None).unwrap_err().is_missing_argument());
    }

    #[test]
    fn test_fragments_are_current_after_restart() {
        let mut stepper = stepper();
        assert_eq!(stepper.current_fragments(), ["Vict-", "orio-", "us,"]);
        stepper.get_fragment([0, 1, 0]).unwrap();
        stepper.restart();
        assert_eq!(stepper.current_fragments(), ["Vict-", "orio-", "us,"]);
        assert_eq!(stepper.get_fragment(Step::Current).unwrap(), "Vict-");
    }

    #[test]
    fn test_param_change_resets_fragment() {
        let mut stepper = stepper();
        assert_eq!(stepper.get_fragment([0, 0, 1]).unwrap(), "orio-");
        stepper.set_max_chars(3);
        assert_eq!(stepper.get_fragment([0, 0, 1]).unwrap(), "Vi-");
        // One-shot: the next step moves normally
        assert_eq!(stepper.get_fragment([0, 0, 1]).unwrap(), "ct-");
    }

    #[test]
    fn test_setting_equal_params_is_not_a_change() {
        let mut stepper = stepper();
        stepper.get_fragment([0, 0, 1]).unwrap();
        stepper.set_split_params(SplitParams::with_max_chars(5));
        assert_eq!(stepper.get_fragment([0, 0, 1]).unwrap(), "us,");
    }

    #[test]
    fn test_reverting_params_before_navigating_is_not_a_change() {
        let mut stepper = stepper();
        assert_eq!(stepper.get_fragment([0, 0, 1]).unwrap(), "orio-");

        stepper.set_max_chars(3);
        stepper.set_max_chars(5);
        assert_eq!(stepper.get_fragment([0, 0, 0]).unwrap(), "orio-");
        assert_eq!(stepper.position().fragment, 1);

        // A real change still lands on the first fragment, once
        stepper.set_max_chars(8);
        assert_eq!(stepper.get_fragment([0, 0, 0]).unwrap(), "Victo-");
        assert_eq!(stepper.get_fragment([0, 0, 1]).unwrap(), "rious,");
    }

    #[test]
    fn test_restart_with_clears_pending_reset() {
        let mut stepper = stepper();
        stepper.set_max_chars(20);
        stepper.restart_with(SplitParams::with_max_chars(5));
        assert_eq!(stepper.get_fragment([0, 0, 1]).unwrap(), "orio-");

        stepper.restart_with(SplitParams::with_max_chars(8));
        assert_eq!(stepper.current_fragments(), ["Victo-", "rious,"]);
    }

    #[test]
    fn test_get_fragment_value() {
        let mut stepper = stepper();
        assert_eq!(stepper.get_fragment_value(Some(&json!([0, 0, 1]))).unwrap(), "orio-");
        assert_eq!(stepper.get_fragment_value(Some(&json!(-1))).unwrap(), "walr-");

        let err = stepper.get_fragment_value(Some(&json!(1.1))).unwrap_err();
        assert!(err.is_wrong_shape());
        assert_eq!(stepper.get_index(), 11);

        let err = stepper.get_fragment_value(None).unwrap_err();
        assert!(err.is_missing_argument());
    }

    #[test]
    fn test_empty_splitter_output_falls_back_to_word() {
        let nothing = |_: &str, _: &SplitParams| -> Fragments { smallvec![] };
        let mut stepper = ProseStepper::with_splitter(nothing, SplitParams::default());
        stepper.process(SentenceCollection::new([vec!["a", "b"]]).unwrap());
        assert_eq!(stepper.get_fragment([0, 0, 1]).unwrap(), "b");
    }

    #[test]
    fn test_custom_splitter() {
        let chars = |word: &str, _: &SplitParams| -> Fragments {
            word.chars().map(String::from).collect()
        };
        let mut stepper = ProseStepper::with_splitter(chars, SplitParams::default());
        stepper.process(SentenceCollection::new([vec!["ab", "c"]]).unwrap());
        assert_eq!(stepper.get_fragment([0, 0, 1]).unwrap(), "b");
        assert_eq!(stepper.get_fragment([0, 0, 1]).unwrap(), "c");
        assert_eq!(stepper.get_relative_progress(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_inspection_helpers() {
        let mut stepper = stepper();
        stepper.get_fragment([1, 0, 0]).unwrap();
        stepper.get_fragment([0, 0, 1]).unwrap();
        assert_eq!(stepper.current_word(), Some("Delirious,"));
        assert_eq!(stepper.position(), Position { sentence: 1, word: 0, fragment: 1 });
        assert_eq!(stepper.sentences().map(SentenceCollection::sentence_count), Some(4));
        assert_eq!(stepper.split_params().max_num_characters, 5);
    }
}
