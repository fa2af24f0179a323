//! Property tests for stepping and splitting

use proptest::prelude::*;
use prose_stepper_core::{
    reconstruct, Hyphenator, ProseStepper, SentenceCollection, SplitParams, Splitter, Step,
};

fn word_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-zA-Z,.?!]{0,24}").unwrap(),
        prop::string::string_regex("[a-zäöüß ]{1,16}").unwrap(),
    ]
}

fn collection_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(word_strategy(), 1..6), 1..6)
}

fn params_strategy() -> impl Strategy<Value = SplitParams> {
    (
        0usize..16,
        -2i64..10,
        prop_oneof![Just(String::new()), Just("-".to_string()), Just("%%".to_string())],
        0.0f64..1.5,
        any::<bool>(),
    )
        .prop_map(|(max, min, separator, fraction, redistribute)| SplitParams {
            max_num_characters: max,
            min_length_for_separator: min,
            separator,
            fraction_of_max: fraction,
            redistribute,
        })
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        (-20i64..20).prop_map(Step::Jump),
        (-6i64..6).prop_map(Step::Sentence),
        (-20i64..20).prop_map(Step::Word),
        (-6i64..6).prop_map(Step::Fragment),
        Just(Step::Current),
    ]
}

fn stepper_for(sentences: Vec<Vec<String>>, params: SplitParams) -> ProseStepper {
    let mut stepper = ProseStepper::with_params(params);
    stepper.process(SentenceCollection::new(sentences).unwrap());
    stepper
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Reading the current fragment never changes anything
    #[test]
    fn current_is_idempotent(
        sentences in collection_strategy(),
        params in params_strategy(),
        steps in prop::collection::vec(step_strategy(), 0..20),
    ) {
        let mut stepper = stepper_for(sentences, params);
        for step in steps {
            stepper.get_fragment(step).unwrap();
        }
        let fragment = stepper.get_fragment([0, 0, 0]).unwrap().to_string();
        let position = stepper.position();
        for _ in 0..3 {
            prop_assert_eq!(stepper.get_fragment(Step::Current).unwrap(), fragment.as_str());
            prop_assert_eq!(stepper.position(), position);
        }
    }

    // The position stays in range after any sequence of steps
    #[test]
    fn position_stays_in_bounds(
        sentences in collection_strategy(),
        params in params_strategy(),
        steps in prop::collection::vec(step_strategy(), 1..40),
    ) {
        let mut stepper = stepper_for(sentences.clone(), params);
        for step in steps {
            let fragment = stepper.get_fragment(step).unwrap().to_string();
            let position = stepper.position();

            prop_assert!(stepper.get_index() < stepper.get_length());
            prop_assert!(position.sentence < sentences.len());
            prop_assert!(position.word < sentences[position.sentence].len());
            prop_assert!(position.fragment < stepper.current_fragments().len());
            prop_assert_eq!(&stepper.current_fragments()[position.fragment], &fragment);

            let progress = stepper.get_progress();
            prop_assert!((0.0..=1.0).contains(&progress));
            for share in stepper.get_relative_progress() {
                prop_assert!(share > 0.0 && share <= 1.0);
            }
        }
    }

    // Word and sentence steps never move against their sign
    #[test]
    fn word_and_sentence_steps_are_monotonic(
        sentences in collection_strategy(),
        start in 0i64..30,
        change in -6i64..6,
        by_sentence in any::<bool>(),
    ) {
        let mut stepper = stepper_for(sentences, SplitParams::default());
        stepper.get_fragment(start).unwrap();
        let before = stepper.get_index();

        let step = if by_sentence { Step::Sentence(change) } else { Step::Word(change) };
        stepper.get_fragment(step).unwrap();
        let after = stepper.get_index();

        if change > 0 {
            prop_assert!(after >= before);
        } else {
            prop_assert!(after <= before);
        }
    }

    // Out of range requests clamp instead of wrapping
    #[test]
    fn huge_steps_clamp(sentences in collection_strategy(), forward in any::<bool>()) {
        let mut stepper = stepper_for(sentences, SplitParams::default());
        let last = stepper.get_length() - 1;
        let (n, expected) = if forward { (i64::MAX, last) } else { (i64::MIN, 0) };

        for step in [Step::Jump(n), Step::Word(n), Step::Sentence(n)] {
            stepper.restart();
            stepper.get_fragment(Step::Jump(last as i64 / 2)).unwrap();
            stepper.get_fragment(step).unwrap();
            prop_assert_eq!(stepper.get_index(), expected, "{}", step);
        }
    }

    // Only the first non-zero slot of a delta tuple counts
    #[test]
    fn first_non_zero_slot_wins(
        sentences in collection_strategy(),
        deltas in prop::array::uniform3(-4i64..4),
    ) {
        let canonical = if deltas[0] != 0 {
            [deltas[0], 0, 0]
        } else if deltas[1] != 0 {
            [0, deltas[1], 0]
        } else {
            [0, 0, deltas[2]]
        };

        let mut a = stepper_for(sentences.clone(), SplitParams::with_max_chars(4));
        let mut b = stepper_for(sentences, SplitParams::with_max_chars(4));
        a.get_fragment(3).unwrap();
        b.get_fragment(3).unwrap();

        prop_assert_eq!(a.get_fragment(deltas).unwrap().to_string(), b.get_fragment(canonical).unwrap());
        prop_assert_eq!(a.position(), b.position());
    }

    // A parameter change always lands on a first fragment
    #[test]
    fn param_change_resets_fragment(
        sentences in collection_strategy(),
        params in params_strategy(),
        step in step_strategy(),
    ) {
        let mut stepper = stepper_for(sentences, SplitParams::with_max_chars(3));
        stepper.get_fragment([0, 0, 1]).unwrap();
        let changed = params != *stepper.split_params();
        stepper.set_split_params(params);
        stepper.get_fragment(step).unwrap();
        if changed {
            prop_assert_eq!(stepper.position().fragment, 0);
        }
    }

    // Stripping separators and joining gives back the word
    #[test]
    fn fragments_reconstruct_word(word in word_strategy(), params in params_strategy()) {
        let fragments = Hyphenator::new().split(&word, &params);
        prop_assert!(!fragments.is_empty());
        prop_assert_eq!(reconstruct(&fragments, &params), word);
    }

    // No fragment exceeds a budget that leaves room for at least one character;
    // longer separators overflow as documented on `Hyphenator`
    #[test]
    fn fragments_fit_budget(word in word_strategy(), params in params_strategy()) {
        let separator_len = if params.separator_applies() { params.separator.chars().count() } else { 0 };
        prop_assume!(params.max_num_characters > separator_len);

        for fragment in Hyphenator::new().split(&word, &params) {
            prop_assert!(fragment.chars().count() <= params.max_num_characters, "{:?}", fragment);
        }
    }
}
