//! Positional cursor over prose, stepping by sentence, word or word fragment
//!
//! A [`SentenceCollection`] holds sentences of words. A [`ProseStepper`]
//! walks it and always exposes one fragment of the current word, as cut by a
//! [`Splitter`] (the [`Hyphenator`] by default) under the current
//! [`SplitParams`]. Steps are relative (sentence, word or fragment deltas) or
//! absolute (a flat word index), and every step clamps at the collection's
//! edges instead of failing.
//!
//! # Architecture
//!
//! - **Position layer**: [`PositionCursor`] resolves steps into positions and
//!   knows nothing about splitting
//! - **Splitting layer**: the [`Splitter`] contract and its parameters
//! - **Facade**: [`ProseStepper`] ties the two together and reacts to
//!   parameter changes
//!
//! # Example
//!
//! ```rust
//! use prose_stepper_core::{ProseStepper, SentenceCollection, SplitParams};
//!
//! let collection = SentenceCollection::from_text("Victorious, you brave flag. Why, oh walrus?")?;
//! let mut stepper = ProseStepper::with_params(SplitParams::with_max_chars(5));
//! stepper.process(collection);
//!
//! // Walk the first word fragment by fragment
//! assert_eq!(stepper.get_fragment([0, 0, 0])?, "Vict-");
//! assert_eq!(stepper.get_fragment([0, 0, 1])?, "orio-");
//! assert_eq!(stepper.get_fragment([0, 0, 1])?, "us,");
//!
//! // Next sentence, then the very last word
//! assert_eq!(stepper.get_fragment([1, 0, 0])?, "Why,");
//! assert_eq!(stepper.get_fragment(-1)?, "walr-");
//! assert_eq!(stepper.get_progress(), 1.0);
//! # Ok::<(), prose_stepper_core::StepperError>(())
//! ```

pub mod collection;
pub mod cursor;
pub mod error;
pub mod params;
pub mod split;
pub mod step;
pub mod stepper;
pub mod tokenize;

mod validate;

pub use collection::{SentenceCollection, WordPosition};
pub use cursor::{Position, PositionCursor};
pub use error::{Result, StepperError};
pub use params::{defaults, SplitParams, SplitParamsBuilder};
pub use split::{reconstruct, Fragments, Hyphenator, Splitter};
pub use step::Step;
pub use stepper::ProseStepper;
pub use tokenize::sentences_from_text;
