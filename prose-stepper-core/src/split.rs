//! Word splitting
//!
//! The cursor only relies on the [`Splitter`] contract: for the same word and
//! parameters it returns the same ordered, non-empty list of fragments, and
//! stripping the separators from those fragments and concatenating them gives
//! back the word. [`Hyphenator`] is the splitter used by default.

use crate::params::SplitParams;
use smallvec::{smallvec, SmallVec};

/// Fragments of a single word, in reading order
pub type Fragments = SmallVec<[String; 4]>;

/// Splits a word into display fragments
pub trait Splitter {
    /// Split `word` under `params`. Must never return an empty list.
    fn split(&self, word: &str, params: &SplitParams) -> Fragments;
}

impl<F> Splitter for F
where
    F: Fn(&str, &SplitParams) -> Fragments,
{
    fn split(&self, word: &str, params: &SplitParams) -> Fragments {
        self(word, params)
    }
}

/// Length-bounded splitter that appends a separator to every fragment but the last.
///
/// Lengths are counted in `char`s. A word that fits the budget (or any word
/// when the budget is 0) comes back whole. Otherwise it is cut greedily into
/// pieces of `max - separator length` characters; if the last piece ends up
/// shorter than `fraction_of_max` of that size, characters are shifted toward
/// the tail until no piece is longer than the one after it.
///
/// The budget always leaves room for one character of the word. A separator
/// as long as the budget or longer therefore overflows it: with `max = 5` and
/// separator `"%%%%%%"` every fragment but the last is one character plus the
/// separator, seven characters in all.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hyphenator;

impl Hyphenator {
    /// Create a new hyphenator
    pub fn new() -> Self {
        Self
    }
}

impl Splitter for Hyphenator {
    fn split(&self, word: &str, params: &SplitParams) -> Fragments {
        // Byte offset of every char boundary, end of word included
        let bounds: Vec<usize> = word
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(word.len()))
            .collect();
        let len = bounds.len() - 1;
        let max = params.max_num_characters;

        if max == 0 || len <= max {
            return smallvec![word.to_string()];
        }

        let separator = if params.separator_applies() {
            params.separator.as_str()
        } else {
            ""
        };
        let piece_size = max.saturating_sub(separator.chars().count()).max(1);

        let mut sizes = piece_sizes(len, piece_size);
        if params.redistribute && last_piece_too_short(&sizes, piece_size, params.fraction_of_max) {
            rebalance(&mut sizes);
        }

        let mut fragments = Fragments::with_capacity(sizes.len());
        let mut start = 0;
        for (i, size) in sizes.iter().enumerate() {
            let end = start + size;
            let piece = &word[bounds[start]..bounds[end]];
            if i + 1 < sizes.len() {
                fragments.push(format!("{piece}{separator}"));
            } else {
                fragments.push(piece.to_string());
            }
            start = end;
        }
        fragments
    }
}

/// Greedy cut: full pieces followed by whatever remains
fn piece_sizes(len: usize, piece_size: usize) -> Vec<usize> {
    let count = len.div_ceil(piece_size);
    let mut sizes = vec![piece_size; count];
    if let Some(last) = sizes.last_mut() {
        *last = len - piece_size * (count - 1);
    }
    sizes
}

fn last_piece_too_short(sizes: &[usize], piece_size: usize, fraction_of_max: f64) -> bool {
    if sizes.len() < 2 {
        return false;
    }
    let threshold = ((fraction_of_max * piece_size as f64).floor() as usize).min(piece_size);
    sizes[sizes.len() - 1] < threshold
}

/// Walk the boundaries from the tail, moving characters right while the left
/// piece is longer.
fn rebalance(sizes: &mut [usize]) {
    for i in (0..sizes.len().saturating_sub(1)).rev() {
        while sizes[i] > sizes[i + 1] {
            sizes[i] -= 1;
            sizes[i + 1] += 1;
        }
    }
}

/// Rebuild a word from its fragments by stripping the separator from every
/// fragment but the last.
pub fn reconstruct(fragments: &[String], params: &SplitParams) -> String {
    let separator = if params.separator_applies() {
        params.separator.as_str()
    } else {
        ""
    };
    let last = fragments.len().saturating_sub(1);
    fragments
        .iter()
        .enumerate()
        .map(|(i, fragment)| {
            if i < last {
                fragment.strip_suffix(separator).unwrap_or(fragment)
            } else {
                fragment.as_str()
            }
        })
        .collect()
}
