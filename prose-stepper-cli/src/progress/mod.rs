//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for walking a collection, counted in words
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Start a bar for one source with `total_words` words
    pub fn init_words(&mut self, name: &str, total_words: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_words);
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} words {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");
        pb.set_style(style);
        pb.set_message(name.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Move the bar to the word at flat `index`
    pub fn word_reached(&self, index: usize) {
        if let Some(pb) = &self.progress_bar {
            pb.set_position(index as u64 + 1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&mut self) {
        if let Some(pb) = self.progress_bar.take() {
            pb.finish_with_message("Complete");
        }
    }
}
