//! Output formatting module

use anyhow::Result;
use prose_stepper_core::{Position, ProseStepper, Splitter};
use serde::Serialize;
use std::borrow::Cow;
use std::io::Write;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one fragment per line
    Text,
    /// JSON array of fragments with position and progress
    Json,
    /// Markdown formatted output
    Markdown,
}

/// One fragment as the stepper produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FragmentRecord {
    /// The fragment text
    pub text: String,
    /// Position of the fragment
    pub position: Position,
    /// Flat word index
    pub index: usize,
    /// Word-level progress in `[0, 1]`
    pub progress: f64,
    /// The step that produced this fragment, when one was given explicitly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,
}

impl FragmentRecord {
    /// Capture the stepper's current state around `text`
    pub fn capture<S: Splitter>(stepper: &ProseStepper<S>, text: &str) -> Self {
        Self {
            text: text.to_string(),
            position: stepper.position(),
            index: stepper.get_index(),
            progress: stepper.get_progress(),
            step: None,
        }
    }

    /// Attach the step description
    pub fn with_step(mut self, step: impl ToString) -> Self {
        self.step = Some(step.to_string());
        self
    }
}

/// Escape control characters so a fragment such as a bare newline word stays
/// on one line
pub(crate) fn single_line(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 2);
    for c in text.chars() {
        if c.is_control() {
            escaped.extend(c.escape_default());
        } else {
            escaped.push(c);
        }
    }
    Cow::Owned(escaped)
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single fragment
    fn format_fragment(&mut self, record: &FragmentRecord) -> Result<()>;

    /// Mark the start of a new input source
    fn begin_source(&mut self, _name: &str) -> Result<()> {
        Ok(())
    }

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Build the formatter for `format` on top of `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    pretty_json: bool,
    show_positions: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer).with_positions(show_positions)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Writer whose contents stay readable after the formatter takes it
    #[derive(Clone, Default)]
    pub struct SharedBuffer(pub Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    pub fn record(text: &str, sentence: usize, word: usize, fragment: usize) -> FragmentRecord {
        FragmentRecord {
            text: text.to_string(),
            position: Position {
                sentence,
                word,
                fragment,
            },
            index: word,
            progress: 0.5,
            step: None,
        }
    }
}
