//! Markdown output formatter

use super::{single_line, FragmentRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - one bullet per word, fragments joined with a bar
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    fragment_count: usize,
    word_count: usize,
    /// Sentence and word of the line being written
    current_word: Option<(usize, usize)>,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            fragment_count: 0,
            word_count: 0,
            current_word: None,
        }
    }

    fn end_line(&mut self) -> Result<()> {
        if self.current_word.take().is_some() {
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn begin_source(&mut self, name: &str) -> Result<()> {
        self.end_line()?;
        writeln!(self.writer, "## {name}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_fragment(&mut self, record: &FragmentRecord) -> Result<()> {
        let word = (record.position.sentence, record.position.word);
        let text = single_line(&record.text);
        self.fragment_count += 1;

        if self.current_word == Some(word) {
            write!(self.writer, " | `{text}`")?;
        } else {
            self.end_line()?;
            self.word_count += 1;
            write!(self.writer, "- `{text}`")?;
            self.current_word = Some(word);
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.end_line()?;
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total fragments: {} across {} words*",
            self.fragment_count, self.word_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
