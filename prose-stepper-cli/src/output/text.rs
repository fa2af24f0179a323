//! Plain text output formatter

use super::{single_line, FragmentRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one fragment per line
pub struct TextFormatter<W: Write> {
    writer: W,
    show_positions: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            show_positions: false,
        }
    }

    /// Prefix every line with `sentence:word:fragment`
    pub fn with_positions(mut self, show_positions: bool) -> Self {
        self.show_positions = show_positions;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_fragment(&mut self, record: &FragmentRecord) -> Result<()> {
        let text = single_line(&record.text);
        if self.show_positions {
            let p = record.position;
            writeln!(self.writer, "{}:{}:{}\t{text}", p.sentence, p.word, p.fragment)?;
        } else {
            writeln!(self.writer, "{text}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
