//! JSON output formatter

use super::{FragmentRecord, OutputFormatter};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - collects fragments and writes them as one JSON document
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    sources: Vec<SourceData>,
}

/// Fragments from one input source
#[derive(Debug, Serialize)]
pub struct SourceData {
    /// Where the text came from
    pub source: String,
    /// Fragments in the order they were produced
    pub fragments: Vec<FragmentRecord>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
            sources: Vec::new(),
        }
    }

    /// Toggle pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn begin_source(&mut self, name: &str) -> Result<()> {
        self.sources.push(SourceData {
            source: name.to_string(),
            fragments: Vec::new(),
        });
        Ok(())
    }

    fn format_fragment(&mut self, record: &FragmentRecord) -> Result<()> {
        if self.sources.is_empty() {
            self.begin_source("input")?;
        }
        if let Some(source) = self.sources.last_mut() {
            source.fragments.push(record.clone());
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.sources)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.sources)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
