//! File reading utilities

use super::resolve_patterns;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }
}

/// Where prose comes from: files or text given on the command line
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    /// A file on disk
    File(PathBuf),
    /// Literal text
    Inline(String),
}

impl InputSource {
    /// Inline text when given, otherwise every file matching `patterns`
    pub fn collect(patterns: &[String], text: Option<&str>) -> Result<Vec<Self>> {
        if let Some(text) = text {
            return Ok(vec![InputSource::Inline(text.to_string())]);
        }
        Ok(resolve_patterns(patterns)?
            .into_iter()
            .map(InputSource::File)
            .collect())
    }

    /// Display name used in output and errors
    pub fn name(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Inline(_) => "<text>".to_string(),
        }
    }

    /// Read the whole source
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::File(path) => FileReader::read_text(path),
            InputSource::Inline(text) => Ok(text.clone()),
        }
    }
}
