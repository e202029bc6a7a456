//! Text sources
//!
//! The pipeline only needs plain text. Fetching documents over the network
//! and stripping markup belong to the caller; these sources cover text that
//! is already in memory or on disk.

use std::path::{Path, PathBuf};

use crate::errors::{Result, SummarizeError};
use crate::pipeline::traits::TextSource;

/// Text held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticText(String);

impl StaticText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl TextSource for StaticText {
    fn fetch_raw_text(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// UTF-8 text file read at fetch time
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for FileSource {
    fn fetch_raw_text(&self) -> Result<String> {
        std::fs::read_to_string(&self.path).map_err(SummarizeError::collaborator)
    }
}
