use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use skiff_common::Result;

/// Append-only log of committed navigations.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one `h: <uri>` line.
    pub fn append(&self, uri: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "h: {uri}")?;
        Ok(())
    }
}
