use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use numtext_ports::source::{LineSource, SourceLine};
use numtext_shared_kernel::{InfrastructureError, LineNumber, Result};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> std::io::Result<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }

    /// Read every line (without terminators), numbering from 1.
    pub fn read_numbered_lines(path: &Path) -> std::io::Result<Vec<SourceLine>> {
        let reader = Self::open_buffered(path)?;
        let mut lines = Vec::new();
        let mut number = LineNumber::first();
        for line in reader.lines() {
            lines.push(SourceLine { number, text: line? });
            number = number.next();
        }
        Ok(lines)
    }
}

/// [`LineSource`] backed by a UTF-8 text file.
#[derive(Debug, Clone)]
pub struct FileLineSource {
    path: PathBuf,
}

impl FileLineSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LineSource for FileLineSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_lines(&self) -> Result<Vec<SourceLine>> {
        let lines = FileReader::read_numbered_lines(&self.path).map_err(|source| {
            InfrastructureError::FileRead { path: self.path.clone(), source }
        })?;
        log::debug!("read {} lines from {}", lines.len(), self.path.display());
        Ok(lines)
    }
}
