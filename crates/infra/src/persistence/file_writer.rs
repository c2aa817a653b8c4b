// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use numtext_ports::sink::ReportSink;
use numtext_shared_kernel::{InfrastructureError, Result};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create a buffered writer targeting `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<BufWriter<File>> {
        File::create(path.as_ref()).map(BufWriter::new)
    }

    /// Atomically write `data` to `path` via a temp file and rename.
    /// Best-effort fsync is attempted where available.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        // PID + nanos keeps concurrent writers in one directory apart.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let mut w = Self::create(&tmp)?;
        let written = w.write_all(data).and_then(|()| w.flush());
        if let Err(err) = written {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }
        let _ = w.get_ref().sync_all();
        drop(w);

        if let Err(err) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }

        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}

/// [`ReportSink`] that replaces the contents of a file.
#[derive(Debug, Clone)]
pub struct FileReportSink {
    path: PathBuf,
}

impl FileReportSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for FileReportSink {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn publish(&self, report: &str) -> Result<()> {
        FileWriter::atomic_write(&self.path, report.as_bytes()).map_err(|source| {
            InfrastructureError::FileWrite { path: self.path.clone(), source }
        })?;
        log::debug!("saved {} bytes to {}", report.len(), self.path.display());
        Ok(())
    }
}
