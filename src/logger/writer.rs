//! Log writer module
//!
//! Thread-safe log file writing. Every failure is reported on stderr and swallowed.

use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

/// Append-only log file target
pub struct LogFile {
    file: Mutex<File>,
}

impl LogFile {
    /// Open or create a log file for appending
    pub fn open(path: &Path) -> io::Result<Self> {
        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Append one timestamped line
    pub fn write_line(&self, message: &str) {
        if let Ok(mut f) = self.file.lock() {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            if let Err(e) = writeln!(f, "[{timestamp}] {message}") {
                eprintln!("[LOGGER] Failed to write log file: {e}");
            }
        }
    }
}

/// Remove a log file left over from a previous run
pub fn remove_previous(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => eprintln!(
            "[LOGGER] Failed to remove previous log file '{}': {e}",
            path.display()
        ),
    }
}
