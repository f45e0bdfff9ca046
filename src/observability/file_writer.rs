//! Append-only span log with size-based rotation.
//!
//! When the log grows past its limit it is renamed with a UTC timestamp suffix
//! (`moviesearch-spans.jsonl.20261019T101500.123`) and a fresh file is started.
//! Only the newest backups are kept.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size at which the live file is rotated (5 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Backups retained after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating line writer.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    /// Opened lazily on first write.
    writer: Mutex<Option<fs::File>>,
}

impl FileWriter {
    /// Writer with the default limits.
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            writer: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is over the limit.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors while rotating, opening, or writing, and if the lock
    /// was poisoned.
    pub fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, format!("span log lock poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            *writer = Some(OpenOptions::new().create(true).append(true).open(&self.file_path)?);
        }
        let file = writer
            .as_mut()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "span log not open"))?;

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn check_and_rotate(&self, writer: &mut Option<fs::File>) -> std::io::Result<()> {
        let Ok(metadata) = fs::metadata(&self.file_path) else {
            return Ok(());
        };
        if metadata.len() >= self.max_bytes {
            *writer = None;
            self.rotate()?;
        }
        Ok(())
    }

    fn rotate(&self) -> std::io::Result<()> {
        let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%.3f");
        let mut backup = self.file_path.clone().into_os_string();
        backup.push(format!(".{stamp}"));

        fs::rename(&self.file_path, &backup)?;
        self.cleanup_old_backups()
    }

    /// Deletes all but the newest `max_backups` backups.
    ///
    /// Timestamp suffixes sort lexically, so the names alone give the order.
    fn cleanup_old_backups(&self) -> std::io::Result<()> {
        let mut backups = self.backups()?;
        backups.sort();
        backups.reverse();

        for old in backups.iter().skip(self.max_backups) {
            if let Err(e) = fs::remove_file(old) {
                tracing::debug!(path = %old.display(), error = %e, "failed to remove old span log");
            }
        }
        Ok(())
    }

    /// Backup files of this log, unordered.
    pub fn backups(&self) -> std::io::Result<Vec<PathBuf>> {
        let parent = self.file_path.parent().unwrap_or_else(|| Path::new("."));
        let Some(name) = self.file_path.file_name().and_then(|n| n.to_str()) else {
            return Ok(vec![]);
        };
        let prefix = format!("{name}.");

        Ok(fs::read_dir(parent)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("spans.jsonl");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").expect("write");
        writer.write_line("{\"b\":2}").expect("write");

        let contents = fs::read_to_string(&path).expect("read");
        assert_eq!(contents, "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_past_limit() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("spans.jsonl");
        let writer = FileWriter::with_limits(path.clone(), 8, 3);

        writer.write_line("0123456789").expect("write");
        writer.write_line("next").expect("write");

        assert_eq!(fs::read_to_string(&path).expect("read"), "next\n");
        assert_eq!(writer.backups().expect("list").len(), 1);
    }

    #[test]
    fn keeps_newest_backups_only() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("spans.jsonl");
        for stamp in ["20250101T000000.000", "20250102T000000.000", "20250103T000000.000", "20250104T000000.000"] {
            fs::write(dir.path().join(format!("spans.jsonl.{stamp}")), "old\n").expect("seed backup");
        }
        fs::write(dir.path().join("unrelated.jsonl.20250101T000000.000"), "x").expect("seed");

        let writer = FileWriter::with_limits(path, 1, 3);
        writer.cleanup_old_backups().expect("cleanup");

        let mut names: Vec<String> = writer
            .backups()
            .expect("list")
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "spans.jsonl.20250102T000000.000",
                "spans.jsonl.20250103T000000.000",
                "spans.jsonl.20250104T000000.000",
            ]
        );
        assert!(dir.path().join("unrelated.jsonl.20250101T000000.000").exists());
    }
}
