//! Per-file conversion: read with encoding detection, rewrite or preview,
//! optionally back up, write back as UTF-8.
//!
//! Every failure is captured in the file's [`FileOutcome`]; nothing here
//! aborts a caller iterating over other files.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::convert::{Converter, PreviewMatch};
use crate::dict::DictStore;
use crate::encoding::decode_text;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("cannot read file: {0}")]
    Unreadable(String),

    #[error("file too large ({size} bytes exceeds cap of {cap} bytes)")]
    TooLarge { size: u64, cap: u64 },

    #[error("backup failed: {0}")]
    BackupFailed(std::io::Error),

    #[error("write failed: {0}")]
    WriteFailed(std::io::Error),
}

/// Result of processing one file.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// True when the file was rewritten (apply mode only).
    pub processed: bool,
    pub conversions: usize,
    pub error: Option<ProcessError>,
    /// Populated in preview mode.
    pub preview: Vec<PreviewMatch>,
}

impl FileOutcome {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            processed: false,
            conversions: 0,
            error: None,
            preview: Vec::new(),
        }
    }

    fn fail(path: &Path, error: ProcessError) -> Self {
        let mut outcome = Self::new(path);
        outcome.error = Some(error);
        outcome
    }
}

/// Applies the converter to individual files under a [`Config`]'s size and
/// backup policy.
#[derive(Debug, Clone, Copy)]
pub struct FileAdapter {
    max_file_size: u64,
    create_backup: bool,
}

impl FileAdapter {
    pub fn new(config: &Config) -> Self {
        Self {
            max_file_size: config.max_file_size,
            create_backup: config.create_backup,
        }
    }

    /// Process a single file.
    ///
    /// Preview mode reports would-be substitutions and never writes. Apply
    /// mode rewrites the file as UTF-8 when anything converted, optionally
    /// copying the original aside first; a file with zero conversions is
    /// left untouched.
    pub fn process_file(
        &self,
        path: &Path,
        store: &DictStore,
        converter: &mut Converter,
        preview_mode: bool,
    ) -> FileOutcome {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(err) => return FileOutcome::fail(path, ProcessError::Unreadable(err.to_string())),
        };
        if !metadata.is_file() {
            return FileOutcome::fail(
                path,
                ProcessError::Unreadable("not a regular file".to_owned()),
            );
        }
        if metadata.len() > self.max_file_size {
            return FileOutcome::fail(
                path,
                ProcessError::TooLarge {
                    size: metadata.len(),
                    cap: self.max_file_size,
                },
            );
        }

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => return FileOutcome::fail(path, ProcessError::Unreadable(err.to_string())),
        };
        let decoded = decode_text(&bytes);
        if decoded.degraded {
            warn!(path = %path.display(), "degraded read; file is probably not text");
        }

        let mut outcome = FileOutcome::new(path);
        if preview_mode {
            let matches = converter.preview(store, &decoded.text);
            outcome.conversions = matches.iter().map(|m| m.count).sum();
            outcome.preview = matches;
            return outcome;
        }

        let (converted, count) = converter.convert(store, &decoded.text);
        if count == 0 {
            return outcome;
        }

        if self.create_backup {
            match create_backup(path) {
                Ok(backup) => debug!(backup = %backup.display(), "backed up original"),
                Err(err) => {
                    // Without the backup the user asked for, the original
                    // must not be overwritten.
                    outcome.error = Some(ProcessError::BackupFailed(err));
                    return outcome;
                }
            }
        }

        match write_utf8(path, &converted) {
            Ok(()) => {
                outcome.processed = true;
                outcome.conversions = count;
                debug!(path = %path.display(), count, from = %decoded.encoding, "converted file");
            }
            Err(err) => outcome.error = Some(ProcessError::WriteFailed(err)),
        }
        outcome
    }
}

/// Copy `path` aside before overwriting.
///
/// First backup gets `<name>.backup`; if that already exists, a timestamped
/// `<name>.<YYYYMMDD_HHMMSS>.backup` is used instead.
fn create_backup(path: &Path) -> std::io::Result<PathBuf> {
    let mut backup = backup_path(path, None);
    if backup.exists() {
        let stamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        backup = backup_path(path, Some(&stamp));
    }
    fs::copy(path, &backup)?;
    Ok(backup)
}

fn backup_path(path: &Path, stamp: Option<&str>) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    if let Some(stamp) = stamp {
        name.push(".");
        name.push(stamp);
    }
    name.push(".backup");
    PathBuf::from(name)
}

/// Atomic write: tempfile in the same directory, fsync, rename.
fn write_utf8(path: &Path, contents: &str) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = tempfile::NamedTempFile::new_in(parent)?;
    temp.write_all(contents.as_bytes())?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn fixture(dir: &tempfile::TempDir, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn test_store() -> DictStore {
        let mut store = DictStore::with_builtin(&[]);
        store.add_mapping("软件", "軟體");
        store.add_mapping("测试", "測試");
        store
    }

    #[test]
    fn test_preview_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = fixture(&dir, "a.py", "# 软件测试\n".as_bytes());
        let store = test_store();
        let mut converter = Converter::new(&store);
        let adapter = FileAdapter::new(&Config::default());

        let outcome = adapter.process_file(&path, &store, &mut converter, true);
        assert!(outcome.error.is_none());
        assert_eq!(outcome.conversions, 2);
        assert_eq!(outcome.preview.len(), 2);
        assert!(!outcome.processed);
        assert_eq!(fs::read(&path).unwrap(), "# 软件测试\n".as_bytes());
    }

    #[test]
    fn test_apply_rewrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = fixture(&dir, "a.py", "# 软件测试\n".as_bytes());
        let store = test_store();
        let mut converter = Converter::new(&store);
        let adapter = FileAdapter::new(&Config::default());

        let outcome = adapter.process_file(&path, &store, &mut converter, false);
        assert!(outcome.error.is_none());
        assert!(outcome.processed);
        assert_eq!(outcome.conversions, 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "# 軟體測試\n");
    }

    #[test]
    fn test_apply_skips_file_without_matches() {
        let dir = tempfile::tempdir().unwrap();
        let path = fixture(&dir, "plain.py", b"no chinese here\n");
        let store = test_store();
        let mut converter = Converter::new(&store);
        let adapter = FileAdapter::new(&Config::default());

        let before = fs::metadata(&path).unwrap().modified().unwrap();
        let outcome = adapter.process_file(&path, &store, &mut converter, false);
        assert!(!outcome.processed);
        assert_eq!(outcome.conversions, 0);
        assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), before);
    }

    #[test]
    fn test_gb18030_source_written_back_as_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let (gb_bytes, _, _) = encoding_rs::GB18030.encode("软件");
        let path = fixture(&dir, "legacy.txt", &gb_bytes);
        let store = test_store();
        let mut converter = Converter::new(&store);
        let adapter = FileAdapter::new(&Config::default());

        let outcome = adapter.process_file(&path, &store, &mut converter, false);
        assert!(outcome.processed);
        assert_eq!(fs::read_to_string(&path).unwrap(), "軟體");
    }

    #[test]
    fn test_size_cap_is_recorded_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = fixture(&dir, "big.py", "软件".repeat(100).as_bytes());
        let config = Config {
            max_file_size: 10,
            ..Config::default()
        };
        let store = test_store();
        let mut converter = Converter::new(&store);
        let adapter = FileAdapter::new(&config);

        let outcome = adapter.process_file(&path, &store, &mut converter, false);
        assert!(matches!(outcome.error, Some(ProcessError::TooLarge { .. })));
        assert_eq!(fs::read(&path).unwrap(), "软件".repeat(100).as_bytes());
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let store = test_store();
        let mut converter = Converter::new(&store);
        let adapter = FileAdapter::new(&Config::default());

        let outcome =
            adapter.process_file(&dir.path().join("gone.py"), &store, &mut converter, false);
        assert!(matches!(outcome.error, Some(ProcessError::Unreadable(_))));
    }

    #[test]
    fn test_backup_created_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let path = fixture(&dir, "a.py", "软件".as_bytes());
        let config = Config {
            create_backup: true,
            ..Config::default()
        };
        let store = test_store();
        let mut converter = Converter::new(&store);
        let adapter = FileAdapter::new(&config);

        let outcome = adapter.process_file(&path, &store, &mut converter, false);
        assert!(outcome.processed);

        let backup = dir.path().join("a.py.backup");
        assert_eq!(fs::read_to_string(&backup).unwrap(), "软件");
        assert_eq!(fs::read_to_string(&path).unwrap(), "軟體");
    }

    #[test]
    fn test_second_backup_gets_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let path = fixture(&dir, "a.py", "软件".as_bytes());
        fs::write(dir.path().join("a.py.backup"), b"earlier backup").unwrap();
        let config = Config {
            create_backup: true,
            ..Config::default()
        };
        let store = test_store();
        let mut converter = Converter::new(&store);
        let adapter = FileAdapter::new(&config);

        let outcome = adapter.process_file(&path, &store, &mut converter, false);
        assert!(outcome.processed);

        // The earlier backup must be preserved, not clobbered.
        assert_eq!(
            fs::read(dir.path().join("a.py.backup")).unwrap(),
            b"earlier backup"
        );
        let timestamped = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| {
                let name = e.file_name().to_string_lossy().into_owned();
                name.starts_with("a.py.") && name.ends_with(".backup") && name != "a.py.backup"
            })
            .count();
        assert_eq!(timestamped, 1);
    }

    #[test]
    fn test_preview_counts_match_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = fixture(&dir, "a.md", "软件和软件\n".as_bytes());
        let store = test_store();
        let mut converter = Converter::new(&store);
        let adapter = FileAdapter::new(&Config::default());

        let outcome = adapter.process_file(&path, &store, &mut converter, true);
        assert_eq!(outcome.conversions, 2);
        assert_eq!(outcome.preview[0].simplified, "软件");
        assert_eq!(outcome.preview[0].count, 2);
    }
}
