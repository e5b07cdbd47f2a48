//! Directory-tree traversal and per-project aggregation.
//!
//! The walker prunes excluded directories, filters files by extension or
//! exact name, and hands each eligible file to the [`FileAdapter`]. One
//! file's failure is recorded in the summary and never aborts the walk.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::convert::{Converter, PreviewMatch};
use crate::dict::DictStore;
use crate::process::FileAdapter;

#[derive(Error, Debug)]
pub enum WalkError {
    #[error("project path not found: {0}")]
    RootNotFound(PathBuf),
}

/// Per-file detail entry in a [`ProjectSummary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDetail {
    pub path: PathBuf,
    pub conversions: usize,
}

/// Aggregate result of one project walk. Counts are simple sums and do not
/// depend on visitation order.
#[derive(Debug, Default)]
pub struct ProjectSummary {
    /// Eligible files visited, whatever their outcome.
    pub total_files: usize,
    /// Files with at least one conversion (rewritten in apply mode, matched
    /// in preview mode).
    pub processed_files: usize,
    pub total_conversions: usize,
    pub file_details: Vec<FileDetail>,
    /// Preview matches aggregated across all files (preview mode only).
    pub preview_matches: Vec<PreviewMatch>,
    pub errors: Vec<String>,
}

/// Walks a directory tree and applies the [`FileAdapter`] to eligible files.
pub struct ProjectWalker<'a> {
    config: &'a Config,
}

impl<'a> ProjectWalker<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Convert (or preview) every eligible file under `root`.
    ///
    /// `extension_filter` overrides the configured default set when given.
    /// Mapping mutation is structurally impossible during the walk: the
    /// store is borrowed immutably for its whole duration.
    pub fn convert_project(
        &self,
        root: &Path,
        store: &DictStore,
        converter: &mut Converter,
        preview_mode: bool,
        extension_filter: Option<&HashSet<String>>,
    ) -> Result<ProjectSummary, WalkError> {
        if !root.exists() {
            return Err(WalkError::RootNotFound(root.to_path_buf()));
        }
        let extensions = extension_filter.unwrap_or(&self.config.target_extensions);
        let adapter = FileAdapter::new(self.config);
        let mut summary = ProjectSummary::default();

        debug!(root = %root.display(), preview_mode, "starting project walk");
        let entries = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| !self.is_excluded_dir(entry));
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    summary.errors.push(err.to_string());
                    continue;
                }
            };
            if !entry.file_type().is_file() || !is_eligible(entry.path(), extensions) {
                continue;
            }

            summary.total_files += 1;
            let outcome = adapter.process_file(entry.path(), store, converter, preview_mode);
            if let Some(error) = outcome.error {
                summary
                    .errors
                    .push(format!("{}: {}", entry.path().display(), error));
                continue;
            }
            if outcome.conversions > 0 {
                summary.processed_files += 1;
                summary.total_conversions += outcome.conversions;
                summary.file_details.push(FileDetail {
                    path: outcome.path,
                    conversions: outcome.conversions,
                });
            }
            summary.preview_matches.extend(outcome.preview);
        }

        debug!(
            total = summary.total_files,
            processed = summary.processed_files,
            errors = summary.errors.len(),
            "walk finished"
        );
        Ok(summary)
    }

    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.config.exclude_dirs.contains(name))
    }
}

/// A file is eligible when its lowercased `.ext` or its exact name is in
/// the filter set.
fn is_eligible(path: &Path, extensions: &HashSet<String>) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if extensions.contains(name) {
        return true;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.contains(&format!(".{}", ext.to_ascii_lowercase())))
}
