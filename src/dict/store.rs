//! Dictionary store: built-in term table plus user-added overrides.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::convert::validate_mapping;

#[derive(Error, Debug)]
pub enum DictError {
    #[error("mapping file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read mapping file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write mapping file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Merged-view counts by simplified-key length, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryStats {
    pub single_char: usize,
    pub two_char: usize,
    pub longer: usize,
}

/// Simplified→traditional mapping set.
///
/// Two layers: an immutable built-in table injected at construction, and a
/// mutable, insertion-ordered custom layer. Custom entries override built-in
/// ones with the same key. Every mutation of the custom layer bumps
/// [`version`](Self::version); the converter uses the counter to know when
/// its ranked cache is stale.
#[derive(Debug)]
pub struct DictStore {
    builtin: &'static [(&'static str, &'static str)],
    builtin_index: HashMap<&'static str, &'static str>,
    custom: Vec<(String, String)>,
    custom_index: HashMap<String, usize>,
    version: u64,
}

impl DictStore {
    /// Store backed by the built-in table.
    pub fn new() -> Self {
        Self::with_builtin(super::builtin::BUILTIN_MAPPINGS)
    }

    /// Store backed by an explicit built-in table (tests inject small ones).
    pub fn with_builtin(table: &'static [(&'static str, &'static str)]) -> Self {
        let builtin_index = table.iter().copied().collect();
        Self {
            builtin: table,
            builtin_index,
            custom: Vec::new(),
            custom_index: HashMap::new(),
            version: 0,
        }
    }

    /// Validate and insert a custom mapping.
    ///
    /// Returns false without mutating anything if the pair fails validation.
    /// An existing custom entry with the same key is overwritten in place,
    /// keeping its insertion position.
    pub fn add_mapping(&mut self, simplified: &str, traditional: &str) -> bool {
        if !validate_mapping(simplified, traditional) {
            return false;
        }
        match self.custom_index.get(simplified) {
            Some(&slot) => {
                self.custom[slot].1 = traditional.to_owned();
            }
            None => {
                self.custom_index
                    .insert(simplified.to_owned(), self.custom.len());
                self.custom
                    .push((simplified.to_owned(), traditional.to_owned()));
            }
        }
        self.version += 1;
        true
    }

    /// Remove a custom mapping. Built-in entries are never removable.
    pub fn remove_mapping(&mut self, simplified: &str) -> bool {
        let Some(slot) = self.custom_index.remove(simplified) else {
            return false;
        };
        self.custom.remove(slot);
        for index in self.custom_index.values_mut() {
            if *index > slot {
                *index -= 1;
            }
        }
        self.version += 1;
        true
    }

    /// Merged view: custom entries override built-in ones on key collision.
    pub fn all_mappings(&self) -> HashMap<&str, &str> {
        let mut merged: HashMap<&str, &str> = self.builtin_index.clone();
        for (simplified, traditional) in &self.custom {
            merged.insert(simplified, traditional);
        }
        merged
    }

    /// Merged pairs in ranking insertion order: built-in table order first
    /// (with custom overrides applied in place), then custom-only entries in
    /// insertion order.
    pub fn merged_pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        let overridden = self.builtin.iter().map(|&(simplified, traditional)| {
            match self.custom_index.get(simplified) {
                Some(&slot) => (simplified, self.custom[slot].1.as_str()),
                None => (simplified, traditional),
            }
        });
        let custom_only = self
            .custom
            .iter()
            .filter(|(simplified, _)| !self.builtin_index.contains_key(simplified.as_str()))
            .map(|(simplified, traditional)| (simplified.as_str(), traditional.as_str()));
        overridden.chain(custom_only)
    }

    /// Version counter for the custom layer. Bumped on every successful
    /// add/remove; never reset.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn builtin_len(&self) -> usize {
        self.builtin_index.len()
    }

    pub fn custom_len(&self) -> usize {
        self.custom.len()
    }

    /// Size of the merged view.
    pub fn len(&self) -> usize {
        self.merged_pairs().count()
    }

    pub fn is_empty(&self) -> bool {
        self.builtin_index.is_empty() && self.custom.is_empty()
    }

    /// Load custom mappings from a line-oriented file.
    ///
    /// Each non-blank, non-`#` line of the form `simplified:traditional`
    /// (first `:` separates) is added through [`add_mapping`](Self::add_mapping).
    /// Lines without a separator or failing validation are skipped silently.
    /// Returns the number of pairs added.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize, DictError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DictError::FileNotFound(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path).map_err(|source| DictError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut added = 0;
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((simplified, traditional)) = line.split_once(':') else {
                continue;
            };
            if self.add_mapping(simplified.trim(), traditional.trim()) {
                added += 1;
            }
        }
        debug!(path = %path.display(), added, "loaded custom mappings");
        Ok(added)
    }

    /// Write the custom layer back in the mapping-file format.
    pub fn save_custom_mappings(&self, path: impl AsRef<Path>) -> Result<(), DictError> {
        let path = path.as_ref();
        let mut contents = String::from("# custom simplified:traditional mappings\n");
        for (simplified, traditional) in &self.custom {
            contents.push_str(simplified);
            contents.push(':');
            contents.push_str(traditional);
            contents.push('\n');
        }
        fs::write(path, contents).map_err(|source| DictError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Merged-view counts by key length.
    pub fn category_stats(&self) -> CategoryStats {
        let mut stats = CategoryStats::default();
        for (simplified, _) in self.merged_pairs() {
            match simplified.chars().count() {
                1 => stats.single_char += 1,
                2 => stats.two_char += 1,
                _ => stats.longer += 1,
            }
        }
        stats
    }

    /// Merged entries whose simplified or traditional form contains `term`.
    pub fn search(&self, term: &str) -> Vec<(String, String)> {
        self.merged_pairs()
            .filter(|(simplified, traditional)| {
                simplified.contains(term) || traditional.contains(term)
            })
            .map(|(simplified, traditional)| (simplified.to_owned(), traditional.to_owned()))
            .collect()
    }
}

impl Default for DictStore {
    fn default() -> Self {
        Self::new()
    }
}
