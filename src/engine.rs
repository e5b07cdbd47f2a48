//! Engine facade: wires configuration, dictionary store, converter, and
//! walker behind the entry points that front ends consume.

use std::collections::HashSet;
use std::path::Path;

use crate::config::Config;
use crate::convert::{Converter, TextStats};
use crate::dict::{DictError, DictStore};
use crate::report;
use crate::walker::{ProjectSummary, ProjectWalker, WalkError};

/// One engine instance: a dictionary store that lives as long as the
/// engine, and a converter whose ranked cache follows it.
pub struct Engine {
    config: Config,
    store: DictStore,
    converter: Converter,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        let store = DictStore::new();
        let converter = Converter::new(&store);
        Self {
            config,
            store,
            converter,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(Config::default())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &DictStore {
        &self.store
    }

    /// Add a custom mapping; false when the pair fails validation.
    pub fn add_mapping(&mut self, simplified: &str, traditional: &str) -> bool {
        self.store.add_mapping(simplified, traditional)
    }

    /// Remove a custom mapping; built-in entries are not removable.
    pub fn remove_mapping(&mut self, simplified: &str) -> bool {
        self.store.remove_mapping(simplified)
    }

    /// Load a `simplified:traditional` mapping file into the custom layer.
    pub fn load_custom_mappings(&mut self, path: impl AsRef<Path>) -> Result<usize, DictError> {
        self.store.load_from_file(path)
    }

    /// Convert a text block in memory.
    pub fn convert_text(&mut self, text: &str) -> (String, usize) {
        self.converter.convert(&self.store, text)
    }

    /// Conversion statistics for a text block.
    pub fn text_statistics(&mut self, text: &str) -> TextStats {
        self.converter.statistics(&self.store, text)
    }

    /// Walk `root` and convert (or preview) every eligible file.
    pub fn convert_project(
        &mut self,
        root: &Path,
        preview_mode: bool,
        extension_filter: Option<&HashSet<String>>,
    ) -> Result<ProjectSummary, WalkError> {
        let walker = ProjectWalker::new(&self.config);
        walker.convert_project(
            root,
            &self.store,
            &mut self.converter,
            preview_mode,
            extension_filter,
        )
    }

    /// Human-readable summary of a walk.
    pub fn generate_report(&self, summary: &ProjectSummary, preview_mode: bool) -> String {
        report::generate_report(&self.store, summary, preview_mode)
    }
}
