//! Engine configuration: which files to touch, which directories to skip,
//! size cap, backup policy.
//!
//! Defaults are compiled in; a user-supplied JSON file overrides individual
//! fields and leaves the rest at their defaults.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Extensions (and exact file names) processed when no explicit filter is
/// given. Entries carry a leading dot unless they name a whole file.
const DEFAULT_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".jsx", ".ts", ".tsx", ".vue", ".html", ".htm", ".css", ".scss", ".sass",
    ".less", ".json", ".xml", ".yaml", ".yml", ".md", ".txt", ".csv", ".sql", ".conf", ".config",
    ".ini", ".toml", ".properties", ".sh", ".bat", ".ps1", ".cmake", ".gradle", ".java", ".c",
    ".cpp", ".h", ".hpp", ".cs", ".go", ".rs", ".php", ".rb", ".swift", ".kt", ".scala", ".clj",
    ".hs", ".ml", ".r", ".m", "Makefile", "Dockerfile",
];

/// Directory names pruned from the walk wherever they appear.
const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    "node_modules",
    "venv",
    "__pycache__",
    ".git",
    ".svn",
    ".hg",
    "dist",
    "build",
    "out",
    "target",
    "bin",
    "obj",
    "vendor",
    "coverage",
    ".pytest_cache",
    ".tox",
    ".next",
    ".nuxt",
    ".vscode",
    ".idea",
    ".gradle",
    "bower_components",
    ".sass-cache",
    "logs",
    "tmp",
    "temp",
];

const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config from {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config JSON ({path}): {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Leading-dot extensions plus exact file names.
    pub target_extensions: HashSet<String>,
    /// Directory names excluded from the walk.
    pub exclude_dirs: HashSet<String>,
    /// Files above this many bytes are reported as errors, not read.
    pub max_file_size: u64,
    /// Copy originals aside before overwriting.
    pub create_backup: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_extensions: DEFAULT_EXTENSIONS.iter().map(|s| (*s).to_owned()).collect(),
            exclude_dirs: DEFAULT_EXCLUDE_DIRS.iter().map(|s| (*s).to_owned()).collect(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            create_backup: false,
        }
    }
}

impl Config {
    /// Load a JSON config file; absent fields keep their defaults.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Normalize a user-supplied extension: lowercase, with a leading dot added
/// unless the entry names a whole file (e.g. `Makefile` stays as-is).
pub fn normalize_extension(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('.') {
        trimmed.to_ascii_lowercase()
    } else if trimmed.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
        // Exact-filename entry such as Makefile or Dockerfile.
        trimmed.to_owned()
    } else {
        format!(".{}", trimmed.to_ascii_lowercase())
    }
}

/// Parse a comma-separated extension list from the command line.
pub fn parse_extension_filter(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(normalize_extension)
        .collect()
}
