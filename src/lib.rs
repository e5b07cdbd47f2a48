//! Hanbridge: batch simplified-to-traditional Chinese conversion for
//! source trees.
//!
//! # Architecture
//!
//! All conversion flows through one primitive: longest-match-first
//! substitution over a ranked mapping list ([`Converter`]). The dictionary
//! ([`DictStore`]) layers user-supplied overrides on a built-in term table;
//! the file layer ([`process::FileAdapter`]) handles encoding detection,
//! backups, and atomic UTF-8 write-back; the walker
//! ([`walker::ProjectWalker`]) aggregates per-file outcomes across a tree,
//! isolating failures per file.
//!
//! # Safety
//!
//! - Preview mode never writes; apply mode only rewrites files with matches
//! - Atomic file writes (tempfile + fsync + rename)
//! - Excluded directories (dependency/build trees) are pruned, never read
//! - A single file's failure never aborts the rest of a walk
//!
//! # Example
//!
//! ```no_run
//! use hanbridge::Engine;
//! use std::path::Path;
//!
//! let mut engine = Engine::with_defaults();
//! let summary = engine
//!     .convert_project(Path::new("./project"), true, None)
//!     .expect("project path exists");
//! println!("{}", engine.generate_report(&summary, true));
//! ```

pub mod config;
pub mod convert;
pub mod dict;
pub mod encoding;
pub mod engine;
pub mod process;
pub mod report;
pub mod walker;

// Re-exports
pub use config::{parse_extension_filter, Config, ConfigError};
pub use convert::{chinese_runs, is_cjk, validate_mapping, Converter, PreviewMatch, TextStats};
pub use dict::{CategoryStats, DictError, DictStore};
pub use encoding::{decode_text, DecodedText, SourceEncoding};
pub use engine::Engine;
pub use process::{FileAdapter, FileOutcome, ProcessError};
pub use report::generate_report;
pub use walker::{FileDetail, ProjectSummary, ProjectWalker, WalkError};
