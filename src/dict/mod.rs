pub mod builtin;
pub mod store;

pub use builtin::BUILTIN_MAPPINGS;
pub use store::{CategoryStats, DictError, DictStore};
