//! Flat recursive listing
//!
//! This module walks a directory tree depth-first, flattens it into its
//! regular files, and orders the result by a composite sort specification:
//!
//! - `DirectoryWalker`: recursive traversal producing `FileEntry` values
//! - `sort_entries`: stable multi-key sorting with NAME-driven global reversal
//! - `Lister`: the composition root returning relative path strings

mod config;
mod lister;
mod sort;
mod utils;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use lister::Lister;
pub use sort::{SortEntry, SortKey, SortSpec, sort_entries};
pub use utils::{format_size, relative_path};
pub use walker::{DirectoryWalker, FileEntry};
