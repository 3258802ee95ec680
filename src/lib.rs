//! flatls - Flat recursive file listing, sorted your way

pub mod list;
pub mod output;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use list::{
    DirectoryWalker, FileEntry, Lister, SortEntry, SortKey, SortSpec, WalkerConfig, format_size,
    relative_path, sort_entries,
};
pub use output::{JsonEntry, LongFormatter, OutputConfig, print_json, print_plain};
