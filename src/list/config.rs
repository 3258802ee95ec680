//! Configuration for directory walking

use std::time::SystemTime;

/// Configuration for walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Descend at most this many directory levels below the root.
    pub max_depth: Option<usize>,
    /// Glob patterns matched against entry names; matching files and
    /// directories are pruned from the walk.
    pub ignore_patterns: Vec<String>,
    /// Only include files modified after this time
    pub newer_than: Option<SystemTime>,
    /// Only include files modified before this time
    pub older_than: Option<SystemTime>,
    /// Follow symbolic links instead of skipping them. Link cycles are not
    /// detected; a cyclic tree will recurse until the walk fails.
    pub follow_symlinks: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            ignore_patterns: Vec::new(),
            newer_than: None,
            older_than: None,
            follow_symlinks: false,
        }
    }
}
