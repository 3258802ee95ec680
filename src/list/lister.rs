//! The public listing entry point: walk, sort, relativize.

use std::io;
use std::path::{Path, PathBuf};

use super::config::WalkerConfig;
use super::sort::{SortEntry, sort_entries};
use super::utils::relative_path;
use super::walker::{DirectoryWalker, FileEntry};

/// Lists the files under a root directory, flat and sorted.
///
/// Stateless aside from the filesystem: every call re-walks the tree, and an
/// unchanged tree yields an identical listing. Filesystem errors from the
/// walk propagate unchanged.
pub struct Lister {
    root: PathBuf,
    config: WalkerConfig,
}

impl Lister {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config: WalkerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: WalkerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk and sort, returning full [`FileEntry`] values (absolute paths).
    pub fn entries(&self, spec: &[SortEntry]) -> io::Result<Vec<FileEntry>> {
        let files = DirectoryWalker::new(self.config.clone()).walk(&self.root)?;
        Ok(sort_entries(files, spec))
    }

    /// Walk and sort, returning root-relative forward-slash path strings.
    pub fn list(&self, spec: &[SortEntry]) -> io::Result<Vec<String>> {
        Ok(self
            .entries(spec)?
            .iter()
            .map(|f| relative_path(&self.root, &f.path))
            .collect())
    }
}
