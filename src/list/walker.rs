//! Recursive directory walking producing a flat list of files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::config::WalkerConfig;
use super::utils::{passes_time_filter, should_ignore_path};

/// Metadata for one file found during traversal.
///
/// Captured with a single stat call so that sorting never touches the
/// filesystem again. `is_dir` is always false for entries emitted by
/// [`DirectoryWalker`] (directories are traversed, not listed), but the
/// sorting layer supports it for callers that build their own entries.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    pub size: u64,
    pub created: SystemTime,
    pub modified: SystemTime,
}

impl FileEntry {
    /// Stat `path` and capture its metadata.
    ///
    /// Creation time falls back to the modification time on filesystems that
    /// do not report a birth time, so time-based orderings stay total.
    pub fn from_path(path: PathBuf) -> io::Result<Self> {
        let meta = fs::metadata(&path)?;
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let modified = meta.modified()?;
        let created = meta.created().unwrap_or(modified);
        Ok(Self {
            path,
            name,
            is_dir: meta.is_dir(),
            size: meta.len(),
            created,
            modified,
        })
    }
}

/// Depth-first walker that flattens a directory tree into its files.
///
/// Directory entries are read and name-sorted per level, so traversal order
/// is deterministic for an unchanged tree. Filesystem errors propagate to
/// the caller; there is no partial-result mode.
pub struct DirectoryWalker {
    config: WalkerConfig,
}

impl DirectoryWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Collect every regular file at any depth below `root`.
    pub fn walk(&self, root: &Path) -> io::Result<Vec<FileEntry>> {
        let mut files = Vec::new();
        self.walk_dir(root, 0, &mut files)?;
        Ok(files)
    }

    fn walk_dir(&self, dir: &Path, depth: usize, out: &mut Vec<FileEntry>) -> io::Result<()> {
        let mut entries: Vec<fs::DirEntry> = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let path = entry.path();

            if should_ignore_path(&path, &self.config.ignore_patterns) {
                continue;
            }

            let file_type = entry.file_type()?;
            if file_type.is_symlink() && !self.config.follow_symlinks {
                // Skipping symlinks also rules out link cycles.
                continue;
            }

            // With follow_symlinks, path.is_dir() resolves the link target.
            let is_dir = if file_type.is_symlink() {
                path.is_dir()
            } else {
                file_type.is_dir()
            };

            if is_dir {
                if self.config.max_depth.is_none_or(|max| depth + 1 < max) {
                    self.walk_dir(&path, depth + 1, out)?;
                }
                continue;
            }

            let file = FileEntry::from_path(path)?;
            if passes_time_filter(file.modified, &self.config) {
                out.push(file);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::test_utils::TempTree;

    fn walk(tree: &TempTree, config: WalkerConfig) -> Vec<FileEntry> {
        DirectoryWalker::new(config)
            .walk(tree.path())
            .expect("walk should succeed")
    }

    fn names(files: &[FileEntry]) -> Vec<&str> {
        files.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_walk_flattens_nested_files() {
        let tree = TempTree::new();
        tree.add_file("a.txt", "aaa");
        tree.add_file("sub/b.txt", "bb");
        tree.add_file("sub/deeper/c.txt", "c");

        let files = walk(&tree, WalkerConfig::default());
        assert_eq!(files.len(), 3);
        assert!(files.iter().all(|f| !f.is_dir));
    }

    #[test]
    fn test_directories_are_not_emitted() {
        let tree = TempTree::new();
        tree.add_dir("empty");
        tree.add_file("only.txt", "x");

        let files = walk(&tree, WalkerConfig::default());
        assert_eq!(names(&files), ["only.txt"]);
    }

    #[test]
    fn test_traversal_order_is_name_sorted_per_level() {
        let tree = TempTree::new();
        tree.add_file("zebra.txt", "z");
        tree.add_file("apple.txt", "a");
        tree.add_file("mid/inner.txt", "i");

        let files = walk(&tree, WalkerConfig::default());
        assert_eq!(names(&files), ["apple.txt", "inner.txt", "zebra.txt"]);
    }

    #[test]
    fn test_size_captured_at_traversal_time() {
        let tree = TempTree::new();
        tree.add_sized("big.bin", 200);
        tree.add_sized("small.bin", 50);

        let files = walk(&tree, WalkerConfig::default());
        let sizes: Vec<u64> = files.iter().map(|f| f.size).collect();
        assert_eq!(sizes, [200, 50]);
    }

    #[test]
    fn test_max_depth_limits_descent() {
        let tree = TempTree::new();
        tree.add_file("top.txt", "t");
        tree.add_file("one/mid.txt", "m");
        tree.add_file("one/two/deep.txt", "d");

        let config = WalkerConfig {
            max_depth: Some(1),
            ..Default::default()
        };
        let files = walk(&tree, config);
        assert_eq!(names(&files), ["top.txt"]);

        let config = WalkerConfig {
            max_depth: Some(2),
            ..Default::default()
        };
        let files = walk(&tree, config);
        assert_eq!(names(&files), ["mid.txt", "top.txt"]);
    }

    #[test]
    fn test_ignore_patterns_prune_files_and_directories() {
        let tree = TempTree::new();
        tree.add_file("keep.txt", "k");
        tree.add_file("skip.log", "s");
        tree.add_file("node_modules/dep.js", "d");

        let config = WalkerConfig {
            ignore_patterns: vec!["*.log".to_string(), "node_modules".to_string()],
            ..Default::default()
        };
        let files = walk(&tree, config);
        assert_eq!(names(&files), ["keep.txt"]);
    }

    #[test]
    fn test_missing_root_propagates_error() {
        let tree = TempTree::new();
        let missing = tree.path().join("no-such-dir");
        let result = DirectoryWalker::new(WalkerConfig::default()).walk(&missing);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_newer_filter_excludes_old_files() {
        let tree = TempTree::new();
        tree.add_file("fresh.txt", "f");

        // Cutoff in the future: nothing qualifies as newer.
        let config = WalkerConfig {
            newer_than: Some(SystemTime::now() + Duration::from_secs(3600)),
            ..Default::default()
        };
        assert!(walk(&tree, config).is_empty());

        // Cutoff in the past: everything qualifies.
        let config = WalkerConfig {
            newer_than: Some(SystemTime::now() - Duration::from_secs(3600)),
            ..Default::default()
        };
        assert_eq!(walk(&tree, config).len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_skipped_by_default() {
        use std::os::unix::fs::symlink;

        let tree = TempTree::new();
        tree.add_file("real/target.txt", "t");
        symlink(tree.path().join("real"), tree.path().join("link"))
            .expect("failed to create symlink");
        symlink("..", tree.path().join("real/parent")).expect("failed to create parent symlink");

        let files = walk(&tree, WalkerConfig::default());
        assert_eq!(names(&files), ["target.txt"]);
    }
}
