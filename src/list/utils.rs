//! Shared utility functions for listing

use std::path::Path;
use std::time::SystemTime;

use glob::Pattern;

use super::config::WalkerConfig;

/// Check if a path should be ignored based on its name and ignore patterns.
pub fn should_ignore_path(path: &Path, ignore_patterns: &[String]) -> bool {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    for pattern in ignore_patterns {
        if name == *pattern || glob_match(pattern, &name) {
            return true;
        }
    }

    false
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

/// Render `path` relative to `root` with forward slashes and no leading
/// separator, whatever the platform separator is.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let stripped = path.strip_prefix(root).unwrap_or(path);
    stripped
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Format a size in bytes to human-readable format.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}

/// Check if a modification time passes the configured time filters.
pub fn passes_time_filter(mtime: SystemTime, config: &WalkerConfig) -> bool {
    if let Some(newer) = config.newer_than {
        if mtime < newer {
            return false;
        }
    }

    if let Some(older) = config.older_than {
        if mtime > older {
            return false;
        }
    }

    true
}
