//! JSON output formatting

use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::list::{FileEntry, relative_path};

/// Serializable listing entry for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct JsonEntry {
    pub path: String,
    pub size: u64,
    pub mtime: DateTime<Utc>,
}

impl JsonEntry {
    pub fn new(root: &Path, entry: &FileEntry) -> Self {
        Self {
            path: relative_path(root, &entry.path),
            size: entry.size,
            mtime: DateTime::<Utc>::from(entry.modified),
        }
    }
}

/// Print a listing as pretty-printed JSON to stdout.
pub fn print_json(root: &Path, entries: &[FileEntry]) -> io::Result<()> {
    let items: Vec<JsonEntry> = entries.iter().map(|e| JsonEntry::new(root, e)).collect();
    let json =
        serde_json::to_string_pretty(&items).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
