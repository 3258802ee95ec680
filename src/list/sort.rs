//! Sort keys and composite ordering for flat file listings.
//!
//! A listing is ordered by a [`SortSpec`]: an ordered list of (key, reverse)
//! entries where the first entry is the primary field and later entries break
//! ties. The `Name` key is special: its reverse flag reverses the *entire*
//! ordering, not just the name comparison.

use std::time::{SystemTime, UNIX_EPOCH};

use super::walker::FileEntry;

/// Attribute of a file that a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Size,
    IsDir,
    Ctime,
    Mtime,
}

/// One field of a sort specification: which attribute to compare on, and
/// whether that field sorts descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortEntry {
    pub key: SortKey,
    pub reverse: bool,
}

impl SortEntry {
    pub fn new(key: SortKey, reverse: bool) -> Self {
        Self { key, reverse }
    }

    /// Ascending entry for `key`.
    pub fn asc(key: SortKey) -> Self {
        Self::new(key, false)
    }

    /// Descending entry for `key`.
    pub fn desc(key: SortKey) -> Self {
        Self::new(key, true)
    }
}

/// A bare key normalizes to ascending.
impl From<SortKey> for SortEntry {
    fn from(key: SortKey) -> Self {
        Self::new(key, false)
    }
}

/// Ordered list of sort fields; earlier entries take priority.
pub type SortSpec = Vec<SortEntry>;

/// One position of a composite sort key.
///
/// Each spec entry contributes one value per file, and key vectors compare
/// lexicographically. Within a given spec position every file produces the
/// same variant, so the derived ordering never compares across variants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortValue {
    Text(String),
    Flag(bool),
    Num(i128),
}

fn epoch_nanos(time: SystemTime) -> i128 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_nanos() as i128,
        Err(e) => -(e.duration().as_nanos() as i128),
    }
}

/// The reverse flag of the `Name` entry, if any, reverses the whole
/// ordering. The last `Name` entry wins when there are several.
fn global_reverse(spec: &[SortEntry]) -> bool {
    let mut reverse_all = false;
    for entry in spec {
        if entry.key == SortKey::Name {
            reverse_all = entry.reverse;
        }
    }
    reverse_all
}

/// Build the composite key for one file.
///
/// Non-name fields bake their direction into the value (negation, or boolean
/// XOR) so that the final whole-ordering reversal driven by the `Name` flag
/// cancels out to each field's requested direction.
fn sort_value(entry: &FileEntry, spec: &[SortEntry], reverse_all: bool) -> Vec<SortValue> {
    spec.iter()
        .map(|field| {
            let reverse = field.reverse ^ reverse_all;
            let sign: i128 = if reverse { -1 } else { 1 };
            match field.key {
                SortKey::Name => SortValue::Text(entry.name.clone()),
                SortKey::IsDir => SortValue::Flag(entry.is_dir ^ reverse),
                SortKey::Size => {
                    // Directories always compare as zero-sized.
                    if entry.is_dir {
                        SortValue::Num(0)
                    } else {
                        SortValue::Num(entry.size as i128 * sign)
                    }
                }
                SortKey::Ctime => SortValue::Num(epoch_nanos(entry.created) * sign),
                SortKey::Mtime => SortValue::Num(epoch_nanos(entry.modified) * sign),
            }
        })
        .collect()
}

/// Sort `files` by `spec`. Stable: files that tie on every specified field
/// keep their relative traversal order. An empty spec is a no-op.
pub fn sort_entries(files: Vec<FileEntry>, spec: &[SortEntry]) -> Vec<FileEntry> {
    if spec.is_empty() {
        return files;
    }
    let reverse_all = global_reverse(spec);

    // Decorate-sort-undecorate: one stat-derived key per file, built once.
    let mut decorated: Vec<(Vec<SortValue>, FileEntry)> = files
        .into_iter()
        .map(|f| (sort_value(&f, spec, reverse_all), f))
        .collect();

    // Global reversal inverts the comparator instead of reversing the output,
    // so ties still keep traversal order.
    if reverse_all {
        decorated.sort_by(|a, b| b.0.cmp(&a.0));
    } else {
        decorated.sort_by(|a, b| a.0.cmp(&b.0));
    }

    decorated.into_iter().map(|(_, f)| f).collect()
}
