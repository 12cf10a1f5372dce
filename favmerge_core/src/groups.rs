//! Grouping of discovered files by base file name
//!
//! Groups are kept in discovery order: the list of groups records key order and
//! a name-to-index lookup gives constant-time appends, so ordering never depends
//! on a hash map's iteration order.

use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// All discovered files sharing one base file name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileGroup {
    /// Base file name shared by every path in the group
    #[serde(serialize_with = "serialize_lossy")]
    pub name: OsString,
    /// Full paths in discovery order
    #[serde(serialize_with = "serialize_paths_lossy")]
    pub paths: Vec<PathBuf>,
}

impl FileGroup {
    /// File name for display, with invalid UTF-8 replaced
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    /// Number of files in the group
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Groups are never constructed empty
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Whether more than one source file will be merged into this name
    pub fn needs_merge(&self) -> bool {
        self.paths.len() > 1
    }
}

/// Insertion-ordered mapping from base file name to discovered paths
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FileGroups {
    groups: Vec<FileGroup>,
    #[serde(skip)]
    index: HashMap<OsString, usize>,
}

impl FileGroups {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append `path` to the group named `name`, creating the group on first sight
    pub(crate) fn push(&mut self, name: OsString, path: PathBuf) {
        match self.index.get(&name) {
            Some(&slot) => self.groups[slot].paths.push(path),
            None => {
                self.index.insert(name.clone(), self.groups.len());
                self.groups.push(FileGroup {
                    name,
                    paths: vec![path],
                });
            }
        }
    }

    /// Paths discovered for `name`
    pub fn get(&self, name: impl AsRef<OsStr>) -> Option<&[PathBuf]> {
        self.index
            .get(name.as_ref())
            .map(|&slot| self.groups[slot].paths.as_slice())
    }

    pub fn contains(&self, name: impl AsRef<OsStr>) -> bool {
        self.index.contains_key(name.as_ref())
    }

    /// Number of distinct file names
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of discovered files across all groups
    pub fn file_count(&self) -> usize {
        self.groups.iter().map(FileGroup::len).sum()
    }

    /// File names in discovery order
    pub fn names(&self) -> impl Iterator<Item = &OsStr> {
        self.groups.iter().map(|group| group.name.as_os_str())
    }

    /// Groups in discovery order
    pub fn iter(&self) -> std::slice::Iter<'_, FileGroup> {
        self.groups.iter()
    }

    /// Consume the mapping, yielding `(name, paths)` pairs in discovery order
    pub fn into_pairs(self) -> Vec<(OsString, Vec<PathBuf>)> {
        self.groups
            .into_iter()
            .map(|group| (group.name, group.paths))
            .collect()
    }
}

impl<'a> IntoIterator for &'a FileGroups {
    type Item = &'a FileGroup;
    type IntoIter = std::slice::Iter<'a, FileGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl IntoIterator for FileGroups {
    type Item = FileGroup;
    type IntoIter = std::vec::IntoIter<FileGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Base file name used as the grouping key
///
/// The raw OS string is kept so that names differing only in invalid UTF-8
/// bytes stay in separate groups.
pub(crate) fn group_key(path: &Path) -> Option<OsString> {
    path.file_name().map(OsStr::to_os_string)
}

fn serialize_lossy<S>(name: &OsString, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&name.to_string_lossy())
}

fn serialize_paths_lossy<S>(paths: &[PathBuf], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(paths.iter().map(|path| path.to_string_lossy()))
}
