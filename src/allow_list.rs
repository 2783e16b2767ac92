//! Extension allow-list
//!
//! The default list is built once, on first use, and never changes afterwards, so scans on
//! any number of tasks can read it without locking.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Extensions recognised as media when no other list is configured.
pub const DEFAULT_MEDIA_EXTENSIONS: [&str; 9] = [
    "jpg", "jpeg", "png", "gif", "webp", "mp4", "mov", "webm", "mkv",
];

static DEFAULT_ALLOW_LIST: Lazy<ExtensionAllowList> =
    Lazy::new(|| ExtensionAllowList::new(DEFAULT_MEDIA_EXTENSIONS));

/// Returns the process-wide default allow-list.
pub fn default_allow_list() -> &'static ExtensionAllowList {
    &DEFAULT_ALLOW_LIST
}

/// Returns the extension of an entry name: the part after the last `.` of the
/// lowercased name.
///
/// A name without a `.` yields the whole lowercased name and a name ending in `.`
/// yields an empty string; neither is special-cased, they just fail to match.
pub fn extension_of(name: &str) -> String {
    let lower = name.to_lowercase();
    match lower.rsplit_once('.') {
        Some((_, ext)) => ext.to_string(),
        None => lower,
    }
}

/// Immutable set of lowercase extensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ExtensionAllowList {
    extensions: HashSet<String>,
}

impl ExtensionAllowList {
    /// Builds a list from the given extensions. Values are lowercased and a single
    /// leading `.` is dropped, so `".JPG"` and `"jpg"` are the same entry.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|ext| {
                let ext = ext.as_ref();
                ext.strip_prefix('.').unwrap_or(ext).to_lowercase()
            })
            .collect();
        Self { extensions }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.contains(&extension.to_lowercase())
    }

    /// Whether the trailing segment of `name` is in the list.
    pub fn matches_name(&self, name: &str) -> bool {
        self.extensions.contains(&extension_of(name))
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// The extensions in sorted order.
    pub fn to_sorted_vec(&self) -> Vec<String> {
        let mut extensions: Vec<String> = self.extensions.iter().cloned().collect();
        extensions.sort();
        extensions
    }
}

impl Default for ExtensionAllowList {
    fn default() -> Self {
        ExtensionAllowList::clone(&DEFAULT_ALLOW_LIST)
    }
}

impl From<Vec<String>> for ExtensionAllowList {
    fn from(extensions: Vec<String>) -> Self {
        Self::new(extensions)
    }
}

impl From<ExtensionAllowList> for Vec<String> {
    fn from(list: ExtensionAllowList) -> Self {
        list.to_sorted_vec()
    }
}
