//! Scanner configuration

use serde::{Deserialize, Serialize};

use crate::allow_list::ExtensionAllowList;

/// Settings for a `MediaScanner`. Every field falls back to its default when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Extensions treated as media, with or without a leading dot
    pub extensions: ExtensionAllowList,
}
