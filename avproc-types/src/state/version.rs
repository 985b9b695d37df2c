//! Saved-configuration version bookkeeping.

use serde::{Deserialize, Serialize};

use crate::VersionId;

/// A named, dated snapshot reference. At most one version carries
/// `applied_version == true` at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub version: VersionId,
    /// Display-only timestamp, stamped by the store.
    pub version_date: String,
    /// Whether this version is live on the device.
    pub applied_version: bool,
}

/// The version list plus the UI's current selection. Selection is
/// independent of which version is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionState {
    pub versions: Vec<Version>,
    pub selected_version: Option<VersionId>,
}

/// The version to treat as live: the flagged entry, or — when nothing is
/// flagged — the last element (most recently added). The ordering-dependent
/// fallback is load-bearing; callers rely on it after a fresh save.
pub fn derive_applied_version(versions: &[Version]) -> Option<VersionId> {
    versions
        .iter()
        .find(|v| v.applied_version)
        .or_else(|| versions.last())
        .map(|v| v.version)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(id: i64, applied: bool) -> Version {
        Version {
            version: VersionId::new(id),
            version_date: String::new(),
            applied_version: applied,
        }
    }

    #[test]
    fn prefers_the_flagged_version() {
        let versions = vec![version(1, true), version(2, false)];
        assert_eq!(derive_applied_version(&versions), Some(VersionId::new(1)));
    }

    #[test]
    fn falls_back_to_the_last_entry() {
        let versions = vec![version(1, false), version(2, false)];
        assert_eq!(derive_applied_version(&versions), Some(VersionId::new(2)));
    }

    #[test]
    fn single_flagged_entry() {
        let versions = vec![version(2, true)];
        assert_eq!(derive_applied_version(&versions), Some(VersionId::new(2)));
    }

    #[test]
    fn empty_list_has_no_applied_version() {
        assert_eq!(derive_applied_version(&[]), None);
    }
}
