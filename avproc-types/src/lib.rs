//! # avproc-types
//!
//! Shared type definitions for the avproc configuration engine.
//! This crate contains the data model, the speaker-layout catalog, the
//! action enums, and the pure reducers used by avproc-core and any host
//! application — independent of persistence and UI frameworks.

pub mod action;
pub mod layout;
pub mod reduce;
pub mod state;

pub use action::*;
pub use layout::{find_layout, Layout, LayoutSpeaker, SPEAKER_LAYOUTS};

// Re-export all state types at crate root for convenience
pub use state::*;

/// Unique identifier for a saved configuration version.
///
/// Assigned by the store (SQLite rowid); opaque to everything else.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct VersionId(i64);

impl VersionId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }
    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for VersionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
