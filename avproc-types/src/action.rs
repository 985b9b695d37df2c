//! Action types for the dispatch system.
//!
//! Actions represent user intents that flow through the dispatch system.
//! Each state machine has its own enum; [`Action`] wraps them all and adds
//! the coordinating commands that touch more than one machine.

use serde::{Deserialize, Serialize};

use crate::state::{DelayUnit, DeviceType, Filter, IndexedFilter, Speaker, Version};
use crate::VersionId;

/// Speaker-list actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpeakerAction {
    /// Replace the entry whose role matches. No-op when the role is absent.
    Update(Speaker),
    /// Reconcile the list against a catalog layout, keeping settings for
    /// roles that survive. Leaves the layout label alone; unknown labels
    /// leave the state unchanged.
    Init(String),
    /// Wholesale replace. The layout label is re-derived from the list.
    Set(Vec<Speaker>),
    /// Set the layout label without touching the list.
    Config(String),
    /// Apply a delay edit in the given unit to one speaker's delay fields.
    UpdateDelay {
        speaker: String,
        unit: DelayUnit,
        value: f32,
    },
}

/// Per-speaker PEQ filter actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterAction {
    /// Append a default band to the role's bucket.
    Add(String),
    /// Replace the band with matching `(speaker, index)`.
    Update(IndexedFilter),
    /// Remove the band with matching `(speaker, index)`. Survivors keep
    /// their indices.
    Remove(IndexedFilter),
    /// Rebuild every bucket from a flat band list.
    Set(Vec<Filter>),
    /// Reconcile buckets against a catalog layout; unknown labels leave
    /// the state unchanged.
    Init(String),
}

/// Version-bookkeeping actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VersionAction {
    Add(Version),
    Remove(VersionId),
    /// UI selection only; independent of which version is applied.
    Select(VersionId),
    /// Flag one version as live on the device, clearing every other flag.
    SetApplied(VersionId),
    Init(Vec<Version>),
}

/// Delay-unit preference actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DelayAction {
    Update(DelayUnit),
}

/// Output-device actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceAction {
    Update(DeviceType),
}

/// All actions accepted by dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Change the active layout: sets the label and reconciles the speaker
    /// list AND the filter buckets together, so the two machines cannot
    /// diverge on a layout change.
    SelectLayout(String),
    Speaker(SpeakerAction),
    Filter(FilterAction),
    Version(VersionAction),
    Delay(DelayAction),
    Device(DeviceAction),
}

/// Actions that mutate a single domain state machine. Handled by
/// `reduce::reduce_action`; coordination commands stay in dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainAction {
    Speaker(SpeakerAction),
    Filter(FilterAction),
    Version(VersionAction),
    Delay(DelayAction),
    Device(DeviceAction),
}

impl Action {
    /// Convert to a `DomainAction` if this targets a single state machine.
    /// Returns `None` for coordination commands (`SelectLayout`).
    pub fn to_domain(&self) -> Option<DomainAction> {
        match self {
            Self::SelectLayout(_) => None,
            Self::Speaker(a) => Some(DomainAction::Speaker(a.clone())),
            Self::Filter(a) => Some(DomainAction::Filter(a.clone())),
            Self::Version(a) => Some(DomainAction::Version(a.clone())),
            Self::Delay(a) => Some(DomainAction::Delay(*a)),
            Self::Device(a) => Some(DomainAction::Device(*a)),
        }
    }
}
