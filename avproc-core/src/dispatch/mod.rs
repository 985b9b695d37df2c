//! Action dispatch — the single entry point for state mutation.
//!
//! Domain actions are delegated to the pure reducers in avproc-types.
//! Coordination commands live here: a layout selection reconciles the
//! speaker list and the filter buckets together, so a host cannot change
//! one and forget the other.

use avproc_types::reduce::reduce_action;
use avproc_types::{
    find_layout, Action, AppState, ConfigPayload, DelayAction, DeviceAction, DomainAction,
    FilterAction, SpeakerAction,
};

/// Follow-up work for the host after a dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchResult {
    /// The PEQ response curve must be recomputed.
    pub curve_dirty: bool,
    /// Unsaved edits exist relative to the loaded configuration version.
    pub config_dirty: bool,
}

impl DispatchResult {
    pub fn none() -> Self {
        Self::default()
    }
}

/// Dispatch an action. Returns a [`DispatchResult`] describing follow-up
/// work; state is mutated in place.
pub fn dispatch_action(action: &Action, state: &mut AppState) -> DispatchResult {
    match action {
        Action::SelectLayout(label) => {
            if find_layout(label).is_none() {
                log::debug!(target: "dispatch", "ignoring unknown layout {label:?}");
                return DispatchResult::none();
            }
            // Both reconciliations run against the same label; neither can
            // proceed without the other.
            reduce_action(
                &DomainAction::Speaker(SpeakerAction::Config(label.clone())),
                state,
            );
            reduce_action(
                &DomainAction::Speaker(SpeakerAction::Init(label.clone())),
                state,
            );
            reduce_action(
                &DomainAction::Filter(FilterAction::Init(label.clone())),
                state,
            );
            DispatchResult {
                curve_dirty: true,
                config_dirty: true,
            }
        }
        Action::Speaker(a) => {
            reduce_action(&DomainAction::Speaker(a.clone()), state);
            match a {
                // Wholesale replacement is a load, not an edit.
                SpeakerAction::Set(_) | SpeakerAction::Config(_) => DispatchResult::none(),
                SpeakerAction::Update(_)
                | SpeakerAction::Init(_)
                | SpeakerAction::UpdateDelay { .. } => DispatchResult {
                    curve_dirty: false,
                    config_dirty: true,
                },
            }
        }
        Action::Filter(a) => {
            reduce_action(&DomainAction::Filter(a.clone()), state);
            match a {
                FilterAction::Set(_) => DispatchResult {
                    curve_dirty: true,
                    config_dirty: false,
                },
                FilterAction::Add(_)
                | FilterAction::Update(_)
                | FilterAction::Remove(_)
                | FilterAction::Init(_) => DispatchResult {
                    curve_dirty: true,
                    config_dirty: true,
                },
            }
        }
        Action::Version(a) => {
            reduce_action(&DomainAction::Version(a.clone()), state);
            DispatchResult::none()
        }
        Action::Delay(a) => {
            reduce_action(&DomainAction::Delay(*a), state);
            DispatchResult {
                curve_dirty: false,
                config_dirty: true,
            }
        }
        Action::Device(a) => {
            reduce_action(&DomainAction::Device(*a), state);
            DispatchResult {
                curve_dirty: false,
                config_dirty: true,
            }
        }
    }
}

/// Build the persistable payload from the current state.
pub fn config_payload(state: &AppState) -> ConfigPayload {
    ConfigPayload {
        speakers: state.speakers.speakers.clone(),
        filters: state.filters.flat(),
        selected_distance: state.delay.unit,
        device: state.device.device,
    }
}

/// Load a saved payload into state: speakers (with the layout label
/// re-derived), filter buckets, delay unit, and device.
pub fn load_payload(state: &mut AppState, payload: &ConfigPayload) -> DispatchResult {
    reduce_action(
        &DomainAction::Speaker(SpeakerAction::Set(payload.speakers.clone())),
        state,
    );
    reduce_action(
        &DomainAction::Filter(FilterAction::Set(payload.filters.clone())),
        state,
    );
    reduce_action(
        &DomainAction::Delay(DelayAction::Update(payload.selected_distance)),
        state,
    );
    reduce_action(
        &DomainAction::Device(DeviceAction::Update(payload.device)),
        state,
    );
    DispatchResult {
        curve_dirty: true,
        config_dirty: false,
    }
}
