//! Pure state-mutation reducers for the configuration console.
//!
//! These functions are the single source of truth for action → state
//! mutations. The dispatch layer in avproc-core and any embedding host call
//! into this module.
//!
//! Reducers are pure: they mutate their state struct only. They do NOT:
//! - Touch the store or any other I/O
//! - Log
//! - Coordinate across state machines (dispatch owns that)
//!
//! Invalid targets — an unknown layout label, an update for a role or band
//! that does not exist — are deliberate no-ops, not errors. Callers rely on
//! the idempotence.

mod delay;
mod device;
mod filter;
mod speaker;
mod version;

use crate::state::AppState;
use crate::DomainAction;

/// Apply an action's state mutations to the given state.
pub fn reduce_action(action: &DomainAction, state: &mut AppState) {
    match action {
        DomainAction::Speaker(a) => speaker::reduce(a, &mut state.speakers),
        DomainAction::Filter(a) => filter::reduce(a, &mut state.filters),
        DomainAction::Version(a) => version::reduce(a, &mut state.versions),
        DomainAction::Delay(a) => delay::reduce(a, &mut state.delay),
        DomainAction::Device(a) => device::reduce(a, &mut state.device),
    }
}
