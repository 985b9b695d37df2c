use crate::state::DelayState;
use crate::DelayAction;

pub(super) fn reduce(action: &DelayAction, state: &mut DelayState) {
    match action {
        DelayAction::Update(unit) => {
            state.unit = *unit;
        }
    }
}
