use crate::state::DeviceState;
use crate::DeviceAction;

pub(super) fn reduce(action: &DeviceAction, state: &mut DeviceState) {
    match action {
        DeviceAction::Update(device) => {
            state.device = *device;
        }
    }
}
