use crate::layout::find_layout;
use crate::state::{convert_delay, derive_layout, Speaker, SpeakerState};
use crate::SpeakerAction;

pub(super) fn reduce(action: &SpeakerAction, state: &mut SpeakerState) {
    match action {
        SpeakerAction::Update(speaker) => {
            if let Some(existing) = state.speaker_mut(&speaker.speaker) {
                *existing = speaker.clone();
            }
        }
        SpeakerAction::Init(label) => {
            // Keep existing settings for roles that survive the change;
            // synthesize defaults for new roles; drop the rest.
            if let Some(layout) = find_layout(label) {
                let speakers: Vec<Speaker> = layout
                    .speakers
                    .iter()
                    .map(|base| {
                        state
                            .speaker(base.role)
                            .cloned()
                            .unwrap_or_else(|| Speaker::with_defaults(base.role, base.is_subwoofer))
                    })
                    .collect();
                state.speakers = speakers;
            }
        }
        SpeakerAction::Set(speakers) => {
            state.speakers = speakers.clone();
            state.layout = derive_layout(&state.speakers);
        }
        SpeakerAction::Config(label) => {
            state.layout = label.clone();
        }
        SpeakerAction::UpdateDelay {
            speaker,
            unit,
            value,
        } => {
            if let Some(existing) = state.speaker_mut(speaker) {
                let conv = convert_delay(*unit, *value);
                existing.delay = conv.delay;
                existing.distance_in_feet = conv.distance_in_feet;
                existing.distance_in_meters = conv.distance_in_meters;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DelayUnit;

    fn speaker(role: &str, is_subwoofer: bool, delay: f32, gain: f32) -> Speaker {
        Speaker {
            speaker: role.to_string(),
            crossover: None,
            delay,
            gain,
            is_subwoofer,
            distance_in_feet: None,
            distance_in_meters: None,
        }
    }

    #[test]
    fn config_sets_the_label_only() {
        let mut state = SpeakerState::default();
        reduce(&SpeakerAction::Config("3.2".to_string()), &mut state);
        assert_eq!(state.layout, "3.2");
        assert!(state.speakers.is_empty());
    }

    #[test]
    fn update_replaces_the_matching_role() {
        let mut state = SpeakerState {
            layout: String::new(),
            speakers: vec![speaker("Subwoofer 2", true, 0.0, 0.0)],
        };
        reduce(
            &SpeakerAction::Update(speaker("Subwoofer 2", true, 4.0, 2.0)),
            &mut state,
        );
        assert_eq!(state.speakers[0].delay, 4.0);
        assert_eq!(state.speakers[0].gain, 2.0);
    }

    #[test]
    fn update_for_an_absent_role_is_a_no_op() {
        let mut state = SpeakerState {
            layout: String::new(),
            speakers: vec![speaker("Left", false, 1.0, 0.0)],
        };
        reduce(
            &SpeakerAction::Update(speaker("Center", false, 4.0, 2.0)),
            &mut state,
        );
        assert_eq!(state.speakers.len(), 1);
        assert_eq!(state.speakers[0].delay, 1.0);
    }

    #[test]
    fn init_keeps_surviving_roles_and_synthesizes_the_rest() {
        let mut state = SpeakerState {
            layout: String::new(),
            speakers: vec![speaker("Subwoofer 2", true, 4.0, 2.0)],
        };
        reduce(&SpeakerAction::Init("3.2".to_string()), &mut state);

        let roles: Vec<&str> = state.speakers.iter().map(|s| s.speaker.as_str()).collect();
        assert_eq!(
            roles,
            vec!["Left", "Center", "Right", "Subwoofer 1", "Subwoofer 2"]
        );
        // The surviving subwoofer keeps its settings; the rest are defaults.
        assert_eq!(state.speakers[4].delay, 4.0);
        assert_eq!(state.speakers[4].gain, 2.0);
        assert_eq!(state.speakers[0].delay, 0.0);
        assert_eq!(state.speakers[3].crossover, None);
        // The label is not set by Init.
        assert_eq!(state.layout, "");
    }

    #[test]
    fn init_with_an_unknown_label_leaves_state_unchanged() {
        let mut state = SpeakerState {
            layout: String::new(),
            speakers: vec![speaker("Subwoofer 2", true, 0.0, 0.0)],
        };
        let before = state.clone();
        reduce(&SpeakerAction::Init("notvalid".to_string()), &mut state);
        assert_eq!(state, before);
    }

    #[test]
    fn set_replaces_everything_and_derives_the_label() {
        let mut state = SpeakerState {
            layout: String::new(),
            speakers: vec![speaker("Subwoofer 2", true, 3.0, 2.0)],
        };
        reduce(
            &SpeakerAction::Set(vec![
                speaker("Left", false, 4.0, 2.0),
                speaker("Center", false, 0.0, 0.0),
                speaker("Right", false, 3.0, 1.0),
                speaker("Subwoofer 1", true, 0.0, 0.0),
                speaker("Subwoofer 2", true, 0.0, 0.0),
            ]),
            &mut state,
        );
        assert_eq!(state.layout, "3.2");
        assert_eq!(state.speakers.len(), 5);
        // The old Subwoofer 2 settings are gone; Set is a full reset.
        assert_eq!(state.speakers[4].delay, 0.0);
    }

    #[test]
    fn delay_edit_in_feet_zeroes_ms_and_fills_distances() {
        let mut state = SpeakerState {
            layout: String::new(),
            speakers: vec![speaker("Left", false, 3.0, 2.0)],
        };
        reduce(
            &SpeakerAction::UpdateDelay {
                speaker: "Left".to_string(),
                unit: DelayUnit::Feet,
                value: 3.0,
            },
            &mut state,
        );
        let left = &state.speakers[0];
        assert_eq!(left.delay, 0.0);
        assert_eq!(left.distance_in_feet, Some(3.0));
        assert!((left.distance_in_meters.unwrap() - 0.9144).abs() < 1e-5);
        assert_eq!(left.gain, 2.0);
    }

    #[test]
    fn delay_edit_in_ms_clears_stale_distances() {
        let mut state = SpeakerState {
            layout: String::new(),
            speakers: vec![Speaker {
                distance_in_feet: Some(5.0),
                distance_in_meters: Some(4.0),
                ..speaker("Left", false, 3.0, 2.0)
            }],
        };
        reduce(
            &SpeakerAction::UpdateDelay {
                speaker: "Left".to_string(),
                unit: DelayUnit::Ms,
                value: 3.0,
            },
            &mut state,
        );
        let left = &state.speakers[0];
        assert_eq!(left.delay, 3.0);
        assert_eq!(left.distance_in_feet, None);
        assert_eq!(left.distance_in_meters, None);
    }
}
