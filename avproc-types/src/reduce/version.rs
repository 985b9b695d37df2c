use crate::state::VersionState;
use crate::VersionAction;

pub(super) fn reduce(action: &VersionAction, state: &mut VersionState) {
    match action {
        VersionAction::Add(version) => {
            state.versions.push(version.clone());
        }
        VersionAction::Remove(id) => {
            state.versions.retain(|v| v.version != *id);
        }
        VersionAction::Select(id) => {
            state.selected_version = Some(*id);
        }
        VersionAction::SetApplied(id) => {
            // Exclusive by construction: every entry is rewritten.
            for version in &mut state.versions {
                version.applied_version = version.version == *id;
            }
        }
        VersionAction::Init(versions) => {
            state.versions = versions.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Version;
    use crate::VersionId;

    fn version(id: i64, applied: bool) -> Version {
        Version {
            version: VersionId::new(id),
            version_date: "2024-01-01 00:00:00".to_string(),
            applied_version: applied,
        }
    }

    #[test]
    fn add_appends_to_an_empty_list() {
        let mut state = VersionState::default();
        reduce(&VersionAction::Add(version(1, false)), &mut state);
        assert_eq!(state.versions, vec![version(1, false)]);
    }

    #[test]
    fn add_appends_after_existing_versions() {
        let mut state = VersionState {
            versions: vec![version(1, true)],
            selected_version: None,
        };
        reduce(&VersionAction::Add(version(2, false)), &mut state);
        assert_eq!(state.versions, vec![version(1, true), version(2, false)]);
    }

    #[test]
    fn remove_drops_the_matching_version() {
        let mut state = VersionState {
            versions: vec![version(1, true)],
            selected_version: None,
        };
        reduce(&VersionAction::Remove(VersionId::new(1)), &mut state);
        assert!(state.versions.is_empty());
    }

    #[test]
    fn remove_of_a_missing_version_is_a_no_op() {
        let mut state = VersionState {
            versions: vec![version(1, true)],
            selected_version: None,
        };
        reduce(&VersionAction::Remove(VersionId::new(7)), &mut state);
        assert_eq!(state.versions, vec![version(1, true)]);
    }

    #[test]
    fn init_replaces_the_list_and_leaves_selection_alone() {
        let mut state = VersionState {
            versions: vec![version(1, true)],
            selected_version: Some(VersionId::new(1)),
        };
        reduce(&VersionAction::Init(vec![version(2, false)]), &mut state);
        assert_eq!(state.versions, vec![version(2, false)]);
        assert_eq!(state.selected_version, Some(VersionId::new(1)));
    }

    #[test]
    fn select_tracks_the_selection_without_touching_the_list() {
        let mut state = VersionState {
            versions: vec![version(1, true), version(2, false)],
            selected_version: None,
        };
        reduce(&VersionAction::Select(VersionId::new(1)), &mut state);
        assert_eq!(state.selected_version, Some(VersionId::new(1)));
        assert_eq!(state.versions, vec![version(1, true), version(2, false)]);
    }

    #[test]
    fn set_applied_is_idempotent_on_the_already_applied_version() {
        let mut state = VersionState {
            versions: vec![version(1, true), version(2, false)],
            selected_version: None,
        };
        reduce(&VersionAction::SetApplied(VersionId::new(1)), &mut state);
        assert_eq!(state.versions, vec![version(1, true), version(2, false)]);
    }

    #[test]
    fn set_applied_moves_the_flag_exclusively() {
        let mut state = VersionState {
            versions: vec![version(1, true), version(2, false), version(3, false)],
            selected_version: None,
        };
        reduce(&VersionAction::SetApplied(VersionId::new(2)), &mut state);
        let applied: Vec<i64> = state
            .versions
            .iter()
            .filter(|v| v.applied_version)
            .map(|v| v.version.get())
            .collect();
        assert_eq!(applied, vec![2]);
    }
}
