use crate::layout::find_layout;
use crate::state::{per_speaker_filters, FilterState, IndexedFilter, SpeakerFilters};
use crate::FilterAction;

pub(super) fn reduce(action: &FilterAction, state: &mut FilterState) {
    match action {
        FilterAction::Add(role) => {
            // A role without a bucket gets one lazily; the new band's index
            // is its position, which also staggers its default frequency.
            let bucket = state.filters.entry(role.clone()).or_default();
            let index = bucket.len() as u32 + 1;
            bucket.push(IndexedFilter::with_defaults(role, index));
        }
        FilterAction::Update(filter) => {
            if let Some(bucket) = state.filters.get_mut(&filter.speaker) {
                if let Some(existing) = bucket.iter_mut().find(|f| f.index == filter.index) {
                    *existing = filter.clone();
                }
            }
        }
        FilterAction::Remove(filter) => {
            if let Some(bucket) = state.filters.get_mut(&filter.speaker) {
                // No renumbering; surviving bands keep their indices.
                bucket.retain(|f| f.index != filter.index);
            }
        }
        FilterAction::Set(filters) => {
            state.filters = per_speaker_filters(filters.clone());
        }
        FilterAction::Init(label) => {
            // Keep the bucket for every role in the new layout; roles that
            // left the layout lose their bands entirely.
            if let Some(layout) = find_layout(label) {
                let mut filters = SpeakerFilters::new();
                for base in layout.speakers {
                    let bucket = state.filters.remove(base.role).unwrap_or_default();
                    filters.insert(base.role.to_string(), bucket);
                }
                state.filters = filters;
            }
        }
    }
}
