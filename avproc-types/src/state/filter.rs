//! PEQ band records and the per-speaker filter state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One peaking-EQ band bound to a speaker role — the wire form, persisted
/// and transported without an index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// Owning speaker role. Not enforced referentially; stale references
    /// are dropped by layout reconciliation.
    pub speaker: String,
    /// Center frequency in Hz.
    pub freq: i32,
    /// Gain in dB.
    pub gain: f32,
    /// Q factor.
    pub q: f32,
}

/// A band plus its position among the owning speaker's bands.
///
/// `index` starts at 1 and is unique per `(speaker, index)` only. Indices
/// are contiguous immediately after a full rebuild; ad-hoc removal leaves
/// gaps and surviving bands keep their numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedFilter {
    pub speaker: String,
    pub freq: i32,
    pub gain: f32,
    pub q: f32,
    pub index: u32,
}

impl IndexedFilter {
    pub fn from_filter(filter: Filter, index: u32) -> Self {
        IndexedFilter {
            speaker: filter.speaker,
            freq: filter.freq,
            gain: filter.gain,
            q: filter.q,
            index,
        }
    }

    /// The band appended by an "add filter" action: flat, zero-Q, with a
    /// starting frequency staggered by position (50 Hz, 100 Hz, …).
    pub fn with_defaults(role: &str, index: u32) -> Self {
        IndexedFilter {
            speaker: role.to_string(),
            freq: index as i32 * 50,
            gain: 0.0,
            q: 0.0,
            index,
        }
    }

    /// Strip the index back off for persistence.
    pub fn to_filter(&self) -> Filter {
        Filter {
            speaker: self.speaker.clone(),
            freq: self.freq,
            gain: self.gain,
            q: self.q,
        }
    }
}

/// Filter buckets keyed by speaker role.
pub type SpeakerFilters = BTreeMap<String, Vec<IndexedFilter>>;

/// Per-speaker PEQ filter collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub filters: SpeakerFilters,
}

impl FilterState {
    pub fn bucket(&self, role: &str) -> Option<&[IndexedFilter]> {
        self.filters.get(role).map(Vec::as_slice)
    }

    /// Flatten every bucket back into the wire form, bucket by bucket in
    /// role order, preserving each bucket's internal order.
    pub fn flat(&self) -> Vec<Filter> {
        self.filters
            .values()
            .flat_map(|bucket| bucket.iter().map(IndexedFilter::to_filter))
            .collect()
    }
}

/// Group a flat band list by speaker, assigning per-speaker indices 1..N in
/// input order.
pub fn per_speaker_filters(filters: Vec<Filter>) -> SpeakerFilters {
    let mut grouped = SpeakerFilters::new();
    for filter in filters {
        let bucket = grouped.entry(filter.speaker.clone()).or_default();
        let index = bucket.len() as u32 + 1;
        bucket.push(IndexedFilter::from_filter(filter, index));
    }
    grouped
}
