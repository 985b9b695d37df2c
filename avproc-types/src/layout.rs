//! Static speaker-layout catalog.
//!
//! A layout is a named template ("2.0", "5.1", …) listing the speaker roles
//! it contains, in presentation order, with their subwoofer flags. The
//! catalog is immutable for the process lifetime; reconciliation in the
//! speaker and filter reducers resolves labels through [`find_layout`].

/// One role slot inside a layout template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSpeaker {
    pub role: &'static str,
    pub is_subwoofer: bool,
}

/// A named speaker-layout template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub label: &'static str,
    pub speakers: &'static [LayoutSpeaker],
}

const fn speaker(role: &'static str) -> LayoutSpeaker {
    LayoutSpeaker {
        role,
        is_subwoofer: false,
    }
}

const fn subwoofer(role: &'static str) -> LayoutSpeaker {
    LayoutSpeaker {
        role,
        is_subwoofer: true,
    }
}

/// Every layout the console offers, in menu order.
pub const SPEAKER_LAYOUTS: &[Layout] = &[
    Layout {
        label: "2.0",
        speakers: &[speaker("Left"), speaker("Right")],
    },
    Layout {
        label: "2.1",
        speakers: &[speaker("Left"), speaker("Right"), subwoofer("Subwoofer")],
    },
    Layout {
        label: "2.2",
        speakers: &[
            speaker("Left"),
            speaker("Right"),
            subwoofer("Subwoofer 1"),
            subwoofer("Subwoofer 2"),
        ],
    },
    Layout {
        label: "3.1",
        speakers: &[
            speaker("Left"),
            speaker("Center"),
            speaker("Right"),
            subwoofer("Subwoofer"),
        ],
    },
    Layout {
        label: "3.2",
        speakers: &[
            speaker("Left"),
            speaker("Center"),
            speaker("Right"),
            subwoofer("Subwoofer 1"),
            subwoofer("Subwoofer 2"),
        ],
    },
    Layout {
        label: "4.0",
        speakers: &[
            speaker("Left"),
            speaker("Right"),
            speaker("Surround Left"),
            speaker("Surround Right"),
        ],
    },
    Layout {
        label: "4.1",
        speakers: &[
            speaker("Left"),
            speaker("Right"),
            speaker("Surround Left"),
            speaker("Surround Right"),
            subwoofer("Subwoofer"),
        ],
    },
    Layout {
        label: "4.2",
        speakers: &[
            speaker("Left"),
            speaker("Right"),
            speaker("Surround Left"),
            speaker("Surround Right"),
            subwoofer("Subwoofer 1"),
            subwoofer("Subwoofer 2"),
        ],
    },
    Layout {
        label: "5.1",
        speakers: &[
            speaker("Left"),
            speaker("Center"),
            speaker("Right"),
            speaker("Surround Left"),
            speaker("Surround Right"),
            subwoofer("Subwoofer"),
        ],
    },
    Layout {
        label: "5.2",
        speakers: &[
            speaker("Left"),
            speaker("Center"),
            speaker("Right"),
            speaker("Surround Left"),
            speaker("Surround Right"),
            subwoofer("Subwoofer 1"),
            subwoofer("Subwoofer 2"),
        ],
    },
    Layout {
        label: "7.1",
        speakers: &[
            speaker("Left"),
            speaker("Center"),
            speaker("Right"),
            speaker("Surround Left"),
            speaker("Surround Right"),
            speaker("Surround Left Back"),
            speaker("Surround Right Back"),
            subwoofer("Subwoofer"),
        ],
    },
];

/// Look a layout up by its label. Unknown labels resolve to `None`; the
/// reducers treat that as a no-op.
pub fn find_layout(label: &str) -> Option<&'static Layout> {
    SPEAKER_LAYOUTS.iter().find(|l| l.label == label)
}
