// SPDX-License-Identifier: MPL-2.0
//! Overlay registry.
//!
//! Fixed, ordered catalogue of the available guides. The order is the
//! display order of the overlay picker and must stay stable.

use crate::overlay::definition::OverlayKind;

/// One entry in the overlay catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryEntry {
    pub kind: OverlayKind,
    /// Human-readable picker label.
    pub label: &'static str,
}

impl RegistryEntry {
    /// Returns the stable string id of this entry.
    #[must_use]
    pub fn id(&self) -> &'static str {
        self.kind.as_str()
    }
}

/// All guides, in picker display order.
pub const OVERLAY_REGISTRY: [RegistryEntry; 8] = [
    RegistryEntry {
        kind: OverlayKind::Thirds,
        label: "Rule of Thirds",
    },
    RegistryEntry {
        kind: OverlayKind::Crosshair,
        label: "Crosshair",
    },
    RegistryEntry {
        kind: OverlayKind::Diagonals,
        label: "Leading Lines",
    },
    RegistryEntry {
        kind: OverlayKind::Ellipse,
        label: "Centered Ellipse",
    },
    RegistryEntry {
        kind: OverlayKind::Frame,
        label: "Framed Border",
    },
    RegistryEntry {
        kind: OverlayKind::ForegroundEmphasis,
        label: "Foreground Emphasis",
    },
    RegistryEntry {
        kind: OverlayKind::Horizon,
        label: "Horizon Level",
    },
    RegistryEntry {
        kind: OverlayKind::GoldenRatio,
        label: "Golden Ratio",
    },
];

/// Looks up a registry entry by its stable string id.
#[must_use]
pub fn find_by_id(id: &str) -> Option<&'static RegistryEntry> {
    OVERLAY_REGISTRY.iter().find(|entry| entry.id() == id)
}
