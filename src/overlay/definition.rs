// SPDX-License-Identifier: MPL-2.0
//! Overlay definitions.
//!
//! An [`OverlayDefinition`] is the structured description of one guide
//! instance: which guide to draw plus its optional visual parameters.
//! The kind determines which geometry fields are meaningful; consumers
//! ignore the rest and never require them.

use crate::overlay::newtypes::SpanFraction;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The closed set of compositional guides the app can draw.
///
/// Extending this set means adding a renderer and an interpreter rule
/// together; there is no dynamic registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OverlayKind {
    Thirds,
    Crosshair,
    Diagonals,
    Ellipse,
    Frame,
    ForegroundEmphasis,
    Horizon,
    GoldenRatio,
}

impl OverlayKind {
    /// Returns the stable string id used by the registry and the preset
    /// storage format.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OverlayKind::Thirds => "thirds",
            OverlayKind::Crosshair => "crosshair",
            OverlayKind::Diagonals => "diagonals",
            OverlayKind::Ellipse => "ellipse",
            OverlayKind::Frame => "frame",
            OverlayKind::ForegroundEmphasis => "foregroundEmphasis",
            OverlayKind::Horizon => "horizon",
            OverlayKind::GoldenRatio => "goldenRatio",
        }
    }
}

impl fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Partial rectangle, expressed as fractions of the frame size.
///
/// Only the ellipse guide reads this today; both axes are optional so a
/// command may size one axis and leave the other at its default.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectPct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_pct: Option<SpanFraction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_pct: Option<SpanFraction>,
}

/// Structured description of one requested overlay.
///
/// Constructed by the command interpreter (or by hand) and handed to the
/// host application, which resolves the optional appearance fields
/// against the user's configured defaults before rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayDefinition {
    pub kind: OverlayKind,
    /// Stroke color as a `#rrggbb` hex token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Stroke opacity as a fraction in `[0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    /// Stroke thickness in device-independent pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f32>,
    /// Ellipse sizing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rect: Option<RectPct>,
    /// Frame inset as a fraction of the frame size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inset_pct: Option<SpanFraction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animate: Option<bool>,
    /// Open mapping of renderer-specific parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<BTreeMap<String, serde_json::Value>>,
}

impl OverlayDefinition {
    /// Creates a definition for `kind` with every optional field unset.
    #[must_use]
    pub fn new(kind: OverlayKind) -> Self {
        Self {
            kind,
            color: None,
            opacity: None,
            thickness: None,
            rect: None,
            inset_pct: None,
            animate: None,
            extras: None,
        }
    }
}
