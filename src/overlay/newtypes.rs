// SPDX-License-Identifier: MPL-2.0
//! Overlay geometry newtypes.
//!
//! This module provides type-safe wrappers for overlay geometry values,
//! ensuring they are always within valid ranges.

use serde::{Deserialize, Serialize};

// =============================================================================
// Span Bounds
// =============================================================================

/// Bounds for overlay span fractions (5% to 95% of the frame).
pub mod span_bounds {
    /// Minimum span fraction.
    pub const MIN: f32 = 0.05;
    /// Maximum span fraction.
    pub const MAX: f32 = 0.95;
}

// =============================================================================
// SpanFraction
// =============================================================================

/// Fraction of the frame covered by an overlay span, guaranteed to be
/// within the valid range (5%–95%).
///
/// The clamp keeps overlays from degenerating to a zero-size or
/// full-frame rectangle, no matter what numbers the user typed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpanFraction(#[serde(deserialize_with = "deserialize_clamped")] f32);

impl SpanFraction {
    /// Creates a new span fraction, clamping the value to the valid range.
    #[must_use]
    pub fn new(fraction: f32) -> Self {
        Self(fraction.clamp(span_bounds::MIN, span_bounds::MAX))
    }

    /// Creates a span fraction from a whole-number percentage.
    #[must_use]
    pub fn from_percent(percent: u32) -> Self {
        Self::new(percent as f32 / 100.0)
    }

    /// Returns the raw fraction value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the span as a whole-number percentage, rounded to the
    /// nearest integer. Used when formatting command summaries.
    #[must_use]
    pub fn as_percent(self) -> u32 {
        (self.0 * 100.0).round() as u32
    }
}

fn deserialize_clamped<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = f32::deserialize(deserializer)?;
    Ok(raw.clamp(span_bounds::MIN, span_bounds::MAX))
}
