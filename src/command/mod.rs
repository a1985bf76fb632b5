// SPDX-License-Identifier: MPL-2.0
//! Natural-language overlay command interpreter.
//!
//! [`interpret`] turns free text like "draw an ellipse 70% wide 40% tall"
//! into an [`OverlayDefinition`] plus a short summary, or a failure with
//! example commands the user can copy. It is pure and synchronous: no
//! I/O, no state between calls, and every input maps to exactly one
//! outcome.
//!
//! Classification is an ordered cascade of keyword rules, first match
//! wins. The order is a contract, not an accident: "grid crosshair"
//! resolves to the thirds grid because the thirds rule runs first. Do
//! not reorder the rules or replace the cascade with a best-match
//! search.

mod color;

use crate::overlay::{OverlayDefinition, OverlayKind, RectPct, SpanFraction};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Failure message for empty or whitespace-only input.
pub const EMPTY_INPUT_MESSAGE: &str = "Type a command to generate an overlay.";

/// Failure message when no rule matches.
pub const NO_MATCH_MESSAGE: &str = "Could not understand that request.";

/// Example commands offered alongside every failure, in canonical order.
pub const SUGGESTIONS: [&str; 6] = [
    "add thirds grid",
    "draw ellipse 70% wide 40% tall",
    "frame with 10% inset",
    "show horizon level",
    "diagonal cross",
    "foreground lower third guide",
];

lazy_static! {
    static ref WIDTH_RE: Regex =
        Regex::new(r"(\d{1,3})%\s*(?:wide|width)").expect("Invalid Regex");
    static ref HEIGHT_RE: Regex =
        Regex::new(r"(\d{1,3})%\s*(?:tall|height)").expect("Invalid Regex");
    static ref INSET_RE: Regex =
        Regex::new(r"(\d{1,2})%\s*(?:inset|margin)").expect("Invalid Regex");
}

/// Result of interpreting one command string.
///
/// Exactly one variant per call; there is no partial-success state.
/// Both failures (empty input, no rule matched) are ordinary values the
/// UI shows to the user, not errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum ParseOutcome {
    #[serde(rename_all = "camelCase")]
    Success {
        definition: OverlayDefinition,
        summary: String,
    },
    #[serde(rename_all = "camelCase")]
    Failure {
        message: String,
        suggestions: Vec<String>,
    },
}

impl ParseOutcome {
    /// Returns `true` for the success variant.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, ParseOutcome::Success { .. })
    }

    /// Returns the definition when this outcome is a success.
    #[must_use]
    pub fn definition(&self) -> Option<&OverlayDefinition> {
        match self {
            ParseOutcome::Success { definition, .. } => Some(definition),
            ParseOutcome::Failure { .. } => None,
        }
    }
}

/// Interprets a free-text overlay command.
///
/// # Examples
///
/// ```
/// use lens_guides::command::interpret;
/// use lens_guides::overlay::OverlayKind;
///
/// let outcome = interpret("red crosshair please");
/// let definition = outcome.definition().expect("command understood");
/// assert_eq!(definition.kind, OverlayKind::Crosshair);
/// assert_eq!(definition.color.as_deref(), Some("#eb5757"));
/// ```
#[must_use]
pub fn interpret(text: &str) -> ParseOutcome {
    let normalized = text.trim().to_lowercase();
    if normalized.is_empty() {
        return failure(EMPTY_INPUT_MESSAGE);
    }

    // Rules below run in order; first match wins.

    if contains_any(&normalized, &["third", "grid"]) {
        return colored(OverlayKind::Thirds, "Rule of thirds grid", &normalized);
    }

    if contains_any(
        &normalized,
        &["crosshair", "reticle", "center cross", "diagonal cross"],
    ) {
        return colored(OverlayKind::Crosshair, "Centered crosshair", &normalized);
    }

    if contains_any(&normalized, &["diagonal", "leading line"]) {
        return colored(
            OverlayKind::Diagonals,
            "Leading line diagonals",
            &normalized,
        );
    }

    if contains_any(&normalized, &["ellipse", "oval"]) {
        return build_ellipse(&normalized);
    }

    // Intentionally skips color extraction, unlike every other rule.
    if normalized.contains("golden ratio") {
        let definition = OverlayDefinition::new(OverlayKind::GoldenRatio);
        return success(definition, "Golden ratio grid".to_string());
    }

    if contains_any(&normalized, &["frame", "border"]) {
        return build_frame(&normalized);
    }

    if contains_any(&normalized, &["foreground", "lower third"]) {
        return colored(
            OverlayKind::ForegroundEmphasis,
            "Foreground lower-third emphasis",
            &normalized,
        );
    }

    if contains_any(&normalized, &["horizon", "level", "tilt"]) {
        return colored(OverlayKind::Horizon, "Horizon level guide", &normalized);
    }

    failure(NO_MATCH_MESSAGE)
}

fn contains_any(normalized: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| normalized.contains(needle))
}

/// Builds a success for a fixed-geometry overlay, applying the color
/// keyword scan.
fn colored(kind: OverlayKind, summary: &str, normalized: &str) -> ParseOutcome {
    let mut definition = OverlayDefinition::new(kind);
    apply_color(&mut definition, normalized);
    success(definition, summary.to_string())
}

fn build_ellipse(normalized: &str) -> ParseOutcome {
    let width = extract_fraction(&WIDTH_RE, normalized)
        .unwrap_or_else(|| SpanFraction::new(0.6));
    let height = extract_fraction(&HEIGHT_RE, normalized)
        .unwrap_or_else(|| SpanFraction::new(0.4));

    let mut definition = OverlayDefinition::new(OverlayKind::Ellipse);
    definition.rect = Some(RectPct {
        width_pct: Some(width),
        height_pct: Some(height),
    });
    apply_color(&mut definition, normalized);

    let summary = format!(
        "Centered ellipse {}% × {}%",
        width.as_percent(),
        height.as_percent()
    );
    success(definition, summary)
}

fn build_frame(normalized: &str) -> ParseOutcome {
    let inset = extract_fraction(&INSET_RE, normalized)
        .unwrap_or_else(|| SpanFraction::new(0.1));

    let mut definition = OverlayDefinition::new(OverlayKind::Frame);
    definition.inset_pct = Some(inset);
    apply_color(&mut definition, normalized);

    let summary = format!("Inset frame {}%", inset.as_percent());
    success(definition, summary)
}

fn apply_color(definition: &mut OverlayDefinition, normalized: &str) {
    if let Some(hex) = color::detect_color(normalized) {
        definition.color = Some(hex.to_string());
    }
}

/// Pulls a percentage out of the text and clamps it to the valid span
/// range. The capture is at most three digits, so the parse cannot fail.
fn extract_fraction(pattern: &Regex, normalized: &str) -> Option<SpanFraction> {
    let captures = pattern.captures(normalized)?;
    let percent: u32 = captures[1].parse().ok()?;
    Some(SpanFraction::from_percent(percent))
}

fn success(definition: OverlayDefinition, summary: String) -> ParseOutcome {
    ParseOutcome::Success {
        definition,
        summary,
    }
}

fn failure(message: &str) -> ParseOutcome {
    ParseOutcome::Failure {
        message: message.to_string(),
        suggestions: SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
    }
}
