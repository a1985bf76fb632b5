// SPDX-License-Identifier: MPL-2.0
//! End-to-end checks of the overlay command interpreter, driven through
//! the public crate surface the way the UI layer uses it.

use lens_guides::command::{EMPTY_INPUT_MESSAGE, NO_MATCH_MESSAGE, SUGGESTIONS};
use lens_guides::overlay::{find_by_id, OverlayKind};
use lens_guides::{interpret, ParseOutcome};

fn expect_success(input: &str) -> (lens_guides::overlay::OverlayDefinition, String) {
    match interpret(input) {
        ParseOutcome::Success {
            definition,
            summary,
        } => (definition, summary),
        ParseOutcome::Failure { message, .. } => {
            panic!("expected {:?} to parse, got failure: {}", input, message)
        }
    }
}

#[test]
fn every_suggestion_except_the_lower_third_one_names_its_own_overlay() {
    // The suggestions double as documentation, so they should parse.
    // "foreground lower third guide" is the odd one out: "third" trips
    // the thirds rule before the foreground rule is reached.
    let expected = [
        OverlayKind::Thirds,
        OverlayKind::Ellipse,
        OverlayKind::Frame,
        OverlayKind::Horizon,
        OverlayKind::Crosshair,
        OverlayKind::Thirds,
    ];
    for (input, expected_kind) in SUGGESTIONS.iter().zip(expected) {
        let (definition, _) = expect_success(input);
        assert_eq!(definition.kind, expected_kind, "input: {:?}", input);
    }
}

#[test]
fn summaries_match_their_commands() {
    let cases = [
        ("add thirds grid", "Rule of thirds grid"),
        ("crosshair", "Centered crosshair"),
        ("leading lines please", "Leading line diagonals"),
        ("draw an ellipse 70% wide 40% tall", "Centered ellipse 70% × 40%"),
        ("golden ratio", "Golden ratio grid"),
        ("frame with 10% inset", "Inset frame 10%"),
        ("foreground emphasis", "Foreground lower-third emphasis"),
        ("show horizon level", "Horizon level guide"),
    ];
    for (input, expected_summary) in cases {
        let (_, summary) = expect_success(input);
        assert_eq!(summary, expected_summary, "input: {:?}", input);
    }
}

#[test]
fn parsed_kinds_are_all_registered() {
    let inputs = [
        "grid",
        "reticle",
        "diagonals",
        "oval",
        "golden ratio",
        "border",
        "foreground",
        "tilt",
    ];
    for input in inputs {
        let (definition, _) = expect_success(input);
        assert!(
            find_by_id(definition.kind.as_str()).is_some(),
            "kind {} must have a registry entry",
            definition.kind
        );
    }
}

#[test]
fn blank_and_gibberish_inputs_share_the_suggestion_list() {
    for (input, expected_message) in [
        ("", EMPTY_INPUT_MESSAGE),
        ("   ", EMPTY_INPUT_MESSAGE),
        ("unknown overlay please", NO_MATCH_MESSAGE),
    ] {
        match interpret(input) {
            ParseOutcome::Failure {
                message,
                suggestions,
            } => {
                assert_eq!(message, expected_message);
                assert_eq!(suggestions, SUGGESTIONS.map(String::from).to_vec());
            }
            ParseOutcome::Success { .. } => panic!("{:?} must fail", input),
        }
    }
}

#[test]
fn input_is_case_insensitive_and_trimmed() {
    let (definition, summary) = expect_success("  ADD THIRDS GRID  ");
    assert_eq!(definition.kind, OverlayKind::Thirds);
    assert_eq!(summary, "Rule of thirds grid");
}

#[test]
fn very_long_input_still_terminates_with_one_outcome() {
    let mut input = "x".repeat(100_000);
    input.push_str(" green oval 80% wide");
    let (definition, _) = expect_success(&input);
    assert_eq!(definition.kind, OverlayKind::Ellipse);
    assert_eq!(definition.color.as_deref(), Some("#27ae60"));
    let rect = definition.rect.unwrap();
    assert!((rect.width_pct.unwrap().value() - 0.8).abs() < 1e-6);
    // Height keeps its default when only width is given.
    assert!((rect.height_pct.unwrap().value() - 0.4).abs() < 1e-6);
}

#[test]
fn repeated_calls_return_deeply_equal_outcomes() {
    for input in ["", "grid crosshair", "draw ellipse 33% wide", "???"] {
        assert_eq!(interpret(input), interpret(input), "input: {:?}", input);
    }
}

#[test]
fn width_keyword_variants_are_equivalent() {
    let (a, _) = expect_success("ellipse 25% width 35% height");
    let (b, _) = expect_success("ellipse 25% wide 35% tall");
    assert_eq!(a.rect, b.rect);
}

#[test]
fn frame_accepts_margin_as_inset_keyword() {
    let (definition, summary) = expect_success("border with 8% margin");
    assert!((definition.inset_pct.unwrap().value() - 0.08).abs() < 1e-6);
    assert_eq!(summary, "Inset frame 8%");
}
