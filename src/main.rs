// SPDX-License-Identifier: MPL-2.0
use lens_guides::command::{interpret, ParseOutcome};
use lens_guides::config;
use lens_guides::error::Result;
use pico_args;

const HELP: &str = "\
lens_guides — overlay command interpreter

USAGE:
  lens_guides [--json] <command text>

OPTIONS:
  --json    Print the full outcome as JSON
  --help    Show this help

EXAMPLES:
  lens_guides add thirds grid
  lens_guides draw ellipse 70% wide 40% tall
";

fn main() -> Result<()> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains("--help") {
        print!("{}", HELP);
        return Ok(());
    }
    let as_json = args.contains("--json");

    let text = args
        .finish()
        .into_iter()
        .filter_map(|part| part.into_string().ok())
        .collect::<Vec<_>>()
        .join(" ");

    let outcome = interpret(&text);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        ParseOutcome::Success {
            definition,
            summary,
        } => {
            let settings = config::load().unwrap_or_default();
            let appearance = settings.appearance_for(&definition);
            println!("{}", summary);
            println!(
                "overlay: {}  color: {}  opacity: {}  thickness: {}",
                definition.kind, appearance.color, appearance.opacity, appearance.thickness
            );
        }
        ParseOutcome::Failure {
            message,
            suggestions,
        } => {
            println!("{}", message);
            println!("Try one of:");
            for suggestion in suggestions {
                println!("  {}", suggestion);
            }
        }
    }

    Ok(())
}
