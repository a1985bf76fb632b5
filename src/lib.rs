// SPDX-License-Identifier: MPL-2.0
//! `lens_guides` provides the compositional-guide layer of a camera app.
//!
//! It interprets free-text overlay commands ("draw an ellipse 70% wide 40%
//! tall") into typed [`overlay::OverlayDefinition`] values, describes the
//! fixed set of available guides, and persists user preferences and named
//! presets. Rendering, camera control, and screen navigation live in the
//! host application.

#![doc(html_root_url = "https://docs.rs/lens_guides/0.2.0")]

pub mod command;
pub mod config;
pub mod error;
pub mod overlay;
pub mod preset;

pub use command::{interpret, ParseOutcome};
