// SPDX-License-Identifier: MPL-2.0
//! This module handles the user's overlay preferences, loading and saving
//! them to a `settings.toml` file.
//!
//! The configured values are the fallbacks a renderer uses when an
//! [`OverlayDefinition`](crate::overlay::OverlayDefinition) leaves its
//! appearance fields unset.
//!
//! # Examples
//!
//! ```no_run
//! use lens_guides::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.color = Some("#27ae60".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::overlay::OverlayDefinition;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "LensGuides";

pub const DEFAULT_OVERLAY_ID: &str = "thirds";
pub const DEFAULT_COLOR: &str = "#2f80ed";
pub const DEFAULT_OPACITY: f32 = 0.8;
pub const DEFAULT_THICKNESS: f32 = 2.0;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Registry id of the overlay shown on startup.
    pub overlay_id: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub opacity: Option<f32>,
    #[serde(default)]
    pub thickness: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            overlay_id: Some(DEFAULT_OVERLAY_ID.to_string()),
            color: Some(DEFAULT_COLOR.to_string()),
            opacity: Some(DEFAULT_OPACITY),
            thickness: Some(DEFAULT_THICKNESS),
        }
    }
}

/// Appearance values after resolving a definition against the config.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    pub color: String,
    pub opacity: f32,
    pub thickness: f32,
}

impl Config {
    /// Resolves the appearance for `definition`: a field set on the
    /// definition wins, then the configured value, then the built-in
    /// default.
    #[must_use]
    pub fn appearance_for(&self, definition: &OverlayDefinition) -> Appearance {
        Appearance {
            color: definition
                .color
                .clone()
                .or_else(|| self.color.clone())
                .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            opacity: definition
                .opacity
                .or(self.opacity)
                .unwrap_or(DEFAULT_OPACITY),
            thickness: definition
                .thickness
                .or(self.thickness)
                .unwrap_or(DEFAULT_THICKNESS),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::OverlayKind;
    use tempfile::tempdir;

    #[test]
    fn round_trips_through_toml_file() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("settings.toml");

        let config = Config {
            overlay_id: Some("horizon".to_string()),
            color: Some("#f2c94c".to_string()),
            opacity: Some(0.5),
            thickness: Some(3.0),
        };
        save_to_path(&config, &path).expect("Failed to save config");

        let loaded = load_from_path(&path).expect("Failed to load config");
        assert_eq!(loaded.overlay_id.as_deref(), Some("horizon"));
        assert_eq!(loaded.color.as_deref(), Some("#f2c94c"));
        assert_eq!(loaded.opacity, Some(0.5));
        assert_eq!(loaded.thickness, Some(3.0));
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "not valid toml [[[").unwrap();

        let loaded = load_from_path(&path).expect("load should not error");
        assert_eq!(loaded.overlay_id.as_deref(), Some(DEFAULT_OVERLAY_ID));
    }

    #[test]
    fn definition_fields_override_configured_defaults() {
        let config = Config::default();
        let mut definition = OverlayDefinition::new(OverlayKind::Crosshair);
        definition.color = Some("#eb5757".to_string());

        let appearance = config.appearance_for(&definition);
        assert_eq!(appearance.color, "#eb5757");
        assert_eq!(appearance.opacity, DEFAULT_OPACITY);
        assert_eq!(appearance.thickness, DEFAULT_THICKNESS);
    }

    #[test]
    fn empty_config_resolves_to_builtin_defaults() {
        let config = Config {
            overlay_id: None,
            color: None,
            opacity: None,
            thickness: None,
        };
        let definition = OverlayDefinition::new(OverlayKind::Thirds);

        let appearance = config.appearance_for(&definition);
        assert_eq!(appearance.color, DEFAULT_COLOR);
        assert_eq!(appearance.opacity, DEFAULT_OPACITY);
        assert_eq!(appearance.thickness, DEFAULT_THICKNESS);
    }
}
