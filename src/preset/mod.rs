// SPDX-License-Identifier: MPL-2.0
//! Named overlay presets.
//!
//! A preset is a saved interpreter result the user can reselect from the
//! overlay picker: the generated id, the human-readable summary, and the
//! definition itself. Presets are kept in insertion order and persisted
//! as a JSON array; capacity management is left to the caller.

use crate::error::Result;
use crate::overlay::OverlayDefinition;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// One saved overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub summary: String,
    pub definition: OverlayDefinition,
}

/// Ordered collection of presets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresetBook {
    presets: Vec<Preset>,
}

impl PresetBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a definition under a freshly generated id and returns a
    /// reference to the stored preset.
    pub fn add(&mut self, summary: String, definition: OverlayDefinition) -> &Preset {
        let id = self.generate_id();
        self.presets.push(Preset {
            id,
            summary,
            definition,
        });
        // Just pushed, so the list is non-empty.
        self.presets.last().unwrap()
    }

    /// Looks up a preset by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|preset| preset.id == id)
    }

    /// Removes a preset by id, returning it when present.
    pub fn remove(&mut self, id: &str) -> Option<Preset> {
        let index = self.presets.iter().position(|preset| preset.id == id)?;
        Some(self.presets.remove(index))
    }

    /// Iterates the presets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Ids are derived from the wall clock, with a bump to stay unique
    /// when two presets are saved within the same millisecond.
    fn generate_id(&self) -> String {
        let mut millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or(0);
        loop {
            let candidate = format!("preset-{}", millis);
            if self.get(&candidate).is_none() {
                return candidate;
            }
            millis += 1;
        }
    }
}

/// Loads a preset book from a JSON file. A missing file yields an empty
/// book, matching a first launch.
pub fn load_from_path(path: &Path) -> Result<PresetBook> {
    if !path.exists() {
        return Ok(PresetBook::new());
    }
    let content = fs::read_to_string(path)?;
    let presets: Vec<Preset> = serde_json::from_str(&content)?;
    Ok(PresetBook { presets })
}

/// Writes a preset book to a JSON file as a flat array.
pub fn save_to_path(book: &PresetBook, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(&book.presets)?;
    fs::write(path, content)?;
    Ok(())
}
