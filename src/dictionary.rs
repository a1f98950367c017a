//! Static emoji name dictionary
//!
//! The dictionary is a flat list of `name -> glyph` records produced by an
//! offline generation step and embedded at compile time. Names are lowercase
//! with words joined by `_` and act as the lookup key; iteration order is the
//! order of the source table, which the matcher relies on for tie-breaking.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{PickerError, Result};

/// One emoji record: a searchable name and the character(s) it stands for.
///
/// `glyph` may be more than one Unicode code point (ZWJ sequences, skin-tone
/// modifiers); it is spliced into text verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiEntry {
    pub name: String,
    #[serde(rename = "char")]
    pub glyph: String,
}

/// Immutable, validated emoji dictionary loaded once at startup.
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: Vec<EmojiEntry>,
}

impl Dictionary {
    /// Build a dictionary from pre-parsed entries, validating the table.
    ///
    /// The picker must not run with a partial or corrupt table, so an empty
    /// list or a duplicate name is a hard error rather than a warning.
    pub fn from_entries(entries: Vec<EmojiEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(PickerError::DictionaryEmpty);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(PickerError::DuplicateName(entry.name.clone()));
            }
            if entry.name.chars().any(|c| c.is_ascii_uppercase()) {
                warn!(name = %entry.name, "Dictionary name is not lowercase; prefix matching may miss it");
            }
        }

        debug!(entries = entries.len(), "Emoji dictionary validated");
        Ok(Dictionary { entries })
    }

    /// Parse a dictionary from its JSON wire format: an array of
    /// `{"name": ..., "char": ...}` objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<EmojiEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Read and parse a dictionary from a JSON file on disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| PickerError::DictionaryRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The dictionary embedded in the binary at compile time.
    pub fn builtin() -> Result<Self> {
        Self::from_json(include_str!("../assets/emojis.json"))
    }

    /// Entries in original table order.
    pub fn entries(&self) -> &[EmojiEntry] {
        &self.entries
    }

    /// Look up an entry by exact name.
    pub fn get(&self, name: &str) -> Option<&EmojiEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
