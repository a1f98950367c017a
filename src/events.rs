//! Shared event and notification types
//!
//! Inbound, the host feeds the picker DOM-style key names, search-term
//! changes, focus geometry and clicks. Outbound, subscribers receive typed
//! notifications through [`PickerListener`] instead of a string-keyed event
//! emitter: a full [`PickerSnapshot`] after every state mutation, and the
//! chosen entry exactly once per selection.

use serde::{Deserialize, Serialize};

use crate::dictionary::EmojiEntry;

/// Navigation keys the picker recognizes while a search is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Enter,
    Tab,
    ArrowDown,
    ArrowUp,
    ArrowLeft,
    ArrowRight,
}

impl NavKey {
    /// Map a DOM-style key name to a navigation key.
    pub fn from_key(key: &str) -> Option<NavKey> {
        match key {
            "Enter" => Some(NavKey::Enter),
            "Tab" => Some(NavKey::Tab),
            "ArrowDown" => Some(NavKey::ArrowDown),
            "ArrowUp" => Some(NavKey::ArrowUp),
            "ArrowLeft" => Some(NavKey::ArrowLeft),
            "ArrowRight" => Some(NavKey::ArrowRight),
            _ => None,
        }
    }

    /// Keys that browse or commit within the suggestion list.
    pub fn is_picker_navigation(self) -> bool {
        matches!(
            self,
            NavKey::Enter | NavKey::Tab | NavKey::ArrowDown | NavKey::ArrowUp
        )
    }

    /// Keys that move the text cursor out of the token, cancelling the search.
    pub fn is_input_navigation(self) -> bool {
        matches!(self, NavKey::ArrowLeft | NavKey::ArrowRight)
    }
}

/// True for keys that edit the text content (and so can change the current
/// word): any single-character key, or Backspace.
pub fn is_text_edit_key(key: &str) -> bool {
    key == "Backspace" || key.chars().count() == 1
}

/// Axis-aligned rectangle in CSS pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Positioning context captured when an input gains focus.
///
/// The picker carries this through to snapshots untouched apart from the
/// reverse-display computation; renderers use it to place the popup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputAnchor {
    /// Host-assigned identifier of the focused input field
    #[serde(rename = "inputId")]
    pub input_id: String,
    /// Bounding box of the input field
    pub input: Rect,
    /// Visible viewport bounds
    pub viewport: Rect,
}

/// Full session state published after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickerSnapshot {
    /// Whether a search is in progress
    pub active: bool,
    /// Current search term, if any
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    /// Ranked suggestions, best match first, length capped
    pub suggestions: Vec<EmojiEntry>,
    /// Index of the highlighted suggestion; meaningless when `suggestions`
    /// is empty
    #[serde(rename = "highlightIndex")]
    pub highlight_index: usize,
    /// Positioning context from the most recent focus, if any
    pub anchor: Option<InputAnchor>,
    /// Render the popup above the caret instead of below it
    #[serde(rename = "reverseDisplay")]
    pub reverse_display: bool,
}

/// Typed subscriber for picker notifications.
pub trait PickerListener {
    /// Fired after every state mutation with the full session snapshot.
    fn state_updated(&mut self, snapshot: &PickerSnapshot);

    /// Fired exactly once per successful selection.
    fn emoji_picked(&mut self, entry: &EmojiEntry);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_key_mapping() {
        assert_eq!(NavKey::from_key("Enter"), Some(NavKey::Enter));
        assert_eq!(NavKey::from_key("Tab"), Some(NavKey::Tab));
        assert_eq!(NavKey::from_key("ArrowDown"), Some(NavKey::ArrowDown));
        assert_eq!(NavKey::from_key("ArrowUp"), Some(NavKey::ArrowUp));
        assert_eq!(NavKey::from_key("ArrowLeft"), Some(NavKey::ArrowLeft));
        assert_eq!(NavKey::from_key("ArrowRight"), Some(NavKey::ArrowRight));
        assert_eq!(NavKey::from_key("Escape"), None);
        assert_eq!(NavKey::from_key("a"), None);
    }

    #[test]
    fn test_key_classification() {
        assert!(NavKey::Enter.is_picker_navigation());
        assert!(NavKey::Tab.is_picker_navigation());
        assert!(!NavKey::ArrowLeft.is_picker_navigation());
        assert!(NavKey::ArrowLeft.is_input_navigation());
        assert!(NavKey::ArrowRight.is_input_navigation());
        assert!(!NavKey::ArrowDown.is_input_navigation());
    }

    #[test]
    fn test_text_edit_keys() {
        assert!(is_text_edit_key("a"));
        assert!(is_text_edit_key(":"));
        assert!(is_text_edit_key("Backspace"));
        assert!(!is_text_edit_key("Shift"));
        assert!(!is_text_edit_key("ArrowLeft"));
    }
}
