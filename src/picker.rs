//! Picker session state machine
//!
//! A [`PickerSession`] turns the stream of input events (search-term changes,
//! key presses, focus changes, clicks) into a consistent suggestion list with
//! a single highlighted entry. Two states: idle and active. Every mutation is
//! followed by a state-updated notification; a successful selection
//! additionally emits the chosen entry exactly once.
//!
//! All handlers run synchronously to completion, in arrival order. A session
//! is created once per focus context and reset between searches rather than
//! recreated, so subscriber identity is preserved.

use tracing::{debug, trace};

use crate::config::PickerConfig;
use crate::dictionary::{Dictionary, EmojiEntry};
use crate::events::{InputAnchor, NavKey, PickerListener, PickerSnapshot};
use crate::search::FuzzySearcher;

/// Fraction of the viewport height below which the popup flips above the
/// caret, so it stays on screen for inputs near the bottom of the page.
const REVERSE_DISPLAY_THRESHOLD: f64 = 0.60;

pub struct PickerSession {
    config: PickerConfig,
    searcher: FuzzySearcher,
    active: bool,
    search_term: Option<String>,
    suggestions: Vec<EmojiEntry>,
    highlight_index: usize,
    anchor: Option<InputAnchor>,
    reverse_display: bool,
    listeners: Vec<Box<dyn PickerListener>>,
}

impl PickerSession {
    pub fn new(dictionary: Dictionary, config: PickerConfig) -> Self {
        let searcher = FuzzySearcher::new(dictionary, config.suggestion_limit);
        PickerSession {
            config,
            searcher,
            active: false,
            search_term: None,
            suggestions: Vec::new(),
            highlight_index: 0,
            anchor: None,
            reverse_display: false,
            listeners: Vec::new(),
        }
    }

    /// Subscribe to state updates and selections for the session's lifetime.
    pub fn subscribe(&mut self, listener: Box<dyn PickerListener>) {
        self.listeners.push(listener);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn suggestions(&self) -> &[EmojiEntry] {
        &self.suggestions
    }

    pub fn highlight_index(&self) -> usize {
        self.highlight_index
    }

    /// Full state snapshot, as published to listeners.
    pub fn snapshot(&self) -> PickerSnapshot {
        PickerSnapshot {
            active: self.active,
            search_term: self.search_term.clone(),
            suggestions: self.suggestions.clone(),
            highlight_index: self.highlight_index,
            anchor: self.anchor.clone(),
            reverse_display: self.reverse_display,
        }
    }

    /// The current token's search term changed (or disappeared).
    ///
    /// A non-empty term activates the session and refreshes suggestions; a
    /// term at or below the char threshold, or one with no matches, collapses
    /// it back to idle. An empty/absent term always idles. Stale terms
    /// arriving after a blur are ordinary fresh activations.
    pub fn handle_search_term_changed(&mut self, term: Option<&str>) {
        match term {
            Some(term) if !term.is_empty() => {
                if !self.active {
                    self.reset_search_state();
                    self.active = true;
                }
                self.search_term = Some(term.to_string());
                self.populate_suggestions(term);
                if self.suggestions.is_empty() {
                    // Nothing to show: the popup collapses and the session
                    // idles until a matching term arrives
                    self.reset_search_state();
                }
            }
            _ => self.reset_search_state(),
        }
        self.notify_state();
    }

    /// A key-down from the focused input. Inert while idle so navigation keys
    /// behave normally in fields without an active search.
    pub fn handle_key_down(&mut self, key: &str) {
        if !self.active {
            trace!(key, "Key ignored, picker idle");
            return;
        }

        if key == "Escape" {
            self.handle_escape();
        } else if let Some(nav) = NavKey::from_key(key) {
            self.handle_nav_key(nav);
        }
    }

    /// A recognized navigation key while a search may be active.
    pub fn handle_nav_key(&mut self, key: NavKey) {
        if !self.active {
            return;
        }

        match key {
            NavKey::Tab | NavKey::ArrowDown => self.highlight_next(),
            NavKey::ArrowUp => self.highlight_previous(),
            NavKey::Enter => self.select_current(),
            // The cursor is leaving the token: not picker navigation
            NavKey::ArrowLeft | NavKey::ArrowRight => {
                self.reset_search_state();
                self.notify_state();
            }
        }
    }

    /// Escape cancels the active search unconditionally.
    pub fn handle_escape(&mut self) {
        self.reset_search_state();
        self.notify_state();
    }

    /// Loss of input focus cancels the active search.
    pub fn handle_blur(&mut self) {
        self.handle_escape();
    }

    /// An input field gained focus: capture its geometry, decide the popup
    /// direction, and drop any session from the previous field.
    pub fn handle_input_focused(&mut self, anchor: InputAnchor) {
        let flip_line =
            anchor.viewport.y + anchor.viewport.height * REVERSE_DISPLAY_THRESHOLD;
        self.reverse_display = anchor.input.y > flip_line;
        debug!(
            input_id = %anchor.input_id,
            reverse_display = self.reverse_display,
            "Input focused"
        );
        self.anchor = Some(anchor);
        self.reset_search_state();
        self.notify_state();
    }

    /// A suggestion was clicked. Out-of-range indices are ignored: the click
    /// races against the list being replaced or collapsed.
    pub fn handle_suggestion_clicked(&mut self, index: usize) {
        if !self.active || index >= self.suggestions.len() {
            debug!(index, active = self.active, "Stale suggestion click ignored");
            return;
        }
        self.highlight_index = index;
        self.select_current();
    }

    /// Force the session idle regardless of current state.
    pub fn reset(&mut self) {
        self.reset_search_state();
        self.notify_state();
    }

    fn populate_suggestions(&mut self, term: &str) {
        self.suggestions = if term.chars().count() > self.config.char_threshold {
            self.searcher.search(term).into_iter().cloned().collect()
        } else {
            // Below the threshold the term is not yet searchable
            Vec::new()
        };

        // The list may have shrunk under the highlight
        if self.highlight_index >= self.suggestions.len() {
            self.highlight_index = 0;
        }
    }

    fn highlight_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.highlight_index = (self.highlight_index + 1) % self.suggestions.len();
        self.notify_state();
    }

    fn highlight_previous(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let len = self.suggestions.len();
        self.highlight_index = (self.highlight_index + len - 1) % len;
        self.notify_state();
    }

    /// Commit the highlighted entry: idle first, then state update, then the
    /// chosen-entry notification.
    fn select_current(&mut self) {
        let chosen = self.suggestions.get(self.highlight_index).cloned();
        self.reset_search_state();
        self.notify_state();

        if let Some(entry) = chosen {
            debug!(name = %entry.name, "Emoji picked");
            for listener in &mut self.listeners {
                listener.emoji_picked(&entry);
            }
        }
    }

    fn reset_search_state(&mut self) {
        self.active = false;
        self.search_term = None;
        self.suggestions.clear();
        self.highlight_index = 0;
    }

    fn notify_state(&mut self) {
        let snapshot = self.snapshot();
        for listener in &mut self.listeners {
            listener.state_updated(&snapshot);
        }
    }
}
