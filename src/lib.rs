//! emoji-inline - inline `:name` emoji search for text inputs
//!
//! As the user types a token beginning with `:`, the engine matches the
//! partial name against a static emoji dictionary, ranks suggestions with a
//! weighted fuzzy matcher, and runs a picker state machine that turns
//! keystroke/focus/click events into a consistent suggestion list with one
//! highlighted entry. Hosts subscribe for state updates and the chosen emoji;
//! reading text boxes, splicing values back, and rendering the popup stay on
//! the host's side of the boundary (the pure-string pieces of that work live
//! in [`token`]).

pub mod config;
pub mod dictionary;
pub mod error;
pub mod events;
pub mod logging;
pub mod picker;
pub mod search;
pub mod token;

pub use config::PickerConfig;
pub use dictionary::{Dictionary, EmojiEntry};
pub use error::{PickerError, Result};
pub use events::{InputAnchor, NavKey, PickerListener, PickerSnapshot, Rect};
pub use picker::PickerSession;
pub use search::{deviation_score, FuzzySearcher};
