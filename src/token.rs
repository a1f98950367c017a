//! Token and search-term string helpers
//!
//! The pure-string side of the text-input collaborator: find the word under
//! the cursor, pull the `:`-prefixed search term out of it, and splice the
//! chosen emoji back into the text. No DOM or widget code lives here.
//!
//! All cursor positions are Unicode scalar offsets into the text (0..=len in
//! chars), not byte offsets.

/// The whitespace-delimited word containing the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentWord {
    /// The word itself
    pub text: String,
    /// Char offset of the word's first character in the full text
    pub start: usize,
    /// Char offset one past the word's last character
    pub end: usize,
    /// Cursor position relative to the word start
    pub cursor: usize,
}

/// Extract the word containing the cursor, or `None` when the cursor sits
/// right after whitespace (there is no word being typed).
pub fn current_word(text: &str, cursor: usize) -> Option<CurrentWord> {
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());

    // The character just typed; cursor 0 in a non-empty text still counts as
    // being "in" the first word.
    if cursor > 0 && chars[cursor - 1].is_whitespace() {
        return None;
    }
    if chars.is_empty() {
        return None;
    }

    let start = chars[..cursor]
        .iter()
        .rposition(|c| c.is_whitespace())
        .map(|i| i + 1)
        .unwrap_or(0);
    let end = chars[cursor..]
        .iter()
        .position(|c| c.is_whitespace())
        .map(|i| i + cursor)
        .unwrap_or(chars.len());

    Some(CurrentWord {
        text: chars[start..end].iter().collect(),
        start,
        end,
        cursor: cursor - start,
    })
}

/// Extract the search term from a word: everything after the word's last `:`
/// up to the cursor. `None` when the word has no colon; an empty term (cursor
/// on or before the colon) is valid and simply below any search threshold.
pub fn search_term(word: &str, cursor_in_word: usize) -> Option<String> {
    let chars: Vec<char> = word.chars().collect();
    let colon = chars.iter().rposition(|&c| c == ':')?;

    let term_start = colon + 1;
    let term_end = cursor_in_word.min(chars.len()).max(term_start);
    Some(chars[term_start..term_end].iter().collect())
}

/// Replace the `:term` ending at `cursor` with the emoji glyph.
///
/// Verifies that the text between the last `:` before the cursor and the
/// cursor still equals `":" + term` (the text may have changed under a stale
/// selection), then returns the new text and the cursor position after the
/// inserted glyph. `None` when the verification fails.
pub fn splice_emoji(text: &str, cursor: usize, term: &str, glyph: &str) -> Option<(String, usize)> {
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());

    let colon = chars[..cursor].iter().rposition(|&c| c == ':')?;
    let search_text: String = chars[colon..cursor].iter().collect();
    if search_text != format!(":{}", term) {
        return None;
    }

    let mut new_text: String = chars[..colon].iter().collect();
    new_text.push_str(glyph);
    new_text.extend(&chars[cursor..]);

    Some((new_text, colon + glyph.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_word_mid_text() {
        let word = current_word("hello :ap world", 9).unwrap();
        assert_eq!(word.text, ":ap");
        assert_eq!(word.start, 6);
        assert_eq!(word.end, 9);
        assert_eq!(word.cursor, 3);
    }

    #[test]
    fn test_current_word_at_start() {
        let word = current_word("hello", 0).unwrap();
        assert_eq!(word.text, "hello");
        assert_eq!(word.cursor, 0);
    }

    #[test]
    fn test_cursor_after_space_is_no_word() {
        assert_eq!(current_word("hello world", 6), None);
        assert_eq!(current_word("", 0), None);
    }

    #[test]
    fn test_current_word_cursor_inside_word() {
        // Cursor between 'a' and 'p': word spans to both sides
        let word = current_word("say :apple now", 7).unwrap();
        assert_eq!(word.text, ":apple");
        assert_eq!(word.cursor, 3);
    }

    #[test]
    fn test_search_term_after_last_colon() {
        assert_eq!(search_term(":ap", 3), Some("ap".to_string()));
        assert_eq!(search_term("x:smile", 7), Some("smile".to_string()));
        // Last colon wins
        assert_eq!(search_term(":a:bc", 5), Some("bc".to_string()));
    }

    #[test]
    fn test_search_term_without_colon() {
        assert_eq!(search_term("hello", 5), None);
    }

    #[test]
    fn test_search_term_cursor_on_colon_is_empty() {
        assert_eq!(search_term(":ap", 1), Some(String::new()));
        assert_eq!(search_term(":ap", 0), Some(String::new()));
    }

    #[test]
    fn test_search_term_cursor_mid_term() {
        assert_eq!(search_term(":apple", 4), Some("app".to_string()));
    }

    #[test]
    fn test_splice_replaces_term_with_glyph() {
        let (text, cursor) = splice_emoji("I like :ap!", 10, "ap", "🍎").unwrap();
        assert_eq!(text, "I like 🍎!");
        assert_eq!(cursor, 8);
    }

    #[test]
    fn test_splice_at_end_of_text() {
        let (text, cursor) = splice_emoji(":cat", 4, "cat", "🐱").unwrap();
        assert_eq!(text, "🐱");
        assert_eq!(cursor, 1);
    }

    #[test]
    fn test_splice_multi_codepoint_glyph() {
        let (text, cursor) = splice_emoji("go :flag", 8, "flag", "🏳️‍🌈").unwrap();
        assert_eq!(text, format!("go {}", "🏳️‍🌈"));
        assert_eq!(cursor, 3 + "🏳️‍🌈".chars().count());
    }

    #[test]
    fn test_splice_rejects_stale_term() {
        // Text changed since the selection was made
        assert_eq!(splice_emoji("I like :pear", 12, "ap", "🍎"), None);
        assert_eq!(splice_emoji("no colon here", 13, "ap", "🍎"), None);
    }
}
