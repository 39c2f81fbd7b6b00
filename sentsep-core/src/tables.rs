//! Character tables for separator detection with O(1) lookup
//!
//! The separator set is configurable; the whitespace and closing-quote
//! classes used for lookahead are fixed.

use std::collections::HashSet;

/// Separators used when no explicit set is configured.
///
/// ASCII and full-width period, ideographic full stop, ASCII and
/// full-width question and exclamation marks, and line feed.
pub const DEFAULT_SEPARATORS: [char; 8] = ['.', '．', '。', '?', '!', '？', '！', '\n'];

/// Separators that only end a sentence when the lookahead agrees.
pub const AMBIGUOUS_SEPARATORS: [char; 3] = ['.', '?', '!'];

/// Whitespace recognised after a separator or a closing quote.
pub const WHITESPACE: [char; 4] = [' ', '\t', '\r', '\n'];

/// Quotes that may close a quoted sentence right after its separator.
pub const CLOSING_QUOTES: [char; 4] = ['"', '\'', '\u{201D}', '\u{2019}'];

/// Check if character belongs to the fixed whitespace class
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

/// Check if character belongs to the fixed closing-quote class
#[inline]
pub fn is_closing_quote(ch: char) -> bool {
    matches!(ch, '"' | '\'' | '\u{201D}' | '\u{2019}')
}

/// Check if character is `.`, `?` or `!`
#[inline]
pub fn is_ambiguous(ch: char) -> bool {
    matches!(ch, '.' | '?' | '!')
}

/// Separator lookup table
///
/// Keeps the configured order for reporting and answers membership with
/// an ASCII array lookup, falling back to a hash set for everything else.
#[derive(Debug, Clone)]
pub struct SeparatorTable {
    /// Configured separators, deduplicated, in first-seen order
    ordered: Vec<char>,
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// HashSet for non-ASCII separators
    non_ascii: HashSet<char>,
}

impl SeparatorTable {
    /// Create from a list of separator characters
    ///
    /// Closing quotes are never separators: the fixed quote class wins
    /// over the configured set, so they are dropped here.
    pub fn new<I>(separators: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut ordered = Vec::new();
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();

        for ch in separators {
            if is_closing_quote(ch) {
                tracing::debug!(separator = ?ch, "dropping closing quote from separator set");
                continue;
            }

            let inserted = if ch.is_ascii() {
                let slot = &mut ascii_table[ch as usize];
                !std::mem::replace(slot, true)
            } else {
                non_ascii.insert(ch)
            };

            if inserted {
                ordered.push(ch);
            }
        }

        Self {
            ordered,
            ascii_table,
            non_ascii,
        }
    }

    /// Check if character is a configured separator - hot path
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }

    /// Configured separators in order
    pub fn chars(&self) -> &[char] {
        &self.ordered
    }

    /// Number of distinct separators
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// True when no separator is configured (the rule never fires)
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl Default for SeparatorTable {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATORS)
    }
}
