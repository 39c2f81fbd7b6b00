//! Cursor contract consumed by the separator rule, and a string-backed cursor
//!
//! The rule never tracks a position of its own. Everything it knows about
//! the text comes through [`BoundaryCursor`]: bounded lookahead, single-step
//! advancement and two suppression flags computed upstream.

use crate::error::{CoreError, Result};
use smallvec::SmallVec;
use std::ops::Range;

/// Character cursor with suppression flags
pub trait BoundaryCursor {
    /// Character at `offset` characters past the current position.
    ///
    /// Offset 0 is the current character. Returns `None` past the end of
    /// the stream. Must not change the cursor.
    fn read(&self, offset: usize) -> Option<char>;

    /// Move forward by exactly one character.
    fn advance(&mut self);

    /// Current position is inside a pointwise suppressed context.
    fn is_suppressed(&self) -> bool;

    /// Current position lies in a longer suppressed range.
    fn is_in_suppressed_range(&self) -> bool;

    /// Current byte position, for callers and diagnostics.
    fn position(&self) -> usize;
}

/// Cursor over a borrowed string
///
/// Positions are byte offsets that always sit on a char boundary.
/// Suppression comes from two sources: a stack of named contexts that the
/// owning pipeline opens and closes while it walks the text, and a list of
/// half-open byte ranges registered up front.
#[derive(Debug, Clone)]
pub struct SourceCursor<'a> {
    text: &'a str,
    /// Current byte position in text
    byte_pos: usize,
    /// Current character index (0-based)
    char_index: usize,
    contexts: SmallVec<[String; 4]>,
    suppressed_ranges: Vec<Range<usize>>,
}

impl<'a> SourceCursor<'a> {
    /// Create a cursor at the beginning of `text`
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            byte_pos: 0,
            char_index: 0,
            contexts: SmallVec::new(),
            suppressed_ranges: Vec::new(),
        }
    }

    /// The full text behind this cursor
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Text from the current position to the end
    pub fn remaining(&self) -> &'a str {
        &self.text[self.byte_pos..]
    }

    /// Current character index
    pub fn char_index(&self) -> usize {
        self.char_index
    }

    /// True once every character has been consumed
    pub fn is_at_end(&self) -> bool {
        self.byte_pos >= self.text.len()
    }

    /// Open a named suppression context at the current position
    pub fn enter_context(&mut self, name: impl Into<String>) {
        self.contexts.push(name.into());
    }

    /// Close the most recently opened context called `name`
    pub fn leave_context(&mut self, name: &str) -> Result<()> {
        match self.contexts.iter().rposition(|open| open == name) {
            Some(index) => {
                self.contexts.remove(index);
                Ok(())
            }
            None => Err(CoreError::ContextNotEntered {
                name: name.to_string(),
            }),
        }
    }

    /// Check for an open context, either a specific one or any
    pub fn is_in_context(&self, name: Option<&str>) -> bool {
        match name {
            Some(name) => self.contexts.iter().any(|open| open == name),
            None => !self.contexts.is_empty(),
        }
    }

    /// Suppress boundaries for every position in `range` (byte offsets, half-open)
    pub fn add_suppressed_range(&mut self, range: Range<usize>) -> Result<()> {
        if range.start > range.end {
            return Err(CoreError::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }
        self.suppressed_ranges.push(range);
        Ok(())
    }
}

impl BoundaryCursor for SourceCursor<'_> {
    #[inline]
    fn read(&self, offset: usize) -> Option<char> {
        self.remaining().chars().nth(offset)
    }

    fn advance(&mut self) {
        if let Some(ch) = self.read(0) {
            self.byte_pos += ch.len_utf8();
            self.char_index += 1;
        }
    }

    fn is_suppressed(&self) -> bool {
        self.is_in_context(None)
    }

    fn is_in_suppressed_range(&self) -> bool {
        self.suppressed_ranges
            .iter()
            .any(|range| range.contains(&self.byte_pos))
    }

    fn position(&self) -> usize {
        self.byte_pos
    }
}
