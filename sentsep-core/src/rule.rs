//! Separator rule: decides whether a terminal punctuation mark ends a sentence
//!
//! The rule is stateless. It looks at most two characters past the current
//! one and reads the cursor's suppression flags; only
//! [`SeparatorRule::advance_past_boundary`] moves the cursor.

use crate::cursor::BoundaryCursor;
use crate::tables::{is_ambiguous, is_closing_quote, is_whitespace, SeparatorTable};

/// Upper bound on cursor steps taken by one consumption run
pub const DEFAULT_MAX_STEPS: usize = 1000;

/// Which lookahead branch confirmed a boundary
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BoundaryMatch {
    /// Separator outside `.`, `?`, `!` (line feed, full-width marks)
    Unambiguous,
    /// Ambiguous separator at the last position of the stream
    EndOfText,
    /// Ambiguous separator followed by a closing quote that ends the text
    /// or is followed by whitespace; the quote belongs to the sentence
    QuotedClose,
    /// Ambiguous separator followed by whitespace
    Whitespace,
    /// `?` or `!` followed by anything else
    Emphatic,
}

impl BoundaryMatch {
    /// Number of characters this boundary owns, separator included
    #[inline]
    pub fn width(self) -> usize {
        match self {
            BoundaryMatch::QuotedClose => 2,
            _ => 1,
        }
    }
}

/// Outcome of one consumption run
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Consumed {
    /// Cursor steps taken
    pub steps: usize,
    /// Classification of the first boundary in the run
    pub first: Option<BoundaryMatch>,
    /// The run stopped because it hit the step cap
    pub capped: bool,
}

impl Consumed {
    /// True when at least one boundary character was consumed
    pub fn is_boundary(&self) -> bool {
        self.steps > 0
    }
}

/// Sentence separator rule
///
/// Holds the configured separator set and the consumption cap. An empty
/// separator set is legal and turns the rule into a no-op.
#[derive(Debug, Clone)]
pub struct SeparatorRule {
    table: SeparatorTable,
    max_steps: usize,
}

impl SeparatorRule {
    /// Rule with the default separators and cap
    pub fn new() -> Self {
        Self {
            table: SeparatorTable::default(),
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// Rule with `separators` replacing the default set entirely
    pub fn with_separators<I>(separators: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Self {
            table: SeparatorTable::new(separators),
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// Set the consumption cap (at least one step)
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    /// Configured separators
    pub fn separators(&self) -> &SeparatorTable {
        &self.table
    }

    /// Consumption cap
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Classify the current cursor position without moving the cursor
    pub fn classify<C>(&self, cursor: &C) -> Option<BoundaryMatch>
    where
        C: BoundaryCursor + ?Sized,
    {
        if cursor.is_suppressed() || cursor.is_in_suppressed_range() {
            return None;
        }

        let current = cursor.read(0)?;
        if !self.table.contains(current) {
            return None;
        }
        if !is_ambiguous(current) {
            return Some(BoundaryMatch::Unambiguous);
        }

        let Some(next) = cursor.read(1) else {
            return Some(BoundaryMatch::EndOfText);
        };

        if is_closing_quote(next) {
            // `"Stop." And` closes, `"Stop."And` does not
            return match cursor.read(2) {
                None => Some(BoundaryMatch::QuotedClose),
                Some(after) if is_whitespace(after) => Some(BoundaryMatch::QuotedClose),
                Some(_) => None,
            };
        }

        if is_whitespace(next) {
            return Some(BoundaryMatch::Whitespace);
        }

        // Decimal and abbreviation guard: "3.14", "e.g"
        if current == '.' {
            return None;
        }

        Some(BoundaryMatch::Emphatic)
    }

    /// Check if the current position is a sentence boundary
    #[inline]
    pub fn test<C>(&self, cursor: &C) -> bool
    where
        C: BoundaryCursor + ?Sized,
    {
        self.classify(cursor).is_some()
    }

    /// Consume every character that belongs to the boundary at the cursor
    ///
    /// Keeps advancing while the position tests as a boundary, stepping over
    /// the closing quote of a [`BoundaryMatch::QuotedClose`] as well. A no-op
    /// when the current position is not a boundary. Stops after
    /// `max_steps` steps even in the middle of a quoted close. The run only
    /// counts as capped when the cap cut it short, not when it ended on
    /// exactly `max_steps` characters.
    pub fn advance_past_boundary<C>(&self, cursor: &mut C) -> Consumed
    where
        C: BoundaryCursor + ?Sized,
    {
        let mut consumed = Consumed::default();
        let mut interrupted = false;

        while consumed.steps < self.max_steps {
            let Some(found) = self.classify(cursor) else {
                return consumed;
            };
            consumed.first.get_or_insert(found);

            for _ in 0..found.width() {
                if consumed.steps == self.max_steps {
                    interrupted = true;
                    break;
                }
                cursor.advance();
                consumed.steps += 1;
            }
        }

        if !interrupted && !self.test(cursor) {
            return consumed;
        }

        consumed.capped = true;
        tracing::warn!(
            position = cursor.position(),
            max_steps = self.max_steps,
            "separator run reached the step cap, stopping with partial progress"
        );
        consumed
    }
}

impl Default for SeparatorRule {
    fn default() -> Self {
        Self::new()
    }
}
