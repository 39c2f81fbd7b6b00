//! Sentence separator rule for a character-cursor pipeline
//!
//! Given a cursor over a stream of characters, the rule decides whether the
//! punctuation mark at the current position ends a sentence, and consumes
//! the characters that belong to that boundary (the mark itself, further
//! marks in the same run, and a closing quote that ends the sentence).
//!
//! The decision uses only local lookahead:
//! - `.`, `?`, `!` end a sentence before whitespace or the end of text
//! - `?` and `!` also end a sentence before any other character; `.` does
//!   not (`3.14`)
//! - after a closing quote, the sentence only ends if whitespace or the end
//!   of text follows the quote
//! - every other configured separator (line feed, full-width marks) always
//!   ends a sentence
//! - nothing fires inside a suppressed context or range
//!
//! # Example
//!
//! ```rust
//! use sentsep_core::{BoundaryCursor, SeparatorRule, SourceCursor};
//!
//! let rule = SeparatorRule::new();
//! let mut cursor = SourceCursor::new("He said \"Stop.\" Then left.");
//!
//! let mut breaks = Vec::new();
//! while !cursor.is_at_end() {
//!     if rule.advance_past_boundary(&mut cursor).is_boundary() {
//!         breaks.push(cursor.position());
//!     } else {
//!         cursor.advance();
//!     }
//! }
//! assert_eq!(breaks, vec![15, 26]);
//! ```

pub mod cursor;
pub mod error;
pub mod rule;
pub mod tables;

pub use cursor::{BoundaryCursor, SourceCursor};
pub use error::{CoreError, Result};
pub use rule::{BoundaryMatch, Consumed, SeparatorRule, DEFAULT_MAX_STEPS};
pub use tables::{SeparatorTable, DEFAULT_SEPARATORS};
