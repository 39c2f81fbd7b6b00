//! Property tests for the separator rule over the string cursor

use proptest::prelude::*;
use sentsep_core::{BoundaryCursor, SeparatorRule, SourceCursor};

const TEXT: &str = "[a-zA-Z0-9 .?!\"'\n\t。？！．\u{201D}\u{2019}]{0,40}";

/// Cursor advanced `skip` characters into `text` (clamped at the end)
fn cursor_after(text: &str, skip: usize) -> SourceCursor<'_> {
    let mut cursor = SourceCursor::new(text);
    for _ in 0..skip {
        cursor.advance();
    }
    cursor
}

proptest! {
    #[test]
    fn test_is_idempotent(text in TEXT, skip in 0usize..48) {
        let rule = SeparatorRule::new();
        let cursor = cursor_after(&text, skip);
        let position = cursor.position();

        let first = rule.test(&cursor);
        let second = rule.test(&cursor);

        prop_assert_eq!(first, second);
        prop_assert_eq!(cursor.position(), position);
    }

    #[test]
    fn test_context_suppresses_everything(text in TEXT, skip in 0usize..48) {
        let rule = SeparatorRule::new();
        let mut cursor = cursor_after(&text, skip);
        cursor.enter_context("aside");

        prop_assert!(!rule.test(&cursor));
        prop_assert_eq!(rule.advance_past_boundary(&mut cursor).steps, 0);
    }

    #[test]
    fn test_range_suppresses_everything(text in TEXT, skip in 0usize..48) {
        let rule = SeparatorRule::new();
        let mut cursor = cursor_after(&text, skip);
        cursor.add_suppressed_range(0..text.len() + 1).unwrap();

        prop_assert!(!rule.test(&cursor));
    }

    #[test]
    fn test_ambiguous_separator_closes_at_end(prefix in TEXT, mark in prop::sample::select(vec!['.', '?', '!'])) {
        let text = format!("{prefix}{mark}");
        let rule = SeparatorRule::new();
        let cursor = cursor_after(&text, prefix.chars().count());

        prop_assert_eq!(cursor.read(0), Some(mark));
        prop_assert!(rule.test(&cursor));
    }

    #[test]
    fn test_advance_is_monotonic_and_bounded(text in TEXT, skip in 0usize..48, cap in 1usize..6) {
        let rule = SeparatorRule::new().with_max_steps(cap);
        let mut cursor = cursor_after(&text, skip);
        let (position, index) = (cursor.position(), cursor.char_index());

        let consumed = rule.advance_past_boundary(&mut cursor);

        prop_assert!(cursor.position() >= position);
        prop_assert_eq!(cursor.char_index() - index, consumed.steps);
        prop_assert!(consumed.steps <= cap);
        prop_assert_eq!(consumed.is_boundary(), consumed.first.is_some());
    }
}
