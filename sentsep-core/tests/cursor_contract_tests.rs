//! The rule only depends on the cursor contract, so any cursor works

use sentsep_core::{BoundaryCursor, BoundaryMatch, SeparatorRule, DEFAULT_MAX_STEPS};

/// Minimal cursor over a char buffer with externally set flags
struct VecCursor {
    chars: Vec<char>,
    pos: usize,
    suppressed: bool,
    in_range: bool,
}

impl VecCursor {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            suppressed: false,
            in_range: false,
        }
    }

    fn at(text: &str, pos: usize) -> Self {
        let mut cursor = Self::new(text);
        cursor.pos = pos;
        cursor
    }
}

impl BoundaryCursor for VecCursor {
    fn read(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn advance(&mut self) {
        if self.pos < self.chars.len() {
            self.pos += 1;
        }
    }

    fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    fn is_in_suppressed_range(&self) -> bool {
        self.in_range
    }

    fn position(&self) -> usize {
        self.pos
    }
}

#[test]
fn test_decimal_and_sentence_end() {
    let rule = SeparatorRule::new();
    assert!(!rule.test(&VecCursor::at("3.14", 1)));
    assert!(rule.test(&VecCursor::at("Done. Next", 4)));
}

#[test]
fn test_quoted_close_consumes_quote() {
    let rule = SeparatorRule::new();

    let mut cursor = VecCursor::at("Stop.\" ", 4);
    let consumed = rule.advance_past_boundary(&mut cursor);
    assert_eq!(consumed.first, Some(BoundaryMatch::QuotedClose));
    assert_eq!(cursor.position(), 6);

    let mut cursor = VecCursor::at("Stop.\"", 4);
    rule.advance_past_boundary(&mut cursor);
    assert_eq!(cursor.position(), 6);
    assert_eq!(cursor.read(0), None);
}

#[test]
fn test_quoted_mark_followed_by_letters() {
    let rule = SeparatorRule::new();
    let mut cursor = VecCursor::at("Stop.\"And", 4);
    assert!(!rule.test(&cursor));
    assert_eq!(rule.advance_past_boundary(&mut cursor).steps, 0);
    assert_eq!(cursor.position(), 4);
}

#[test]
fn test_flags_dominate() {
    let rule = SeparatorRule::new();

    let mut cursor = VecCursor::at("a\nb", 1);
    assert!(rule.test(&cursor));

    cursor.suppressed = true;
    assert!(!rule.test(&cursor));

    cursor.suppressed = false;
    cursor.in_range = true;
    assert!(!rule.test(&cursor));
}

#[test]
fn test_pathological_run_hits_default_cap() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let rule = SeparatorRule::new();
    let text = "。".repeat(DEFAULT_MAX_STEPS + 250);
    let mut cursor = VecCursor::new(&text);

    let consumed = rule.advance_past_boundary(&mut cursor);
    assert_eq!(consumed.steps, DEFAULT_MAX_STEPS);
    assert!(consumed.capped);
    assert_eq!(cursor.position(), DEFAULT_MAX_STEPS);

    // The caller can resume; the remaining run is consumed next time
    let rest = rule.advance_past_boundary(&mut cursor);
    assert_eq!(rest.steps, 250);
    assert!(!rest.capped);
}

#[test]
fn test_reduced_set() {
    let rule = SeparatorRule::with_separators(['.']);
    assert!(!rule.test(&VecCursor::at("Why? No", 3)));
    assert!(!rule.test(&VecCursor::at("行く！", 2)));
    assert!(rule.test(&VecCursor::at("Yes.", 3)));
}
