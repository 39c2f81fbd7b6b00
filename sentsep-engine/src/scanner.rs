//! Boundary scanner
//!
//! Walks a cursor from its current position to the end of the text, asking
//! the separator rule at every position and recording a boundary after each
//! consumed separator run.

use sentsep_core::{BoundaryCursor, BoundaryMatch, SeparatorRule, SourceCursor};

/// A recorded sentence break
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    /// Byte offset in the text, just past the consumed separator run
    pub byte_offset: usize,
    /// Character offset in the text
    pub char_offset: usize,
    /// How the first separator of the run was confirmed
    pub kind: BoundaryMatch,
}

impl Boundary {
    /// Create a new boundary
    pub fn new(byte_offset: usize, char_offset: usize, kind: BoundaryMatch) -> Self {
        Self {
            byte_offset,
            char_offset,
            kind,
        }
    }
}

/// Result of scanning one text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutput {
    /// Boundaries in ascending offset order
    pub boundaries: Vec<Boundary>,
    /// Consumption runs that stopped at the step cap
    pub capped_runs: usize,
}

/// Sequential scanner driving a [`SeparatorRule`]
#[derive(Debug, Clone, Copy)]
pub struct BoundaryScanner<'r> {
    rule: &'r SeparatorRule,
}

impl<'r> BoundaryScanner<'r> {
    /// Create a scanner for `rule`
    pub fn new(rule: &'r SeparatorRule) -> Self {
        Self { rule }
    }

    /// Scan from the cursor's position to the end of its text
    pub fn scan(&self, cursor: &mut SourceCursor<'_>) -> ScanOutput {
        let mut output = ScanOutput::default();

        while !cursor.is_at_end() {
            let consumed = self.rule.advance_past_boundary(cursor);
            match consumed.first {
                Some(kind) => {
                    output.boundaries.push(Boundary::new(
                        cursor.position(),
                        cursor.char_index(),
                        kind,
                    ));
                    if consumed.capped {
                        output.capped_runs += 1;
                    }
                }
                None => cursor.advance(),
            }
        }

        output
    }
}
