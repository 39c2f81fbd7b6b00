//! Configuration, scanning and splitting for the sentsep separator rule
//!
//! This crate loads separator configurations (embedded presets or TOML
//! files), drives a [`SourceCursor`] with the core rule and records the
//! resulting sentence boundaries.
//!
//! ```rust
//! use sentsep_engine::SentenceSplitter;
//!
//! let splitter = SentenceSplitter::with_preset("default").unwrap();
//! let sentences = splitter.split("It costs 3.50 today. Buy it?! \"Sure.\" Done");
//! assert_eq!(
//!     sentences,
//!     vec!["It costs 3.50 today.", " Buy it?!", " \"Sure.\"", " Done"]
//! );
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod scanner;
pub mod splitter;

// Re-export key types
pub use config::{get_preset, list_presets, SeparatorConfig};
pub use error::{EngineError, Result};
pub use scanner::{Boundary, BoundaryScanner, ScanOutput};
pub use splitter::{SentenceSplitter, SentenceSplitterBuilder};

// Re-export from core for convenience
pub use sentsep_core::{BoundaryCursor, BoundaryMatch, SeparatorRule, SourceCursor};
