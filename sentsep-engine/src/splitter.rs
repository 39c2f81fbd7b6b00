//! Sentence splitter and builder

use crate::{
    config::{get_preset, SeparatorConfig},
    error::Result,
    scanner::{Boundary, BoundaryScanner, ScanOutput},
};
use sentsep_core::{SeparatorRule, SourceCursor};
use std::path::PathBuf;

/// Splits text into sentences with a [`SeparatorRule`]
#[derive(Debug, Clone, Default)]
pub struct SentenceSplitter {
    rule: SeparatorRule,
}

impl SentenceSplitter {
    /// Splitter with the default separator set
    pub fn new() -> Self {
        Self::default()
    }

    /// Splitter described by a configuration
    pub fn from_config(config: &SeparatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rule: config.to_rule(),
        })
    }

    /// Splitter for an embedded preset
    pub fn with_preset(name: &str) -> Result<Self> {
        Self::from_config(get_preset(name)?)
    }

    /// Start building a splitter
    pub fn builder() -> SentenceSplitterBuilder {
        SentenceSplitterBuilder::new()
    }

    /// The underlying rule
    pub fn rule(&self) -> &SeparatorRule {
        &self.rule
    }

    /// Sentence boundaries in `text`
    pub fn boundaries(&self, text: &str) -> Vec<Boundary> {
        let mut cursor = SourceCursor::new(text);
        self.boundaries_with(&mut cursor).boundaries
    }

    /// Scan a caller-prepared cursor, e.g. one with suppressed ranges marked
    pub fn boundaries_with(&self, cursor: &mut SourceCursor<'_>) -> ScanOutput {
        let output = BoundaryScanner::new(&self.rule).scan(cursor);
        tracing::debug!(
            bytes = cursor.text().len(),
            boundaries = output.boundaries.len(),
            capped_runs = output.capped_runs,
            "scanned text"
        );
        output
    }

    /// Split `text` into sentence slices
    ///
    /// Each slice ends just after its separator run; text after the last
    /// boundary forms a final sentence. Concatenating the slices yields
    /// `text` again.
    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for boundary in self.boundaries(text) {
            sentences.push(&text[start..boundary.byte_offset]);
            start = boundary.byte_offset;
        }
        if start < text.len() {
            sentences.push(&text[start..]);
        }

        sentences
    }
}

/// Where the builder takes its base configuration from
#[derive(Debug, Clone)]
enum ConfigSource {
    Default,
    Preset(String),
    File(PathBuf),
    Inline(SeparatorConfig),
}

/// Builder for [`SentenceSplitter`]
///
/// Overrides are applied on top of the base configuration, whichever
/// source it comes from. Errors surface in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct SentenceSplitterBuilder {
    source: ConfigSource,
    separators: Option<Vec<char>>,
    max_steps: Option<usize>,
}

impl Default for SentenceSplitterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSplitterBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            source: ConfigSource::Default,
            separators: None,
            max_steps: None,
        }
    }

    /// Start from an embedded preset
    pub fn preset<S: Into<String>>(mut self, name: S) -> Self {
        self.source = ConfigSource::Preset(name.into());
        self
    }

    /// Start from a TOML configuration file
    pub fn config_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.source = ConfigSource::File(path.into());
        self
    }

    /// Start from an in-memory configuration
    pub fn config(mut self, config: SeparatorConfig) -> Self {
        self.source = ConfigSource::Inline(config);
        self
    }

    /// Replace the separator set
    pub fn separators<I: IntoIterator<Item = char>>(mut self, separators: I) -> Self {
        self.separators = Some(separators.into_iter().collect());
        self
    }

    /// Set the consumption cap
    pub fn max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Build the splitter
    pub fn build(self) -> Result<SentenceSplitter> {
        let mut config = match self.source {
            ConfigSource::Default => SeparatorConfig::default(),
            ConfigSource::Preset(name) => get_preset(&name)?.clone(),
            ConfigSource::File(path) => SeparatorConfig::from_path(path)?,
            ConfigSource::Inline(config) => config,
        };

        if let Some(separators) = self.separators {
            config.separators.chars = separators;
        }
        if let Some(max_steps) = self.max_steps {
            config.separators.max_steps = max_steps;
        }

        SentenceSplitter::from_config(&config)
    }
}
