//! Separator configuration: TOML schema, files and embedded presets

mod loader;
mod types;

pub use loader::{get_preset, list_presets};
pub use types::{Metadata, SeparatorConfig, Separators};
