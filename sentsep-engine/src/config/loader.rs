use super::types::SeparatorConfig;
use crate::error::{EngineError, Result};
use std::collections::HashMap;
use std::sync::OnceLock;

static PRESETS: OnceLock<HashMap<&'static str, SeparatorConfig>> = OnceLock::new();

macro_rules! embed_preset {
    ($name:expr, $path:expr) => {
        ($name, include_str!($path))
    };
}

fn load_embedded_presets() -> HashMap<&'static str, SeparatorConfig> {
    let mut presets = HashMap::new();

    let embedded = [
        embed_preset!("default", "../../configs/presets/default.toml"),
        embed_preset!("ascii", "../../configs/presets/ascii.toml"),
    ];

    for (name, toml_content) in embedded {
        match parse_preset(name, toml_content) {
            Ok(config) => {
                presets.insert(name, config);
            }
            Err(e) => {
                tracing::warn!(preset = name, error = %e, "failed to load embedded preset");
            }
        }
    }

    presets
}

fn parse_preset(name: &str, toml_content: &str) -> Result<SeparatorConfig> {
    let config = SeparatorConfig::from_toml_str(toml_content)?;

    // The preset's own name must match the name it is registered under
    if config.metadata.name != name {
        return Err(EngineError::ConfigError(format!(
            "preset name mismatch: expected {}, got {}",
            name, config.metadata.name
        )));
    }

    Ok(config)
}

/// Look up an embedded preset by name
pub fn get_preset(name: &str) -> Result<&'static SeparatorConfig> {
    PRESETS
        .get_or_init(load_embedded_presets)
        .get(name)
        .ok_or_else(|| EngineError::UnknownPreset {
            name: name.to_string(),
        })
}

/// Names of all embedded presets, sorted
pub fn list_presets() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = PRESETS
        .get_or_init(load_embedded_presets)
        .keys()
        .copied()
        .collect();
    names.sort_unstable();
    names
}
