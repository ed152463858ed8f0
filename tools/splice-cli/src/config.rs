//! splice.toml configuration
//!
//! ```toml
//! [codec]
//! body_length = "u8"      # or "u64be" (default)
//! name_length = "u32be"   # or "u8"
//! steps = "tolerant"      # or "strict" (default)
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use splice_drum::CodecOptions;
use std::path::Path;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "splice.toml";

/// splice.toml structure
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpliceConfig {
    #[serde(default)]
    pub codec: CodecOptions,
}

/// Load the config file given on the command line, or `splice.toml` if it
/// exists, or the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<SpliceConfig> {
    match explicit {
        Some(path) => read_config(path),
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                read_config(path)
            } else {
                Ok(SpliceConfig::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<SpliceConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: SpliceConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    tracing::debug!("Loaded config from {}: {:?}", path.display(), config.codec);
    Ok(config)
}
