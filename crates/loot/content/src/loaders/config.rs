//! Loot configuration loader.

use std::path::Path;

use loot_core::LootConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for loot configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<LootConfig> {
        let content = read_file(path)?;
        let config: LootConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
