//! Item catalog loader.

use std::path::Path;

use loot_core::ItemTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One catalog collection as stored in a RON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    /// Collection id the templates are looked up under.
    pub collection: String,
    pub items: Vec<ItemTemplate>,
}

/// Loader for item collections from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load an item collection from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing an ItemCatalog
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        let catalog: ItemCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(catalog)
    }
}
