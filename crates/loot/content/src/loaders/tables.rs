//! Rollable table loader.

use std::path::Path;

use loot_core::RollableTable;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Table catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCatalog {
    pub tables: Vec<RollableTable>,
}

/// Loader for rollable tables from RON files.
pub struct TableLoader;

impl TableLoader {
    /// Load rollable tables from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<RollableTable>> {
        let content = read_file(path)?;
        let catalog: TableCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse table catalog RON: {}", e))?;

        Ok(catalog.tables)
    }
}
