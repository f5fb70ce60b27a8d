//! Content factory for loading a complete data directory.

use std::path::{Path, PathBuf};

use loot_core::{LootConfig, MaterialGradeRegistry, RollableTable};

use crate::builtin::builtin_registry;
use crate::loaders::{ConfigLoader, ItemCatalog, ItemLoader, LoadResult, TableLoader};

/// Content factory that loads all loot data from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── tables.ron
/// └── collections/
///     ├── equipment-srd.ron
///     └── gems.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load loot configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<LootConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load rollable tables from `tables.ron`.
    pub fn load_tables(&self) -> LoadResult<Vec<RollableTable>> {
        let path = self.data_dir.join("tables.ron");
        TableLoader::load(&path)
    }

    /// Load one item collection from `collections/{name}.ron`.
    pub fn load_collection(&self, name: &str) -> LoadResult<ItemCatalog> {
        let path = self
            .data_dir
            .join("collections")
            .join(format!("{}.ron", name));
        ItemLoader::load(&path)
    }

    /// The crafting modifier registry.
    ///
    /// Registry data currently ships built in; a data-driven registry would
    /// load from this directory instead.
    pub fn registry(&self) -> MaterialGradeRegistry {
        builtin_registry()
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
