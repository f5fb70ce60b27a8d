//! Minimal [`Catalog`] backed by in-memory maps.
use std::collections::HashMap;

use async_trait::async_trait;
use loot_core::{ItemTemplate, RollableTable, TableGroup, TableId, TableSummary};

use crate::api::{Catalog, Result};

/// Catalog implementation with static collections and tables.
#[derive(Default)]
pub struct StaticCatalog {
    collections: HashMap<String, Vec<ItemTemplate>>,
    tables: HashMap<TableId, RollableTable>,
    /// Table ids in insertion order, for stable group listings.
    table_order: Vec<TableId>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or extend) a collection.
    pub fn add_collection(&mut self, collection: impl Into<String>, items: Vec<ItemTemplate>) {
        self.collections
            .entry(collection.into())
            .or_default()
            .extend(items);
    }

    /// Add a rollable table.
    pub fn add_table(&mut self, table: RollableTable) {
        self.table_order.push(table.id.clone());
        self.tables.insert(table.id.clone(), table);
    }
}

#[async_trait]
impl Catalog for StaticCatalog {
    async fn lookup(&self, collection: &str, entry: &str) -> Result<Option<ItemTemplate>> {
        Ok(self
            .collections
            .get(collection)
            .and_then(|items| items.iter().find(|item| item.id == entry))
            .cloned())
    }

    async fn table(&self, id: &TableId) -> Result<Option<RollableTable>> {
        Ok(self.tables.get(id).cloned())
    }

    async fn collection_contents(&self, collection: &str) -> Result<Vec<ItemTemplate>> {
        Ok(self.collections.get(collection).cloned().unwrap_or_default())
    }

    async fn tables_in_group(&self, group: TableGroup) -> Result<Vec<TableSummary>> {
        Ok(self
            .table_order
            .iter()
            .filter_map(|id| self.tables.get(id))
            .filter(|table| table.group == group)
            .map(TableSummary::from)
            .collect())
    }
}
