//! The roll-table flow: sample, resolve, randomize, merge, notify.

use std::sync::Arc;
use std::sync::atomic::Ordering;

use loot_core::{
    CONTEXT_VALUE_ROLL, InventoryContainer, ItemInstance, ItemTemplate, TableId, TemplateRef,
    compute_seed,
};
use tokio::task::JoinSet;

use crate::api::{Result, RuntimeError, Toggle};

use super::LootService;

/// Options for one roll-table action.
#[derive(Clone, Copy, Debug, Default)]
pub struct RollOptions {
    /// Number of draws; the configured default when absent.
    pub count: Option<u32>,
    /// True when the invoking event carried the alternate-action key.
    pub identify_modifier: bool,
}

impl RollOptions {
    pub fn draws(count: u32) -> Self {
        Self {
            count: Some(count),
            identify_modifier: false,
        }
    }

    #[must_use]
    pub fn with_identify_modifier(mut self) -> Self {
        self.identify_modifier = true;
        self
    }
}

/// Outcome of one roll-table action.
#[derive(Clone, Debug)]
pub struct DrawReport {
    pub requested: u32,
    /// Number of draws that resolved to a catalog template. Always
    /// `<= requested`; a shortfall has already been surfaced as a warning.
    pub resolved: u32,
    /// The instances merged into the container, in draw order.
    pub items: Vec<ItemInstance>,
}

impl LootService {
    /// Draws from a rollable table and merges the results into `container`.
    ///
    /// Draws the table could not resolve are skipped and surfaced as one
    /// non-fatal warning; only catalog or store failures abort the flow.
    pub async fn roll_table(
        &self,
        container: &mut InventoryContainer,
        table_id: &TableId,
        options: RollOptions,
    ) -> Result<DrawReport> {
        let requested = options.count.unwrap_or(self.config.draw_count);

        let table = self
            .catalog
            .table(table_id)
            .await?
            .ok_or_else(|| RuntimeError::TableNotFound(table_id.clone()))?;

        tracing::debug!("rolling {} draws on table '{}'", requested, table.id);

        let base_nonce = self
            .draw_nonce
            .fetch_add(u64::from(requested), Ordering::Relaxed);
        let picks: Vec<_> = table
            .draw_entries(requested, &self.rng, self.config.session_seed, base_nonce)
            .into_iter()
            .map(|entry| entry.target.clone())
            .collect();

        let slots = self.resolve_draws(&picks).await?;

        let resolved = slots.iter().filter(|slot| slot.is_some()).count() as u32;
        if resolved < requested {
            self.notifier.warn(
                "Found one or more items in the rollable table that do not exist in the catalog, skipping these.",
            );
        }

        let mut instances = Vec::with_capacity(resolved as usize);
        for (index, slot) in slots.iter().enumerate() {
            let Some(template) = slot else { continue };
            let seed = compute_seed(
                self.config.session_seed,
                base_nonce + index as u64,
                CONTEXT_VALUE_ROLL,
            );
            let id = container.allocate_instance_id();
            instances.push(ItemInstance::rolled(id, template, &self.rng, seed));
        }

        let delta = container.merge(instances);
        self.store.write(container).await?;

        if options.identify_modifier && self.toggles.is_enabled(Toggle::QuickIdentify) {
            for instance in &delta.added {
                if let Err(error) = self.identify.mystify(container.owner, instance.id, true) {
                    tracing::warn!("identify hook failed for {}: {}", instance.id, error);
                }
            }
        }

        Ok(DrawReport {
            requested,
            resolved,
            items: delta.added,
        })
    }

    /// Resolves each drawn reference against the catalog, one lookup per
    /// draw.
    ///
    /// Resolutions fan out concurrently and never observe each other's
    /// outcome; the indexed join restores draw order. A missing entry leaves
    /// its slot `None` and is not an error, only a failing catalog backend
    /// aborts.
    async fn resolve_draws(&self, picks: &[TemplateRef]) -> Result<Vec<Option<ItemTemplate>>> {
        let mut resolutions: JoinSet<(usize, Result<Option<ItemTemplate>>)> = JoinSet::new();
        for (index, target) in picks.iter().cloned().enumerate() {
            let catalog = Arc::clone(&self.catalog);
            resolutions.spawn(async move {
                let outcome = catalog.lookup(&target.collection, &target.entry).await;
                (index, outcome)
            });
        }

        let mut slots: Vec<Option<ItemTemplate>> = vec![None; picks.len()];
        while let Some(joined) = resolutions.join_next().await {
            let (index, outcome) = joined.map_err(RuntimeError::ResolveJoin)?;
            slots[index] = outcome?;
        }
        Ok(slots)
    }

    /// Empties `container` and persists the cleared state.
    pub async fn clear_inventory(&self, container: &mut InventoryContainer) -> Result<()> {
        container.clear();
        self.store.write(container).await
    }
}
