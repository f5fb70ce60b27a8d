//! Collaborator contracts consumed by the loot service.
//!
//! The original host reached its content library, settings, and
//! notifications through ambient globals; here every collaborator is an
//! explicitly injected trait object so the service owns no process-wide
//! state. Catalog lookups and container writes are I/O-bound, so those two
//! contracts are async; the rest are cheap reads or fire-and-forget calls.
use async_trait::async_trait;

use loot_core::{
    ActorId, CraftingSelection, InstanceId, InventoryContainer, ItemTemplate, RollableTable,
    TableGroup, TableId, TableSummary,
};

use super::errors::{BoxError, Result};

/// Source of truth for item templates and rollable tables.
///
/// `Ok(None)` from a lookup is the normal "not found" outcome and must be
/// handled by every caller; `Err` means the backend itself failed and
/// propagates unchanged.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Resolve a (collection, entry) pair to an item template.
    async fn lookup(&self, collection: &str, entry: &str) -> Result<Option<ItemTemplate>>;

    /// Fetch a rollable table by id.
    async fn table(&self, id: &TableId) -> Result<Option<RollableTable>>;

    /// All templates of one collection, for presentation filtering.
    async fn collection_contents(&self, collection: &str) -> Result<Vec<ItemTemplate>>;

    /// Tables listed under one presentation group.
    async fn tables_in_group(&self, group: TableGroup) -> Result<Vec<TableSummary>>;
}

/// Commits container mutations. Durable once `write` returns.
#[async_trait]
pub trait ContainerStore: Send + Sync {
    async fn write(&self, container: &InventoryContainer) -> Result<()>;
}

/// User-facing, non-fatal notifications.
pub trait Notifier: Send + Sync {
    fn warn(&self, message: &str);
}

/// Feature flags gating optional behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Toggle {
    /// Obscure freshly rolled items when the roll carried the alternate
    /// modifier.
    QuickIdentify,
}

pub trait FeatureToggles: Send + Sync {
    fn is_enabled(&self, toggle: Toggle) -> bool;
}

/// External identification capability.
///
/// Failures of this hook are absorbed by the service, never propagated.
pub trait IdentifyHook: Send + Sync {
    fn mystify(
        &self,
        owner: ActorId,
        instance: InstanceId,
        replace: bool,
    ) -> std::result::Result<(), BoxError>;
}

/// Per-actor storage for the pending crafting configuration.
pub trait SelectionStore: Send + Sync {
    /// The actor's current selection; a fresh default when none is stored.
    fn selection(&self, actor: ActorId) -> CraftingSelection;

    fn store_selection(&self, actor: ActorId, selection: CraftingSelection);
}

/// Notifier that forwards warnings to the tracing subscriber.
///
/// Useful as a fallback when no presentation layer is attached.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// Identify hook that does nothing. The default when no identification
/// integration is installed.
pub struct NullIdentifyHook;

impl IdentifyHook for NullIdentifyHook {
    fn mystify(
        &self,
        _owner: ActorId,
        _instance: InstanceId,
        _replace: bool,
    ) -> std::result::Result<(), BoxError> {
        Ok(())
    }
}
