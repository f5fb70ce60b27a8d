//! Async orchestration for the loot engines.
//!
//! This crate wires the pure engines from `loot-core` to their external
//! collaborators: the item/table catalog, container persistence, user
//! notification, feature toggles, the identification hook, and per-actor
//! crafting selections. Consumers embed [`LootService`] to drive table
//! rolls and crafting sessions end to end.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the collaborator contracts and error surface
//! - [`oracle`] provides in-memory collaborator implementations
//! - [`service`] hosts the orchestrator
pub mod api;
pub mod oracle;
pub mod service;

pub use api::{
    Catalog, ContainerStore, FeatureToggles, IdentifyHook, Notifier, Result, RuntimeError,
    SelectionStore, Toggle,
};
pub use oracle::{
    MemoryContainerStore, MemorySelectionStore, RecordingIdentifyHook, RecordingNotifier,
    StaticCatalog, StaticToggles,
};
pub use service::{CraftingView, DrawReport, LootService, LootServiceBuilder, RollOptions};
