//! The loot service orchestrator and its builder.
mod craft;
mod roll;

pub use craft::CraftingView;
pub use roll::{DrawReport, RollOptions};

use std::sync::Arc;
use std::sync::atomic::AtomicU64;

use loot_core::{LootConfig, MaterialGradeRegistry, SplitMixRng};

use crate::api::{
    Catalog, ContainerStore, FeatureToggles, IdentifyHook, LogNotifier, Notifier,
    NullIdentifyHook, Result, RuntimeError, SelectionStore,
};
use crate::oracle::{MemorySelectionStore, StaticToggles};

/// Drives the roll-table and crafting flows against injected collaborators.
///
/// The service owns no ambient state: every external capability it touches
/// is a trait object supplied at build time, and all randomness derives
/// from the configured session seed plus an internal draw counter.
pub struct LootService {
    catalog: Arc<dyn Catalog>,
    store: Arc<dyn ContainerStore>,
    notifier: Arc<dyn Notifier>,
    toggles: Arc<dyn FeatureToggles>,
    identify: Arc<dyn IdentifyHook>,
    selections: Arc<dyn SelectionStore>,
    registry: Arc<MaterialGradeRegistry>,
    config: LootConfig,
    rng: SplitMixRng,
    /// Draw sequence number; each weighted draw consumes one.
    draw_nonce: AtomicU64,
}

impl std::fmt::Debug for LootService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LootService")
            .field("config", &self.config)
            .field("draw_nonce", &self.draw_nonce)
            .finish_non_exhaustive()
    }
}

impl LootService {
    pub fn builder() -> LootServiceBuilder {
        LootServiceBuilder::default()
    }

    pub fn config(&self) -> &LootConfig {
        &self.config
    }

    pub fn registry(&self) -> &MaterialGradeRegistry {
        &self.registry
    }
}

/// Builder for [`LootService`].
///
/// Catalog and container store are mandatory; the remaining collaborators
/// default to inert implementations and the registry defaults to the
/// built-in crafting content.
#[derive(Default)]
pub struct LootServiceBuilder {
    catalog: Option<Arc<dyn Catalog>>,
    store: Option<Arc<dyn ContainerStore>>,
    notifier: Option<Arc<dyn Notifier>>,
    toggles: Option<Arc<dyn FeatureToggles>>,
    identify: Option<Arc<dyn IdentifyHook>>,
    selections: Option<Arc<dyn SelectionStore>>,
    registry: Option<MaterialGradeRegistry>,
    config: Option<LootConfig>,
}

impl LootServiceBuilder {
    pub fn catalog(mut self, catalog: Arc<dyn Catalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn container_store(mut self, store: Arc<dyn ContainerStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn toggles(mut self, toggles: Arc<dyn FeatureToggles>) -> Self {
        self.toggles = Some(toggles);
        self
    }

    pub fn identify_hook(mut self, identify: Arc<dyn IdentifyHook>) -> Self {
        self.identify = Some(identify);
        self
    }

    pub fn selection_store(mut self, selections: Arc<dyn SelectionStore>) -> Self {
        self.selections = Some(selections);
        self
    }

    pub fn registry(mut self, registry: MaterialGradeRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn config(mut self, config: LootConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the service.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::MissingCollaborator`] when the catalog or the
    /// container store was not provided.
    pub fn build(self) -> Result<LootService> {
        let catalog = self
            .catalog
            .ok_or(RuntimeError::MissingCollaborator("catalog"))?;
        let store = self
            .store
            .ok_or(RuntimeError::MissingCollaborator("container store"))?;

        Ok(LootService {
            catalog,
            store,
            notifier: self.notifier.unwrap_or_else(|| Arc::new(LogNotifier)),
            toggles: self.toggles.unwrap_or_else(|| Arc::new(StaticToggles::new())),
            identify: self.identify.unwrap_or_else(|| Arc::new(NullIdentifyHook)),
            selections: self
                .selections
                .unwrap_or_else(|| Arc::new(MemorySelectionStore::new())),
            registry: Arc::new(self.registry.unwrap_or_else(loot_content::builtin_registry)),
            config: self.config.unwrap_or_default(),
            rng: SplitMixRng,
            draw_nonce: AtomicU64::new(0),
        })
    }
}
