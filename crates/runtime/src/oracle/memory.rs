//! In-memory container store, selection store, and recording collaborators.
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use loot_core::{ActorId, CraftingSelection, InstanceId, InventoryContainer};

use crate::api::{
    BoxError, ContainerStore, FeatureToggles, IdentifyHook, Notifier, Result, SelectionStore,
    Toggle,
};

/// Container store that keeps the last written state per actor.
#[derive(Default)]
pub struct MemoryContainerStore {
    written: Mutex<HashMap<ActorId, InventoryContainer>>,
}

impl MemoryContainerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently written container for `actor`, if any.
    pub fn written(&self, actor: ActorId) -> Option<InventoryContainer> {
        self.written.lock().unwrap().get(&actor).cloned()
    }
}

#[async_trait]
impl ContainerStore for MemoryContainerStore {
    async fn write(&self, container: &InventoryContainer) -> Result<()> {
        self.written
            .lock()
            .unwrap()
            .insert(container.owner, container.clone());
        Ok(())
    }
}

/// Notifier that records every warning it receives.
#[derive(Default)]
pub struct RecordingNotifier {
    warnings: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
}

/// Feature toggles fixed at construction time.
#[derive(Default)]
pub struct StaticToggles {
    enabled: HashSet<Toggle>,
}

impl StaticToggles {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_enabled(mut self, toggle: Toggle) -> Self {
        self.enabled.insert(toggle);
        self
    }
}

impl FeatureToggles for StaticToggles {
    fn is_enabled(&self, toggle: Toggle) -> bool {
        self.enabled.contains(&toggle)
    }
}

/// Identify hook that records calls and optionally fails them all.
#[derive(Default)]
pub struct RecordingIdentifyHook {
    calls: Mutex<Vec<(ActorId, InstanceId, bool)>>,
    fail: bool,
}

impl RecordingIdentifyHook {
    pub fn new() -> Self {
        Self::default()
    }

    /// A hook whose every invocation fails, for absorption tests.
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<(ActorId, InstanceId, bool)> {
        self.calls.lock().unwrap().clone()
    }
}

impl IdentifyHook for RecordingIdentifyHook {
    fn mystify(
        &self,
        owner: ActorId,
        instance: InstanceId,
        replace: bool,
    ) -> std::result::Result<(), BoxError> {
        self.calls.lock().unwrap().push((owner, instance, replace));
        if self.fail {
            return Err("identification backend unavailable".into());
        }
        Ok(())
    }
}

/// Selection store backed by a map.
#[derive(Default)]
pub struct MemorySelectionStore {
    selections: Mutex<HashMap<ActorId, CraftingSelection>>,
}

impl MemorySelectionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionStore for MemorySelectionStore {
    fn selection(&self, actor: ActorId) -> CraftingSelection {
        self.selections
            .lock()
            .unwrap()
            .get(&actor)
            .cloned()
            .unwrap_or_default()
    }

    fn store_selection(&self, actor: ActorId, selection: CraftingSelection) {
        self.selections.lock().unwrap().insert(actor, selection);
    }
}
