use std::sync::Arc;

use async_trait::async_trait;
use loot_core::{
    ActorId, InventoryContainer, ItemCategory, ItemTemplate, LootConfig, RollableTable,
    TableEntry, TableGroup, TableId, TableSummary, TemplateRef,
};
use runtime::{
    Catalog, LootService, MemoryContainerStore, RecordingIdentifyHook, RecordingNotifier,
    Result, RollOptions, RuntimeError, StaticCatalog, StaticToggles, Toggle,
};

fn gem(id: &str, value: u64) -> ItemTemplate {
    ItemTemplate::new(id, id.to_uppercase(), value, ItemCategory::Treasure, 0, None)
}

fn table(id: &str, entries: &[&str]) -> RollableTable {
    RollableTable::new(
        TableId::new(id),
        id,
        TableGroup::Treasure,
        entries
            .iter()
            .map(|entry| TableEntry::new(1, TemplateRef::new("gems", *entry)))
            .collect(),
    )
}

fn full_catalog() -> StaticCatalog {
    let mut catalog = StaticCatalog::new();
    catalog.add_collection("gems", vec![gem("agate", 10), gem("quartz", 25), gem("obsidian", 40)]);
    catalog.add_table(table("stones", &["agate", "quartz", "obsidian"]));
    catalog.add_table(table("haunted", &["banshee-tears"]));
    catalog
}

struct Fixture {
    service: LootService,
    store: Arc<MemoryContainerStore>,
    notifier: Arc<RecordingNotifier>,
    hook: Arc<RecordingIdentifyHook>,
}

fn fixture(toggles: StaticToggles, hook: RecordingIdentifyHook) -> Fixture {
    let store = Arc::new(MemoryContainerStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let hook = Arc::new(hook);
    let service = LootService::builder()
        .catalog(Arc::new(full_catalog()))
        .container_store(store.clone())
        .notifier(notifier.clone())
        .toggles(Arc::new(toggles))
        .identify_hook(hook.clone())
        .config(LootConfig::new(42))
        .build()
        .unwrap();
    Fixture {
        service,
        store,
        notifier,
        hook,
    }
}

#[tokio::test]
async fn draws_resolve_and_merge_when_everything_exists() {
    let fx = fixture(StaticToggles::new(), RecordingIdentifyHook::new());
    let mut container = InventoryContainer::new(ActorId(7));

    let report = fx
        .service
        .roll_table(&mut container, &TableId::new("stones"), RollOptions::draws(3))
        .await
        .unwrap();

    assert_eq!(report.requested, 3);
    assert_eq!(report.resolved, 3);
    assert_eq!(report.items.len(), 3);
    assert_eq!(container.len(), 3);
    assert!(fx.notifier.warnings().is_empty());

    // the merged state was persisted
    let written = fx.store.written(ActorId(7)).unwrap();
    assert_eq!(written.len(), 3);
}

#[tokio::test]
async fn missing_entries_are_skipped_with_one_warning() {
    let fx = fixture(StaticToggles::new(), RecordingIdentifyHook::new());
    let mut container = InventoryContainer::new(ActorId(7));

    // every draw on this table references an entry absent from the catalog
    let report = fx
        .service
        .roll_table(&mut container, &TableId::new("haunted"), RollOptions::draws(3))
        .await
        .unwrap();

    assert_eq!(report.requested, 3);
    assert_eq!(report.resolved, 0);
    assert!(report.items.is_empty());
    assert!(container.is_empty());
    assert_eq!(fx.notifier.warnings().len(), 1);
}

#[tokio::test]
async fn each_partial_draw_warns_once() {
    let fx = fixture(StaticToggles::new(), RecordingIdentifyHook::new());
    let mut container = InventoryContainer::new(ActorId(7));

    for _ in 0..2 {
        fx.service
            .roll_table(&mut container, &TableId::new("haunted"), RollOptions::draws(2))
            .await
            .unwrap();
    }
    assert_eq!(fx.notifier.warnings().len(), 2);
}

#[tokio::test]
async fn resolved_count_never_exceeds_requested() {
    let fx = fixture(StaticToggles::new(), RecordingIdentifyHook::new());
    let mut container = InventoryContainer::new(ActorId(7));

    for count in [0u32, 1, 4, 9] {
        let report = fx
            .service
            .roll_table(&mut container, &TableId::new("stones"), RollOptions::draws(count))
            .await
            .unwrap();
        assert!(report.resolved <= report.requested);
        assert_eq!(report.items.len() as u32, report.resolved);
    }
    // every entry of "stones" resolves, so no draw fell short
    assert!(fx.notifier.warnings().is_empty());
}

#[tokio::test]
async fn rolled_values_are_base_times_d4() {
    let mut container = InventoryContainer::new(ActorId(7));

    let mut catalog = StaticCatalog::new();
    catalog.add_collection("gems", vec![gem("agate", 10)]);
    catalog.add_table(table("agates", &["agate"]));
    let store = Arc::new(MemoryContainerStore::new());
    let service = LootService::builder()
        .catalog(Arc::new(catalog))
        .container_store(store)
        .config(LootConfig::new(9))
        .build()
        .unwrap();

    let report = service
        .roll_table(&mut container, &TableId::new("agates"), RollOptions::draws(12))
        .await
        .unwrap();
    assert_eq!(report.resolved, 12);
    for instance in &report.items {
        assert!(
            matches!(instance.value, 10 | 20 | 30 | 40),
            "unexpected value {}",
            instance.value
        );
    }
}

#[tokio::test]
async fn identical_sessions_draw_identically() {
    let mut first_items = Vec::new();
    let mut second_items = Vec::new();
    for items in [&mut first_items, &mut second_items] {
        let fx = fixture(StaticToggles::new(), RecordingIdentifyHook::new());
        let mut container = InventoryContainer::new(ActorId(7));
        let report = fx
            .service
            .roll_table(&mut container, &TableId::new("stones"), RollOptions::draws(8))
            .await
            .unwrap();
        *items = report
            .items
            .iter()
            .map(|instance| (instance.template.clone(), instance.value))
            .collect::<Vec<_>>();
    }
    assert_eq!(first_items, second_items);
}

#[tokio::test]
async fn unknown_table_is_an_error() {
    let fx = fixture(StaticToggles::new(), RecordingIdentifyHook::new());
    let mut container = InventoryContainer::new(ActorId(7));

    let error = fx
        .service
        .roll_table(&mut container, &TableId::new("nope"), RollOptions::draws(1))
        .await
        .unwrap_err();
    assert!(matches!(error, RuntimeError::TableNotFound(_)));
}

/// Catalog whose lookups always fail, simulating an unreachable backend.
struct FailingCatalog;

#[async_trait]
impl Catalog for FailingCatalog {
    async fn lookup(&self, _collection: &str, _entry: &str) -> Result<Option<ItemTemplate>> {
        Err(RuntimeError::Catalog("compendium unreachable".into()))
    }

    async fn table(&self, id: &TableId) -> Result<Option<RollableTable>> {
        Ok(Some(table("stones", &["agate"])).filter(|t| t.id == *id))
    }

    async fn collection_contents(&self, _collection: &str) -> Result<Vec<ItemTemplate>> {
        Err(RuntimeError::Catalog("compendium unreachable".into()))
    }

    async fn tables_in_group(&self, _group: TableGroup) -> Result<Vec<TableSummary>> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn catalog_failures_propagate() {
    let service = LootService::builder()
        .catalog(Arc::new(FailingCatalog))
        .container_store(Arc::new(MemoryContainerStore::new()))
        .config(LootConfig::new(1))
        .build()
        .unwrap();
    let mut container = InventoryContainer::new(ActorId(7));

    let error = service
        .roll_table(&mut container, &TableId::new("stones"), RollOptions::draws(2))
        .await
        .unwrap_err();
    assert!(matches!(error, RuntimeError::Catalog(_)));
}

#[tokio::test]
async fn clear_then_merge_starts_fresh() {
    let fx = fixture(StaticToggles::new(), RecordingIdentifyHook::new());
    let mut container = InventoryContainer::new(ActorId(7));

    fx.service
        .roll_table(&mut container, &TableId::new("stones"), RollOptions::draws(5))
        .await
        .unwrap();
    assert_eq!(container.len(), 5);

    fx.service.clear_inventory(&mut container).await.unwrap();
    assert!(container.is_empty());
    assert!(fx.store.written(ActorId(7)).unwrap().is_empty());

    let report = fx
        .service
        .roll_table(&mut container, &TableId::new("stones"), RollOptions::draws(2))
        .await
        .unwrap();
    assert_eq!(report.items.len(), 2);
    assert_eq!(container.len(), 2);
}

#[tokio::test]
async fn identify_hook_runs_for_each_new_item_when_armed() {
    let fx = fixture(
        StaticToggles::new().with_enabled(Toggle::QuickIdentify),
        RecordingIdentifyHook::new(),
    );
    let mut container = InventoryContainer::new(ActorId(7));

    let report = fx
        .service
        .roll_table(
            &mut container,
            &TableId::new("stones"),
            RollOptions::draws(3).with_identify_modifier(),
        )
        .await
        .unwrap();

    let calls = fx.hook.calls();
    assert_eq!(calls.len(), report.items.len());
    for (owner, instance, replace) in calls {
        assert_eq!(owner, ActorId(7));
        assert!(report.items.iter().any(|item| item.id == instance));
        assert!(replace);
    }
}

#[tokio::test]
async fn identify_hook_needs_both_toggle_and_modifier() {
    // toggle on, modifier absent
    let fx = fixture(
        StaticToggles::new().with_enabled(Toggle::QuickIdentify),
        RecordingIdentifyHook::new(),
    );
    let mut container = InventoryContainer::new(ActorId(7));
    fx.service
        .roll_table(&mut container, &TableId::new("stones"), RollOptions::draws(3))
        .await
        .unwrap();
    assert!(fx.hook.calls().is_empty());

    // modifier held, toggle off
    let fx = fixture(StaticToggles::new(), RecordingIdentifyHook::new());
    let mut container = InventoryContainer::new(ActorId(7));
    fx.service
        .roll_table(
            &mut container,
            &TableId::new("stones"),
            RollOptions::draws(3).with_identify_modifier(),
        )
        .await
        .unwrap();
    assert!(fx.hook.calls().is_empty());
}

#[tokio::test]
async fn identify_hook_failures_do_not_fail_the_roll() {
    let fx = fixture(
        StaticToggles::new().with_enabled(Toggle::QuickIdentify),
        RecordingIdentifyHook::failing(),
    );
    let mut container = InventoryContainer::new(ActorId(7));

    let report = fx
        .service
        .roll_table(
            &mut container,
            &TableId::new("stones"),
            RollOptions::draws(3).with_identify_modifier(),
        )
        .await
        .unwrap();
    assert_eq!(report.resolved, 3);
    assert_eq!(container.len(), 3);
    assert_eq!(fx.hook.calls().len(), 3);
}

#[test]
fn builder_requires_catalog_and_store() {
    let error = LootService::builder().build().unwrap_err();
    assert!(matches!(error, RuntimeError::MissingCollaborator(_)));
}
