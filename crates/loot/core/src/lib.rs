//! Deterministic loot-rolling and crafting-valuation logic.
//!
//! `loot-core` defines the catalog data model (item templates, weighted
//! rollable tables), the crafting modifier registry (materials, grades,
//! runes), and the pure engines that operate on them: weighted table
//! sampling, price/level composition, value randomization, and inventory
//! merging. Everything here is collaborator-free and seed-deterministic;
//! I/O and orchestration live in the `runtime` crate.
pub mod catalog;
pub mod config;
pub mod craft;
pub mod inventory;
pub mod rng;

pub use catalog::{
    ItemCategory, ItemChoice, ItemTemplate, RollableTable, TableEntry, TableGroup, TableId,
    TableSummary, TemplateRef,
};
pub use config::LootConfig;
pub use craft::{
    CraftedValues, CraftingPriceCalculator, CraftingSelection, CreateMode, GradeStats,
    GradeTier, Material, MaterialGradeRegistry, ModifierChoice, Rune, RuneKind,
};
pub use inventory::{
    ActorId, InstanceId, InventoryContainer, ItemInstance, MergeDelta, value_multiplier,
};
pub use rng::{CONTEXT_TABLE_PICK, CONTEXT_VALUE_ROLL, RngOracle, SplitMixRng, compute_seed};
