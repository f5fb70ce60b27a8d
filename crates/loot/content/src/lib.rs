//! Static crafting content and data-file loaders.
//!
//! This crate houses the built-in crafting modifier catalog (materials,
//! grade tiers, runes) and provides loaders for RON/TOML data files:
//! - Item catalogs (data-driven via RON)
//! - Rollable tables (data-driven via RON)
//! - Loot configuration (data-driven via TOML)
//!
//! Content is consumed by runtime collaborators and never appears in
//! container state.
pub mod builtin;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use builtin::{builtin_grade_tiers, builtin_materials, builtin_registry, builtin_runes};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemCatalog, ItemLoader, TableCatalog, TableLoader};
