//! Crafting modifier catalog and valuation.
//!
//! Materials, grades, and runes compose into a single price and minimum
//! level for a crafted item. Grade keys are only meaningful for materials
//! that declare them; every lookup goes through the registry's fallback so
//! an incompatible selection silently degrades to the material's default
//! grade instead of failing.
mod materials;
mod price;
mod runes;
mod selection;

pub use materials::{
    GradeStats, GradeTier, Material, MaterialGradeRegistry, ModifierChoice,
};
pub use price::{CraftedValues, CraftingPriceCalculator};
pub use runes::{Rune, RuneKind};
pub use selection::{CraftingSelection, CreateMode};
