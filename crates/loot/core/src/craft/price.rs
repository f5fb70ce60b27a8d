//! Price and level composition for a crafting selection.

use super::materials::MaterialGradeRegistry;
use super::selection::CraftingSelection;

/// Derived economic attributes of a crafted item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CraftedValues {
    /// Total price in coins.
    pub price: u64,
    /// Minimum level required to craft or use the item.
    pub level: u8,
}

impl CraftedValues {
    pub const ZERO: Self = Self { price: 0, level: 0 };
}

/// Composes a crafting selection into a single price and level.
///
/// Price is additive (material base + grade contribution + runes); level is
/// max-based because it represents a prerequisite floor, not a cumulative
/// cost. Every coefficient comes from the registry, none live in this code.
///
/// This calculator has no failure conditions: an incompatible grade resolves
/// through the registry's default-grade fallback, unknown rune keys
/// contribute nothing, and a missing material yields [`CraftedValues::ZERO`].
#[derive(Clone, Copy, Debug)]
pub struct CraftingPriceCalculator<'a> {
    registry: &'a MaterialGradeRegistry,
}

impl<'a> CraftingPriceCalculator<'a> {
    pub fn new(registry: &'a MaterialGradeRegistry) -> Self {
        Self { registry }
    }

    /// Computes price and level for `selection` on a base item of
    /// `base_item_level` (None for no base item or a level-less one).
    pub fn compute(
        &self,
        selection: &CraftingSelection,
        base_item_level: Option<u8>,
    ) -> CraftedValues {
        let Some(material) = selection
            .material
            .as_deref()
            .and_then(|key| self.registry.material(key))
        else {
            // No crafting modification applied.
            return CraftedValues::ZERO;
        };

        let grade_key = selection.grade.as_deref().unwrap_or("");
        let stats = self.registry.grade_stats(&material.key, grade_key);

        let mut price = material.base_price;
        let mut level = base_item_level.unwrap_or(0);

        if let Some(stats) = stats {
            price = price.saturating_add(stats.price);
            level = level.max(stats.level);
        }

        for rune_key in selection.rune_keys() {
            if let Some(rune) = self.registry.rune(rune_key) {
                price = price.saturating_add(rune.price);
                level = level.max(rune.level);
            }
        }

        CraftedValues { price, level }
    }
}
