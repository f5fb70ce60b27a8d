/// Tunable parameters for the loot engines.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootConfig {
    /// Base seed for all random draws in one session. Two services built with
    /// the same seed produce identical draw sequences.
    pub session_seed: u64,
    /// Number of draws performed when a roll request does not specify one.
    pub draw_count: u32,
    /// Catalog collection holding base equipment (weapons and armors).
    pub equipment_collection: String,
}

impl LootConfig {
    // ===== fixed rules =====
    /// Sides of the die applied to each resolved item's monetary value.
    pub const VALUE_DIE_SIDES: u32 = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DRAW_COUNT: u32 = 1;
    pub const DEFAULT_EQUIPMENT_COLLECTION: &'static str = "equipment-srd";

    pub fn new(session_seed: u64) -> Self {
        Self {
            session_seed,
            draw_count: Self::DEFAULT_DRAW_COUNT,
            equipment_collection: Self::DEFAULT_EQUIPMENT_COLLECTION.to_string(),
        }
    }

    pub fn with_draw_count(mut self, draw_count: u32) -> Self {
        self.draw_count = draw_count;
        self
    }
}

impl Default for LootConfig {
    fn default() -> Self {
        Self::new(0)
    }
}
