//! Catalog-owned data: item templates and weighted rollable tables.
//!
//! Everything in this module is immutable reference data. The catalog
//! collaborator owns the authoritative copies; the engines only read them.

use std::fmt;

use crate::rng::{CONTEXT_TABLE_PICK, RngOracle, compute_seed};

/// Reference to an entry inside a named catalog collection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateRef {
    pub collection: String,
    pub entry: String,
}

impl TemplateRef {
    pub fn new(collection: impl Into<String>, entry: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            entry: entry.into(),
        }
    }
}

impl fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.entry)
    }
}

/// Broad item classification used by presentation filters.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemCategory {
    Weapon,
    Armor,
    Consumable,
    Treasure,
    Other,
}

/// Immutable description of one catalog item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTemplate {
    pub id: String,
    pub name: String,
    /// Monetary value in coins before any multiplier is applied.
    pub base_value: u64,
    pub category: ItemCategory,
    /// Minimum level required to use the item; 0 for mundane gear.
    pub level: u8,
    /// Subgroup tag, e.g. a weapon group. Absent for ungrouped items.
    pub group: Option<String>,
}

impl ItemTemplate {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        base_value: u64,
        category: ItemCategory,
        level: u8,
        group: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base_value,
            category,
            level,
            group,
        }
    }
}

/// Presentation row pairing an item id with its display label.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemChoice {
    pub id: String,
    pub label: String,
}

impl From<&ItemTemplate> for ItemChoice {
    fn from(template: &ItemTemplate) -> Self {
        Self {
            id: template.id.clone(),
            label: template.name.clone(),
        }
    }
}

/// Unique identifier of a rollable table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableId(pub String);

impl TableId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Presentation group a table is listed under.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TableGroup {
    /// Mundane treasure (coins, gems, art objects).
    Treasure,
    /// Permanent magic items.
    Permanent,
    /// Consumable magic items.
    Consumable,
}

/// One weighted slot in a rollable table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableEntry {
    /// Relative draw weight. Entries with weight 0 are never drawn.
    pub weight: u32,
    pub target: TemplateRef,
}

impl TableEntry {
    pub fn new(weight: u32, target: TemplateRef) -> Self {
        Self { weight, target }
    }
}

/// Ordered, weighted list of catalog references.
///
/// Draws sample entries with replacement: each draw is an independent trial
/// over the table's weight distribution, so the same entry can be drawn more
/// than once in a batch.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollableTable {
    pub id: TableId,
    pub name: String,
    pub group: TableGroup,
    entries: Vec<TableEntry>,
}

impl RollableTable {
    pub fn new(
        id: TableId,
        name: impl Into<String>,
        group: TableGroup,
        entries: Vec<TableEntry>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            group,
            entries,
        }
    }

    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    /// Sum of all entry weights. A table with total weight 0 never resolves
    /// a draw.
    pub fn total_weight(&self) -> u32 {
        self.entries.iter().map(|entry| entry.weight).sum()
    }

    /// Maps a roll in `[0, total_weight)` onto an entry by cumulative walk.
    pub fn pick(&self, roll: u32) -> Option<&TableEntry> {
        let mut accumulated = 0u32;
        for entry in &self.entries {
            accumulated += entry.weight;
            if roll < accumulated {
                return Some(entry);
            }
        }
        None
    }

    /// Performs `count` independent weighted draws.
    ///
    /// Each draw derives its own seed from `(session_seed, base_nonce + k)`,
    /// so results are deterministic for a fixed seed and independent of each
    /// other. Returned entries preserve draw order.
    pub fn draw_entries(
        &self,
        count: u32,
        rng: &(impl RngOracle + ?Sized),
        session_seed: u64,
        base_nonce: u64,
    ) -> Vec<&TableEntry> {
        let total = self.total_weight();
        if total == 0 {
            return Vec::new();
        }
        (0..count)
            .filter_map(|k| {
                let seed = compute_seed(session_seed, base_nonce + u64::from(k), CONTEXT_TABLE_PICK);
                self.pick(rng.roll_below(seed, total))
            })
            .collect()
    }
}

/// Presentation row for table listings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableSummary {
    pub id: TableId,
    pub name: String,
}

impl From<&RollableTable> for TableSummary {
    fn from(table: &RollableTable) -> Self {
        Self {
            id: table.id.clone(),
            name: table.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SplitMixRng;

    fn sample_table() -> RollableTable {
        RollableTable::new(
            TableId::new("semiprecious-stones"),
            "Semiprecious Stones",
            TableGroup::Treasure,
            vec![
                TableEntry::new(3, TemplateRef::new("gems", "agate")),
                TableEntry::new(1, TemplateRef::new("gems", "obsidian")),
                TableEntry::new(2, TemplateRef::new("gems", "quartz")),
            ],
        )
    }

    #[test]
    fn pick_walks_cumulative_weights() {
        let table = sample_table();
        assert_eq!(table.total_weight(), 6);
        assert_eq!(table.pick(0).unwrap().target.entry, "agate");
        assert_eq!(table.pick(2).unwrap().target.entry, "agate");
        assert_eq!(table.pick(3).unwrap().target.entry, "obsidian");
        assert_eq!(table.pick(4).unwrap().target.entry, "quartz");
        assert_eq!(table.pick(5).unwrap().target.entry, "quartz");
        assert!(table.pick(6).is_none());
    }

    #[test]
    fn zero_weight_entries_are_never_drawn() {
        let table = RollableTable::new(
            TableId::new("t"),
            "t",
            TableGroup::Treasure,
            vec![
                TableEntry::new(0, TemplateRef::new("c", "never")),
                TableEntry::new(1, TemplateRef::new("c", "always")),
            ],
        );
        let rng = SplitMixRng;
        for entry in table.draw_entries(200, &rng, 11, 0) {
            assert_eq!(entry.target.entry, "always");
        }
    }

    #[test]
    fn empty_table_draws_nothing() {
        let table = RollableTable::new(TableId::new("empty"), "Empty", TableGroup::Treasure, vec![]);
        assert!(table.draw_entries(5, &SplitMixRng, 1, 0).is_empty());
    }

    #[test]
    fn draw_count_is_respected() {
        let table = sample_table();
        assert_eq!(table.draw_entries(7, &SplitMixRng, 1, 0).len(), 7);
        assert!(table.draw_entries(0, &SplitMixRng, 1, 0).is_empty());
    }

    #[test]
    fn draws_are_deterministic_for_a_fixed_seed() {
        let table = sample_table();
        let rng = SplitMixRng;
        let first: Vec<_> = table
            .draw_entries(10, &rng, 42, 0)
            .into_iter()
            .map(|entry| entry.target.entry.clone())
            .collect();
        let second: Vec<_> = table
            .draw_entries(10, &rng, 42, 0)
            .into_iter()
            .map(|entry| entry.target.entry.clone())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn weights_bias_the_distribution() {
        let table = sample_table();
        let rng = SplitMixRng;
        let draws = table.draw_entries(6000, &rng, 7, 0);
        let agates = draws
            .iter()
            .filter(|entry| entry.target.entry == "agate")
            .count();
        let obsidians = draws
            .iter()
            .filter(|entry| entry.target.entry == "obsidian")
            .count();
        // weight 3 vs weight 1 should show up clearly over 6000 draws
        assert!(agates > obsidians * 2, "{agates} vs {obsidians}");
    }
}
