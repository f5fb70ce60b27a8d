//! One actor's pending crafting configuration.

use crate::catalog::TemplateRef;

/// What kind of base item the crafting session builds on.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CreateMode {
    #[default]
    None,
    Weapon,
    Armor,
}

/// Mutable crafting configuration scoped to one actor.
///
/// All keys are plain strings chosen by a presentation layer; none of them
/// are guaranteed to exist in the registry. Consumers resolve them through
/// [`MaterialGradeRegistry`](super::MaterialGradeRegistry), which degrades
/// invalid combinations instead of failing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CraftingSelection {
    pub mode: CreateMode,
    pub base_item: Option<TemplateRef>,
    pub material: Option<String>,
    pub grade: Option<String>,
    pub potency: Option<String>,
    pub fundamentals: Vec<String>,
}

impl CraftingSelection {
    /// Switches the crafting mode. A weapon base item makes no sense in
    /// armor mode and vice versa, so changing mode clears the base item.
    pub fn set_mode(&mut self, mode: CreateMode) {
        if self.mode != mode {
            self.base_item = None;
        }
        self.mode = mode;
    }

    /// Keys of every selected rune, potency first.
    pub fn rune_keys(&self) -> impl Iterator<Item = &str> {
        self.potency
            .as_deref()
            .into_iter()
            .chain(self.fundamentals.iter().map(String::as_str))
    }
}
