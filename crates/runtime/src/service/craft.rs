//! The crafting session flow: selection upkeep and presentation data.

use loot_core::{
    ActorId, CraftedValues, CraftingPriceCalculator, CraftingSelection, CreateMode, ItemCategory,
    ItemChoice, ModifierChoice, RuneKind, TableGroup, TableSummary,
};

use crate::api::Result;

use super::LootService;

/// Named weapons offered as crafting bases regardless of their level.
const BASE_WEAPON_EXCEPTIONS: &[&str] = &["Aldori Dueling Sword"];

/// Everything a crafting sheet needs to render one actor's session.
#[derive(Clone, Debug)]
pub struct CraftingView {
    pub mode: CreateMode,
    pub values: CraftedValues,
    pub materials: Vec<ModifierChoice>,
    /// Grades compatible with the selected material; empty without one.
    pub grades: Vec<ModifierChoice>,
    pub potency_runes: Vec<ModifierChoice>,
    pub fundamental_runes: Vec<ModifierChoice>,
    /// Base item candidates for the current mode.
    pub base_items: Vec<ItemChoice>,
}

impl LootService {
    /// Renders one actor's crafting session.
    ///
    /// An incompatible grade is normalized to the material's default and the
    /// correction is written back, so the stored selection always matches
    /// what the sheet displays.
    pub async fn crafting_view(&self, actor: ActorId) -> Result<CraftingView> {
        let mut selection = self.selections.selection(actor);

        let material_key = selection.material.clone();
        let grade_key = selection.grade.clone();
        if let (Some(material), Some(grade)) = (material_key.as_deref(), grade_key.as_deref()) {
            if !self.registry.has_grade(material, grade) {
                if let Some(effective) = self.registry.effective_grade(material, grade) {
                    selection.grade = Some(effective.to_string());
                    self.selections.store_selection(actor, selection.clone());
                }
            }
        }

        let base_item_level = match &selection.base_item {
            Some(target) => self
                .catalog
                .lookup(&target.collection, &target.entry)
                .await?
                .map(|template| template.level),
            None => None,
        };

        let values =
            CraftingPriceCalculator::new(&self.registry).compute(&selection, base_item_level);

        let base_items = match selection.mode {
            CreateMode::Weapon => self.base_weapons().await?,
            CreateMode::Armor => self.base_armors().await?,
            CreateMode::None => Vec::new(),
        };

        let grades = match selection.material.as_deref() {
            Some(material) => self.registry.list_grades(material),
            None => Vec::new(),
        };

        Ok(CraftingView {
            mode: selection.mode,
            values,
            materials: self.registry.list_materials(),
            grades,
            potency_runes: self.registry.list_runes(RuneKind::Potency),
            fundamental_runes: self.registry.list_runes(RuneKind::Fundamental),
            base_items,
        })
    }

    /// Switches an actor's crafting mode, clearing the chosen base item when
    /// the mode actually changes.
    pub fn set_create_mode(&self, actor: ActorId, mode: CreateMode) {
        let mut selection = self.selections.selection(actor);
        selection.set_mode(mode);
        self.selections.store_selection(actor, selection);
    }

    /// Replaces an actor's pending selection wholesale.
    pub fn update_selection(&self, actor: ActorId, selection: CraftingSelection) {
        self.selections.store_selection(actor, selection);
    }

    /// Weapons a crafting session can start from: mundane (level 0) weapons
    /// excluding the bomb group, plus named exceptions.
    pub async fn base_weapons(&self) -> Result<Vec<ItemChoice>> {
        let contents = self
            .catalog
            .collection_contents(&self.config.equipment_collection)
            .await?;
        Ok(contents
            .iter()
            .filter(|item| item.category == ItemCategory::Weapon)
            .filter(|item| {
                BASE_WEAPON_EXCEPTIONS.contains(&item.name.as_str())
                    || (item.level == 0 && item.group.as_deref() != Some("bomb"))
            })
            .map(ItemChoice::from)
            .collect())
    }

    /// Armors a crafting session can start from: mundane (level 0) armors
    /// with a known armor group.
    pub async fn base_armors(&self) -> Result<Vec<ItemChoice>> {
        let contents = self
            .catalog
            .collection_contents(&self.config.equipment_collection)
            .await?;
        Ok(contents
            .iter()
            .filter(|item| item.category == ItemCategory::Armor)
            .filter(|item| item.level == 0)
            .filter(|item| item.group.as_deref().is_some_and(|group| !group.is_empty()))
            .map(ItemChoice::from)
            .collect())
    }

    /// Tables listed under one presentation group.
    pub async fn tables(&self, group: TableGroup) -> Result<Vec<TableSummary>> {
        self.catalog.tables_in_group(group).await
    }
}
