//! Owned item instances and the container they live in.
//!
//! Containers are only mutated through [`InventoryContainer::merge`] and
//! [`InventoryContainer::clear`]. Merge snapshots the membership first and
//! reports exactly what it added, so downstream hooks can tell freshly
//! created instances apart from anything else in the container.

use std::collections::HashSet;
use std::fmt;

use crate::catalog::{ItemCategory, ItemTemplate};
use crate::config::LootConfig;
use crate::rng::RngOracle;

/// Identity of the actor owning a container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

/// Unique identifier of one item instance within a container's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceId(pub u64);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Rolls the value multiplier for one item (four-sided die semantics).
///
/// Each call is an independent trial; callers derive a fresh seed per item.
pub fn value_multiplier(rng: &(impl RngOracle + ?Sized), seed: u64) -> u32 {
    rng.roll_die(seed, LootConfig::VALUE_DIE_SIDES)
}

/// A concrete copy of an [`ItemTemplate`] owned by a container.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemInstance {
    pub id: InstanceId,
    /// Catalog id of the template this instance was created from.
    pub template: String,
    pub name: String,
    pub category: ItemCategory,
    pub level: u8,
    /// Monetary value in coins, possibly mutated from the template's base.
    pub value: u64,
}

impl ItemInstance {
    pub fn new(id: InstanceId, template: &ItemTemplate, value: u64) -> Self {
        Self {
            id,
            template: template.id.clone(),
            name: template.name.clone(),
            category: template.category,
            level: template.level,
            value,
        }
    }

    /// Creates an instance with a randomized monetary value: the template's
    /// base value times an independent d4 multiplier.
    pub fn rolled(
        id: InstanceId,
        template: &ItemTemplate,
        rng: &(impl RngOracle + ?Sized),
        seed: u64,
    ) -> Self {
        let multiplier = u64::from(value_multiplier(rng, seed));
        Self::new(id, template, template.base_value.saturating_mul(multiplier))
    }
}

/// The subset of a merge that was freshly added.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MergeDelta {
    pub added: Vec<ItemInstance>,
}

/// An actor's unordered collection of item instances.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryContainer {
    pub owner: ActorId,
    items: Vec<ItemInstance>,
    next_instance: u64,
}

impl InventoryContainer {
    pub fn new(owner: ActorId) -> Self {
        Self {
            owner,
            items: Vec::new(),
            next_instance: 0,
        }
    }

    pub fn items(&self) -> &[ItemInstance] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Hands out the next instance id. Ids are never reused within one
    /// container, including across [`clear`](Self::clear).
    pub fn allocate_instance_id(&mut self) -> InstanceId {
        let id = InstanceId(self.next_instance);
        self.next_instance += 1;
        id
    }

    /// Appends `instances` and returns the delta against the membership
    /// snapshot taken immediately before the merge. Existing instances are
    /// never removed or replaced; an incoming instance whose id is already
    /// present is dropped rather than duplicated.
    pub fn merge(&mut self, instances: Vec<ItemInstance>) -> MergeDelta {
        let existing: HashSet<InstanceId> = self.items.iter().map(|item| item.id).collect();

        let mut added = Vec::with_capacity(instances.len());
        for instance in instances {
            if existing.contains(&instance.id) {
                continue;
            }
            added.push(instance.clone());
            self.items.push(instance);
        }

        MergeDelta { added }
    }

    /// Replaces the instance collection with an empty one. Non-reversible.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
