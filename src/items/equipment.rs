use super::types::{EquipmentSlot, Item};
use serde::{Deserialize, Serialize};

/// Player equipment slots. Each holds at most one item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
    pub accessory: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> &Option<Item> {
        match slot {
            EquipmentSlot::Weapon => &self.weapon,
            EquipmentSlot::Armor => &self.armor,
            EquipmentSlot::Accessory => &self.accessory,
        }
    }

    fn slot_mut(&mut self, slot: EquipmentSlot) -> &mut Option<Item> {
        match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Armor => &mut self.armor,
            EquipmentSlot::Accessory => &mut self.accessory,
        }
    }

    /// Moves `item` into its slot and hands back whatever was there.
    pub fn equip(&mut self, item: Item) -> Option<Item> {
        self.slot_mut(item.slot).replace(item)
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &Item> {
        [&self.weapon, &self.armor, &self.accessory]
            .into_iter()
            .filter_map(|item| item.as_ref())
    }

    pub fn damage_bonus(&self) -> u32 {
        self.iter_equipped()
            .filter(|i| i.slot == EquipmentSlot::Weapon)
            .map(|i| i.stats.damage)
            .sum()
    }

    pub fn crit_bonus(&self) -> f64 {
        self.iter_equipped()
            .filter(|i| i.slot == EquipmentSlot::Accessory)
            .map(|i| i.stats.crit_bonus)
            .sum()
    }

    pub fn regen(&self) -> u32 {
        self.iter_equipped()
            .filter(|i| i.slot == EquipmentSlot::Armor)
            .map(|i| i.stats.regen)
            .sum()
    }
}
