use super::names::item_name;
use super::types::{EquipmentSlot, Item, ItemStats, Rarity};
use crate::core::constants::{ACCESSORY_CRIT_PER_SCALE, ARMOR_REGEN_DIVISOR, RARITY_WEIGHTS};
use rand::Rng;

/// Rolls a rarity with the fixed 60/25/10/5 weighting.
pub fn roll_rarity(rng: &mut impl Rng) -> Rarity {
    let total: u32 = RARITY_WEIGHTS.iter().sum();
    let mut roll = rng.gen_range(0..total);

    for (rarity, weight) in Rarity::ALL.into_iter().zip(RARITY_WEIGHTS) {
        if roll < weight {
            return rarity;
        }
        roll -= weight;
    }
    Rarity::Legendary
}

pub fn roll_random_slot(rng: &mut impl Rng) -> EquipmentSlot {
    EquipmentSlot::ALL[rng.gen_range(0..EquipmentSlot::ALL.len())]
}

/// Stat bundle for a slot and rarity on a given floor. Only the stat that
/// belongs to `slot` is set.
pub fn stats_for(slot: EquipmentSlot, rarity: Rarity, floor_level: u32) -> ItemStats {
    let scale = rarity.scale();
    match slot {
        EquipmentSlot::Weapon => ItemStats {
            damage: (scale + floor_level as f64 / 3.0).round() as u32,
            ..ItemStats::default()
        },
        EquipmentSlot::Accessory => ItemStats {
            crit_bonus: ACCESSORY_CRIT_PER_SCALE * scale,
            ..ItemStats::default()
        },
        EquipmentSlot::Armor => ItemStats {
            regen: (scale / ARMOR_REGEN_DIVISOR).round() as u32,
            ..ItemStats::default()
        },
    }
}

pub fn generate_item(slot: EquipmentSlot, rarity: Rarity, floor_level: u32) -> Item {
    Item {
        slot,
        rarity,
        name: item_name(rarity, slot),
        stats: stats_for(slot, rarity, floor_level),
    }
}

/// The item found in a chest: random rarity, random slot.
pub fn roll_loot(floor_level: u32, rng: &mut impl Rng) -> Item {
    let rarity = roll_rarity(rng);
    let slot = roll_random_slot(rng);
    generate_item(slot, rarity, floor_level)
}
