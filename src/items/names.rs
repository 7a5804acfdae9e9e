use super::types::{EquipmentSlot, Rarity};

pub fn rarity_prefix(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Common => "Worn",
        Rarity::Rare => "Fine",
        Rarity::Epic => "Runed",
        Rarity::Legendary => "Mythic",
    }
}

pub fn slot_noun(slot: EquipmentSlot) -> &'static str {
    match slot {
        EquipmentSlot::Weapon => "Blade",
        EquipmentSlot::Armor => "Mail",
        EquipmentSlot::Accessory => "Charm",
    }
}

pub fn item_name(rarity: Rarity, slot: EquipmentSlot) -> String {
    format!("{} {}", rarity_prefix(rarity), slot_noun(slot))
}
