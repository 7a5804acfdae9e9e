use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Accessory,
}

impl EquipmentSlot {
    pub const ALL: [EquipmentSlot; 3] = [
        EquipmentSlot::Weapon,
        EquipmentSlot::Armor,
        EquipmentSlot::Accessory,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "Weapon",
            EquipmentSlot::Armor => "Armor",
            EquipmentSlot::Accessory => "Accessory",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Rare = 1,
    Epic = 2,
    Legendary = 3,
}

impl Rarity {
    pub const ALL: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Multiplier fed into the per-slot stat formulas.
    pub fn scale(&self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Rare => 2.0,
            Rarity::Epic => 3.0,
            Rarity::Legendary => 4.0,
        }
    }
}

/// Stat bundle carried by an item. Only the field matching the item's slot
/// is ever non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemStats {
    /// Flat bonus added to both ends of the damage range (weapons)
    pub damage: u32,
    /// Added to crit probability, 0.0..=1.0 scale (accessories)
    pub crit_bonus: f64,
    /// HP restored at the end of each turn (armor)
    pub regen: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub slot: EquipmentSlot,
    pub rarity: Rarity,
    pub name: String,
    pub stats: ItemStats,
}

impl Item {
    /// Short stat line for the HUD, e.g. "+2 DMG".
    pub fn stat_summary(&self) -> String {
        match self.slot {
            EquipmentSlot::Weapon => format!("+{} DMG", self.stats.damage),
            EquipmentSlot::Accessory => format!("+{:.0}% CRIT", self.stats.crit_bonus * 100.0),
            EquipmentSlot::Armor => format!("+{} REGEN", self.stats.regen),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Rare);
        assert!(Rarity::Rare < Rarity::Epic);
        assert!(Rarity::Epic < Rarity::Legendary);
    }

    #[test]
    fn test_rarity_scale_increases() {
        let scales: Vec<f64> = Rarity::ALL.iter().map(|r| r.scale()).collect();
        assert!(scales.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_rarity_name() {
        assert_eq!(Rarity::Common.name(), "Common");
        assert_eq!(Rarity::Legendary.name(), "Legendary");
    }

    #[test]
    fn test_stat_summary() {
        let charm = Item {
            slot: EquipmentSlot::Accessory,
            rarity: Rarity::Rare,
            name: "Fine Charm".to_string(),
            stats: ItemStats {
                crit_bonus: 0.04,
                ..ItemStats::default()
            },
        };
        assert_eq!(charm.stat_summary(), "+4% CRIT");

        let mail = Item {
            slot: EquipmentSlot::Armor,
            rarity: Rarity::Epic,
            name: "Runed Mail".to_string(),
            stats: ItemStats {
                regen: 2,
                ..ItemStats::default()
            },
        };
        assert_eq!(mail.stat_summary(), "+2 REGEN");
    }
}
