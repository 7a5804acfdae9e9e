//! What happens to a chest item once the player decides.

use super::types::Item;
use crate::character::player::Player;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LootDecision {
    Equip,
    Store,
    Ignore,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LootOutcome {
    /// Item is now in its slot; the previous occupant, if any, went to the inventory
    Equipped { item_name: String, replaced: Option<String> },
    Stored { item_name: String },
    Discarded { item_name: String },
}

impl LootOutcome {
    pub fn message(&self) -> String {
        match self {
            LootOutcome::Equipped {
                item_name,
                replaced: Some(old),
            } => format!("You equip the {item_name} and stow the {old}."),
            LootOutcome::Equipped {
                item_name,
                replaced: None,
            } => format!("You equip the {item_name}."),
            LootOutcome::Stored { item_name } => format!("You pack the {item_name} away."),
            LootOutcome::Discarded { item_name } => format!("You leave the {item_name} behind."),
        }
    }
}

/// Consumes the pending item according to `decision`.
pub fn apply_loot_decision(player: &mut Player, item: Item, decision: LootDecision) -> LootOutcome {
    let item_name = item.name.clone();
    match decision {
        LootDecision::Equip => {
            let replaced = player.equipment.equip(item).map(|old| {
                let name = old.name.clone();
                player.inventory.push(old);
                name
            });
            LootOutcome::Equipped {
                item_name,
                replaced,
            }
        }
        LootDecision::Store => {
            player.inventory.push(item);
            LootOutcome::Stored { item_name }
        }
        LootDecision::Ignore => LootOutcome::Discarded { item_name },
    }
}

/// Swaps the inventory item at `index` into its slot. The displaced item
/// takes its place in the inventory. Returns `None` for a bad index.
pub fn equip_from_inventory(player: &mut Player, index: usize) -> Option<LootOutcome> {
    if index >= player.inventory.len() {
        return None;
    }
    let item = player.inventory.remove(index);
    Some(apply_loot_decision(player, item, LootDecision::Equip))
}
