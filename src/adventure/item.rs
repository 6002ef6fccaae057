//! Items that can be found, carried, and used by the player.

use serde::{Deserialize, Serialize};

/// Condition lost each time a non-consumable item is used.
const WEAR_PER_USE: u32 = 5;

/// What using an item does to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ItemEffect {
    /// Health restored.
    #[serde(default)]
    pub heal: u32,
    /// Item acts as a light source once used.
    #[serde(default)]
    pub provides_light: bool,
    /// Damage when equipped as a weapon (0 = not a weapon).
    #[serde(default)]
    pub weapon_damage: u32,
}

impl ItemEffect {
    pub fn is_weapon(&self) -> bool {
        self.weapon_damage > 0
    }
}

/// Result of using an item.
#[derive(Debug, Clone)]
pub struct UseOutcome {
    pub success: bool,
    pub message: String,
    /// The item should be removed (or its quantity reduced) by the caller.
    pub consumed: bool,
    pub effect: ItemEffect,
}

/// An item in the game world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Weight in kg per unit; counts against carrying capacity.
    pub weight: u32,
    pub value: u32,
    pub usable: bool,
    pub consumable: bool,
    /// Keywords the player can use to refer to this item.
    pub keywords: Vec<String>,
    pub effect: ItemEffect,
    /// Stack size; identical items combine in the inventory.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// 0-100. Non-consumables wear with use and break at 0.
    #[serde(default = "default_condition")]
    pub condition: u32,
}

fn default_quantity() -> u32 {
    1
}

fn default_condition() -> u32 {
    100
}

impl Item {
    /// Check if the item matches a keyword (name substring or keyword list).
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        if self.name.to_lowercase().contains(&keyword) {
            return true;
        }
        self.keywords
            .iter()
            .any(|kw| kw.to_lowercase().contains(&keyword))
    }

    /// Display name, with stack size for stacked items.
    pub fn display_name(&self) -> String {
        if self.quantity > 1 {
            format!("{} (x{})", self.name, self.quantity)
        } else {
            self.name.clone()
        }
    }

    /// Total weight of the stack.
    pub fn total_weight(&self) -> u32 {
        self.weight * self.quantity
    }

    pub fn can_use(&self) -> bool {
        self.usable && self.condition > 0
    }

    /// Use the item. Applies wear to non-consumables; flavor text varies by
    /// effect.
    pub fn use_item(&mut self) -> UseOutcome {
        if !self.can_use() {
            return UseOutcome {
                success: false,
                message: format!("You can't use the {} right now.", self.name),
                consumed: false,
                effect: ItemEffect::default(),
            };
        }

        let mut message = if self.effect.provides_light {
            format!("You light the {}. It casts a warm glow around you.", self.name)
        } else if self.effect.heal > 0 {
            format!("You drink the {}. You feel refreshed!", self.name)
        } else if self.effect.is_weapon() {
            format!("You brandish the {}. You feel more confident.", self.name)
        } else {
            format!("You use the {}.", self.name)
        };

        if !self.consumable {
            self.condition = self.condition.saturating_sub(WEAR_PER_USE);
            if self.condition == 0 {
                message.push_str(&format!(" The {} breaks from use!", self.name));
            }
        }

        UseOutcome {
            success: true,
            message,
            consumed: self.consumable,
            effect: self.effect,
        }
    }

    /// Detailed examination text, including condition wear.
    pub fn examine(&self) -> String {
        let mut text = self.description.clone();
        if self.condition < 100 {
            if self.condition > 75 {
                text.push_str(" It shows slight signs of wear.");
            } else if self.condition > 25 {
                text.push_str(" It is visibly worn.");
            } else if self.condition > 0 {
                text.push_str(" It looks ready to fall apart.");
            } else {
                text.push_str(" It is broken.");
            }
        }
        text
    }
}

/// Find the first item in a list matching a keyword.
pub fn find_by_keyword<'a>(items: &'a [Item], keyword: &str) -> Option<&'a Item> {
    items.iter().find(|item| item.matches_keyword(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adventure::world;

    #[test]
    fn test_matches_keyword() {
        let lamp = world::item("lamp").unwrap();
        assert!(lamp.matches_keyword("lamp"));
        assert!(lamp.matches_keyword("LAMP"));
        assert!(lamp.matches_keyword("brass"));
        assert!(!lamp.matches_keyword("sword"));
    }

    #[test]
    fn test_use_consumable_is_consumed() {
        let mut potion = world::item("potion").unwrap();
        let outcome = potion.use_item();
        assert!(outcome.success);
        assert!(outcome.consumed);
        assert_eq!(outcome.effect.heal, 25);
        // Consumables do not wear
        assert_eq!(potion.condition, 100);
    }

    #[test]
    fn test_use_wears_non_consumable() {
        let mut lamp = world::item("lamp").unwrap();
        let outcome = lamp.use_item();
        assert!(outcome.success);
        assert!(!outcome.consumed);
        assert!(outcome.effect.provides_light);
        assert_eq!(lamp.condition, 95);
    }

    #[test]
    fn test_broken_item_unusable() {
        let mut lamp = world::item("lamp").unwrap();
        lamp.condition = WEAR_PER_USE;
        let outcome = lamp.use_item();
        assert!(outcome.success);
        assert!(outcome.message.contains("breaks"));
        assert_eq!(lamp.condition, 0);

        let outcome = lamp.use_item();
        assert!(!outcome.success);
    }

    #[test]
    fn test_display_name_stacked() {
        let mut potion = world::item("potion").unwrap();
        assert_eq!(potion.display_name(), "health potion");
        potion.quantity = 3;
        assert_eq!(potion.display_name(), "health potion (x3)");
        assert_eq!(potion.total_weight(), 3);
    }

    #[test]
    fn test_find_by_keyword() {
        let items = vec![world::item("key").unwrap(), world::item("book").unwrap()];
        assert_eq!(find_by_keyword(&items, "tome").unwrap().id, "book");
        assert!(find_by_keyword(&items, "sword").is_none());
    }
}
