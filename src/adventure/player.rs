//! The player character: inventory, health, and timed effects.

use crate::adventure::item::{find_by_keyword, Item};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub const MAX_INVENTORY_SIZE: usize = 10;
pub const STARTING_HEALTH: u32 = 100;
pub const STARTING_ENERGY: u32 = 100;
const BASE_CARRY_CAPACITY: u32 = 20;

/// Why an item could not be picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddItemError {
    SlotsFull,
    TooHeavy,
}

/// A timed effect on the player, measured in game minutes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Effect {
    pub duration: u32,
    pub started: u32,
}

/// The player character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Id of the room the player is currently in.
    pub current_room: String,
    pub inventory: Vec<Item>,
    pub health: u32,
    pub max_health: u32,
    pub energy: u32,
    pub max_energy: u32,
    pub strength: u32,
    pub level: u32,
    pub experience: u32,
    /// Active effects keyed by name.
    pub effects: HashMap<String, Effect>,
    pub rooms_visited: HashSet<String>,
    pub actions_taken: u32,
    /// Game time in minutes; each move advances it by one.
    pub game_time: u32,
    pub is_alive: bool,
    pub has_light_source: bool,
    /// Currently equipped weapon item id, if any.
    pub equipped_weapon: Option<String>,
}

impl Player {
    pub fn new(name: String, starting_room: &str) -> Self {
        let mut rooms_visited = HashSet::new();
        rooms_visited.insert(starting_room.to_string());
        Self {
            name,
            current_room: starting_room.to_string(),
            inventory: Vec::new(),
            health: STARTING_HEALTH,
            max_health: STARTING_HEALTH,
            energy: STARTING_ENERGY,
            max_energy: STARTING_ENERGY,
            strength: 10,
            level: 1,
            experience: 0,
            effects: HashMap::new(),
            rooms_visited,
            actions_taken: 0,
            game_time: 0,
            is_alive: true,
            has_light_source: false,
            equipped_weapon: None,
        }
    }

    /// Move to a new room; advances game time by one minute.
    pub fn move_to_room(&mut self, room_id: &str) {
        self.current_room = room_id.to_string();
        self.rooms_visited.insert(room_id.to_string());
        self.actions_taken += 1;
        self.game_time += 1;
    }

    /// Maximum carrying capacity in kg, based on strength.
    pub fn carry_capacity(&self) -> u32 {
        BASE_CARRY_CAPACITY + self.strength * 2
    }

    /// Total weight of everything carried.
    pub fn total_weight(&self) -> u32 {
        self.inventory.iter().map(|i| i.total_weight()).sum()
    }

    /// Add an item, stacking with an existing stack of the same id.
    pub fn add_to_inventory(&mut self, item: Item) -> Result<(), AddItemError> {
        if self.total_weight() + item.total_weight() > self.carry_capacity() {
            return Err(AddItemError::TooHeavy);
        }

        if let Some(existing) = self.inventory.iter_mut().find(|i| i.id == item.id) {
            existing.quantity += item.quantity;
            self.actions_taken += 1;
            return Ok(());
        }

        if self.inventory.len() >= MAX_INVENTORY_SIZE {
            return Err(AddItemError::SlotsFull);
        }

        self.inventory.push(item);
        self.actions_taken += 1;
        Ok(())
    }

    /// Remove and return one unit of the first item matching a keyword.
    pub fn remove_from_inventory(&mut self, keyword: &str) -> Option<Item> {
        let index = self
            .inventory
            .iter()
            .position(|i| i.matches_keyword(keyword))?;
        self.actions_taken += 1;
        if self.inventory[index].quantity > 1 {
            self.inventory[index].quantity -= 1;
            let mut single = self.inventory[index].clone();
            single.quantity = 1;
            Some(single)
        } else {
            Some(self.inventory.remove(index))
        }
    }

    pub fn find_item(&self, keyword: &str) -> Option<&Item> {
        find_by_keyword(&self.inventory, keyword)
    }

    pub fn has_item(&self, item_id: &str) -> bool {
        self.inventory.iter().any(|i| i.id == item_id)
    }

    /// Use an item from the inventory by keyword.
    ///
    /// Applies heal / light / weapon effects and consumes consumables.
    pub fn use_item(&mut self, keyword: &str) -> Result<String, String> {
        let index = self
            .inventory
            .iter()
            .position(|i| i.matches_keyword(keyword))
            .ok_or_else(|| "You don't have that item.".to_string())?;

        let outcome = self.inventory[index].use_item();
        if !outcome.success {
            return Err(outcome.message);
        }

        let mut message = outcome.message;

        if outcome.effect.heal > 0 {
            let healed = self.heal(outcome.effect.heal);
            message.push_str(&format!(" You gain {} health.", healed));
        }
        if outcome.effect.provides_light {
            self.has_light_source = true;
        }
        if outcome.effect.is_weapon() {
            self.equipped_weapon = Some(self.inventory[index].id.clone());
        }

        if outcome.consumed {
            if self.inventory[index].quantity > 1 {
                self.inventory[index].quantity -= 1;
            } else {
                self.inventory.remove(index);
            }
        }

        self.actions_taken += 1;
        Ok(message)
    }

    /// Heal up to max health; returns the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let old = self.health;
        self.health = (self.health + amount).min(self.max_health);
        self.health - old
    }

    /// Take damage, never dropping below zero; returns the damage dealt.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let old = self.health;
        self.health = self.health.saturating_sub(amount);
        if self.health == 0 {
            self.is_alive = false;
        }
        old - self.health
    }

    pub fn add_effect(&mut self, name: &str, duration: u32) {
        self.effects.insert(
            name.to_string(),
            Effect {
                duration,
                started: self.game_time,
            },
        );
    }

    /// Expire effects whose duration has elapsed; returns their names.
    pub fn update_effects(&mut self) -> Vec<String> {
        let now = self.game_time;
        let expired: Vec<String> = self
            .effects
            .iter()
            .filter(|(_, e)| now.saturating_sub(e.started) >= e.duration)
            .map(|(name, _)| name.clone())
            .collect();
        for name in &expired {
            self.effects.remove(name);
        }
        expired
    }

    /// Formatted inventory listing with weight and slot usage.
    pub fn inventory_display(&self) -> String {
        if self.inventory.is_empty() {
            return "Your inventory is empty.".to_string();
        }

        let mut lines = vec!["Your inventory contains:".to_string()];
        for (i, item) in self.inventory.iter().enumerate() {
            let weight_info = if item.total_weight() > 1 {
                format!(" ({} kg)", item.total_weight())
            } else {
                String::new()
            };
            lines.push(format!("  {}. {}{}", i + 1, item.display_name(), weight_info));
        }
        lines.push(format!(
            "\nCarrying: {}/{} kg",
            self.total_weight(),
            self.carry_capacity()
        ));
        lines.push(format!(
            "Inventory slots: {}/{}",
            self.inventory.len(),
            MAX_INVENTORY_SIZE
        ));
        lines.join("\n")
    }

    /// Formatted status block (health, energy, effects, weapon).
    pub fn status_display(&self) -> String {
        let mut lines = vec![format!("=== {} ===", self.name)];
        lines.push(format!("Health: {}/{}", self.health, self.max_health));
        lines.push(format!("Energy: {}/{}", self.energy, self.max_energy));
        lines.push(format!(
            "Level: {} (XP: {})",
            self.level, self.experience
        ));
        if let Some(weapon) = &self.equipped_weapon {
            lines.push(format!("Equipped: {}", weapon));
        }
        if !self.effects.is_empty() {
            let mut names: Vec<&str> = self.effects.keys().map(|s| s.as_str()).collect();
            names.sort_unstable();
            lines.push(format!("Effects: {}", names.join(", ")));
        }
        lines.join("\n")
    }

    /// Formatted progress statistics.
    pub fn stats_display(&self) -> String {
        let mut lines = vec![format!("=== {}'s Statistics ===", self.name)];
        lines.push(format!("Strength: {}", self.strength));
        lines.push(format!("Rooms visited: {}", self.rooms_visited.len()));
        lines.push(format!("Actions taken: {}", self.actions_taken));
        lines.push(format!("Game time: {} minutes", self.game_time));
        lines.join("\n")
    }
}
