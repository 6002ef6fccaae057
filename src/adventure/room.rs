//! Rooms: locations in the game world, with exits, items, and locks.

use crate::adventure::item::{find_by_keyword, Item};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A direction of travel between rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
    Northeast,
    Northwest,
    Southeast,
    Southwest,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 10] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Northeast,
        Direction::Northwest,
        Direction::Southeast,
        Direction::Southwest,
        Direction::Up,
        Direction::Down,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Northeast => "northeast",
            Direction::Northwest => "northwest",
            Direction::Southeast => "southeast",
            Direction::Southwest => "southwest",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Parse a direction name or single/double-letter alias.
    pub fn parse(input: &str) -> Option<Direction> {
        match input.to_lowercase().as_str() {
            "north" | "n" => Some(Direction::North),
            "south" | "s" => Some(Direction::South),
            "east" | "e" => Some(Direction::East),
            "west" | "w" => Some(Direction::West),
            "northeast" | "ne" => Some(Direction::Northeast),
            "northwest" | "nw" => Some(Direction::Northwest),
            "southeast" | "se" => Some(Direction::Southeast),
            "southwest" | "sw" => Some(Direction::Southwest),
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            _ => None,
        }
    }
}

/// A location in the game world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    /// Short description shown on repeat visits.
    pub description: String,
    /// Detailed description shown on the first visit.
    pub long_description: String,
    pub exits: HashMap<Direction, String>,
    pub items: Vec<Item>,
    pub visited: bool,
    /// Dark rooms cannot be seen without a light source.
    pub dark: bool,
    /// Whether the room is currently lit (dark rooms start unlit).
    pub lit: bool,
    pub locked: bool,
    /// Whether the room has been unlocked (locked rooms start locked).
    pub unlocked: bool,
    /// Item id required to unlock the room.
    pub unlock_item: Option<String>,
}

impl Room {
    /// Destination room id for a direction, if an exit exists.
    pub fn get_exit(&self, direction: Direction) -> Option<&str> {
        self.exits.get(&direction).map(|s| s.as_str())
    }

    /// Check whether the player may enter, given their inventory.
    pub fn can_enter(&self, inventory: &[Item]) -> Result<(), String> {
        if self.locked && !self.unlocked {
            let Some(unlock_item) = &self.unlock_item else {
                return Err("This room is locked and cannot be opened.".to_string());
            };
            let has_key = inventory.iter().any(|item| &item.id == unlock_item);
            if !has_key {
                return Err(format!(
                    "This room is locked. You need a {} to enter.",
                    unlock_item
                ));
            }
        }
        Ok(())
    }

    /// Unlock the room using an item. Returns true if the item fit the lock.
    pub fn unlock_with(&mut self, item: &Item) -> bool {
        if self.locked && !self.unlocked && self.unlock_item.as_deref() == Some(item.id.as_str()) {
            self.unlocked = true;
            return true;
        }
        false
    }

    /// Light a dark room.
    pub fn light(&mut self) {
        self.lit = true;
    }

    pub fn find_item(&self, keyword: &str) -> Option<&Item> {
        find_by_keyword(&self.items, keyword)
    }

    /// Remove and return the first item matching a keyword.
    pub fn take_item(&mut self, keyword: &str) -> Option<Item> {
        let index = self.items.iter().position(|i| i.matches_keyword(keyword))?;
        Some(self.items.remove(index))
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Room description for the current visibility and visit state.
    pub fn description_text(&self, player_has_light: bool) -> String {
        if self.dark && !(self.lit || player_has_light) {
            return "It's too dark to see anything clearly. You need a source of light."
                .to_string();
        }

        let mut text = if self.visited {
            self.description.clone()
        } else {
            self.long_description.clone()
        };

        if !self.items.is_empty() {
            let names: Vec<String> = self.items.iter().map(|i| i.display_name()).collect();
            if names.len() == 1 {
                text.push_str(&format!("\n\nYou see {} here.", names[0]));
            } else {
                text.push_str(&format!(
                    "\n\nYou see the following items: {}.",
                    names.join(", ")
                ));
            }
        }

        if !self.exits.is_empty() {
            let mut exits: Vec<&str> = self.exits.keys().map(|d| d.name()).collect();
            exits.sort_unstable();
            if exits.len() == 1 {
                text.push_str(&format!("\n\nThere is an exit to the {}.", exits[0]));
            } else {
                text.push_str(&format!("\n\nExits are: {}.", exits.join(", ")));
            }
        }

        text
    }

    /// Full description block with header; marks the room visited.
    pub fn describe(&mut self, player_has_light: bool) -> String {
        let text = format!(
            "\n=== {} ===\n{}",
            self.name,
            self.description_text(player_has_light)
        );
        self.visited = true;
        text
    }
}
