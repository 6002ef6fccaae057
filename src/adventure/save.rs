//! Slot-based JSON save files for the adventure.
//!
//! Saves live under `~/.parlor/adventure/` as `save_slot_N.json`. A save
//! captures the full player and room state so restored games keep dropped
//! items, unlocked doors, and visited-room descriptions.

use crate::adventure::player::Player;
use crate::adventure::room::Room;
use crate::utils::persistence;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

pub const MAX_SLOTS: u8 = 5;
pub const SAVE_VERSION: u32 = 1;

/// A complete snapshot of a running game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveData {
    pub version: u32,
    pub player: Player,
    pub rooms: HashMap<String, Room>,
    pub current_room_id: String,
    pub save_slot: u8,
    pub timestamp: String,
}

impl SaveData {
    pub fn capture(player: &Player, rooms: &HashMap<String, Room>, slot: u8) -> Self {
        Self {
            version: SAVE_VERSION,
            current_room_id: player.current_room.clone(),
            player: player.clone(),
            rooms: rooms.clone(),
            save_slot: slot,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Summary of one occupied save slot, shown by the 'saves' command.
#[derive(Debug, Clone)]
pub struct SaveSlotInfo {
    pub slot: u8,
    pub player_name: String,
    /// Game minutes played at the time of the save.
    pub game_time: u32,
    pub timestamp: String,
    pub is_corrupted: bool,
}

/// Reads and writes numbered save slots in a fixed directory.
pub struct SaveManager {
    dir: PathBuf,
}

impl SaveManager {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: persistence::parlor_subdir("adventure")?,
        })
    }

    /// Use an explicit directory instead of `~/.parlor/adventure/`.
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn slot_path(&self, slot: u8) -> PathBuf {
        self.dir.join(format!("save_slot_{}.json", slot))
    }

    pub fn save(&self, data: &SaveData) -> io::Result<()> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(self.slot_path(data.save_slot), json)
    }

    pub fn load(&self, slot: u8) -> io::Result<SaveData> {
        let json = fs::read_to_string(self.slot_path(slot))?;
        serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn delete(&self, slot: u8) -> io::Result<()> {
        fs::remove_file(self.slot_path(slot))
    }

    /// Describe every occupied slot. Unreadable files are reported as
    /// corrupted rather than skipped so the player knows the slot is taken.
    pub fn list_saves(&self) -> Vec<SaveSlotInfo> {
        let mut infos = Vec::new();
        for slot in 1..=MAX_SLOTS {
            let path = self.slot_path(slot);
            if !path.exists() {
                continue;
            }
            let info = match fs::read_to_string(&path)
                .ok()
                .and_then(|json| serde_json::from_str::<SaveData>(&json).ok())
            {
                Some(data) => SaveSlotInfo {
                    slot,
                    player_name: data.player.name,
                    game_time: data.player.game_time,
                    timestamp: data.timestamp,
                    is_corrupted: false,
                },
                None => SaveSlotInfo {
                    slot,
                    player_name: "???".to_string(),
                    game_time: 0,
                    timestamp: String::new(),
                    is_corrupted: true,
                },
            };
            infos.push(info);
        }
        infos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adventure::world;

    fn temp_manager(name: &str) -> SaveManager {
        let dir = std::env::temp_dir().join(format!("parlor_save_test_{}", name));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        SaveManager::with_dir(dir)
    }

    #[test]
    fn test_save_and_load_preserve_state() {
        let manager = temp_manager("preserve");
        let mut player = Player::new("Ada".to_string(), world::STARTING_ROOM);
        player
            .add_to_inventory(world::item("lamp").unwrap())
            .unwrap();
        player.current_room = "library".to_string();
        let mut rooms = world::build_rooms();
        rooms.get_mut("library").unwrap().visited = true;

        let data = SaveData::capture(&player, &rooms, 1);
        manager.save(&data).unwrap();

        let loaded = manager.load(1).unwrap();
        assert_eq!(loaded.version, SAVE_VERSION);
        assert_eq!(loaded.player.name, "Ada");
        assert_eq!(loaded.current_room_id, "library");
        assert!(loaded.player.has_item("lamp"));
        assert!(loaded.rooms.get("library").unwrap().visited);
    }

    #[test]
    fn test_load_missing_slot_is_not_found() {
        let manager = temp_manager("missing");
        let err = manager.load(3).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_corrupted_save_listed_but_unloadable() {
        let manager = temp_manager("corrupted");
        std::fs::write(manager.slot_path(2), "{not valid json").unwrap();

        let err = manager.load(2).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        let infos = manager.list_saves();
        assert_eq!(infos.len(), 1);
        assert!(infos[0].is_corrupted);
        assert_eq!(infos[0].slot, 2);
    }

    #[test]
    fn test_list_saves_orders_by_slot() {
        let manager = temp_manager("ordering");
        let player = Player::new("Ada".to_string(), world::STARTING_ROOM);
        let rooms = world::build_rooms();
        for slot in [4, 1, 3] {
            manager.save(&SaveData::capture(&player, &rooms, slot)).unwrap();
        }
        let slots: Vec<u8> = manager.list_saves().iter().map(|i| i.slot).collect();
        assert_eq!(slots, vec![1, 3, 4]);
    }

    #[test]
    fn test_delete_frees_slot() {
        let manager = temp_manager("delete");
        let player = Player::new("Ada".to_string(), world::STARTING_ROOM);
        let rooms = world::build_rooms();
        manager.save(&SaveData::capture(&player, &rooms, 1)).unwrap();
        manager.delete(1).unwrap();
        assert!(manager.list_saves().is_empty());
    }
}
