//! Item manipulation commands: take, drop, use, examine.

use super::{CommandContext, CommandOutcome};
use crate::adventure::player::AddItemError;

/// Pick up an item from the current room.
pub fn take(ctx: &mut CommandContext, keyword: &str) -> CommandOutcome {
    let current_id = ctx.player.current_room.clone();
    let Some(room) = ctx.rooms.get_mut(&current_id) else {
        return CommandOutcome::failure("You seem to be nowhere. That can't be right.");
    };

    let Some(item) = room.take_item(keyword) else {
        return CommandOutcome::failure(format!("There is no '{}' here to take.", keyword));
    };

    let name = item.name.clone();
    match ctx.player.add_to_inventory(item.clone()) {
        Ok(()) => CommandOutcome::success(format!("You pick up the {}.", name)),
        Err(err) => {
            // Couldn't carry it, so it stays in the room.
            room.add_item(item);
            match err {
                AddItemError::SlotsFull => {
                    CommandOutcome::failure("Your hands are full. Drop something first.")
                }
                AddItemError::TooHeavy => CommandOutcome::failure(format!(
                    "The {} is too heavy to carry with everything else.",
                    name
                )),
            }
        }
    }
}

/// Drop an item from the inventory into the current room.
pub fn drop_item(ctx: &mut CommandContext, keyword: &str) -> CommandOutcome {
    let Some(item) = ctx.player.remove_from_inventory(keyword) else {
        return CommandOutcome::failure(format!("You aren't carrying any '{}'.", keyword));
    };

    let name = item.name.clone();
    let current_id = ctx.player.current_room.clone();
    if let Some(room) = ctx.rooms.get_mut(&current_id) {
        room.add_item(item);
    }
    CommandOutcome::success(format!("You drop the {}.", name))
}

/// Use a carried item, applying its effects to the player.
pub fn use_item(ctx: &mut CommandContext, keyword: &str) -> CommandOutcome {
    match ctx.player.use_item(keyword) {
        Ok(message) => CommandOutcome::success(message),
        Err(message) => CommandOutcome::failure(message),
    }
}

/// Show the detailed description of an item in the room or inventory.
pub fn examine(ctx: &mut CommandContext, keyword: &str) -> CommandOutcome {
    let current_id = ctx.player.current_room.clone();
    if let Some(room) = ctx.rooms.get(&current_id) {
        if let Some(item) = room.find_item(keyword) {
            return CommandOutcome::success(item.examine());
        }
    }
    if let Some(item) = ctx.player.find_item(keyword) {
        return CommandOutcome::success(item.examine());
    }
    CommandOutcome::failure(format!("You don't see any '{}' to examine.", keyword))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adventure::commands::CommandContext;
    use crate::adventure::player::Player;
    use crate::adventure::save::SaveManager;
    use crate::adventure::world;
    use std::collections::HashMap;

    fn setup() -> (Player, HashMap<String, crate::adventure::room::Room>) {
        (
            Player::new("Tester".to_string(), world::STARTING_ROOM),
            world::build_rooms(),
        )
    }

    #[test]
    fn test_take_item_from_room() {
        let (mut player, mut rooms) = setup();
        let saves = SaveManager::with_dir(std::env::temp_dir());
        let mut ctx = CommandContext {
            player: &mut player,
            rooms: &mut rooms,
            saves: &saves,
        };
        let outcome = take(&mut ctx, "lamp");
        assert!(outcome.success);
        assert!(player.has_item("lamp"));
        assert!(rooms.get("start_room").unwrap().find_item("lamp").is_none());
    }

    #[test]
    fn test_take_missing_item() {
        let (mut player, mut rooms) = setup();
        let saves = SaveManager::with_dir(std::env::temp_dir());
        let mut ctx = CommandContext {
            player: &mut player,
            rooms: &mut rooms,
            saves: &saves,
        };
        let outcome = take(&mut ctx, "chandelier");
        assert!(!outcome.success);
    }

    #[test]
    fn test_drop_returns_item_to_room() {
        let (mut player, mut rooms) = setup();
        player
            .add_to_inventory(world::item("lamp").unwrap())
            .unwrap();
        let saves = SaveManager::with_dir(std::env::temp_dir());
        let mut ctx = CommandContext {
            player: &mut player,
            rooms: &mut rooms,
            saves: &saves,
        };
        let outcome = drop_item(&mut ctx, "lamp");
        assert!(outcome.success);
        assert!(!player.has_item("lamp"));
        assert!(rooms.get("start_room").unwrap().find_item("lamp").is_some());
    }

    #[test]
    fn test_use_lamp_grants_light() {
        let (mut player, mut rooms) = setup();
        player
            .add_to_inventory(world::item("lamp").unwrap())
            .unwrap();
        let saves = SaveManager::with_dir(std::env::temp_dir());
        let mut ctx = CommandContext {
            player: &mut player,
            rooms: &mut rooms,
            saves: &saves,
        };
        let outcome = use_item(&mut ctx, "lamp");
        assert!(outcome.success);
        assert!(player.has_light_source);
    }

    #[test]
    fn test_examine_room_and_inventory_items() {
        let (mut player, mut rooms) = setup();
        player
            .add_to_inventory(world::item("potion").unwrap())
            .unwrap();
        let saves = SaveManager::with_dir(std::env::temp_dir());
        let mut ctx = CommandContext {
            player: &mut player,
            rooms: &mut rooms,
            saves: &saves,
        };
        assert!(examine(&mut ctx, "lamp").success);
        assert!(examine(&mut ctx, "potion").success);
        assert!(!examine(&mut ctx, "dragon").success);
    }
}
