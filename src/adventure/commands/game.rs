//! Save, load, and save-listing commands.

use super::{CommandContext, CommandOutcome, PostAction};
use crate::adventure::save::{SaveData, MAX_SLOTS};
use std::io::ErrorKind;

fn slot_in_range(slot: u8) -> bool {
    (1..=MAX_SLOTS).contains(&slot)
}

/// Write the current game to a numbered slot.
pub fn save(ctx: &mut CommandContext, slot: u8) -> CommandOutcome {
    if !slot_in_range(slot) {
        return CommandOutcome::failure(format!("Save slot must be between 1 and {}.", MAX_SLOTS));
    }

    let data = SaveData::capture(ctx.player, ctx.rooms, slot);
    match ctx.saves.save(&data) {
        Ok(()) => CommandOutcome::success(format!("Game saved to slot {}.", slot)),
        Err(e) => CommandOutcome::failure(format!("Failed to save game: {}", e)),
    }
}

/// Restore a game from a numbered slot.
pub fn load(ctx: &mut CommandContext, slot: u8) -> CommandOutcome {
    if !slot_in_range(slot) {
        return CommandOutcome::failure(format!("Save slot must be between 1 and {}.", MAX_SLOTS));
    }

    match ctx.saves.load(slot) {
        Ok(data) => CommandOutcome::with_action(
            format!("Game loaded from slot {}.", slot),
            PostAction::Load(Box::new(data)),
        ),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            CommandOutcome::failure(format!("No saved game found in slot {}.", slot))
        }
        Err(e) => CommandOutcome::failure(format!("Failed to load slot {}: {}", slot, e)),
    }
}

/// List every save slot with its contents.
pub fn list_saves(ctx: &mut CommandContext) -> CommandOutcome {
    let infos = ctx.saves.list_saves();
    let mut lines = vec!["Saved games:".to_string()];
    for slot in 1..=MAX_SLOTS {
        match infos.iter().find(|i| i.slot == slot) {
            Some(info) if info.is_corrupted => {
                lines.push(format!("  Slot {}: [corrupted]", slot));
            }
            Some(info) => {
                lines.push(format!(
                    "  Slot {}: {} - {} ({} min played)",
                    slot, info.player_name, info.timestamp, info.game_time
                ));
            }
            None => lines.push(format!("  Slot {}: [empty]", slot)),
        }
    }
    CommandOutcome::success(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adventure::commands::CommandContext;
    use crate::adventure::player::Player;
    use crate::adventure::save::SaveManager;
    use crate::adventure::world;

    fn temp_saves(name: &str) -> SaveManager {
        let dir = std::env::temp_dir().join(format!("parlor_cmd_test_{}", name));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        SaveManager::with_dir(dir)
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let saves = temp_saves("round_trip");
        let mut player = Player::new("Saver".to_string(), world::STARTING_ROOM);
        player.current_room = "kitchen".to_string();
        let mut rooms = world::build_rooms();

        let mut ctx = CommandContext {
            player: &mut player,
            rooms: &mut rooms,
            saves: &saves,
        };
        let outcome = save(&mut ctx, 2);
        assert!(outcome.success, "{}", outcome.message);

        let outcome = load(&mut ctx, 2);
        assert!(outcome.success);
        match outcome.action {
            Some(PostAction::Load(data)) => {
                assert_eq!(data.player.name, "Saver");
                assert_eq!(data.current_room_id, "kitchen");
            }
            _ => panic!("expected a load action"),
        }
    }

    #[test]
    fn test_load_outcome_is_debug_printable() {
        let saves = temp_saves("debug_print");
        let mut player = Player::new("Saver".to_string(), world::STARTING_ROOM);
        let mut rooms = world::build_rooms();
        let mut ctx = CommandContext {
            player: &mut player,
            rooms: &mut rooms,
            saves: &saves,
        };
        save(&mut ctx, 1);

        let outcome = load(&mut ctx, 1);
        let text = format!("{:?}", outcome);
        assert!(text.contains("Load"));
        assert!(text.contains("Saver"));
    }

    #[test]
    fn test_load_empty_slot() {
        let saves = temp_saves("empty_slot");
        let mut player = Player::new("Nobody".to_string(), world::STARTING_ROOM);
        let mut rooms = world::build_rooms();
        let mut ctx = CommandContext {
            player: &mut player,
            rooms: &mut rooms,
            saves: &saves,
        };
        let outcome = load(&mut ctx, 4);
        assert!(!outcome.success);
        assert!(outcome.message.contains("No saved game"));
    }

    #[test]
    fn test_slot_out_of_range() {
        let saves = temp_saves("range");
        let mut player = Player::new("Nobody".to_string(), world::STARTING_ROOM);
        let mut rooms = world::build_rooms();
        let mut ctx = CommandContext {
            player: &mut player,
            rooms: &mut rooms,
            saves: &saves,
        };
        assert!(!save(&mut ctx, 0).success);
        assert!(!save(&mut ctx, 6).success);
        assert!(!load(&mut ctx, 9).success);
    }
}
