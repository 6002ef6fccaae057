//! Movement and observation commands.

use super::{CommandContext, CommandOutcome};
use crate::adventure::room::Direction;

/// Move the player through an exit, handling locked doors and darkness.
pub fn go(ctx: &mut CommandContext, direction: Direction) -> CommandOutcome {
    let current_id = ctx.player.current_room.clone();
    let Some(current) = ctx.rooms.get(&current_id) else {
        return CommandOutcome::failure("You seem to be nowhere. That can't be right.");
    };

    let Some(target_id) = current.get_exit(direction).map(String::from) else {
        return CommandOutcome::failure(format!("You can't go {} from here.", direction.name()));
    };

    let Some(target) = ctx.rooms.get_mut(&target_id) else {
        return CommandOutcome::failure("The way ahead seems to lead nowhere.");
    };

    if let Err(reason) = target.can_enter(&ctx.player.inventory) {
        return CommandOutcome::failure(reason);
    }

    let mut lines = Vec::new();

    // Unlock on entry when the player carries the right key.
    if target.locked && !target.unlocked {
        if let Some(key_id) = target.unlock_item.clone() {
            if let Some(key) = ctx.player.find_item(&key_id).cloned() {
                target.unlock_with(&key);
                lines.push(format!(
                    "The {} turns with a satisfying click, and the door swings open.",
                    key.name
                ));
            }
        }
    }

    // A carried light source pushes back the dark automatically.
    if target.dark && !target.lit && ctx.player.has_light_source {
        target.light();
        lines.push("Your light pushes back the darkness.".to_string());
    }

    ctx.player.move_to_room(&target_id);
    lines.push(target.describe(ctx.player.has_light_source));

    CommandOutcome::success(lines.join("\n"))
}

/// Describe the current room, or a specific item or exit within it.
pub fn look(ctx: &mut CommandContext, target: Option<&str>) -> CommandOutcome {
    let current_id = ctx.player.current_room.clone();
    let Some(room) = ctx.rooms.get_mut(&current_id) else {
        return CommandOutcome::failure("You seem to be nowhere. That can't be right.");
    };

    let Some(target) = target else {
        return CommandOutcome::success(room.describe(ctx.player.has_light_source));
    };

    if let Some(direction) = Direction::parse(target) {
        return if room.get_exit(direction).is_some() {
            CommandOutcome::success(format!("A passage leads {}.", direction.name()))
        } else {
            CommandOutcome::success(format!(
                "There is nothing but wall to the {}.",
                direction.name()
            ))
        };
    }

    if let Some(item) = room.find_item(target) {
        return CommandOutcome::success(item.description.clone());
    }
    if let Some(item) = ctx.player.find_item(target) {
        return CommandOutcome::success(item.description.clone());
    }

    CommandOutcome::failure(format!("You don't see any '{}' here.", target))
}
