//! Static world content: the item catalog and the five-room dungeon.

use crate::adventure::item::{Item, ItemEffect};
use crate::adventure::room::{Direction, Room};
use std::collections::HashMap;

/// Room the player starts in.
pub const STARTING_ROOM: &str = "start_room";

/// Help text listing every command and shortcut.
pub const HELP_TEXT: &str = "\
Available Commands:
  Movement: go <direction>, north, south, east, west, up, down
  Shortcuts: n, s, e, w, ne, nw, se, sw, u, d

  Actions: look, examine <item>, get <item>, drop <item>
  Inventory: inventory (or i), use <item>
  Player: status, stats

  Game: save [slot], load [slot], saves, quit (or q), help (or h)

  You can also use shortcuts like 'n' for 'go north' and 'i' for 'inventory'.";

/// Build an item from the catalog by id.
pub fn item(id: &str) -> Option<Item> {
    let item = match id {
        "key" => Item {
            id: "key".to_string(),
            name: "rusty key".to_string(),
            description:
                "An old, rusty key that looks like it might open something important."
                    .to_string(),
            weight: 1,
            value: 10,
            usable: true,
            consumable: false,
            keywords: string_vec(&["key", "rusty", "old"]),
            effect: ItemEffect::default(),
            quantity: 1,
            condition: 100,
        },
        "lamp" => Item {
            id: "lamp".to_string(),
            name: "oil lamp".to_string(),
            description: "A brass oil lamp that provides light in dark places.".to_string(),
            weight: 2,
            value: 25,
            usable: true,
            consumable: false,
            keywords: string_vec(&["lamp", "oil", "brass", "light"]),
            effect: ItemEffect {
                provides_light: true,
                ..ItemEffect::default()
            },
            quantity: 1,
            condition: 100,
        },
        "book" => Item {
            id: "book".to_string(),
            name: "ancient tome".to_string(),
            description:
                "A leather-bound book filled with mysterious symbols and arcane knowledge."
                    .to_string(),
            weight: 3,
            value: 50,
            usable: true,
            consumable: false,
            keywords: string_vec(&["book", "tome", "ancient", "leather"]),
            effect: ItemEffect::default(),
            quantity: 1,
            condition: 100,
        },
        "potion" => Item {
            id: "potion".to_string(),
            name: "health potion".to_string(),
            description: "A small vial containing a red liquid that glows faintly.".to_string(),
            weight: 1,
            value: 30,
            usable: true,
            consumable: true,
            keywords: string_vec(&["potion", "vial", "health", "red"]),
            effect: ItemEffect {
                heal: 25,
                ..ItemEffect::default()
            },
            quantity: 1,
            condition: 100,
        },
        "sword" => Item {
            id: "sword".to_string(),
            name: "iron sword".to_string(),
            description: "A well-balanced iron sword with a sharp edge.".to_string(),
            weight: 5,
            value: 100,
            usable: true,
            consumable: false,
            keywords: string_vec(&["sword", "iron", "weapon", "blade"]),
            effect: ItemEffect {
                weapon_damage: 15,
                ..ItemEffect::default()
            },
            quantity: 1,
            condition: 100,
        },
        _ => return None,
    };
    Some(item)
}

/// All item ids in the catalog.
pub fn all_item_ids() -> &'static [&'static str] {
    &["key", "lamp", "book", "potion", "sword"]
}

/// Build the full set of rooms in their starting state.
pub fn build_rooms() -> HashMap<String, Room> {
    let mut rooms = HashMap::new();

    add_room(
        &mut rooms,
        Room {
            id: "start_room".to_string(),
            name: "Starting Chamber".to_string(),
            description:
                "You find yourself in a dimly lit stone chamber. Ancient torches flicker \
                 on the walls, casting dancing shadows. The air is musty and filled with \
                 the scent of ages past."
                    .to_string(),
            long_description:
                "This appears to be some kind of ancient chamber, carved from solid stone. \
                 The walls are adorned with faded murals depicting scenes of adventure and \
                 mystery. A few old torches provide flickering light, and you can hear the \
                 distant sound of dripping water echoing through unseen passages."
                    .to_string(),
            exits: exits(&[(Direction::North, "kitchen"), (Direction::East, "library")]),
            items: items(&["lamp"]),
            visited: false,
            dark: false,
            lit: true,
            locked: false,
            unlocked: true,
            unlock_item: None,
        },
    );

    add_room(
        &mut rooms,
        Room {
            id: "kitchen".to_string(),
            name: "Ancient Kitchen".to_string(),
            description:
                "You are in what appears to be an old kitchen. Cobwebs hang from the \
                 ceiling, and dust covers every surface. A large stone hearth dominates \
                 one wall."
                    .to_string(),
            long_description:
                "This kitchen hasn't been used in decades, perhaps centuries. Rusty pots \
                 and pans hang from hooks on the walls, and a massive stone hearth takes \
                 up most of the north wall. A wooden table in the center is covered with \
                 a thick layer of dust. Despite the abandonment, there's something oddly \
                 welcoming about this place."
                    .to_string(),
            exits: exits(&[(Direction::South, "start_room"), (Direction::West, "pantry")]),
            items: items(&["key", "potion"]),
            visited: false,
            dark: false,
            lit: true,
            locked: false,
            unlocked: true,
            unlock_item: None,
        },
    );

    add_room(
        &mut rooms,
        Room {
            id: "library".to_string(),
            name: "Forgotten Library".to_string(),
            description:
                "Towering bookshelves stretch from floor to ceiling, filled with ancient \
                 tomes and scrolls. Dust motes dance in shafts of light filtering through \
                 high windows."
                    .to_string(),
            long_description:
                "This magnificent library must have once been the pride of whoever built \
                 this place. Countless books line the shelves, their leather bindings \
                 cracked with age. A reading desk sits in the center, with an ornate chair \
                 that looks surprisingly comfortable. The smell of old parchment and \
                 leather fills the air."
                    .to_string(),
            exits: exits(&[(Direction::West, "start_room"), (Direction::North, "study")]),
            items: items(&["book"]),
            visited: false,
            dark: false,
            lit: true,
            locked: false,
            unlocked: true,
            unlock_item: None,
        },
    );

    add_room(
        &mut rooms,
        Room {
            id: "pantry".to_string(),
            name: "Storage Pantry".to_string(),
            description:
                "A small storage room with empty shelves lining the walls. It's clear \
                 this room once held food and supplies."
                    .to_string(),
            long_description:
                "This cramped pantry shows signs of having once been well-stocked with \
                 provisions. Empty barrels and sacks lie scattered about, and the shelves \
                 that line the walls are bare except for a few forgotten items. The air \
                 is stale and carries a faint scent of old grain."
                    .to_string(),
            exits: exits(&[(Direction::East, "kitchen")]),
            items: Vec::new(),
            visited: false,
            dark: true,
            lit: false,
            locked: false,
            unlocked: true,
            unlock_item: None,
        },
    );

    add_room(
        &mut rooms,
        Room {
            id: "study".to_string(),
            name: "Scholar's Study".to_string(),
            description:
                "A cozy study with a large desk covered in papers and writing implements. \
                 Bookshelves line the walls, and a comfortable chair sits behind the desk."
                    .to_string(),
            long_description:
                "This intimate study belongs to someone who clearly valued learning and \
                 knowledge. The desk is covered with half-finished manuscripts, quill \
                 pens, and bottles of dried ink. Personal touches like a small plant (now \
                 withered) and a framed portrait suggest this was someone's private \
                 sanctuary."
                    .to_string(),
            exits: exits(&[(Direction::South, "library")]),
            items: items(&["sword"]),
            visited: false,
            dark: false,
            lit: true,
            locked: true,
            unlocked: false,
            unlock_item: Some("key".to_string()),
        },
    );

    rooms
}

/// Welcome banner shown when a new game starts.
pub fn welcome_message(name: &str) -> String {
    format!(
        "\nWelcome, {}!\nType 'help' for a list of available commands.\nType 'look' to \
         examine your surroundings more closely.",
        name
    )
}

fn add_room(rooms: &mut HashMap<String, Room>, room: Room) {
    rooms.insert(room.id.clone(), room);
}

fn exits(pairs: &[(Direction, &str)]) -> HashMap<Direction, String> {
    pairs
        .iter()
        .map(|(dir, id)| (*dir, id.to_string()))
        .collect()
}

fn items(ids: &[&str]) -> Vec<Item> {
    ids.iter()
        .map(|id| item(id).expect("unknown item id in room definition"))
        .collect()
}

fn string_vec(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
