use crate::engine::lookup::{find_item_ignore_case, find_room, find_room_index, normalize_name};
use crate::engine::lore::lore_for;
use crate::engine::message::Message;
use crate::engine::render::{NOWHERE, render_inventory};
use crate::world::{GameState, Item, Room};

pub fn handle_inventory(state: &GameState) -> (GameState, Message) {
    (state.clone(), Message::new(render_inventory(&state.inventory)))
}

/// Move every copy of `item` from the current room to the front of the
/// inventory.
///
/// Matching is exact and case-sensitive, unlike examine and use.
pub fn handle_take(state: &GameState, item: &Item) -> (GameState, Message) {
    let Some(idx) = find_room_index(&state.rooms, &state.current_room) else {
        return (state.clone(), Message::from(NOWHERE));
    };
    let room = &state.rooms[idx];

    if !room.items.contains(item) {
        return (
            state.clone(),
            Message::new(format!("There is no {} here.", item.name)),
        );
    }

    let updated = Room {
        items: room
            .items
            .iter()
            .filter(|i| *i != item)
            .cloned()
            .collect(),
        ..room.clone()
    };

    let mut rooms = state.rooms.clone();
    rooms[idx] = updated;

    let mut inventory = Vec::with_capacity(state.inventory.len() + 1);
    inventory.push(item.clone());
    inventory.extend(state.inventory.iter().cloned());

    let next = GameState {
        current_room: state.current_room.clone(),
        rooms,
        inventory,
    };
    (next, Message::new(format!("You take the {}.", item.name)))
}

/// Lore text for an item in the room or the inventory. Never changes state.
pub fn handle_examine(state: &GameState, name: &str) -> (GameState, Message) {
    let wanted = normalize_name(name);

    // An unresolved room just has nothing in it.
    let room_items: &[Item] = find_room(&state.rooms, &state.current_room)
        .map(|room| room.items.as_slice())
        .unwrap_or(&[]);

    let visible = find_item_ignore_case(room_items, &wanted).is_some()
        || find_item_ignore_case(&state.inventory, &wanted).is_some();

    let text = if visible {
        lore_for(&wanted)
    } else {
        "You don't see that here."
    };
    (state.clone(), Message::from(text))
}

/// Use a carried item. Items are never consumed.
pub fn handle_use(state: &GameState, name: &str) -> (GameState, Message) {
    let wanted = normalize_name(name);

    if find_item_ignore_case(&state.inventory, &wanted).is_none() {
        return (state.clone(), Message::from("You must pick it up first."));
    }

    (state.clone(), Message::from(use_effect(&wanted)))
}

fn use_effect(normalized: &str) -> &'static str {
    match normalized {
        "torch" => "You raise the torch. Shadows scatter into the corners of the room.",
        "witcher medallion" | "medallion" => {
            "You hold the medallion up. It hums faintly: there is magic nearby."
        }
        "map" => "You unfold the map. A red circle marks the cellar beneath the courtyard.",
        "swallow potion" => {
            "You uncork the vial and think better of it. Best keep it for a real wound."
        }
        "bestiary" => "You leaf through the bestiary. Drowners hate fire; good to know.",
        "silver sword" => "You trace a few forms with the silver sword. It sings through the air.",
        _ => "You can't use that right now.",
    }
}
