use crate::world::{Direction, Exit, Item, Room, RoomName};

/// First room whose name is exactly `name`.
///
/// `None` means the player's room reference is dangling; callers turn that
/// into a message rather than an error.
pub fn find_room<'a>(rooms: &'a [Room], name: &RoomName) -> Option<&'a Room> {
    rooms.iter().find(|room| &room.name == name)
}

/// Index of the room `find_room` would return.
pub fn find_room_index(rooms: &[Room], name: &RoomName) -> Option<usize> {
    rooms.iter().position(|room| &room.name == name)
}

pub fn find_exit(exits: &[Exit], direction: Direction) -> Option<&Exit> {
    exits.iter().find(|exit| exit.direction == direction)
}

/// Canonical form used by examine, use and the lore table:
/// lower case, single spaces, no surrounding whitespace.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// First item whose normalized name equals `normalized`.
pub fn find_item_ignore_case<'a>(items: &'a [Item], normalized: &str) -> Option<&'a Item> {
    items
        .iter()
        .find(|item| normalize_name(&item.name) == normalized)
}
