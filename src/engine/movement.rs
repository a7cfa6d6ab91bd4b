use crate::engine::lookup::{find_exit, find_room};
use crate::engine::message::Message;
use crate::engine::render::NOWHERE;
use crate::world::{Direction, GameState};

/// Follow the current room's exit in `direction`.
///
/// The destination is not checked against the room list; walking into a
/// missing room leaves the player "nowhere" until they walk back out.
pub fn handle_move(state: &GameState, direction: Direction) -> (GameState, Message) {
    let Some(room) = find_room(&state.rooms, &state.current_room) else {
        return (state.clone(), Message::from(NOWHERE));
    };

    let Some(exit) = find_exit(&room.exits, direction) else {
        return (state.clone(), Message::from("You can't go that way."));
    };

    tracing::trace!(from = %room.name, to = %exit.destination, "following exit");

    let next = GameState {
        current_room: exit.destination.clone(),
        ..state.clone()
    };
    (next, Message::new(format!("You go {}.", direction)))
}
