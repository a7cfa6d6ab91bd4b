use crate::command::Command;
use crate::engine::items::{handle_examine, handle_inventory, handle_take, handle_use};
use crate::engine::lookup::find_room;
use crate::engine::message::Message;
use crate::engine::movement::handle_move;
use crate::engine::render::{NOWHERE, render_room};
use crate::world::GameState;

pub const HELP_TEXT: &str = "Commands:\n\
  look              - describe the room you are in\n\
  go <direction>    - move north, east, south, west, up or down\n\
  take <item>       - pick up an item\n\
  examine <item>    - inspect an item here or in your pack\n\
  use <item>        - use an item you are carrying\n\
  inventory         - list what you are carrying\n\
  help              - show this message\n\
  quit              - leave the game";

/// Apply one command to a snapshot.
///
/// Pure and total: `state` is never modified, and every command yields a
/// new snapshot plus the text to show. Ending the session on `Quit` is the
/// caller's job.
pub fn update(state: &GameState, command: &Command) -> (GameState, Message) {
    match command {
        Command::Look => handle_look(state),
        Command::Move(direction) => handle_move(state, *direction),
        Command::Take(item) => handle_take(state, item),
        Command::Inventory => handle_inventory(state),
        Command::Examine(name) => handle_examine(state, name),
        Command::Use(name) => handle_use(state, name),
        Command::Help => (state.clone(), Message::from(HELP_TEXT)),
        Command::Quit => (state.clone(), Message::from("Goodbye.")),
        Command::Unknown(text) => (
            state.clone(),
            Message::new(format!("I don't understand {}", text)),
        ),
    }
}

fn handle_look(state: &GameState) -> (GameState, Message) {
    let text = match find_room(&state.rooms, &state.current_room) {
        Some(room) => render_room(room),
        None => NOWHERE.to_string(),
    };
    (state.clone(), Message::new(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Direction, Item, Room, RoomName};

    fn gate_and_yard() -> GameState {
        GameState::new(
            "Gate",
            vec![
                Room::new("Gate", "A rusted gate.")
                    .with_exit(Direction::North, "Yard")
                    .with_item("medallion"),
                Room::new("Yard", "A muddy yard.")
                    .with_exit(Direction::South, "Gate")
                    .with_item("sword"),
            ],
        )
    }

    #[test]
    fn look_describes_current_room() {
        let s = gate_and_yard();
        let (next, msg) = update(&s, &Command::Look);
        assert_eq!(msg, "Gate\nA rusted gate.\n\nYou see here:\n- medallion");
        assert_eq!(next, s);
    }

    #[test]
    fn look_from_nowhere() {
        let mut s = gate_and_yard();
        s.current_room = RoomName::from("Limbo");
        let (next, msg) = update(&s, &Command::Look);
        assert_eq!(msg, "You are nowhere.");
        assert_eq!(next, s);
    }

    #[test]
    fn fixed_replies() {
        let s = gate_and_yard();
        assert_eq!(update(&s, &Command::Help).1.as_str(), HELP_TEXT);
        assert_eq!(update(&s, &Command::Quit).1, "Goodbye.");
        assert_eq!(
            update(&s, &Command::Unknown("dance".to_string())).1,
            "I don't understand dance"
        );
    }

    #[test]
    fn quit_can_repeat() {
        let s = gate_and_yard();
        let (once, _) = update(&s, &Command::Quit);
        let (twice, msg) = update(&once, &Command::Quit);
        assert_eq!(twice, s);
        assert_eq!(msg, "Goodbye.");
    }

    #[test]
    fn old_snapshots_survive_updates() {
        let s = gate_and_yard();
        let (taken, _) = update(&s, &Command::Take(Item::new("medallion")));
        let (moved, _) = update(&taken, &Command::Move(Direction::North));

        assert_eq!(s, gate_and_yard());
        assert_eq!(taken.current_room, RoomName::from("Gate"));
        assert_eq!(moved.inventory, vec![Item::new("medallion")]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;
        use strum::IntoEnumIterator;

        fn direction() -> impl Strategy<Value = Direction> {
            proptest::sample::select(Direction::iter().collect::<Vec<_>>())
        }

        fn word() -> impl Strategy<Value = String> {
            prop_oneof![
                Just("medallion".to_string()),
                Just("Medallion".to_string()),
                Just("sword".to_string()),
                Just("torch".to_string()),
                "[a-zA-Z ]{0,12}",
            ]
        }

        fn command() -> impl Strategy<Value = Command> {
            prop_oneof![
                Just(Command::Look),
                direction().prop_map(Command::Move),
                Just(Command::Inventory),
                word().prop_map(Command::Examine),
                word().prop_map(Command::Use),
                word().prop_map(|w| Command::Take(Item::new(w))),
                Just(Command::Help),
                Just(Command::Quit),
                word().prop_map(Command::Unknown),
            ]
        }

        fn read_only(command: &Command) -> bool {
            !matches!(command, Command::Move(_) | Command::Take(_))
        }

        proptest! {
            #[test]
            fn any_command_sequence_is_handled(commands in prop::collection::vec(command(), 0..40)) {
                let mut state = gate_and_yard();
                for command in &commands {
                    let (next, msg) = update(&state, command);
                    prop_assert!(!msg.as_str().is_empty());
                    prop_assert_eq!(next.rooms.len(), state.rooms.len());
                    prop_assert!(next.inventory.len() >= state.inventory.len());
                    if read_only(command) {
                        prop_assert_eq!(&next, &state);
                    }
                    state = next;
                }
            }

            #[test]
            fn room_order_never_changes(commands in prop::collection::vec(command(), 0..40)) {
                let start = gate_and_yard();
                let mut state = start.clone();
                for command in &commands {
                    state = update(&state, command).0;
                }
                let names = |s: &GameState| s.rooms.iter().map(|r| r.name.clone()).collect::<Vec<_>>();
                prop_assert_eq!(names(&state), names(&start));
            }
        }
    }
}
