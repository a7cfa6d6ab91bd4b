use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Identifier of a room. Compared by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomName(String);

impl RoomName {
    pub fn new(name: impl Into<String>) -> Self {
        RoomName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomName {
    fn from(s: &str) -> Self {
        RoomName::new(s)
    }
}

impl From<String> for RoomName {
    fn from(s: String) -> Self {
        RoomName(s)
    }
}

/// Display text shown under a room's name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Description(String);

impl Description {
    pub fn new(text: impl Into<String>) -> Self {
        Description(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Description {
    fn from(s: &str) -> Self {
        Description::new(s)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
    North,
    East,
    South,
    West,
    Up,
    Down,
}

impl Direction {
    /// Single-letter shorthand used at the prompt ("n", "u", ...).
    pub fn from_abbreviation(c: char) -> Option<Direction> {
        match c.to_ascii_lowercase() {
            'n' => Some(Direction::North),
            'e' => Some(Direction::East),
            's' => Some(Direction::South),
            'w' => Some(Direction::West),
            'u' => Some(Direction::Up),
            'd' => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Items are plain values: two items are the same item iff their names match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Item { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    pub direction: Direction,
    pub destination: RoomName,
}

impl Exit {
    pub fn new(direction: Direction, destination: impl Into<RoomName>) -> Self {
        Exit {
            direction,
            destination: destination.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: RoomName,
    pub description: Description,
    pub exits: Vec<Exit>,
    pub items: Vec<Item>,
}

impl Room {
    pub fn new(name: impl Into<RoomName>, description: impl Into<Description>) -> Self {
        Room {
            name: name.into(),
            description: description.into(),
            exits: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn with_exit(mut self, direction: Direction, destination: impl Into<RoomName>) -> Self {
        self.exits.push(Exit::new(direction, destination));
        self
    }

    pub fn with_item(mut self, name: impl Into<String>) -> Self {
        self.items.push(Item::new(name));
        self
    }
}

/// Full snapshot of the world and the player's progress.
///
/// The interpreter never mutates a snapshot in place; every command yields a
/// fresh value, so older snapshots stay valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub current_room: RoomName,
    pub rooms: Vec<Room>,
    /// Most recently taken item first.
    pub inventory: Vec<Item>,
}

impl GameState {
    pub fn new(start_room: impl Into<RoomName>, rooms: Vec<Room>) -> Self {
        GameState {
            current_room: start_room.into(),
            rooms,
            inventory: Vec::new(),
        }
    }
}

/// Authored world content plus the metadata the driver shows at startup.
#[derive(Debug, Clone)]
pub struct World {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub start_room: RoomName,
    pub rooms: Vec<Room>,
}

impl World {
    pub fn into_state(self) -> GameState {
        GameState::new(self.start_room, self.rooms)
    }

    pub fn initial_state(&self) -> GameState {
        GameState::new(self.start_room.clone(), self.rooms.clone())
    }
}
