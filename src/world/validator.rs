use std::collections::HashSet;

use thiserror::Error;

use super::model::{Direction, World};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Report authoring mistakes in a world.
///
/// Nothing here is required for play: the interpreter tolerates dangling
/// exits and duplicate names, it just behaves in surprising ways.
pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if world.rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
    }

    let mut seen_rooms: HashSet<&str> = HashSet::new();
    for room in &world.rooms {
        if !seen_rooms.insert(room.name.as_str()) {
            errors.push(ValidationError::new(format!(
                "duplicate room name '{}'",
                room.name
            )));
        }
    }

    if !seen_rooms.contains(world.start_room.as_str()) {
        errors.push(ValidationError::new(format!(
            "start_room '{}' not found among rooms",
            world.start_room
        )));
    }

    for room in &world.rooms {
        let mut seen_dirs: HashSet<Direction> = HashSet::new();

        for exit in &room.exits {
            if !seen_dirs.insert(exit.direction) {
                errors.push(ValidationError::new(format!(
                    "room '{}' has more than one exit {}",
                    room.name, exit.direction
                )));
            }

            if !seen_rooms.contains(exit.destination.as_str()) {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets missing room '{}'",
                    room.name, exit.direction, exit.destination
                )));
            }
        }

        for item in &room.items {
            if item.name.trim().is_empty() {
                errors.push(ValidationError::new(format!(
                    "room '{}' has an item with an empty name",
                    room.name
                )));
            }
        }
    }

    errors
}
