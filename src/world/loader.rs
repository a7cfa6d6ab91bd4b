use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use super::model::{Description, Direction, Exit, Item, Room, RoomName, World};
use crate::error::{Result, WorldError};

const BUNDLED_WORLD: &str = include_str!("../../worlds/kaer_morhen.toml");

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    id: String,
    name: String,
    start_room: String,
    #[serde(default)]
    desc: String,
}

#[derive(Deserialize)]
struct RoomConfig {
    name: String,
    #[serde(default)]
    desc: String,

    #[serde(default)]
    items: Vec<String>,

    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: String,
    to: String,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Load a world from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> Result<World> {
    let contents = fs::read_to_string(path).map_err(|source| WorldError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let world = load_world_from_str(&contents)?;
    tracing::info!(path = %path.display(), rooms = world.rooms.len(), "loaded world file");
    Ok(world)
}

/// The world compiled into the binary.
pub fn default_world() -> Result<World> {
    load_world_from_str(BUNDLED_WORLD)
}

pub fn load_world_from_str(contents: &str) -> Result<World> {
    let world_file: WorldFile = toml::from_str(contents)?;

    // Basic validation
    if world_file.world.id.trim().is_empty() {
        return Err(WorldError::Invalid("world.id may not be empty".to_string()));
    }
    if world_file.world.start_room.trim().is_empty() {
        return Err(WorldError::Invalid(
            "world.start_room may not be empty".to_string(),
        ));
    }

    let mut rooms: Vec<Room> = Vec::with_capacity(world_file.room.len());

    for room_cfg in world_file.room {
        let exits = room_cfg
            .exit
            .into_iter()
            .map(|e| -> Result<Exit> {
                let direction = parse_direction(&e.direction).map_err(|msg| {
                    WorldError::Invalid(format!("room '{}': {}", room_cfg.name, msg))
                })?;
                Ok(Exit::new(direction, e.to.trim()))
            })
            .collect::<Result<Vec<Exit>>>()?;

        let items = room_cfg
            .items
            .iter()
            .map(|name| Item::new(name.trim()))
            .collect();

        rooms.push(Room {
            name: RoomName::new(room_cfg.name.trim()),
            description: Description::new(normalize_multiline_desc(&room_cfg.desc)),
            exits,
            items,
        });
    }

    Ok(World {
        id: world_file.world.id,
        name: world_file.world.name,
        desc: normalize_multiline_desc(&world_file.world.desc),
        start_room: RoomName::new(world_file.world.start_room.trim()),
        rooms,
    })
}

fn parse_direction(raw: &str) -> std::result::Result<Direction, String> {
    Direction::from_str(raw.trim()).map_err(|_| {
        format!(
            "unknown exit direction '{}': expected north, east, south, west, up or down",
            raw.trim()
        )
    })
}

fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank_lines = 0usize;
    let mut first_text_seen = false;

    for line in raw.lines() {
        // Indentation in TOML never reaches the player.
        let trimmed = line.trim();

        if trimmed.is_empty() {
            pending_blank_lines += 1;
            continue;
        }

        if !first_text_seen {
            result.push_str(trimmed);
            first_text_seen = true;
        } else {
            match pending_blank_lines {
                0 => {
                    // Wrapped line
                    result.push(' ');
                    result.push_str(trimmed);
                }
                1 => {
                    result.push('\n');
                    result.push_str(trimmed);
                }
                _ => {
                    // Paragraph break
                    result.push_str("\n\n");
                    result.push_str(trimmed);
                }
            }
        }

        pending_blank_lines = 0;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"
        [world]
        id = "small"
        name = "Small World"
        start_room = "Gate"

        [[room]]
        name = "Gate"
        desc = """
            An old gate.
            It creaks.

            A path leads on.
        """
        items = ["medallion"]

        [[room.exit]]
        direction = "North"
        to = "Yard"

        [[room]]
        name = "Yard"
        items = ["sword", "torch"]

        [[room.exit]]
        direction = "south"
        to = "Gate"
    "#;

    #[test]
    fn loads_rooms_in_file_order() {
        let world = load_world_from_str(SMALL).unwrap();
        assert_eq!(world.start_room, RoomName::from("Gate"));
        let names: Vec<&str> = world.rooms.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Gate", "Yard"]);
        assert_eq!(
            world.rooms[1].items,
            vec![Item::new("sword"), Item::new("torch")]
        );
        assert_eq!(world.rooms[0].exits, vec![Exit::new(Direction::North, "Yard")]);
        assert_eq!(world.rooms[1].exits, vec![Exit::new(Direction::South, "Gate")]);
    }

    #[test]
    fn folds_wrapped_lines_and_keeps_breaks() {
        let world = load_world_from_str(SMALL).unwrap();
        assert_eq!(
            world.rooms[0].description.as_str(),
            "An old gate. It creaks.\nA path leads on."
        );
        assert_eq!(world.rooms[1].description.as_str(), "");
    }

    #[test]
    fn paragraph_break_needs_two_blank_lines() {
        assert_eq!(normalize_multiline_desc("a\n\n\nb"), "a\n\nb");
        assert_eq!(normalize_multiline_desc("  a  \n  b  "), "a b");
    }

    #[test]
    fn rejects_unknown_direction() {
        let src = r#"
            [world]
            id = "w"
            name = "W"
            start_room = "A"

            [[room]]
            name = "A"

            [[room.exit]]
            direction = "sideways"
            to = "B"
        "#;
        let err = load_world_from_str(src).unwrap_err();
        assert!(matches!(err, WorldError::Invalid(msg) if msg.contains("sideways")));
    }

    #[test]
    fn rejects_empty_start_room() {
        let src = r#"
            [world]
            id = "w"
            name = "W"
            start_room = "  "
        "#;
        assert!(matches!(
            load_world_from_str(src),
            Err(WorldError::Invalid(_))
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            load_world_from_str("[world"),
            Err(WorldError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_world_from_file(Path::new("/no/such/world.toml")).unwrap_err();
        assert!(err.to_string().contains("/no/such/world.toml"));
    }

    #[test]
    fn bundled_world_loads() {
        let world = default_world().unwrap();
        assert!(!world.rooms.is_empty());
        assert!(world.rooms.iter().any(|r| r.name == world.start_room));
    }
}
