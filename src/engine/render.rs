use crate::world::{Item, Room};

pub const NOWHERE: &str = "You are nowhere.";

/// Room name, description, then what's lying around.
pub fn render_room(room: &Room) -> String {
    let mut text = String::new();

    text.push_str(room.name.as_str());
    text.push('\n');
    text.push_str(room.description.as_str());
    text.push_str("\n\n");

    if room.items.is_empty() {
        text.push_str("There are no items here.");
    } else {
        text.push_str("You see here:\n");
        let list = room
            .items
            .iter()
            .map(|item| format!("- {}", item.name))
            .collect::<Vec<String>>()
            .join("\n");
        text.push_str(&list);
    }

    text
}

pub fn render_inventory(inventory: &[Item]) -> String {
    if inventory.is_empty() {
        return "You are carrying nothing.".to_string();
    }

    let names = inventory
        .iter()
        .map(|item| item.name.as_str())
        .collect::<Vec<&str>>()
        .join(", ");
    format!("You are carrying: {}", names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_room() {
        let room = Room::new("Tower", "Cold wind.");
        assert_eq!(
            render_room(&room),
            "Tower\nCold wind.\n\nThere are no items here."
        );
    }

    #[test]
    fn items_listed_in_room_order() {
        let room = Room::new("Hall", "A long table.")
            .with_item("torch")
            .with_item("map");
        assert_eq!(
            render_room(&room),
            "Hall\nA long table.\n\nYou see here:\n- torch\n- map"
        );
    }

    #[test]
    fn inventory_is_comma_joined() {
        assert_eq!(render_inventory(&[]), "You are carrying nothing.");
        assert_eq!(
            render_inventory(&[Item::new("map"), Item::new("torch")]),
            "You are carrying: map, torch"
        );
    }
}
