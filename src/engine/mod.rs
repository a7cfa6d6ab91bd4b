mod interpreter;
mod items;
mod lookup;
mod lore;
mod message;
mod movement;
mod render;

pub use interpreter::{HELP_TEXT, update};

pub use lookup::{find_exit, find_item_ignore_case, find_room, normalize_name};
pub use lore::{DEFAULT_LORE, lore_for};
pub use message::Message;
pub use render::render_room;
