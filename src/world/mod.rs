mod loader;
mod model;
mod validator;

pub use loader::{default_world, load_world_from_file, load_world_from_str};

pub use model::{Description, Direction, Exit, GameState, Item, Room, RoomName, World};
pub use validator::{ValidationError, validate_world};
