pub mod command;
pub mod engine;
pub mod error;
pub mod world;

use command::{Command, parse_command};
use engine::{Message, update};
use world::{GameState, World};

pub use error::WorldError;
pub use world::{default_world, load_world_from_file, load_world_from_str};

/// A running game: the current snapshot plus the world's title text.
pub struct Session {
    name: String,
    desc: String,
    state: GameState,
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmStepResult {
        text: String,
        quit: bool,
    }

    #[wasm_bindgen]
    pub struct WasmGame {
        session: Session,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Create a new game from a TOML world string. Call `init()` to get the opening text.
        #[wasm_bindgen(constructor)]
        pub fn new(world_toml: &str) -> Result<WasmGame, JsValue> {
            let world =
                load_world_from_str(world_toml).map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WasmGame {
                session: Session::new(world),
            })
        }

        #[wasm_bindgen]
        pub fn init(&self) -> JsValue {
            to_value(&WasmStepResult {
                text: self.session.intro().into_string(),
                quit: false,
            })
            .unwrap_or(JsValue::NULL)
        }

        /// Process one line from the host and return `{ text, quit }`.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> JsValue {
            let (msg, quit) = self.session.step(input);
            to_value(&WasmStepResult {
                text: msg.into_string(),
                quit,
            })
            .unwrap_or(JsValue::NULL)
        }
    }
}

impl Session {
    pub fn new(world: World) -> Self {
        Session {
            name: world.name.clone(),
            desc: world.desc.clone(),
            state: world.into_state(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Welcome banner followed by a look at the starting room.
    pub fn intro(&self) -> Message {
        let mut text = format!("Welcome to {}!", self.name);
        if !self.desc.trim().is_empty() {
            text.push('\n');
            text.push_str(self.desc.trim());
        }
        text.push_str("\nType 'help' for a list of commands.\n\n");

        let (_, look) = update(&self.state, &Command::Look);
        text.push_str(look.as_str());
        Message::new(text)
    }

    /// Process a single line of input; returns (message, quit?)
    pub fn step(&mut self, input: &str) -> (Message, bool) {
        let command = parse_command(input);
        tracing::debug!(?command, room = %self.state.current_room, "dispatching command");

        let (next, msg) = update(&self.state, &command);
        if next.current_room != self.state.current_room {
            tracing::debug!(from = %self.state.current_room, to = %next.current_room, "player moved");
        }
        self.state = next;

        (msg, matches!(command, Command::Quit))
    }
}
