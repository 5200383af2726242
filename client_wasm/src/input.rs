//! Keyboard input handling

use game_core::Input;

/// What a key press asks the host to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Game(Input),
    Quit,
}

/// Map a `KeyboardEvent.key` value to a command. Auto-repeat is ignored so
/// holding Space doesn't flap continuously.
pub fn map_key(key: &str, repeat: bool) -> Option<KeyCommand> {
    if repeat {
        return None;
    }
    match key {
        " " | "Spacebar" => Some(KeyCommand::Game(Input::Action)),
        "Escape" | "Esc" => Some(KeyCommand::Quit),
        _ => None,
    }
}

/// Keys whose browser default the page should suppress, repeat or not
pub fn is_game_key(key: &str) -> bool {
    map_key(key, false).is_some()
}
