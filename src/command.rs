use std::str::FromStr;

use serde::Serialize;

use crate::world::{Direction, Item};

/// A structured player action, as consumed by [`crate::engine::update`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Command {
    Look,
    Move(Direction),
    Inventory,
    Examine(String),
    Use(String),
    Take(Item),
    Help,
    Quit,
    Unknown(String),
}

/// Turn one line of player input into a [`Command`].
///
/// Keywords are matched case-insensitively; the text after `take`, `examine`
/// and `use` keeps the letter case the player typed. Lines that match no
/// pattern come back as `Unknown` with their whitespace collapsed.
pub fn parse_command(input: &str) -> Command {
    let words: Vec<&str> = input.split_whitespace().collect();
    let line = words.join(" ");

    let Some((verb, rest)) = words.split_first() else {
        return Command::Unknown(line);
    };
    let verb = verb.to_lowercase();
    let rest = rest.join(" ");

    let parsed = match (verb.as_str(), rest.is_empty()) {
        ("look" | "l", true) => Some(Command::Look),
        ("look" | "l", false) => strip_keyword(&rest, "at").map(|t| Command::Examine(t.to_string())),
        ("inventory" | "inv" | "i", true) => Some(Command::Inventory),
        ("help" | "?", true) => Some(Command::Help),
        ("quit" | "exit" | "q", true) => Some(Command::Quit),
        ("go" | "walk", false) => parse_direction(&rest).map(Command::Move),
        ("take" | "get", false) => Some(Command::Take(Item::new(rest))),
        ("examine" | "x", false) => Some(Command::Examine(rest)),
        ("use", false) => Some(Command::Use(rest)),
        (word, true) => parse_direction(word).map(Command::Move),
        _ => None,
    };

    parsed.unwrap_or(Command::Unknown(line))
}

/// "north", "North", "n" all name the same direction.
fn parse_direction(word: &str) -> Option<Direction> {
    if let Ok(dir) = Direction::from_str(word) {
        return Some(dir);
    }

    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Direction::from_abbreviation(c),
        _ => None,
    }
}

/// `strip_keyword("at the torch", "at") == Some("the torch")`
fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let (head, tail) = text.split_once(' ')?;
    if head.eq_ignore_ascii_case(keyword) {
        Some(tail.trim())
    } else {
        None
    }
}
