use std::str::FromStr;

use thiserror::Error;
use timebomb_core::{Coord, Coord2, EndChoice};

#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum InputError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command {0:?}, expected `r X Y`, `f X Y` or `q`")]
    Unknown(String),
    #[error("Expected two coordinates after {0:?}")]
    MissingCoords(String),
    #[error("Invalid coordinate {0:?}")]
    InvalidCoord(String),
    #[error("Expected `retry` or `close`, got {0:?}")]
    UnknownChoice(String),
}

/// A line typed by the player during a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Quit,
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(InputError::Empty);
        };

        let make: fn(Coord2) -> Self = match verb.to_ascii_lowercase().as_str() {
            "q" | "quit" => return Ok(Self::Quit),
            "r" | "reveal" => Self::Reveal,
            "f" | "flag" => Self::Flag,
            _ => return Err(InputError::Unknown(verb.to_owned())),
        };

        let (Some(x), Some(y), None) = (words.next(), words.next(), words.next()) else {
            return Err(InputError::MissingCoords(verb.to_owned()));
        };
        Ok(make((parse_coord(x)?, parse_coord(y)?)))
    }
}

fn parse_coord(word: &str) -> Result<Coord, InputError> {
    word.parse()
        .map_err(|_| InputError::InvalidCoord(word.to_owned()))
}

pub(crate) fn parse_choice(line: &str) -> Result<EndChoice, InputError> {
    match line.trim().to_ascii_lowercase().as_str() {
        "r" | "retry" => Ok(EndChoice::Retry),
        "c" | "close" | "q" => Ok(EndChoice::Close),
        other => Err(InputError::UnknownChoice(other.to_owned())),
    }
}
