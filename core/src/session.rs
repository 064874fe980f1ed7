use core::fmt;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Result of one countdown tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    /// The game was already over, the countdown is stopped.
    Ignored,
    Running(u32),
    /// This tick used up the last second and lost the game.
    Expired,
}

/// Choice offered once a game ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndChoice {
    Retry,
    Close,
}

/// How a finished game ended, displayed as the end-of-game message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost { timed_out: bool },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won => f.write_str("You won!"),
            Self::Lost { timed_out: false } => f.write_str("You lost!"),
            Self::Lost { timed_out: true } => f.write_str("You lost!\nYour time ran out!"),
        }
    }
}

/// One play-through: a board, the configuration it was built from and the countdown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    config: GameConfig,
    board: Board,
    time_remaining: u32,
    timed_out: bool,
}

impl Session {
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        Self::with_board(config, Board::initialize(config, rng))
    }

    /// Wraps an already built board. Retrying still generates a fresh board from `config`.
    pub fn with_board(config: GameConfig, board: Board) -> Self {
        debug_assert_eq!(
            board.size(),
            config.board_size(),
            "board does not match the configuration"
        );
        log::debug!(
            "New session: {}x{} board, {} mines, {}s",
            config.size(),
            config.size(),
            board.total_mines(),
            config.time_limit()
        );
        Self {
            config,
            board,
            time_remaining: config.time_limit(),
            timed_out: false,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.board.state()
    }

    pub fn is_finished(&self) -> bool {
        self.board.is_finished()
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        self.board.reveal(coords)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        self.board.toggle_flag(coords)
    }

    /// Counts down one second. Reaching zero while the game is running loses it.
    pub fn decrement_time(&mut self) -> Tick {
        if self.board.is_finished() || self.time_remaining == 0 {
            return Tick::Ignored;
        }

        self.time_remaining -= 1;
        if self.time_remaining > 0 {
            return Tick::Running(self.time_remaining);
        }

        log::debug!("Time ran out");
        self.timed_out = true;
        self.board.finish(false);
        Tick::Expired
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.board.state() {
            GameState::InProgress => None,
            GameState::Won => Some(Outcome::Won),
            GameState::Lost => Some(Outcome::Lost {
                timed_out: self.timed_out,
            }),
        }
    }

    /// A fresh session with the same configuration and a full countdown.
    pub fn retry<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        Self::new(self.config, rng)
    }

    pub fn resolve<R: Rng + ?Sized>(self, choice: EndChoice, rng: &mut R) -> Option<Self> {
        log::debug!("End of game choice: {:?}", choice);
        match choice {
            EndChoice::Retry => Some(self.retry(rng)),
            EndChoice::Close => None,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_session(self)
    }
}
