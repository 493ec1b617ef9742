//! Recording files and the replay viewer.
//!
//! Because Chuckie games are 100% deterministic, a recording only needs:
//! - The initial board, in its text form
//! - The event log
//!
//! No state deltas needed. To view turn N, re-run the log from turn 0 to N.
//! Recordings may also carry the expected board after every event, which
//! [`verify`] checks.
//!
//! # Time Travel
//!
//! - **Forward**: Apply the next event
//! - **Backward**: Re-run from turn 0 to (`current_turn` - 1)
//! - **Jump to turn N**: Re-run from turn 0 to N

mod render;
mod text;
mod verify;

pub use render::render_ascii;
pub use text::render_llm;
pub use verify::{Verdict, verify};

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, RunError};
use crate::game::{Board, Event, Game, Step};

/// A replayable game: initial board, event log and optional expectations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recording {
    /// Human-readable label.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Board width in cells.
    pub width: u16,
    /// Board height in cells.
    pub height: u16,
    /// Initial board in text form.
    pub board: String,
    /// The event log.
    pub events: Vec<Event>,
    /// Expected board text after each event.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<String>,
    /// Whether replaying the log is expected to fail.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub expect_error: bool,
    /// Index of the event expected to fail, when `expect_error` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_event: Option<usize>,
}

impl Recording {
    /// Create a recording from an initial board and its event log.
    #[must_use]
    pub fn new(name: impl Into<String>, board: &Board, events: Vec<Event>) -> Self {
        Self {
            name: name.into(),
            width: board.width(),
            height: board.height(),
            board: board.to_string(),
            events,
            frames: Vec::new(),
            expect_error: false,
            error_event: None,
        }
    }

    /// Parse the initial board.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the board text is malformed.
    pub fn parse_board(&self) -> Result<Board, ParseError> {
        Board::parse(self.width, self.height, &self.board)
    }

    /// Build a fresh game at turn 0.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the board text is malformed.
    pub fn game(&self) -> Result<Game, ParseError> {
        Ok(Game::new(self.parse_board()?, self.events.clone()))
    }

    /// Save recording to a file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file operations fail.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    /// Load recording from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if file operations fail or the JSON is invalid.
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// Error type for replay operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayError {
    /// The recording's board could not be parsed.
    Parse(ParseError),
    /// An event in the log failed.
    Run(RunError),
    /// Turn number out of bounds.
    TurnOutOfBounds {
        /// Requested turn.
        requested: usize,
        /// Last reachable turn (the number of events).
        max_turn: usize,
    },
    /// Game is already over.
    GameOver,
}

impl std::fmt::Display for ReplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Invalid board: {e}"),
            Self::Run(e) => write!(f, "Replay failed at {e}"),
            Self::TurnOutOfBounds {
                requested,
                max_turn,
            } => {
                write!(f, "Turn {requested} out of bounds (max: {max_turn})")
            }
            Self::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Run(e) => Some(e),
            Self::TurnOutOfBounds { .. } | Self::GameOver => None,
        }
    }
}

impl From<ParseError> for ReplayError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RunError> for ReplayError {
    fn from(e: RunError) -> Self {
        Self::Run(e)
    }
}

/// Replay engine - steps through a recording deterministically.
///
/// Since games are deterministic, this engine can:
/// - Step forward by applying one event
/// - Step backward by replaying from turn 0
/// - Jump to any turn by replaying from turn 0
#[derive(Debug, Clone)]
pub struct ReplayEngine {
    /// The recording being replayed.
    recording: Recording,
    /// Current game state.
    game: Game,
}

impl ReplayEngine {
    /// Create a new replay engine from a recording, starting at turn 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be parsed.
    pub fn new(recording: Recording) -> Result<Self, ReplayError> {
        Self::new_at_turn(recording, 0)
    }

    /// Create a new replay engine at a specific turn.
    ///
    /// This replays from turn 0 to the target turn, stopping early at a
    /// `GameOver`.
    ///
    /// # Errors
    ///
    /// Returns an error if the turn is past the end of the log, the board
    /// cannot be parsed, or an event on the way fails.
    pub fn new_at_turn(recording: Recording, target_turn: usize) -> Result<Self, ReplayError> {
        let max_turn = recording.events.len();
        if target_turn > max_turn {
            return Err(ReplayError::TurnOutOfBounds {
                requested: target_turn,
                max_turn,
            });
        }

        let mut game = recording.game()?;
        while game.turn() < target_turn {
            if game.step()? != Step::Applied {
                break;
            }
        }

        Ok(Self { recording, game })
    }

    /// Get the recording.
    #[must_use]
    pub const fn recording(&self) -> &Recording {
        &self.recording
    }

    /// Get the current game state.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Get current turn number.
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.game.turn()
    }

    /// Check if no further event can be applied.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game.next_event().is_none()
    }

    /// Step forward one turn.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::GameOver`] if a `GameOver` was already
    /// applied, [`ReplayError::TurnOutOfBounds`] at the end of the log, or
    /// the event's own failure.
    pub fn step_forward(&mut self) -> Result<(), ReplayError> {
        if self.game.is_over() {
            return Err(ReplayError::GameOver);
        }

        match self.game.step()? {
            Step::Exhausted => Err(ReplayError::TurnOutOfBounds {
                requested: self.game.turn() + 1,
                max_turn: self.recording.events.len(),
            }),
            Step::Applied | Step::Finished { .. } => Ok(()),
        }
    }

    /// Step backward one turn.
    ///
    /// This replays from turn 0 to (`current_turn` - 1).
    ///
    /// # Errors
    ///
    /// Returns an error if already at turn 0.
    pub fn step_backward(&mut self) -> Result<(), ReplayError> {
        let Some(target) = self.turn().checked_sub(1) else {
            return Err(ReplayError::TurnOutOfBounds {
                requested: 0,
                max_turn: self.recording.events.len(),
            });
        };
        self.goto_turn(target)
    }

    /// Jump to a specific turn.
    ///
    /// This replays from turn 0 to the target turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the turn is out of bounds or an event fails.
    pub fn goto_turn(&mut self, target_turn: usize) -> Result<(), ReplayError> {
        let recording = self.recording.clone();
        *self = Self::new_at_turn(recording, target_turn)?;
        Ok(())
    }

    /// Render current state to ASCII for terminal viewing.
    #[must_use]
    pub fn render_ascii(&self) -> String {
        render_ascii(&self.game)
    }

    /// Render current state to structured text for LLM consumption.
    #[must_use]
    pub fn render_llm(&self) -> String {
        render_llm(&self.game)
    }
}
