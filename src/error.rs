//! Error types for board parsing and event replay.

use std::fmt;

/// A player move was issued when the event log should already have ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceViolation {
    /// Every egg has been collected; only a `GameOver` may follow.
    NoEggsRemaining,
    /// The player has left the board; only a `GameOver` may follow.
    PlayerAbsent,
}

impl fmt::Display for SequenceViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceViolation::NoEggsRemaining => {
                write!(f, "player moved after all eggs were collected")
            }
            SequenceViolation::PlayerAbsent => {
                write!(f, "player moved after leaving the board")
            }
        }
    }
}

/// A `GameOver` event claimed an outcome the board does not show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeMismatch {
    /// Claimed a win while eggs remain.
    EggsRemaining,
    /// Claimed a loss while the player is still on the board.
    PlayerPresent,
}

impl fmt::Display for OutcomeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeMismatch::EggsRemaining => write!(f, "player hasn't collected all the eggs"),
            OutcomeMismatch::PlayerPresent => write!(f, "player is still on the board"),
        }
    }
}

/// Errors raised while applying events to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The event log issued a move it should not have.
    Sequence(SequenceViolation),
    /// The event log claimed the wrong outcome.
    Outcome(OutcomeMismatch),
    /// A tile the engine relies on could not be found.
    ///
    /// This indicates an engine defect rather than a bad event log.
    LookupFailure(&'static str),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Sequence(v) => write!(f, "sequence violation: {v}"),
            GameError::Outcome(m) => write!(f, "outcome mismatch: {m}"),
            GameError::LookupFailure(what) => write!(f, "{what} not located on the board"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<SequenceViolation> for GameError {
    fn from(v: SequenceViolation) -> Self {
        GameError::Sequence(v)
    }
}

impl From<OutcomeMismatch> for GameError {
    fn from(m: OutcomeMismatch) -> Self {
        GameError::Outcome(m)
    }
}

/// A replay aborted at a specific event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunError {
    /// Zero-based index of the failing event.
    pub event: usize,
    /// What went wrong.
    pub error: GameError,
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event {}: {}", self.event, self.error)
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Why a board snapshot could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Width or height is zero.
    EmptyBoard,
    /// The text has fewer lines than the board has rows.
    MissingRow,
    /// A line is too short to hold the row label and every column.
    ShortRow {
        /// Number of characters found on the line.
        len: usize,
    },
    /// A character with no tile mapping.
    InvalidChar {
        /// Board column of the character.
        column: usize,
        /// The offending character.
        found: char,
    },
    /// A second player tile.
    DuplicatePlayer {
        /// Board column of the second player.
        column: usize,
    },
}

/// Error parsing the board text format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    /// Zero-based line of the text (top row is line 0).
    pub line: usize,
    /// What was wrong with it.
    pub kind: ParseErrorKind,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line;
        match self.kind {
            ParseErrorKind::EmptyBoard => write!(f, "board has a zero dimension"),
            ParseErrorKind::MissingRow => write!(f, "line {line}: missing board row"),
            ParseErrorKind::ShortRow { len } => {
                write!(f, "line {line}: row too short ({len} characters)")
            }
            ParseErrorKind::InvalidChar { column, found } => {
                write!(f, "line {line}, column {column}: invalid character {found:?}")
            }
            ParseErrorKind::DuplicatePlayer { column } => {
                write!(f, "line {line}, column {column}: second player on the board")
            }
        }
    }
}

impl std::error::Error for ParseError {}
