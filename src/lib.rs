// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Chuckie: a deterministic Chuckie Egg board simulator.
//!
//! A game is an initial board plus an event log. Replaying the log applies
//! each player move, then lets gravity and the hens act, and finally checks
//! that the log's claimed outcome matches the board.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   CLI (run / replay / check)        │
//! ├─────────────────────────────────────┤
//! │   Replay: recordings, verify, views │
//! ├─────────────────────────────────────┤
//! │   Game: board, events, physics      │
//! └─────────────────────────────────────┘
//! ```

pub mod error;
pub mod game;
pub mod replay;

pub use error::{GameError, OutcomeMismatch, ParseError, RunError, SequenceViolation};

// Re-export key game types at crate root for convenience
pub use game::{Board, Direction, Event, Game, Position, Step, Tile};
pub use replay::{Recording, ReplayEngine, ReplayError, Verdict};
