//! Game layer for Chuckie.
//!
//! Implements the board rules replayed from an event log:
//! - Board grid of terrain and actors, with bounds-safe access
//! - Player moves, climbing and egg collection
//! - Gravity and hen patrols after every move
//! - The replay loop that checks the log's claimed outcome

mod board;
mod event;
mod invariants;
mod physics;
mod position;
mod state;
mod tile;

pub use board::Board;
pub use event::{Event, UnknownEvent, parse_events};
pub use invariants::{InvariantViolation, assert_invariants, check_invariants};
pub use physics::{HenMoves, apply_gravity, move_hens};
pub use position::{Direction, Position, UnknownDirection};
pub use state::{Game, Step};
pub use tile::{Hen, PatrolPhase, Player, Tile};
