//! Events replayed against the board.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{GameError, OutcomeMismatch};
use crate::game::{Board, Direction, Tile};

/// A single entry of the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    /// The player tries to step one cell.
    #[serde(rename = "move")]
    PlayerMove(Direction),
    /// The log asserts the game ended, won or lost. Terminal.
    GameOver {
        /// `true` if every egg was collected, `false` if the player was lost.
        won: bool,
    },
}

impl Event {
    /// Whether replay stops after this event.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Event::GameOver { .. })
    }

    /// Apply this event to `board`.
    ///
    /// Blocked moves are silent no-ops. Preconditions on the move sequence
    /// (eggs remaining, player present) are checked by the engine, not here.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::LookupFailure`] if a move finds no player, or
    /// [`GameError::Outcome`] if a `GameOver` claims the wrong outcome.
    pub fn apply(self, board: &mut Board) -> Result<(), GameError> {
        match self {
            Event::PlayerMove(direction) => apply_move(board, direction),
            Event::GameOver { won } => check_outcome(board, won),
        }
    }
}

/// Step the player one cell in `direction` if nothing stops it.
fn apply_move(board: &mut Board, direction: Direction) -> Result<(), GameError> {
    let from = board
        .find_player()
        .ok_or(GameError::LookupFailure("player"))?;
    let Some(mut player) = board.get(from).as_player() else {
        return Err(GameError::LookupFailure("player"));
    };

    // Climbing needs a ladder; walking is always attempted.
    if !direction.is_horizontal() && !player.on_ladder {
        trace!(%direction, "player not on a ladder, cannot climb");
        return Ok(());
    }

    let to = from.step(direction);
    let target = board.get(to);

    if matches!(target, Tile::Hen(_)) {
        trace!(%to, "player blocked by hen");
        return Ok(());
    }
    if target.is_obstruction() {
        trace!(%to, "player blocked by obstruction");
        return Ok(());
    }

    board.set(from, player.vacated());
    player.on_ladder = target == Tile::Ladder;
    board.set(to, Tile::Player(player));
    Ok(())
}

/// Check that the board agrees with the claimed outcome.
fn check_outcome(board: &Board, won: bool) -> Result<(), GameError> {
    if won && board.find_egg() {
        return Err(OutcomeMismatch::EggsRemaining.into());
    }
    if !won && board.find_player().is_some() {
        return Err(OutcomeMismatch::PlayerPresent.into());
    }
    Ok(())
}

impl fmt::Display for Event {
    /// Compact text form, accepted back by [`FromStr`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::PlayerMove(direction) => write!(f, "{direction}"),
            Event::GameOver { won: true } => write!(f, "win"),
            Event::GameOver { won: false } => write!(f, "lose"),
        }
    }
}

/// Error returned when an event token is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEvent(pub String);

impl fmt::Display for UnknownEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown event '{}'", self.0)
    }
}

impl std::error::Error for UnknownEvent {}

impl FromStr for Event {
    type Err = UnknownEvent;

    /// Parse a direction (`left`, `L`, ...) or `win`/`lose` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "win" | "won" => Ok(Event::GameOver { won: true }),
            "lose" | "lost" => Ok(Event::GameOver { won: false }),
            other => other
                .parse::<Direction>()
                .map(Event::PlayerMove)
                .map_err(|_| UnknownEvent(s.to_string())),
        }
    }
}

/// Parse a whitespace- or comma-separated list of event tokens.
///
/// # Errors
///
/// Returns the first token that is not a valid event.
pub fn parse_events(text: &str) -> Result<Vec<Event>, UnknownEvent> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::parse::<Event>)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::testing::{board_from_rows as make_board, board_rows as rows};
    use crate::game::{Hen, Player, Position};

    #[test]
    fn test_move_onto_egg_collects_it() {
        let mut board = make_board(&["* O", "==="]);
        Event::PlayerMove(Direction::Left).apply(&mut board).unwrap();
        assert_eq!(rows(&board), vec!["*O ", "==="]);
        Event::PlayerMove(Direction::Left).apply(&mut board).unwrap();
        assert_eq!(rows(&board), vec!["O  ", "==="]);
        assert!(!board.find_egg());
    }

    #[test]
    fn test_move_into_obstruction_is_noop() {
        let mut board = make_board(&["=O ", "==="]);
        let before = board.clone();
        Event::PlayerMove(Direction::Left).apply(&mut board).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_into_hen_is_noop() {
        let mut board = make_board(&["pO ", "==="]);
        let before = board.clone();
        Event::PlayerMove(Direction::Left).apply(&mut board).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_climb_requires_ladder() {
        let mut board = make_board(&["   ", " O ", "==="]);
        let before = board.clone();
        Event::PlayerMove(Direction::Up).apply(&mut board).unwrap();
        Event::PlayerMove(Direction::Down).apply(&mut board).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_walk_onto_ladder_and_climb() {
        let mut board = make_board(&[" # ", " #O", "==="]);
        Event::PlayerMove(Direction::Left).apply(&mut board).unwrap();
        assert_eq!(
            board.get(Position::new(1, 1)),
            Tile::Player(Player::on_ladder())
        );

        Event::PlayerMove(Direction::Up).apply(&mut board).unwrap();
        // The ladder is restored behind the climbing player.
        assert_eq!(rows(&board), vec![" @ ", " # ", "==="]);

        Event::PlayerMove(Direction::Right).apply(&mut board).unwrap();
        assert_eq!(rows(&board), vec![" #O", " # ", "==="]);
    }

    #[test]
    fn test_walk_off_board_edge() {
        let mut board = make_board(&["O", "="]);
        Event::PlayerMove(Direction::Left).apply(&mut board).unwrap();
        assert_eq!(board.find_player(), None);
    }

    #[test]
    fn test_move_without_player_is_lookup_failure() {
        let mut board = make_board(&["* ", "=="]);
        assert_eq!(
            Event::PlayerMove(Direction::Left).apply(&mut board),
            Err(GameError::LookupFailure("player"))
        );
    }

    #[test]
    fn test_game_over_checks() {
        let mut board = make_board(&["* O", "==="]);
        assert_eq!(
            Event::GameOver { won: true }.apply(&mut board),
            Err(OutcomeMismatch::EggsRemaining.into())
        );
        assert_eq!(
            Event::GameOver { won: false }.apply(&mut board),
            Err(OutcomeMismatch::PlayerPresent.into())
        );

        let mut board = make_board(&["  O", "==="]);
        assert_eq!(Event::GameOver { won: true }.apply(&mut board), Ok(()));

        let mut board = make_board(&["* p", "==="]);
        assert_eq!(Event::GameOver { won: false }.apply(&mut board), Ok(()));
        assert_eq!(board.get(Position::new(2, 1)), Tile::Hen(Hen::new()));
    }

    #[test]
    fn test_event_text_form() {
        assert_eq!(
            parse_events("L r, UP down win LOSE").unwrap(),
            vec![
                Event::PlayerMove(Direction::Left),
                Event::PlayerMove(Direction::Right),
                Event::PlayerMove(Direction::Up),
                Event::PlayerMove(Direction::Down),
                Event::GameOver { won: true },
                Event::GameOver { won: false },
            ]
        );
        assert_eq!(
            parse_events("left jump"),
            Err(UnknownEvent("jump".to_string()))
        );
        for event in [Event::PlayerMove(Direction::Up), Event::GameOver { won: false }] {
            assert_eq!(event.to_string().parse::<Event>(), Ok(event));
        }
    }

    #[test]
    fn test_only_game_over_is_terminal() {
        assert!(Event::GameOver { won: false }.is_terminal());
        assert!(!Event::PlayerMove(Direction::Down).is_terminal());
    }

    #[test]
    fn test_event_json_form() {
        let json = serde_json::to_string(&Event::PlayerMove(Direction::Left)).unwrap();
        assert_eq!(json, r#"{"move":"left"}"#);
        let json = serde_json::to_string(&Event::GameOver { won: true }).unwrap();
        assert_eq!(json, r#"{"game_over":{"won":true}}"#);
        let event: Event = serde_json::from_str(r#"{"move":"up"}"#).unwrap();
        assert_eq!(event, Event::PlayerMove(Direction::Up));
    }
}
