//! Structured text output for LLM consumption.
//!
//! This format is optimized for machine readability while remaining
//! human-parseable. It lists every actor explicitly so a reader does not
//! have to decode the board characters.

use crate::game::{Direction, Game};

/// Render a game to structured text format for LLM consumption.
///
/// Output format:
/// ```text
/// === TURN 1 OF 3 ===
///
/// BOARD (3x2, row 0 at the bottom):
/// 1|*O |
/// 0|===|
///   012
///
/// PLAYER: at (1, 1), standing
/// EGGS: 1 remaining
/// HENS: 0
///
/// NEXT EVENT: left
/// STATUS: in progress
/// ```
#[must_use]
pub fn render_llm(game: &Game) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "=== TURN {} OF {} ===\n\n",
        game.turn(),
        game.events().len()
    ));

    render_board(&mut output, game);
    render_actors(&mut output, game);
    render_status(&mut output, game);

    output
}

/// Render the board text with its dimensions.
fn render_board(output: &mut String, game: &Game) {
    output.push_str(&format!(
        "BOARD ({}x{}, row 0 at the bottom):\n",
        game.width(),
        game.height()
    ));
    output.push_str(&game.board().to_string());
    output.push_str("\n\n");
}

/// Render the player, egg count and every hen.
fn render_actors(output: &mut String, game: &Game) {
    let board = game.board();

    match board.find_player() {
        Some(pos) => {
            let on_ladder = board.get(pos).as_player().is_some_and(|p| p.on_ladder);
            let stance = if on_ladder { "on a ladder" } else { "standing" };
            output.push_str(&format!("PLAYER: at {pos}, {stance}\n"));
        }
        None => output.push_str("PLAYER: absent\n"),
    }

    output.push_str(&format!("EGGS: {} remaining\n", board.count_eggs()));

    let hens = board.hens();
    output.push_str(&format!("HENS: {}\n", hens.len()));
    for (pos, hen) in hens {
        let heading = match hen.heading() {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Up | Direction::Down => "vertical",
        };
        output.push_str(&format!("- hen at {pos} heading {heading}\n"));
    }
    output.push('\n');
}

/// Render the next event and game status.
fn render_status(output: &mut String, game: &Game) {
    match game.next_event() {
        Some(event) => output.push_str(&format!("NEXT EVENT: {event}\n")),
        None => output.push_str("NEXT EVENT: none\n"),
    }

    let status = match game.outcome() {
        Some(true) => "won",
        Some(false) => "lost",
        None if game.next_event().is_some() => "in progress",
        None => "log exhausted",
    };
    output.push_str(&format!("STATUS: {status}\n"));
}
