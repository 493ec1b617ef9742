//! ASCII renderer for terminal viewing.

use crate::game::Game;

/// Render a game to ASCII.
///
/// Output format:
/// ```text
/// Turn 1/3  Eggs: 1  Next: left
/// 1|*O |
/// 0|===|
///   012
///
/// Legend: ==Platform  #=Ladder  *=Egg  O=Player  @=Player on ladder  p/q=Hen heading right/left
/// ```
#[must_use]
pub fn render_ascii(game: &Game) -> String {
    let mut output = String::new();

    render_header(&mut output, game);

    output.push_str(&game.board().to_string());
    output.push('\n');

    output.push_str(
        "\nLegend: ==Platform  #=Ladder  *=Egg  O=Player  @=Player on ladder  p/q=Hen heading right/left\n",
    );

    output
}

/// Render the header line with turn, eggs and status.
fn render_header(output: &mut String, game: &Game) {
    let turn = game.turn();
    let total = game.events().len();
    let eggs = game.board().count_eggs();

    output.push_str(&format!("Turn {turn}/{total}  Eggs: {eggs}  "));
    match (game.outcome(), game.next_event()) {
        (Some(true), _) => output.push_str("Won"),
        (Some(false), _) => output.push_str("Lost"),
        (None, Some(event)) => output.push_str(&format!("Next: {event}")),
        (None, None) => output.push_str("End of log"),
    }
    output.push('\n');
}
