//! Passive board updates run after every player move: gravity, then hens.

use tracing::trace;

use crate::game::{Board, Tile};

/// Outcome of one round of hen movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HenMoves {
    /// Hens that stepped to a new cell.
    pub moved: usize,
    /// Hens that were blocked and reversed in place.
    pub reversed: usize,
}

/// Pull the player down until it lands or leaves the board.
///
/// Gravity only acts while the game is live: it stops as soon as the player
/// is gone or the last egg has been collected, and it never acts on a
/// player standing on a ladder. Each iteration drops the player by one
/// cell, so the loop is bounded by the board height.
///
/// Returns the number of cells the player fell.
pub fn apply_gravity(board: &mut Board) -> u32 {
    let mut fallen = 0;

    loop {
        let Some(from) = board.find_player() else {
            break;
        };
        if !board.find_egg() {
            break;
        }
        let Some(mut player) = board.get(from).as_player() else {
            break;
        };
        if player.on_ladder {
            break;
        }

        let to = from.below();
        let below = board.get(to);
        if below.is_obstruction() || below.provides_support() {
            break;
        }

        board.set(from, player.vacated());
        player.on_ladder = below == Tile::Ladder;
        board.set(to, Tile::Player(player));
        fallen += 1;
    }

    if fallen > 0 {
        trace!(fallen, "player fell");
    }
    fallen
}

/// Move every hen one step along its patrol.
///
/// Hens are snapshotted in row-major order before any of them moves, so a
/// hen is never processed twice in one round. A hen steps forward when the
/// target is air or the player and the cell under the target is anything
/// but air; the player is overwritten without further effect. Otherwise
/// the hen reverses its patrol and stays put.
pub fn move_hens(board: &mut Board) -> HenMoves {
    let mut result = HenMoves::default();

    for (from, mut hen) in board.hens() {
        let to = from.step(hen.heading());
        let target = board.get(to);
        let footing = board.get(to.below());

        let open = matches!(target, Tile::Air | Tile::Player(_));
        if open && !footing.is_air() {
            board.set(from, Tile::Air);
            board.set(to, Tile::Hen(hen));
            result.moved += 1;
        } else {
            hen.reverse();
            board.set(from, Tile::Hen(hen));
            result.reversed += 1;
            trace!(%from, "hen reversed");
        }
    }

    result
}
