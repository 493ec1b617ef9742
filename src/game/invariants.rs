//! Board invariants - sanity checks that detect engine bugs.
//!
//! Boards built by the parser always satisfy these, and the transition
//! rules preserve them. A violation means the engine itself is wrong.

use crate::game::Board;

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all board invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(board: &Board) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    let players: Vec<_> = board
        .iter()
        .filter(|(_, tile)| tile.as_player().is_some())
        .map(|(pos, _)| pos)
        .collect();
    if players.len() > 1 {
        let positions: Vec<String> = players.iter().map(ToString::to_string).collect();
        violations.push(InvariantViolation {
            message: format!(
                "{} players on the board at {}",
                players.len(),
                positions.join(", ")
            ),
        });
    }

    violations
}

/// Assert all board invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(board: &Board) {
    let violations = check_invariants(board);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Board invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_board: &Board) {}
