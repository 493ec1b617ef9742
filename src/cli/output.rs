//! Output formatting utilities for CLI.

use chuckie::{Game, RunError};
use serde::Serialize;

/// JSON-serializable result of replaying one recording.
#[derive(Debug, Serialize)]
pub(super) struct RunSummary {
    /// Recording name.
    pub(super) name: String,
    /// Events applied.
    pub(super) turns: usize,
    /// Events in the log.
    pub(super) events: usize,
    /// "won" or "lost" once a `GameOver` was applied.
    pub(super) outcome: Option<&'static str>,
    /// Eggs left on the board.
    pub(super) eggs_remaining: usize,
    /// Player position as `[x, y]` (null if absent).
    pub(super) player: Option<[i32; 2]>,
    /// The failing event, if replay aborted.
    pub(super) error: Option<String>,
    /// Final board text.
    pub(super) board: String,
}

impl RunSummary {
    /// Summarise a game after replay.
    pub(super) fn from_game(name: String, game: &Game, error: Option<&RunError>) -> Self {
        let board = game.board();
        Self {
            name,
            turns: game.turn(),
            events: game.events().len(),
            outcome: game.outcome().map(|won| if won { "won" } else { "lost" }),
            eggs_remaining: board.count_eggs(),
            player: board.find_player().map(|pos| [pos.x, pos.y]),
            error: error.map(ToString::to_string),
            board: board.to_string(),
        }
    }
}

/// Format a run summary as human-readable text.
pub(super) fn format_text(summary: &RunSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!("Game Result ({})\n", summary.name));
    match (&summary.error, summary.outcome) {
        (Some(error), _) => output.push_str(&format!("  Failed: {error}\n")),
        (None, Some(outcome)) => output.push_str(&format!("  Outcome: {outcome}\n")),
        (None, None) => output.push_str("  Outcome: none (log ended without game over)\n"),
    }
    output.push_str(&format!("  Turns: {}/{}\n", summary.turns, summary.events));
    output.push_str(&format!("  Eggs remaining: {}\n", summary.eggs_remaining));
    match summary.player {
        Some([x, y]) => output.push_str(&format!("  Player: ({x}, {y})\n")),
        None => output.push_str("  Player: absent\n"),
    }

    output
}

/// Outcome of checking one recording file.
#[derive(Debug, Serialize)]
pub(super) struct CheckResult {
    /// Path of the recording.
    pub(super) path: String,
    /// Recording name.
    pub(super) name: String,
    /// Whether the recording passed.
    pub(super) passed: bool,
    /// Verdict or load error, as text.
    pub(super) verdict: String,
}

/// Aggregate counts over checked recordings.
#[derive(Debug, Default, Serialize)]
pub(super) struct CheckStats {
    /// Recordings checked.
    pub(super) checked: u64,
    /// Recordings that passed.
    pub(super) passed: u64,
    /// Recordings that failed or could not be loaded.
    pub(super) failed: u64,
}

impl CheckStats {
    /// Count one result.
    pub(super) fn add_result(&mut self, result: &CheckResult) {
        self.checked += 1;
        if result.passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Merge counts from another accumulator.
    pub(super) fn merge(&mut self, other: &Self) {
        self.checked += other.checked;
        self.passed += other.passed;
        self.failed += other.failed;
    }
}

/// JSON-serializable check report.
#[derive(Debug, Serialize)]
pub(super) struct JsonCheckReport<'a> {
    /// Aggregate counts.
    pub(super) stats: &'a CheckStats,
    /// Per-recording results, in input order.
    pub(super) results: &'a [CheckResult],
}

/// Format check results as human-readable text.
pub(super) fn format_check_text(results: &[CheckResult], stats: &CheckStats) -> String {
    let mut output = String::new();

    for result in results {
        let status = if result.passed { "PASS" } else { "FAIL" };
        output.push_str(&format!("{status}  {} ({})\n", result.name, result.path));
        if !result.passed {
            for line in result.verdict.lines() {
                output.push_str(&format!("      {line}\n"));
            }
        }
    }

    output.push_str(&format!(
        "\n{} checked, {} passed, {} failed\n",
        stats.checked, stats.passed, stats.failed
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chuckie::{Board, game::parse_events};

    fn game(events: &str) -> Game {
        let board = Board::parse(3, 2, "1|* O|\n0|===|").unwrap();
        Game::new(board, parse_events(events).unwrap())
    }

    #[test]
    fn test_run_summary_won() {
        let mut game = game("L L win");
        game.run().unwrap();
        let summary = RunSummary::from_game("egg".to_string(), &game, None);

        assert_eq!(summary.outcome, Some("won"));
        assert_eq!(summary.player, Some([0, 1]));
        let text = format_text(&summary);
        assert!(text.contains("Outcome: won"));
        assert!(text.contains("Turns: 3/3"));

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains(r#""eggs_remaining":0"#));
    }

    #[test]
    fn test_run_summary_failed() {
        let mut game = game("win");
        let error = game.run().unwrap_err();
        let summary = RunSummary::from_game("egg".to_string(), &game, Some(&error));
        assert!(format_text(&summary).contains("Failed: event 0"));
    }

    #[test]
    fn test_check_stats_and_text() {
        let results = vec![
            CheckResult {
                path: "a.json".to_string(),
                name: "a".to_string(),
                passed: true,
                verdict: "passed".to_string(),
            },
            CheckResult {
                path: "b.json".to_string(),
                name: "b".to_string(),
                passed: false,
                verdict: "expected an error, replay succeeded".to_string(),
            },
        ];
        let mut stats = CheckStats::default();
        let mut other = CheckStats::default();
        stats.add_result(&results[0]);
        other.add_result(&results[1]);
        stats.merge(&other);

        assert_eq!((stats.checked, stats.passed, stats.failed), (2, 1, 1));
        let text = format_check_text(&results, &stats);
        assert!(text.contains("PASS  a (a.json)"));
        assert!(text.contains("FAIL  b (b.json)"));
        assert!(text.contains("2 checked, 1 passed, 1 failed"));
    }
}
