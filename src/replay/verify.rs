//! Checking a recording against its recorded expectations.

use std::fmt;

use tracing::{debug, instrument};

use crate::error::RunError;
use crate::game::Board;
use crate::replay::{Recording, ReplayError};

/// Result of verifying a recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Every frame matched and the log failed only if expected to.
    Passed,
    /// The board after an event differs from the recorded frame.
    FrameMismatch {
        /// Index of the event after which the boards differ.
        event: usize,
        /// Recorded board text.
        expected: String,
        /// Board text produced by the replay.
        actual: String,
    },
    /// The replay produced fewer frames than were recorded.
    FrameCount {
        /// Number of recorded frames.
        expected: usize,
        /// Number of frames the replay produced.
        actual: usize,
    },
    /// The log failed although no error was expected.
    UnexpectedError(RunError),
    /// The log replayed cleanly although an error was expected.
    MissingError,
    /// The log failed, but not at the event the recording names.
    WrongErrorEvent {
        /// Index of the event expected to fail.
        expected: usize,
        /// The failure the replay produced.
        actual: RunError,
    },
}

impl Verdict {
    /// Whether the recording passed.
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Verdict::Passed)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Passed => write!(f, "passed"),
            Verdict::FrameMismatch {
                event,
                expected,
                actual,
            } => write!(
                f,
                "board after event {event} differs\nexpected:\n{expected}\nactual:\n{actual}"
            ),
            Verdict::FrameCount { expected, actual } => {
                write!(f, "expected {expected} frames, replay produced {actual}")
            }
            Verdict::UnexpectedError(e) => write!(f, "unexpected error at {e}"),
            Verdict::MissingError => write!(f, "expected an error, replay succeeded"),
            Verdict::WrongErrorEvent { expected, actual } => {
                write!(f, "expected an error at event {expected}, replay failed at {actual}")
            }
        }
    }
}

/// Replay a recording and compare it with its expectations.
///
/// Frames are compared as parsed boards, so the axis line and anything
/// after the closing `|` of a row may differ. An erroring log must still
/// produce every recorded frame before it fails, and must fail at
/// `error_event` when the recording names one.
///
/// # Errors
///
/// Returns [`ReplayError::Parse`] if the initial board or any frame is
/// malformed. Failures of the log itself are reported in the [`Verdict`].
#[instrument(skip_all, fields(name = %recording.name))]
pub fn verify(recording: &Recording) -> Result<Verdict, ReplayError> {
    let frames = recording
        .frames
        .iter()
        .map(|text| Board::parse(recording.width, recording.height, text))
        .collect::<Result<Vec<_>, _>>()?;
    let mut game = recording.game()?;

    let mut mismatch = None;
    let mut observed = 0;
    let result = game.run_with(|index, board| {
        observed += 1;
        if mismatch.is_none()
            && let Some(expected) = frames.get(index)
            && expected != board
        {
            mismatch = Some(Verdict::FrameMismatch {
                event: index,
                expected: expected.to_string(),
                actual: board.to_string(),
            });
        }
    });

    let verdict = match (result, mismatch) {
        (_, Some(mismatch)) => mismatch,
        (Err(e), None) if !recording.expect_error => Verdict::UnexpectedError(e),
        (Ok(_), None) if recording.expect_error => Verdict::MissingError,
        (_, None) if observed < frames.len() => Verdict::FrameCount {
            expected: frames.len(),
            actual: observed,
        },
        (Err(e), None) => match recording.error_event {
            Some(expected) if expected != e.event => Verdict::WrongErrorEvent {
                expected,
                actual: e,
            },
            _ => Verdict::Passed,
        },
        (Ok(_), None) => Verdict::Passed,
    };
    debug!(%verdict, frames = observed, "verified");
    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{OutcomeMismatch, SequenceViolation};
    use crate::game::parse_events;

    fn recording(events: &str, frames: &[&str]) -> Recording {
        Recording {
            name: String::new(),
            width: 3,
            height: 2,
            board: "1|* O|\n0|===|".to_string(),
            events: parse_events(events).unwrap(),
            frames: frames.iter().map(ToString::to_string).collect(),
            expect_error: false,
            error_event: None,
        }
    }

    #[test]
    fn test_verify_passes() {
        let rec = recording("L L win", &["1|*O |\n0|===|", "1|O  |\n0|===|\n  012"]);
        assert_eq!(verify(&rec), Ok(Verdict::Passed));
    }

    #[test]
    fn test_verify_frame_mismatch() {
        let rec = recording("L L win", &["1|*O |\n0|===|", "1| O |\n0|===|"]);
        let verdict = verify(&rec).unwrap();
        assert!(matches!(verdict, Verdict::FrameMismatch { event: 1, .. }));
        assert!(!verdict.is_pass());
        assert!(verdict.to_string().contains("event 1"));
    }

    #[test]
    fn test_verify_frame_count() {
        let rec = recording("L", &["1|*O |\n0|===|", "1|O  |\n0|===|"]);
        assert_eq!(
            verify(&rec),
            Ok(Verdict::FrameCount {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_verify_unexpected_error() {
        let rec = recording("win", &[]);
        assert_eq!(
            verify(&rec),
            Ok(Verdict::UnexpectedError(RunError {
                event: 0,
                error: OutcomeMismatch::EggsRemaining.into(),
            }))
        );
    }

    #[test]
    fn test_verify_expected_error() {
        let mut rec = recording("L L R", &["1|*O |\n0|===|"]);
        rec.expect_error = true;
        assert_eq!(verify(&rec), Ok(Verdict::Passed));

        let mut rec = recording("L L win", &[]);
        rec.expect_error = true;
        assert_eq!(verify(&rec), Ok(Verdict::MissingError));

        let rec = recording("L L R", &[]);
        assert_eq!(
            verify(&rec),
            Ok(Verdict::UnexpectedError(RunError {
                event: 2,
                error: SequenceViolation::NoEggsRemaining.into(),
            }))
        );
    }

    #[test]
    fn test_verify_early_error_misses_frames() {
        // Fails at event 0, so the recorded frame is never produced.
        let mut rec = recording("win L", &["1|*O |\n0|===|"]);
        rec.expect_error = true;
        assert_eq!(
            verify(&rec),
            Ok(Verdict::FrameCount {
                expected: 1,
                actual: 0
            })
        );
    }

    #[test]
    fn test_verify_error_event() {
        let mut rec = recording("L L R", &["1|*O |\n0|===|"]);
        rec.expect_error = true;
        rec.error_event = Some(2);
        assert_eq!(verify(&rec), Ok(Verdict::Passed));

        rec.error_event = Some(1);
        let verdict = verify(&rec).unwrap();
        assert_eq!(
            verdict,
            Verdict::WrongErrorEvent {
                expected: 1,
                actual: RunError {
                    event: 2,
                    error: SequenceViolation::NoEggsRemaining.into(),
                },
            }
        );
        assert!(verdict.to_string().contains("expected an error at event 1"));
    }

    #[test]
    fn test_verify_bad_frame_is_error() {
        let rec = recording("L", &["1|*x |\n0|===|"]);
        assert!(matches!(verify(&rec), Err(ReplayError::Parse(_))));
    }
}
