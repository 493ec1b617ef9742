//! Game state and the event replay loop.

use tracing::{debug, instrument};

use crate::error::{GameError, RunError, SequenceViolation};
use crate::game::{Board, Event, apply_gravity, assert_invariants, move_hens};

/// What a single call to [`Game::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A player move was applied, followed by gravity and hens.
    Applied,
    /// A `GameOver` has been applied; replay is finished.
    Finished {
        /// The outcome the log asserted.
        won: bool,
    },
    /// The event log ran out without a `GameOver`.
    Exhausted,
}

/// Complete game state: the board plus the event log being replayed.
#[derive(Debug, Clone)]
pub struct Game {
    /// The board, mutated in place as events are applied.
    board: Board,
    /// The events that make up this game.
    events: Vec<Event>,
    /// Index of the next event to apply.
    cursor: usize,
    /// Outcome asserted by the `GameOver` event, once applied.
    outcome: Option<bool>,
}

impl Game {
    /// Create a game from an initialised board and its event log.
    #[must_use]
    pub fn new(board: Board, events: Vec<Event>) -> Self {
        Self {
            board,
            events,
            cursor: 0,
            outcome: None,
        }
    }

    /// Get the board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Get the board width.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.board.width()
    }

    /// Get the board height.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.board.height()
    }

    /// Get the full event log.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of events applied so far.
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.cursor
    }

    /// The next event to be applied, if any.
    #[must_use]
    pub fn next_event(&self) -> Option<Event> {
        if self.is_over() {
            return None;
        }
        self.events.get(self.cursor).copied()
    }

    /// The outcome asserted by the log, once a `GameOver` has been applied.
    #[must_use]
    pub const fn outcome(&self) -> Option<bool> {
        self.outcome
    }

    /// Whether a `GameOver` has been applied.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Apply the next event.
    ///
    /// A player move is only accepted while eggs remain and the player is
    /// on the board. After a non-terminal event, gravity runs to a fixed
    /// point and then every hen moves once. Once a `GameOver` has been
    /// applied, further calls return [`Step::Finished`] without touching the
    /// board.
    ///
    /// # Errors
    ///
    /// Returns a [`RunError`] naming the failing event. The board may have
    /// been partially updated; a failed game should be discarded.
    pub fn step(&mut self) -> Result<Step, RunError> {
        if let Some(won) = self.outcome {
            return Ok(Step::Finished { won });
        }
        let Some(&event) = self.events.get(self.cursor) else {
            return Ok(Step::Exhausted);
        };
        let index = self.cursor;
        let fail = |error: GameError| RunError {
            event: index,
            error,
        };

        if !event.is_terminal() {
            if !self.board.find_egg() {
                return Err(fail(SequenceViolation::NoEggsRemaining.into()));
            }
            if self.board.find_player().is_none() {
                return Err(fail(SequenceViolation::PlayerAbsent.into()));
            }
        }

        event.apply(&mut self.board).map_err(fail)?;
        self.cursor += 1;

        if let Event::GameOver { won } = event {
            debug!(index, won, "game over");
            self.outcome = Some(won);
            return Ok(Step::Finished { won });
        }

        let fallen = apply_gravity(&mut self.board);
        let hens = move_hens(&mut self.board);
        debug!(
            index,
            %event,
            fallen,
            hens_moved = hens.moved,
            hens_reversed = hens.reversed,
            "applied"
        );
        assert_invariants(&self.board);

        Ok(Step::Applied)
    }

    /// Replay every remaining event.
    ///
    /// Returns the asserted outcome, or `None` if the log ended without a
    /// `GameOver`.
    ///
    /// # Errors
    ///
    /// Returns the first [`RunError`]; replay is all-or-nothing.
    #[instrument(skip(self), fields(events = self.events.len()))]
    pub fn run(&mut self) -> Result<Option<bool>, RunError> {
        self.run_with(|_, _| {})
    }

    /// Replay every remaining event, calling `observer` with the event index
    /// and the board after each event is applied.
    ///
    /// # Errors
    ///
    /// Returns the first [`RunError`]; the observer is not called for the
    /// failing event.
    pub fn run_with<F>(&mut self, mut observer: F) -> Result<Option<bool>, RunError>
    where
        F: FnMut(usize, &Board),
    {
        loop {
            let index = self.cursor;
            match self.step()? {
                Step::Applied => observer(index, &self.board),
                Step::Finished { won } => {
                    if index < self.cursor {
                        observer(index, &self.board);
                    }
                    return Ok(Some(won));
                }
                Step::Exhausted => return Ok(None),
            }
        }
    }
}
