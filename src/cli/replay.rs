//! Replay command implementation.

use super::{CliError, ReplayFormat, load_recording};
use chuckie::ReplayEngine;
use std::path::Path;

/// Execute the replay command.
///
/// Prints the frame at the start turn, then every following frame until
/// the log ends.
///
/// # Errors
///
/// Returns an error if the replay fails.
pub(crate) fn execute(
    recording_path: &Path,
    format: ReplayFormat,
    turn: Option<usize>,
) -> Result<(), CliError> {
    let recording = load_recording(recording_path)?;

    let mut engine = match turn {
        Some(target_turn) => ReplayEngine::new_at_turn(recording, target_turn)?,
        None => ReplayEngine::new(recording)?,
    };

    print_frame(&engine, format);
    while !engine.is_game_over() {
        engine.step_forward()?;
        println!();
        print_frame(&engine, format);
    }

    Ok(())
}

/// Print the engine's current frame.
fn print_frame(engine: &ReplayEngine, format: ReplayFormat) {
    match format {
        ReplayFormat::Text => print!("{}", engine.render_ascii()),
        ReplayFormat::Llm => print!("{}", engine.render_llm()),
    }
}
