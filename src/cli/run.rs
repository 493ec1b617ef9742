//! Run command implementation.

use super::output::{RunSummary, format_text};
use super::{CliError, OutputFormat, load_recording, recording_name};
use chuckie::replay::{render_ascii, render_llm};
use chuckie::{Game, Step};
use std::path::Path;
use tracing::info;

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the recording cannot be loaded or an event fails.
pub(crate) fn execute(
    recording_path: &Path,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    let recording = load_recording(recording_path)?;
    let name = recording_name(&recording, recording_path);
    let mut game = recording.game()?;

    info!(%name, events = game.events().len(), "running recording");

    let show = |game: &Game| {
        if !quiet && let Some(frame) = render_frame(format, game) {
            println!("{frame}");
        }
    };

    show(&game);
    let error = loop {
        match game.step() {
            Ok(Step::Applied) => show(&game),
            Ok(Step::Finished { .. }) => {
                show(&game);
                break None;
            }
            Ok(Step::Exhausted) => break None,
            Err(e) => break Some(e),
        }
    };

    let summary = RunSummary::from_game(name, &game, error.as_ref());
    match format {
        OutputFormat::Text | OutputFormat::Llm => print!("{}", format_text(&summary)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    match error {
        Some(e) => Err(CliError::new(format!("Replay failed at {e}"))),
        None => Ok(()),
    }
}

/// Render one frame, or nothing for JSON output.
fn render_frame(format: OutputFormat, game: &Game) -> Option<String> {
    match format {
        OutputFormat::Text => Some(render_ascii(game)),
        OutputFormat::Llm => Some(render_llm(game)),
        OutputFormat::Json => None,
    }
}
