//! Interactive play mode
//!
//! Text-based game loop against a bot strategy. Reads one line per turn from
//! any `BufRead` so the loop can be driven from tests as well as stdin.

use crate::game::{MatchEngine, Outcome, Phase};
use crate::output::{format_chain, write_diagnostics};
use crate::strategy::{MoveStrategy, RarestLetterTrapStrategy};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

/// Options for the interactive loop
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayOptions {
    /// Pause before each bot move
    pub think: Duration,
}

/// Run the interactive game until the player quits or input ends
///
/// Strategy diagnostics are drained after every bot move and written to
/// `out` as warnings.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<S, R, W>(
    engine: &mut MatchEngine<'_, S>,
    mut input: R,
    mut out: W,
    options: PlayOptions,
) -> io::Result<()>
where
    S: MoveStrategy,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n{}", "═".repeat(62).bright_cyan())?;
    writeln!(out, "{}", "  Atlas - the word chain game".bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(62).bright_cyan())?;
    writeln!(
        out,
        "\nName a word; each next word starts with the last letter of the previous one."
    )?;
    writeln!(
        out,
        "Bot: {}. Commands: 'hint', 'resign', 'reset' or 'new', 'quit'\n",
        engine.strategy().name()
    )?;

    loop {
        match engine.phase() {
            Phase::AwaitingBotMove => {
                if !options.think.is_zero() {
                    thread::sleep(options.think);
                }
                match engine.request_bot_move() {
                    Ok(outcome) => writeln!(out, "{}", style_outcome(&outcome))?,
                    Err(err) => writeln!(out, "{}", err.to_string().red())?,
                }
                write_diagnostics(&mut out, &engine.take_diagnostics())?;
            }
            Phase::PlayerWon | Phase::GameOver(_) => {
                writeln!(out, "\n  Chain: {}\n", format_chain(&engine.played_display()))?;
                let answer = prompt(&mut input, &mut out, "Play again? (yes/no)")?
                    .map(|answer| answer.to_lowercase());
                if matches!(answer.as_deref(), Some("yes" | "y")) {
                    writeln!(out, "\n{}\n", engine.reset())?;
                } else {
                    writeln!(out, "\nThanks for playing!\n")?;
                    return Ok(());
                }
            }
            Phase::AwaitingFirstMove | Phase::AwaitingPlayerMove => {
                let label = match engine.required_letter() {
                    Some(letter) => format!("Your word ({})", letter.to_ascii_uppercase()),
                    None => "Your word (any)".to_string(),
                };
                let Some(line) = prompt(&mut input, &mut out, &label)? else {
                    return Ok(());
                };

                match line.to_lowercase().as_str() {
                    "quit" | "q" | "exit" => {
                        writeln!(out, "\nThanks for playing!\n")?;
                        return Ok(());
                    }
                    "reset" | "new" | "restart" => writeln!(out, "\n{}\n", engine.reset())?,
                    "hint" => writeln!(out, "{}", hint(engine).bright_black())?,
                    "resign" => match engine.resign() {
                        Ok(outcome) => writeln!(out, "{}", style_outcome(&outcome))?,
                        Err(err) => writeln!(out, "{}", err.to_string().red())?,
                    },
                    _ => match engine.submit_player_move(&line) {
                        Ok(outcome) => writeln!(out, "{}", style_outcome(&outcome))?,
                        Err(err) => {
                            writeln!(out, "{}", Outcome::Rejected(err).to_string().red())?;
                        }
                    },
                }
            }
        }
    }
}

/// Suggest a move for the player
fn hint<S: MoveStrategy>(engine: &MatchEngine<'_, S>) -> String {
    let moves = engine.legal_moves();
    let vocabulary = engine.vocabulary();
    let suggestion =
        RarestLetterTrapStrategy.select_move(engine.state(), vocabulary, &moves);

    match suggestion {
        Some(word) => format!(
            "Hint: {} ({} option{} available)",
            vocabulary.display_of(word).unwrap_or(word),
            moves.len(),
            if moves.len() == 1 { "" } else { "s" }
        ),
        None => "Hint: nothing left to play; try 'resign'".to_string(),
    }
}

fn style_outcome(outcome: &Outcome) -> String {
    let text = outcome.to_string();
    match outcome {
        Outcome::Accepted { .. } => text.green().to_string(),
        Outcome::BotPlayed { .. } => text.bright_white().to_string(),
        Outcome::PlayerWon { .. } => text.bright_green().bold().to_string(),
        Outcome::GameOver(_) => text.yellow().bold().to_string(),
        Outcome::Rejected(_) => text.red().to_string(),
        Outcome::Reset => text.cyan().to_string(),
    }
}

/// Write a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
