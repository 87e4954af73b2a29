//! Line-oriented game loop.
//!
//! Renders the engine's state and feeds typed coordinates back into it.
//! Holds no rules of its own.

use crate::config::TictacrlConfig;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictacrl_engine::{Game, GameState, MoveError, ParsePositionError, Position, Turn};
use tracing::{debug, info, instrument, warn};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a piece.
    Move(Position),
    /// Leave the game.
    Quit,
    /// Blank line.
    Skip,
}

/// Interprets one line typed by the player.
pub fn parse_input(line: &str) -> Result<Input, ParsePositionError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Input::Skip);
    }
    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
        return Ok(Input::Quit);
    }
    Ok(Input::Move(line.parse()?))
}

/// Mark shown for a player.
fn mark(turn: Turn) -> char {
    turn.piece().symbol()
}

/// Plays one interactive game, reading moves from `input`.
///
/// Returns the game as it stood when the loop ended: finished, quit, or
/// out of input.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write>(input: R, output: &mut W, config: &TictacrlConfig) -> Result<Game> {
    let mut game = Game::default();

    writeln!(output, "Enter moves as \"row,column\" (0-2). Type \"quit\" to leave.")?;
    if *config.display().show_legend() {
        writeln!(output, "\n00 01 02\n10 11 12\n20 21 22")?;
    }
    write!(output, "{}", game.board_configuration())?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}{}", mark(game.turn()), config.prompt())?;
        output.flush()?;

        let Some(line) = lines.next() else {
            info!("Input closed before the game ended");
            writeln!(output)?;
            writeln!(output, "Game abandoned.")?;
            break;
        };
        let line = line.context("Failed to read move")?;

        let position = match parse_input(&line) {
            Ok(Input::Move(position)) => position,
            Ok(Input::Skip) => continue,
            Ok(Input::Quit) => {
                info!("Player quit");
                writeln!(output, "Game abandoned.")?;
                break;
            }
            Err(e) => {
                debug!(error = %e, "Rejected input");
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        match game.make_move(position) {
            Ok(state) => {
                write!(output, "{}", game.board_configuration())?;
                if state.is_over() {
                    writeln!(output, "{}", state)?;
                    break;
                }
            }
            Err(e @ MoveError::IllegalMove(_)) => {
                writeln!(output, "{}", e)?;
            }
            Err(e) => return Err(e).context("Engine rejected move"),
        }
    }

    Ok(game)
}

/// Applies `moves` in order to a fresh game.
///
/// Stops at the first move that cannot be parsed or is illegal. Moves after
/// the game has ended are accepted and ignored, as the engine does.
#[instrument]
pub fn replay(moves: &[String]) -> Result<Game> {
    let mut game = Game::default();

    for (number, text) in moves.iter().enumerate() {
        let position: Position = text
            .parse()
            .with_context(|| format!("Move {} ({:?}) is not a valid position", number + 1, text))?;

        let state = game
            .make_move(position)
            .with_context(|| format!("Move {} ({:?}) was rejected", number + 1, text))?;

        if state.is_over() && number + 1 < moves.len() {
            warn!(state = %state, remaining = moves.len() - number - 1, "Ignoring moves after game over");
            break;
        }
    }

    Ok(game)
}

/// Human-readable summary of a finished or running game.
pub fn describe(game: &Game) -> String {
    match game.game_state() {
        GameState::NotOver => format!(
            "{}Player {} to move",
            game.board_configuration(),
            mark(game.turn())
        ),
        state => format!("{}{}", game.board_configuration(), state),
    }
}
