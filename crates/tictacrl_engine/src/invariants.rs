//! Properties every reachable [`Game`] satisfies.
//!
//! [`Game::make_move`](crate::Game::make_move) checks them after each
//! applied move. Counts only include pieces placed during the game; pieces
//! already on the board passed to [`Game::new`](crate::Game::new) are
//! ignored.

use crate::game::Game;
use crate::types::{Cell, Turn};
use derive_more::Display;
use tracing::warn;

/// A property of `S` that holds in every state reachable through legal moves.
pub trait Invariant<S> {
    /// Short statement of the property, used in logs and violations.
    const DESCRIPTION: &'static str;

    /// Whether `state` satisfies the property.
    fn holds(state: &S) -> bool;
}

/// An invariant that did not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// The failed invariant's [`DESCRIPTION`](Invariant::DESCRIPTION).
    pub description: &'static str,
}

/// X has placed as many pieces as O, or one more.
pub struct BalancedPiecesInvariant;

impl Invariant<Game> for BalancedPiecesInvariant {
    const DESCRIPTION: &'static str = "X count equals O count or exceeds it by one";

    fn holds(game: &Game) -> bool {
        let x_count = game.placed(Cell::X);
        let o_count = game.placed(Cell::O);
        x_count == o_count || x_count == o_count + 1
    }
}

/// The turn agrees with the piece counts.
///
/// While the game runs, X is to move exactly when both players have placed
/// the same number of pieces. Once it ends, the turn stays with whoever made
/// the final move.
pub struct TurnMatchesPiecesInvariant;

impl Invariant<Game> for TurnMatchesPiecesInvariant {
    const DESCRIPTION: &'static str = "Turn matches the number of pieces placed";

    fn holds(game: &Game) -> bool {
        let x_count = game.placed(Cell::X);
        let o_count = game.placed(Cell::O);

        let x_holds_turn = if game.game_state().is_over() {
            x_count == o_count + 1
        } else {
            x_count == o_count
        };

        (game.turn() == Turn::PlayerX) == x_holds_turn
    }
}

fn violation<I: Invariant<Game>>(game: &Game) -> Option<InvariantViolation> {
    (!I::holds(game)).then_some(InvariantViolation {
        description: I::DESCRIPTION,
    })
}

/// Checks every game invariant, returning the ones that failed.
pub fn check_game(game: &Game) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = [
        violation::<BalancedPiecesInvariant>(game),
        violation::<TurnMatchesPiecesInvariant>(game),
    ]
    .into_iter()
    .flatten()
    .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Logs every violated invariant and panics in debug builds.
pub(crate) fn assert_invariants(game: &Game) {
    if let Err(violations) = check_game(game) {
        for violation in &violations {
            warn!(%violation, board = %game.board_configuration(), "Invariant violated");
        }
        debug_assert!(violations.is_empty(), "Game invariants violated: {violations:?}");
    }
}
