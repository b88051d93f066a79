//! Errors used throughout the engine.
//!
//! `ChessErrors` is the single error type returned by board accessors, the
//! turn engine, configuration loading and the command session. Board and
//! move-generation code is otherwise total over valid inputs, so every
//! variant here is a precondition failure the caller is expected to handle
//! (typically by translating it into a protocol response).

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{GameStatus, PieceKind, Team};

/// Unified error type for the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A coordinate outside `0..=7` was passed to a board accessor.
    ///
    /// Payload: the offending (column, row) as given by the caller.
    InvalidSquare { column: i16, row: i16 },

    /// The side to move has no candidate moves at all.
    ///
    /// The engine moves to `Over` before returning this, awarding the game
    /// to the other team.
    EmptyCandidateSet { team: Team },

    /// `next_turn` was requested while the game is not in progress.
    InvalidStateTransition { status: GameStatus },

    /// An occupant was built from a `None` sentinel team or piece kind.
    InvalidOccupant { team: Team, kind: PieceKind },

    /// The two players do not cover White and Black exactly once.
    InvalidPlayers,

    /// Configuration could not be read or parsed.
    ConfigError(String),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidSquare { column, row } => {
                write!(f, "square ({column}, {row}) is outside the board")
            }
            ChessErrors::EmptyCandidateSet { team } => {
                write!(f, "{team} has no candidate moves")
            }
            ChessErrors::InvalidStateTransition { status } => {
                write!(f, "cannot play a turn while the game is {status}")
            }
            ChessErrors::InvalidOccupant { team, kind } => {
                write!(f, "invalid occupant: team {team}, piece {kind}")
            }
            ChessErrors::InvalidPlayers => {
                write!(f, "players must be one White and one Black")
            }
            ChessErrors::ConfigError(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl Error for ChessErrors {}

#[cfg(test)]
mod tests {
    use super::ChessErrors;
    use crate::game_state::chess_types::{GameStatus, Team};

    #[test]
    fn messages_name_the_failing_input() {
        let err = ChessErrors::InvalidSquare { column: 8, row: -1 };
        assert_eq!(err.to_string(), "square (8, -1) is outside the board");

        let err = ChessErrors::EmptyCandidateSet { team: Team::Black };
        assert_eq!(err.to_string(), "Black has no candidate moves");

        let err = ChessErrors::InvalidStateTransition {
            status: GameStatus::Over {
                winner: Some(Team::White),
            },
        };
        assert_eq!(
            err.to_string(),
            "cannot play a turn while the game is over (White won)"
        );
    }
}
