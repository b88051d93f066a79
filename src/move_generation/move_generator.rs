//! Candidate move generation.
//!
//! Looks up the occupant's movement in the piece catalog and runs the shared
//! casting primitives. There is no check detection: every destination that
//! is on the board and not held by the mover's own team is a candidate.

use log::trace;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Square, Team, Turn};
use crate::move_generation::legal_move_shared::{cast_ray, cast_step};
use crate::moves::piece_catalog::{capabilities_of, Movement};

/// All candidate moves for the piece on `square`; empty if the square is.
pub fn candidate_moves(board: &Board, square: Square) -> Vec<Turn> {
    let mut out = Vec::new();
    append_candidate_moves(board, square, &mut out);
    out
}

/// Union of candidate moves over every square held by `team`, row-major.
pub fn candidate_moves_for_team(board: &Board, team: Team) -> Vec<Turn> {
    let mut out = Vec::with_capacity(64);
    for square in board.squares_of(team) {
        append_candidate_moves(board, square, &mut out);
    }
    trace!("{team}: {} candidate moves", out.len());
    out
}

fn append_candidate_moves(board: &Board, square: Square, out: &mut Vec<Turn>) {
    let Some(occupant) = board.occupancy_at(square) else {
        return;
    };
    let team = occupant.team();

    match capabilities_of(occupant.kind()) {
        Movement::Steps(offsets) => {
            for &offset in offsets {
                cast_step(board, square, team, offset, out);
            }
        }
        Movement::Rays(directions) => {
            for &direction in directions {
                cast_ray(board, square, team, direction, out);
            }
        }
        Movement::Forward => cast_step(board, square, team, (0, team.forward_step()), out),
        Movement::Immobile => {}
    }
}
