//! Hit-testing and the ray/step casting primitives shared by every piece.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::MAX_RAY_LENGTH;
use crate::game_state::chess_types::{Square, Team, Turn};

/// Classification of a target square relative to the moving team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTest {
    OutOfBounds,
    /// Occupied by the mover's own team.
    Own,
    /// Occupied by the other team: a capture candidate.
    Enemy,
    Empty,
}

/// Classify `(column, row)` for a piece of `team`. Coordinates are signed so
/// offsets that walk past the edge can be tested directly.
pub fn hit_test(board: &Board, team: Team, column: i16, row: i16) -> HitTest {
    let Ok(square) = Square::new(column, row) else {
        return HitTest::OutOfBounds;
    };
    match board.occupancy_at(square) {
        None => HitTest::Empty,
        Some(occupant) if occupant.team() == team => HitTest::Own,
        Some(_) => HitTest::Enemy,
    }
}

/// Single application of `(d_column, d_row)` from `from`.
pub fn cast_step(board: &Board, from: Square, team: Team, step: (i8, i8), out: &mut Vec<Turn>) {
    let column = from.column() as i16 + step.0 as i16;
    let row = from.row() as i16 + step.1 as i16;

    match hit_test(board, team, column, row) {
        HitTest::Enemy | HitTest::Empty => {
            if let Ok(to) = Square::new(column, row) {
                out.push(Turn::new(from, to));
            }
        }
        HitTest::Own | HitTest::OutOfBounds => {}
    }
}

/// Walk outward along `direction`, recording empty squares and the first
/// enemy square, and stopping at the first obstruction or the edge.
pub fn cast_ray(
    board: &Board,
    from: Square,
    team: Team,
    direction: (i8, i8),
    out: &mut Vec<Turn>,
) {
    for distance in 1..=MAX_RAY_LENGTH as i16 {
        let column = from.column() as i16 + direction.0 as i16 * distance;
        let row = from.row() as i16 + direction.1 as i16 * distance;

        match hit_test(board, team, column, row) {
            HitTest::Empty => {
                if let Ok(to) = Square::new(column, row) {
                    out.push(Turn::new(from, to));
                }
            }
            HitTest::Enemy => {
                if let Ok(to) = Square::new(column, row) {
                    out.push(Turn::new(from, to));
                }
                break;
            }
            HitTest::Own | HitTest::OutOfBounds => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PieceKind;

    fn sq(column: i16, row: i16) -> Square {
        Square::new(column, row).unwrap()
    }

    #[test]
    fn hit_test_classifies_all_four_cases() {
        let mut board = Board::empty();
        board.place(sq(1, 1), Team::White, PieceKind::Pawn).unwrap();
        board.place(sq(2, 2), Team::Black, PieceKind::Pawn).unwrap();

        assert_eq!(hit_test(&board, Team::White, -1, 0), HitTest::OutOfBounds);
        assert_eq!(hit_test(&board, Team::White, 0, 8), HitTest::OutOfBounds);
        assert_eq!(hit_test(&board, Team::White, 1, 1), HitTest::Own);
        assert_eq!(hit_test(&board, Team::White, 2, 2), HitTest::Enemy);
        assert_eq!(hit_test(&board, Team::Black, 2, 2), HitTest::Own);
        assert_eq!(hit_test(&board, Team::White, 3, 3), HitTest::Empty);
    }

    #[test]
    fn ray_from_corner_reaches_opposite_edge() {
        let board = Board::empty();
        let mut out = Vec::new();
        cast_ray(&board, sq(0, 0), Team::White, (1, 1), &mut out);
        assert_eq!(out.len(), 7);
        assert_eq!(out.last().unwrap().to, sq(7, 7));
    }

    #[test]
    fn ray_pointing_off_board_is_empty() {
        let board = Board::empty();
        let mut out = Vec::new();
        cast_ray(&board, sq(0, 0), Team::White, (-1, 0), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn ray_stops_on_first_enemy_inclusive() {
        let mut board = Board::empty();
        board.place(sq(0, 3), Team::Black, PieceKind::Knight).unwrap();
        board.place(sq(0, 5), Team::Black, PieceKind::Knight).unwrap();
        let mut out = Vec::new();
        cast_ray(&board, sq(0, 0), Team::White, (0, 1), &mut out);
        let targets: Vec<Square> = out.iter().map(|t| t.to).collect();
        assert_eq!(targets, vec![sq(0, 1), sq(0, 2), sq(0, 3)]);
    }

    #[test]
    fn step_onto_own_piece_is_discarded() {
        let mut board = Board::empty();
        board.place(sq(1, 2), Team::White, PieceKind::Pawn).unwrap();
        let mut out = Vec::new();
        cast_step(&board, sq(0, 0), Team::White, (1, 2), &mut out);
        cast_step(&board, sq(0, 0), Team::White, (-1, 2), &mut out);
        assert!(out.is_empty());
        cast_step(&board, sq(0, 0), Team::White, (2, 1), &mut out);
        assert_eq!(out, vec![Turn::new(sq(0, 0), sq(2, 1))]);
    }
}
