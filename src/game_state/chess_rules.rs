//! Canonical board constants.
//!
//! The starting layout puts White on rows 0 and 1 and Black on rows 6 and 7.
//! The king and queen swap columns between the two teams, so the two kings
//! start on different files.

use crate::game_state::chess_types::{PieceKind, Team};

pub const BOARD_SIZE: usize = 8;

/// Longest ray a sliding piece can cast on this board.
pub const MAX_RAY_LENGTH: i8 = (BOARD_SIZE - 1) as i8;

pub const WHITE_BACK_ROW: u8 = 0;
pub const WHITE_PAWN_ROW: u8 = 1;
pub const BLACK_PAWN_ROW: u8 = 6;
pub const BLACK_BACK_ROW: u8 = 7;

const WHITE_BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

const BLACK_BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Occupant of `(column, row)` in the starting position, if any.
pub fn starting_piece(column: u8, row: u8) -> Option<(Team, PieceKind)> {
    let column = column as usize;
    match row {
        WHITE_BACK_ROW => Some((Team::White, WHITE_BACK_RANK[column])),
        WHITE_PAWN_ROW => Some((Team::White, PieceKind::Pawn)),
        BLACK_PAWN_ROW => Some((Team::Black, PieceKind::Pawn)),
        BLACK_BACK_ROW => Some((Team::Black, BLACK_BACK_RANK[column])),
        _ => None,
    }
}
