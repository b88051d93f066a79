//! Movement capability table.
//!
//! Each piece kind maps to pure data: either a fixed list of single-step
//! offsets, a list of ray directions, a team-relative forward step, or
//! nothing. Offsets are `(d_column, d_row)`.
//!
//! King and knight offsets are a deliberate subset of their full chess
//! movement, and pawns only step straight ahead. Games played by this engine
//! depend on exactly these lists.

use crate::game_state::chess_types::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// One application of each offset.
    Steps(&'static [(i8, i8)]),
    /// Extend along each direction until blocked.
    Rays(&'static [(i8, i8)]),
    /// One square towards the opponent's side.
    Forward,
    Immobile,
}

pub const KING_STEPS: &[(i8, i8)] = &[(1, 1), (-1, -1), (-1, 1), (0, -1)];

pub const KNIGHT_STEPS: &[(i8, i8)] = &[(1, 2), (2, 1), (-1, -2), (-2, -1)];

pub const ROOK_DIRECTIONS: &[(i8, i8)] = &[(0, 1), (0, -1), (1, 0), (-1, 0)];

pub const BISHOP_DIRECTIONS: &[(i8, i8)] = &[(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const QUEEN_DIRECTIONS: &[(i8, i8)] = &[
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub const fn capabilities_of(kind: PieceKind) -> Movement {
    match kind {
        PieceKind::King => Movement::Steps(KING_STEPS),
        PieceKind::Queen => Movement::Rays(QUEEN_DIRECTIONS),
        PieceKind::Rook => Movement::Rays(ROOK_DIRECTIONS),
        PieceKind::Bishop => Movement::Rays(BISHOP_DIRECTIONS),
        PieceKind::Knight => Movement::Steps(KNIGHT_STEPS),
        PieceKind::Pawn => Movement::Forward,
        PieceKind::None => Movement::Immobile,
    }
}

#[inline]
pub const fn is_sliding(kind: PieceKind) -> bool {
    matches!(capabilities_of(kind), Movement::Rays(_))
}
