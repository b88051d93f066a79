//! Terminal-oriented Unicode board renderer.
//!
//! Row 7 is printed first so White's starting rows end up at the bottom.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Occupant, PieceKind, Square, Team};

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in (0..BOARD_SIZE as i16).rev() {
        let label = char::from(b'1' + row as u8);
        out.push(label);
        out.push(' ');

        for column in 0..BOARD_SIZE as i16 {
            let field = Square::new(column, row)
                .ok()
                .and_then(|square| board.occupancy_at(square));
            match field {
                Some(occupant) => out.push(occupant_to_unicode(occupant)),
                None => out.push('·'),
            }

            if column < BOARD_SIZE as i16 - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn occupant_to_unicode(occupant: Occupant) -> char {
    match (occupant.team(), occupant.kind()) {
        (Team::White, PieceKind::Pawn) => '♙',
        (Team::White, PieceKind::Knight) => '♘',
        (Team::White, PieceKind::Bishop) => '♗',
        (Team::White, PieceKind::Rook) => '♖',
        (Team::White, PieceKind::Queen) => '♕',
        (Team::White, PieceKind::King) => '♔',
        (Team::Black, PieceKind::Pawn) => '♟',
        (Team::Black, PieceKind::Knight) => '♞',
        (Team::Black, PieceKind::Bishop) => '♝',
        (Team::Black, PieceKind::Rook) => '♜',
        (Team::Black, PieceKind::Queen) => '♛',
        (Team::Black, PieceKind::King) => '♚',
        _ => '?',
    }
}
