//! The 8×8 board and its serializable snapshot.
//!
//! `Board` owns every cell exclusively. Readers get copies of `Field`
//! values; the only writers are `reset` and `set`, which the turn engine
//! uses to apply a move.

use serde::Serialize;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{starting_piece, BOARD_SIZE};
use crate::game_state::chess_types::{Field, Occupant, PieceKind, Square, Team};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    // [column][row]
    fields: [[Field; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Board in the starting position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.reset();
        board
    }

    /// Board with no pieces, for custom setups.
    pub fn empty() -> Self {
        Self {
            fields: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Repopulate all 64 fields with the starting layout.
    pub fn reset(&mut self) {
        for square in Square::all() {
            let field = starting_piece(square.column(), square.row())
                .map(|(team, kind)| Occupant::placed(team, kind));
            self.set(square, field);
        }
    }

    #[inline]
    pub fn occupancy_at(&self, square: Square) -> Field {
        self.fields[square.column() as usize][square.row() as usize]
    }

    /// Bounds-checked read by raw coordinates.
    pub fn field_at(&self, column: i16, row: i16) -> Result<Field, ChessErrors> {
        Ok(self.occupancy_at(Square::new(column, row)?))
    }

    #[inline]
    pub fn set(&mut self, square: Square, field: Field) {
        self.fields[square.column() as usize][square.row() as usize] = field;
    }

    /// Bounds-checked write by raw coordinates.
    pub fn set_at(&mut self, column: i16, row: i16, field: Field) -> Result<(), ChessErrors> {
        self.set(Square::new(column, row)?, field);
        Ok(())
    }

    /// Convenience for setups: place `kind` of `team` on `square`.
    pub fn place(
        &mut self,
        square: Square,
        team: Team,
        kind: PieceKind,
    ) -> Result<(), ChessErrors> {
        self.set(square, Some(Occupant::new(team, kind)?));
        Ok(())
    }

    pub fn clear(&mut self, square: Square) {
        self.set(square, None);
    }

    pub fn count_kings(&self) -> usize {
        self.occupants()
            .filter(|(_, occupant)| occupant.kind() == PieceKind::King)
            .count()
    }

    /// Squares held by `team`, row-major.
    pub fn squares_of(&self, team: Team) -> Vec<Square> {
        self.occupants()
            .filter(|(_, occupant)| occupant.team() == team)
            .map(|(square, _)| square)
            .collect()
    }

    /// Every occupied square with its occupant, row-major.
    pub fn occupants(&self) -> impl Iterator<Item = (Square, Occupant)> + '_ {
        Square::all().filter_map(|square| self.occupancy_at(square).map(|o| (square, o)))
    }

    /// Detached, fully-populated copy for transmission. Empty squares use the
    /// `None` sentinels.
    pub fn to_snapshot(&self) -> BoardSnapshot {
        let mut rows = [[NetField::EMPTY; BOARD_SIZE]; BOARD_SIZE];
        for (square, occupant) in self.occupants() {
            rows[square.row() as usize][square.column() as usize] = NetField {
                team: occupant.team(),
                piece: occupant.kind(),
            };
        }
        BoardSnapshot { rows }
    }
}

/// Wire form of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NetField {
    pub team: Team,
    pub piece: PieceKind,
}

impl NetField {
    pub const EMPTY: NetField = NetField {
        team: Team::None,
        piece: PieceKind::None,
    };
}

/// Serializes as an array of rows, each an array of columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BoardSnapshot {
    rows: [[NetField; BOARD_SIZE]; BOARD_SIZE],
}

impl BoardSnapshot {
    #[inline]
    pub fn at(&self, square: Square) -> NetField {
        self.rows[square.row() as usize][square.column() as usize]
    }

    pub fn rows(&self) -> &[[NetField; BOARD_SIZE]; BOARD_SIZE] {
        &self.rows
    }
}
