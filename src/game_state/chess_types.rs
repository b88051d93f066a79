//! Value types shared by the board, move generator and turn engine.
//!
//! Everything here is small and `Copy`. Empty squares are modelled as
//! `Field = None` internally; the `None` variants of `Team` and `PieceKind`
//! exist only as sentinels for the serialized snapshot.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::BOARD_SIZE;

/// Side owning a piece. `None` marks an unowned square and is never a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    White,
    Black,
    None,
}

impl Team {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
            Team::None => Team::None,
        }
    }

    /// Row delta of a one-square advance for this team.
    #[inline]
    pub const fn forward_step(self) -> i8 {
        match self {
            Team::White => 1,
            Team::Black => -1,
            Team::None => 0,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Team::White => "White",
            Team::Black => "Black",
            Team::None => "None",
        };
        f.write_str(name)
    }
}

/// Piece classification. Carries no state; movement lives in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
    None,
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Board coordinate. Both components are always in `0..BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Square {
    column: u8,
    row: u8,
}

impl Square {
    /// Build a square, failing fast on anything off the board.
    pub fn new(column: i16, row: i16) -> Result<Self, ChessErrors> {
        if Self::in_bounds(column, row) {
            Ok(Self {
                column: column as u8,
                row: row as u8,
            })
        } else {
            Err(ChessErrors::InvalidSquare { column, row })
        }
    }

    #[inline]
    pub const fn in_bounds(column: i16, row: i16) -> bool {
        column >= 0 && column < BOARD_SIZE as i16 && row >= 0 && row < BOARD_SIZE as i16
    }

    #[inline]
    pub const fn column(self) -> u8 {
        self.column
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Square reached by moving `(d_column, d_row)`, or `None` past the edge.
    pub fn offset(self, d_column: i8, d_row: i8) -> Option<Self> {
        let column = self.column as i16 + d_column as i16;
        let row = self.row as i16 + d_row as i16;
        Self::new(column, row).ok()
    }

    /// File letter plus 1-based rank, e.g. column 3 row 1 is `d2`.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", char::from(b'a' + self.column), self.row + 1)
    }

    /// Every square in row-major order (row 0 first).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |column| Square { column, row }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_algebraic())
    }
}

/// A piece standing on a square. Never built from a `None` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occupant {
    team: Team,
    kind: PieceKind,
}

impl Occupant {
    pub fn new(team: Team, kind: PieceKind) -> Result<Self, ChessErrors> {
        if team == Team::None || kind == PieceKind::None {
            return Err(ChessErrors::InvalidOccupant { team, kind });
        }
        Ok(Self { team, kind })
    }

    /// Used by the fixed starting layout, where both parts are known real.
    pub(crate) const fn placed(team: Team, kind: PieceKind) -> Self {
        Self { team, kind }
    }

    #[inline]
    pub const fn team(self) -> Team {
        self.team
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }
}

/// State of one board cell: empty, or exactly one occupant.
pub type Field = Option<Occupant>;

/// A candidate or applied half-move. Captures are not recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Turn {
    pub from: Square,
    pub to: Square,
}

impl Turn {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Turn ({} to {})", self.from, self.to)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub team: Team,
}

impl Player {
    pub const fn new(team: Team) -> Self {
        Self { team }
    }
}

/// Lifecycle of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Over { winner: Option<Team> },
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::NotStarted => f.write_str("not started"),
            GameStatus::InProgress => f.write_str("in progress"),
            GameStatus::Over {
                winner: Some(team),
            } => write!(f, "over ({team} won)"),
            GameStatus::Over { winner: None } => f.write_str("over (no winner)"),
        }
    }
}
