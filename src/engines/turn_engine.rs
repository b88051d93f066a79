//! Random-move turn engine.
//!
//! Drives one game: alternates between two players, picks uniformly among
//! every candidate move of the side to move, applies it, and ends the game
//! as soon as fewer than two kings remain. The random source is injected so
//! games can be replayed from a seed.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::chess_errors::ChessErrors;
use crate::game_state::board::{Board, BoardSnapshot};
use crate::game_state::chess_types::{GameStatus, Player, Team, Turn};
use crate::move_generation::move_generator::candidate_moves_for_team;

pub struct TurnEngine<R: Rng = StdRng> {
    players: [Player; 2],
    board: Board,
    turn_index: i64,
    status: GameStatus,
    rng: R,
}

impl TurnEngine<StdRng> {
    pub fn with_seed(board: Board, players: [Player; 2], seed: u64) -> Result<Self, ChessErrors> {
        Self::new(board, players, StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng(board: Board, players: [Player; 2]) -> Result<Self, ChessErrors> {
        Self::new(board, players, StdRng::from_os_rng())
    }
}

impl<R: Rng> TurnEngine<R> {
    /// `players[0]` moves first. The two players must be White and Black in
    /// either order.
    pub fn new(board: Board, players: [Player; 2], rng: R) -> Result<Self, ChessErrors> {
        let teams = [players[0].team, players[1].team];
        let valid = teams.contains(&Team::White) && teams.contains(&Team::Black);
        if !valid {
            return Err(ChessErrors::InvalidPlayers);
        }

        Ok(Self {
            players,
            board,
            turn_index: -1,
            status: GameStatus::NotStarted,
            rng,
        })
    }

    /// Reset the board and counters and put the game in progress. Valid from
    /// any state.
    pub fn start(&mut self) {
        self.board.reset();
        self.turn_index = -1;
        self.status = GameStatus::InProgress;
        info!("game started, {} moves first", self.players[0].team);
    }

    /// Play one random half-move for the side to move and return it.
    ///
    /// Fails with `InvalidStateTransition` unless the game is in progress.
    /// If the side to move has no candidates the game ends in favour of the
    /// other team and `EmptyCandidateSet` is returned.
    pub fn next_turn(&mut self) -> Result<Turn, ChessErrors> {
        if self.status != GameStatus::InProgress {
            return Err(ChessErrors::InvalidStateTransition {
                status: self.status,
            });
        }

        self.turn_index += 1;
        let player = self.players[(self.turn_index % 2) as usize];

        let candidates = candidate_moves_for_team(&self.board, player.team);
        let Some(&turn) = candidates.as_slice().choose(&mut self.rng) else {
            let winner = player.team.opposite();
            warn!(
                "turn {}: {} has no candidate moves, {} wins",
                self.turn_index, player.team, winner
            );
            self.status = GameStatus::Over {
                winner: Some(winner),
            };
            return Err(ChessErrors::EmptyCandidateSet { team: player.team });
        };

        self.apply(turn);
        debug!(
            "turn {}: {} plays {} ({} candidates)",
            self.turn_index,
            player.team,
            turn,
            candidates.len()
        );

        if self.board.count_kings() < 2 {
            self.status = GameStatus::Over {
                winner: Some(player.team),
            };
            info!("turn {}: {} won the game", self.turn_index, player.team);
        }

        Ok(turn)
    }

    // The destination's previous occupant, if any, is simply overwritten.
    fn apply(&mut self, turn: Turn) {
        let moving = self.board.occupancy_at(turn.from);
        self.board.set(turn.to, moving);
        self.board.clear(turn.from);
    }

    pub fn start_game(&mut self) {
        self.start();
    }

    pub fn reset_game(&mut self) {
        self.start();
    }

    pub fn apply_next_turn(&mut self) -> Result<Turn, ChessErrors> {
        self.next_turn()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Over { .. })
    }

    pub fn winner(&self) -> Option<Team> {
        match self.status {
            GameStatus::Over { winner } => winner,
            _ => None,
        }
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Index of the last played turn; `-1` before the first one.
    #[inline]
    pub fn current_turn_index(&self) -> i64 {
        self.turn_index
    }

    /// Team that the next `next_turn` call would move.
    pub fn side_to_move(&self) -> Team {
        self.players[((self.turn_index + 1) % 2) as usize].team
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for custom setups after `start`.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn board_snapshot(&self) -> BoardSnapshot {
        self.board.to_snapshot()
    }
}
