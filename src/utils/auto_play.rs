//! Play a game to completion without outside input.
//!
//! Keeps calling `next_turn` until the game is over or a ply cap is reached,
//! and records what happened with wall-clock timestamps.

use chrono::{DateTime, Utc};
use log::info;
use rand::Rng;

use crate::chess_errors::ChessErrors;
use crate::engines::turn_engine::TurnEngine;
use crate::game_state::chess_types::{GameStatus, Team, Turn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Won(Team),
    /// Game over with no winner recorded.
    NoWinner,
    PlyCapReached,
}

#[derive(Debug, Clone)]
pub struct GameSummary {
    pub outcome: PlayOutcome,
    pub turns: Vec<Turn>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl GameSummary {
    pub fn plies(&self) -> usize {
        self.turns.len()
    }

    pub fn report(&self) -> String {
        let outcome = match self.outcome {
            PlayOutcome::Won(team) => format!("{team} won"),
            PlayOutcome::NoWinner => "no winner".to_string(),
            PlayOutcome::PlyCapReached => "ply cap reached".to_string(),
        };
        let elapsed_ms = (self.finished_at - self.started_at).num_milliseconds();
        format!(
            "outcome={} plies={} started={} elapsed_ms={}",
            outcome,
            self.plies(),
            self.started_at.to_rfc3339(),
            elapsed_ms
        )
    }
}

/// Continue the current game (starting it first if needed) until it ends or
/// `max_plies` turns have been played by this call. `on_turn` sees every
/// applied turn together with the engine state right after it.
pub fn play_to_completion<R, F>(
    engine: &mut TurnEngine<R>,
    max_plies: u32,
    mut on_turn: F,
) -> Result<GameSummary, ChessErrors>
where
    R: Rng,
    F: FnMut(&Turn, &TurnEngine<R>),
{
    let started_at = Utc::now();
    if engine.status() == GameStatus::NotStarted {
        engine.start();
    }

    let mut turns = Vec::new();
    while !engine.is_over() && turns.len() < max_plies as usize {
        match engine.next_turn() {
            Ok(turn) => {
                on_turn(&turn, engine);
                turns.push(turn);
            }
            // The engine has already ended the game.
            Err(ChessErrors::EmptyCandidateSet { .. }) => break,
            Err(e) => return Err(e),
        }
    }

    let outcome = match engine.status() {
        GameStatus::Over {
            winner: Some(team),
        } => PlayOutcome::Won(team),
        GameStatus::Over { winner: None } => PlayOutcome::NoWinner,
        _ => PlayOutcome::PlyCapReached,
    };

    let summary = GameSummary {
        outcome,
        turns,
        started_at,
        finished_at: Utc::now(),
    };
    info!("auto-play finished: {}", summary.report());
    Ok(summary)
}
