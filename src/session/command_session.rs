//! Line-oriented command front-end for one game.
//!
//! Each input line is either a bare command word or a JSON envelope such as
//! `{"command": "turn"}`. Every response is a single line whose first word
//! names its kind (`board`, `turn`, `server`, `error`), so a relay can
//! forward the lines to viewers unchanged. Commands are handled one at a
//! time, which serializes access to the engine.

use std::io::{self, BufRead, Write};

use log::{info, warn};
use rand::rngs::StdRng;
use rand::Rng;
use serde::Deserialize;

use crate::chess_errors::ChessErrors;
use crate::config::EngineConfig;
use crate::engines::turn_engine::TurnEngine;
use crate::game_state::board::{Board, BoardSnapshot};
use crate::utils::auto_play::{play_to_completion, PlayOutcome};
use crate::utils::render_board::render_board;

const HELP_TEXT: &str = "server commands: start, turn, board, test, show, help, quit";

#[derive(Debug, Deserialize)]
struct CommandEnvelope {
    command: String,
}

/// Extract the command word from a raw line.
pub fn parse_command(line: &str) -> String {
    let trimmed = line.trim();
    match serde_json::from_str::<CommandEnvelope>(trimmed) {
        Ok(envelope) => envelope.command.trim().to_string(),
        Err(_) => trimmed.to_string(),
    }
}

pub fn run_stdio_loop(config: &EngineConfig) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = CommandSession::from_config(config)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct CommandSession<R: Rng = StdRng> {
    engine: TurnEngine<R>,
    max_plies: u32,
}

impl CommandSession<StdRng> {
    pub fn from_config(config: &EngineConfig) -> Result<Self, ChessErrors> {
        config.validate()?;
        let board = Board::new();
        let engine = match config.seed {
            Some(seed) => TurnEngine::with_seed(board, config.players(), seed)?,
            None => TurnEngine::from_os_rng(board, config.players())?,
        };
        Ok(Self::new(engine, config.max_plies))
    }
}

impl<R: Rng> CommandSession<R> {
    pub fn new(engine: TurnEngine<R>, max_plies: u32) -> Self {
        Self { engine, max_plies }
    }

    pub fn engine(&self) -> &TurnEngine<R> {
        &self.engine
    }

    /// Handle one input line. Returns `true` when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let command = parse_command(line);
        if command.is_empty() {
            return Ok(false);
        }

        match command.as_str() {
            "start" => {
                self.engine.start();
                write_board(out, &self.engine.board_snapshot())?;
            }
            "turn" => self.handle_turn(out)?,
            "board" => write_board(out, &self.engine.board_snapshot())?,
            "test" => self.handle_test(out)?,
            "show" => writeln!(out, "{}", render_board(self.engine.board()))?,
            "help" => writeln!(out, "{}", HELP_TEXT)?,
            "quit" => return Ok(true),
            other => {
                warn!("unknown command {:?}", other);
                writeln!(out, "server Huh?")?;
            }
        }

        Ok(false)
    }

    fn handle_turn(&mut self, out: &mut impl Write) -> io::Result<()> {
        match self.engine.next_turn() {
            Ok(turn) => {
                writeln!(out, "turn {} {}", turn.from, turn.to)?;
                write_board(out, &self.engine.board_snapshot())?;
            }
            Err(err) => writeln!(out, "error {}", err)?,
        }
        self.announce_winner(out)
    }

    fn handle_test(&mut self, out: &mut impl Write) -> io::Result<()> {
        let mut write_result = Ok(());
        let summary = play_to_completion(&mut self.engine, self.max_plies, |_, engine| {
            if write_result.is_ok() {
                write_result = write_board(&mut *out, &engine.board_snapshot());
            }
        });
        write_result?;

        match summary {
            Ok(summary) => {
                info!("test run: {}", summary.report());
                match summary.outcome {
                    PlayOutcome::PlyCapReached => {
                        writeln!(out, "server ply cap of {} reached", self.max_plies)?
                    }
                    PlayOutcome::Won(_) | PlayOutcome::NoWinner => self.announce_winner(out)?,
                }
            }
            Err(err) => writeln!(out, "error {}", err)?,
        }
        Ok(())
    }

    fn announce_winner(&self, out: &mut impl Write) -> io::Result<()> {
        if let Some(winner) = self.engine.winner() {
            writeln!(out, "server {} won the Game", winner)?;
        }
        Ok(())
    }
}

fn write_board(out: &mut impl Write, snapshot: &BoardSnapshot) -> io::Result<()> {
    let json = serde_json::to_string(snapshot).map_err(io::Error::other)?;
    writeln!(out, "board {}", json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{PieceKind, Player, Square, Team};

    fn session(seed: u64) -> CommandSession {
        let config = EngineConfig {
            seed: Some(seed),
            ..EngineConfig::default()
        };
        CommandSession::from_config(&config).unwrap()
    }

    fn run(session: &mut CommandSession, line: &str) -> Vec<String> {
        let mut out = Vec::new();
        session.handle_command(line, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn parses_bare_words_and_json_envelopes() {
        assert_eq!(parse_command("  turn \n"), "turn");
        assert_eq!(parse_command(r#"{"command": "start"}"#), "start");
        assert_eq!(parse_command(r#"{"other": 1}"#), r#"{"other": 1}"#);
    }

    #[test]
    fn start_sends_the_board() {
        let mut session = session(1);
        let lines = run(&mut session, "start");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("board [["));

        let json: serde_json::Value = serde_json::from_str(&lines[0]["board ".len()..]).unwrap();
        assert_eq!(json[0][3]["piece"], "King");
        assert_eq!(json[0][3]["team"], "White");
    }

    #[test]
    fn turn_reports_the_move_and_the_board() {
        let mut session = session(1);
        run(&mut session, r#"{"command":"start"}"#);
        let lines = run(&mut session, "turn");
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("turn "));
        assert!(lines[1].starts_with("board "));
        assert_eq!(session.engine().current_turn_index(), 0);
    }

    #[test]
    fn turn_before_start_reports_an_error() {
        let mut session = session(1);
        let lines = run(&mut session, "turn");
        assert_eq!(
            lines,
            vec!["error cannot play a turn while the game is not started".to_string()]
        );
    }

    #[test]
    fn capturing_turn_announces_the_winner() {
        let mut engine = TurnEngine::with_seed(
            Board::new(),
            [Player::new(Team::White), Player::new(Team::Black)],
            4,
        )
        .unwrap();
        engine.start();
        let board = engine.board_mut();
        *board = Board::empty();
        board
            .place(Square::new(0, 0).unwrap(), Team::White, PieceKind::King)
            .unwrap();
        board
            .place(Square::new(1, 1).unwrap(), Team::Black, PieceKind::King)
            .unwrap();
        let mut session = CommandSession::new(engine, 100);

        let lines = run(&mut session, "turn");
        assert_eq!(lines[0], "turn a1 b2");
        assert_eq!(lines[2], "server White won the Game");
    }

    #[test]
    fn test_command_plays_to_the_end() {
        let config = EngineConfig {
            seed: Some(12),
            max_plies: 100_000,
            ..EngineConfig::default()
        };
        let mut session = CommandSession::from_config(&config).unwrap();
        run(&mut session, "start");
        let lines = run(&mut session, "test");
        let last = lines.last().unwrap();
        assert!(session.engine().is_over());
        assert!(last.starts_with("server ") && last.ends_with(" won the Game"));
        assert!(lines[..lines.len() - 1].iter().all(|l| l.starts_with("board ")));
    }

    #[test]
    fn test_command_respects_the_ply_cap() {
        let config = EngineConfig {
            seed: Some(12),
            max_plies: 3,
            ..EngineConfig::default()
        };
        let mut session = CommandSession::from_config(&config).unwrap();
        let lines = run(&mut session, "test");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "server ply cap of 3 reached");
    }

    #[test]
    fn unknown_commands_get_a_reply_and_quit_ends() {
        let mut session = session(1);
        assert_eq!(run(&mut session, "dance"), vec!["server Huh?".to_string()]);
        assert!(run(&mut session, "").is_empty());

        let mut out = Vec::new();
        assert!(session.handle_command("quit", &mut out).unwrap());
        assert!(!session.handle_command("help", &mut out).unwrap());
    }

    #[test]
    fn show_renders_the_board() {
        let mut session = session(1);
        run(&mut session, "start");
        let lines = run(&mut session, "show");
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
    }
}
