use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::error;

use random_chess::config::EngineConfig;
use random_chess::engines::turn_engine::TurnEngine;
use random_chess::game_state::board::Board;
use random_chess::game_state::chess_types::Team;
use random_chess::session::command_session::run_stdio_loop;
use random_chess::utils::auto_play::play_to_completion;
use random_chess::utils::render_board::render_board;

#[derive(Parser)]
#[command(name = "random_chess", version, about = "Random-move chess engine")]
struct Cli {
    /// YAML config file (also read from RANDOM_CHESS_CONFIG_PATH).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    seed: Option<u64>,

    #[arg(long, global = true, value_enum)]
    first_player: Option<Side>,

    #[arg(long, global = true)]
    max_plies: Option<u32>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands (start, turn, board, test, show) from stdin.
    Session,
    /// Play one game to completion and print the result.
    Play {
        /// Print the final board.
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Team {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Team::White,
            Side::Black => Team::Black,
        }
    }
}

fn load_config(cli: &Cli) -> Result<EngineConfig, Box<dyn std::error::Error>> {
    let path = cli
        .config
        .clone()
        .or_else(|| std::env::var_os("RANDOM_CHESS_CONFIG_PATH").map(PathBuf::from));
    let mut config = EngineConfig::load(path.as_deref())?;

    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(side) = cli.first_player {
        config.first_player = side.into();
    }
    if let Some(max_plies) = cli.max_plies {
        config.max_plies = max_plies;
    }
    config.validate()?;
    Ok(config)
}

fn play(config: &EngineConfig, show: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = match config.seed {
        Some(seed) => TurnEngine::with_seed(Board::new(), config.players(), seed)?,
        None => TurnEngine::from_os_rng(Board::new(), config.players())?,
    };
    engine.start();

    let summary = play_to_completion(&mut engine, config.max_plies, |_, _| {})?;
    println!("{}", summary.report());
    if show {
        println!("{}", render_board(engine.board()));
    }
    Ok(())
}

fn main() -> ExitCode {
    let env = Env::default().filter_or("RANDOM_CHESS_LOG_LEVEL", "info");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();
    let result = load_config(&cli).and_then(|config| match cli.command {
        Some(Commands::Play { show }) => play(&config, show),
        Some(Commands::Session) | None => run_stdio_loop(&config),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
