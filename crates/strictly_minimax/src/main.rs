//! Strictly Minimax - Unified CLI
//!
//! Solves tic-tac-toe positions and plays perfect games.

use anyhow::Result;
use clap::Parser;
use strictly_minimax::cli::{Cli, Command};
use strictly_minimax::{DriverConfig, EnginePlayer, GameEvent, HumanPlayer, Match};
use strictly_tictactoe::{Board, DRAW, O_WINS, Player, X_WINS, decide, initial_state, outcome};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = DriverConfig::load(&cli.config)?;
    initialize_tracing(config.log_filter());

    match cli.command {
        Command::BestMove { board } => run_best_move(&board, &config),
        Command::SelfPlay { board } => run_self_play(board.unwrap_or_else(initial_state)),
        Command::Play { human } => {
            let config = match human {
                Some(mark) => config.with_human_mark(mark),
                None => config,
            };
            run_play(&config)
        }
    }
}

/// Installs the tracing subscriber; `RUST_LOG` wins over the config filter.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Prints the optimal move for a board.
#[instrument(skip_all)]
fn run_best_move(board: &Board, config: &DriverConfig) -> Result<()> {
    println!("{}\n", board.display());

    match decide(board) {
        None => println!("Game over: {}", outcome(board)),
        Some(decision) => {
            println!("{} to move: play {}", decision.player, decision.action);
            if *config.show_value() {
                println!("With best play: {}", describe_value(decision.value));
            }
        }
    }
    Ok(())
}

/// Lets the engine play both sides.
#[instrument(skip_all)]
fn run_self_play(board: Board) -> Result<()> {
    let mut game = Match::from_board(
        board,
        Box::new(EnginePlayer::new("Engine X")),
        Box::new(EnginePlayer::new("Engine O")),
    );
    game.run(print_event)?;
    Ok(())
}

/// Human against the engine on stdin/stdout.
#[instrument(skip_all, fields(human = %config.human_mark()))]
fn run_play(config: &DriverConfig) -> Result<()> {
    info!("Starting interactive game");

    let human = Box::new(HumanPlayer::new(
        "You",
        std::io::stdin().lock(),
        std::io::stdout(),
    ));
    let engine = Box::new(EnginePlayer::new("Engine"));

    let mut game = match config.human_mark() {
        Player::X => Match::new(human, engine),
        Player::O => Match::new(engine, human),
    };
    game.run(print_event)?;
    Ok(())
}

fn print_event(event: &GameEvent) {
    match event {
        GameEvent::StateChanged(board) => println!("\n{}\n", board.display()),
        GameEvent::MoveMade { name, mark, action } => {
            println!("{} ({}) plays {}", name, mark, action)
        }
        GameEvent::GameOver { outcome, winner } => match winner {
            Some(name) => println!("{} - {} wins!", outcome, name),
            None => println!("{}", outcome),
        },
    }
}

fn describe_value(value: i8) -> &'static str {
    match value {
        X_WINS => "X wins",
        O_WINS => "O wins",
        DRAW => "draw",
        _ => "unknown",
    }
}
