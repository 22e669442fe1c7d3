//! Unbeatable - Unified CLI
//!
//! Play tic-tac-toe against the engine, watch it play itself, or ask it for
//! the best move in a position.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use unbeatable::{Console, GameConfig, play_session, render, self_play, suggest};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = GameConfig::load(cli.config.as_deref())?;
    if let Some(strategy) = cli.strategy {
        config = config.with_strategy(strategy)?;
    }

    init_tracing(config.log_filter());
    debug!(?config, "Configuration resolved");

    let mut console = Console::new(io::stdin().lock(), io::stdout());

    match cli.command {
        Command::Play { size } => {
            if let Some(size) = size {
                config = config.with_board_size(size)?;
            }
            play_session(&config, &mut console)?;
        }
        Command::SelfPlay {
            games,
            size,
            show_boards,
        } => {
            if let Some(size) = size {
                config = config.with_board_size(size)?;
            }
            self_play(&config, games, show_boards, &mut console)?;
        }
        Command::Suggest { board, mark } => {
            let strategy = config.strategy().for_board_size(board.size());
            let decision = suggest(&board, mark, strategy)?;
            println!("{}", render(&board));
            println!(
                "Best move for {mark}: {} (score {}, {} positions searched)",
                decision.mv, decision.score, decision.nodes
            );
        }
    }

    info!("Done");
    Ok(())
}

/// Logs go to stderr so they never interleave with the game on stdout.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}
