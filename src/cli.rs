//! Command-line interface for unbeatable.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use unbeatable::StrategyKind;
use unbeatable_core::{Board, Mark};

/// Unbeatable - tic-tac-toe against a perfect-play engine
#[derive(Parser, Debug)]
#[command(name = "unbeatable")]
#[command(about = "Tic-tac-toe against an engine that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Search strategy, overriding the config file
    #[arg(short, long, global = true)]
    pub strategy: Option<StrategyKind>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer
    Play {
        /// Board size, overriding the config file
        #[arg(long)]
        size: Option<usize>,
    },

    /// Let the engine play itself
    #[command(name = "selfplay")]
    SelfPlay {
        /// Number of games
        #[arg(short, long, default_value = "1")]
        games: u32,

        /// Board size, overriding the config file
        #[arg(long)]
        size: Option<usize>,

        /// Draw the board after every move
        #[arg(long)]
        show_boards: bool,
    },

    /// Print the best move for a position
    Suggest {
        /// Rows of X, O and . separated by '/', e.g. "X.O/.X./..."
        board: Board,

        /// Mark to find a move for
        #[arg(short, long, default_value = "X")]
        mark: Mark,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use unbeatable_core::Move;

    #[test]
    fn test_play_with_size() {
        let cli = Cli::try_parse_from(["unbeatable", "play", "--size", "4"]).unwrap();
        assert!(matches!(cli.command, Command::Play { size: Some(4) }));
        assert!(cli.config.is_none());
        assert!(cli.strategy.is_none());
    }

    #[test]
    fn test_selfplay_options() {
        let cli =
            Cli::try_parse_from(["unbeatable", "selfplay", "--games", "5", "--show-boards"])
                .unwrap();
        match cli.command {
            Command::SelfPlay {
                games,
                size,
                show_boards,
            } => {
                assert_eq!(games, 5);
                assert_eq!(size, None);
                assert!(show_boards);
            }
            other => panic!("Expected selfplay, got {other:?}"),
        }

        let cli = Cli::try_parse_from(["unbeatable", "selfplay"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::SelfPlay {
                games: 1,
                show_boards: false,
                ..
            }
        ));
    }

    #[test]
    fn test_suggest_parses_board_and_mark() {
        let cli = Cli::try_parse_from(["unbeatable", "suggest", "XX./OO./...", "--mark", "o"])
            .unwrap();
        match cli.command {
            Command::Suggest { board, mark } => {
                assert_eq!(mark, Mark::O);
                assert_eq!(board.size(), 3);
                assert_eq!(board.legal_moves().first(), Some(&Move::new(0, 2)));
            }
            other => panic!("Expected suggest, got {other:?}"),
        }
    }

    #[test]
    fn test_suggest_defaults_to_x() {
        let cli = Cli::try_parse_from(["unbeatable", "suggest", "X../.../..."]).unwrap();
        assert!(matches!(cli.command, Command::Suggest { mark: Mark::X, .. }));
    }

    #[test]
    fn test_global_overrides_after_subcommand() {
        let cli = Cli::try_parse_from([
            "unbeatable",
            "play",
            "--strategy",
            "alpha-beta",
            "--config",
            "games.toml",
        ])
        .unwrap();
        assert_eq!(cli.strategy, Some(StrategyKind::AlphaBeta));
        assert_eq!(cli.config, Some(PathBuf::from("games.toml")));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(Cli::try_parse_from(["unbeatable", "suggest", "XXQ/.../..."]).is_err());
        assert!(Cli::try_parse_from(["unbeatable", "play", "--strategy", "random"]).is_err());
        assert!(
            Cli::try_parse_from(["unbeatable", "suggest", "X../.../...", "--mark", "z"]).is_err()
        );
    }
}
