//! Unbeatable - console tic-tac-toe against a perfect-play engine.
//!
//! The search itself lives in [`unbeatable_core`]; this crate is the turn
//! controller around it.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for marks, turn order, board size and strategy
//! - **Players**: a human at the console and the search engine behind one trait
//! - **Orchestrator**: one game, move by move, until the board is decided
//! - **Session**: the replay loop, engine self-play, and position analysis
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use unbeatable::{Console, GameConfig, self_play};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut console = Console::new(Cursor::new(""), Vec::new());
//! let tally = self_play(&GameConfig::default(), 1, false, &mut console)?;
//! assert_eq!(tally.draws, 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod orchestrator;
mod players;
mod render;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, MAX_MINIMAX_SIZE, MAX_PLAYABLE_SIZE, StrategyKind};

// Crate-level exports - Terminal I/O
pub use console::{Console, Terminal};
pub use render::render;

// Crate-level exports - Players and orchestration
pub use orchestrator::Orchestrator;
pub use players::{EnginePlayer, HumanPlayer, Player};

// Crate-level exports - Sessions
pub use session::{Tally, human_vs_engine, play_session, self_play, suggest};
