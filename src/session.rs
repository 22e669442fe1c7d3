//! Sessions: the replay loop against the computer, engine self-play, and
//! one-off position analysis.

use crate::config::{GameConfig, StrategyKind};
use crate::console::Terminal;
use crate::orchestrator::Orchestrator;
use crate::players::{EnginePlayer, HumanPlayer, Player};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, instrument};
use unbeatable_core::{Board, Decision, Mark, Move, Status};

/// Results over several games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Adds one finished game.
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Won(Mark::X) => self.x_wins += 1,
            Status::Won(Mark::O) => self.o_wins += 1,
            Status::Draw => self.draws += 1,
            Status::InProgress => {}
        }
    }

    /// Number of games recorded.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} drawn",
            self.games(),
            self.x_wins,
            self.o_wins,
            self.draws
        )
    }
}

/// Builds a game between a human and the configured engine.
#[instrument(skip(config))]
pub fn human_vs_engine(config: &GameConfig) -> Result<Orchestrator> {
    let human: Box<dyn Player> = Box::new(HumanPlayer::default());
    let engine: Box<dyn Player> = Box::new(EnginePlayer::new("Computer", config.strategy().build()));
    let (player_x, player_o) = match config.human_mark() {
        Mark::X => (human, engine),
        Mark::O => (engine, human),
    };
    Ok(Orchestrator::new(
        config.new_board()?,
        config.first_mark(),
        player_x,
        player_o,
    ))
}

/// Plays against the human until they decline a rematch.
#[instrument(skip_all)]
pub fn play_session(config: &GameConfig, term: &mut dyn Terminal) -> Result<Tally> {
    term.say("Welcome to Tic Tac Toe!")?;
    term.say(&format!(
        "You are {}, the computer is {}.",
        config.human_mark(),
        config.engine_mark()
    ))?;

    let mut game = human_vs_engine(config)?;
    let mut tally = Tally::default();
    loop {
        tally.record(game.run(term)?);

        let again = term.ask("Play again? (y/n): ")?;
        if !again.is_some_and(|answer| answer.trim().eq_ignore_ascii_case("y")) {
            term.say("Thanks for playing Tic Tac Toe!")?;
            break;
        }
        game.restart();
    }

    info!(%tally, "Session finished");
    Ok(tally)
}

/// Pits the engine against itself `games` times, X moving first.
#[instrument(skip(config, term))]
pub fn self_play(
    config: &GameConfig,
    games: u32,
    show_boards: bool,
    term: &mut dyn Terminal,
) -> Result<Tally> {
    let mut tally = Tally::default();
    for round in 1..=games {
        term.say(&format!("Game {round}:"))?;
        let player_x = Box::new(EnginePlayer::new("Engine X", config.strategy().build()));
        let player_o = Box::new(EnginePlayer::new("Engine O", config.strategy().build()));
        let mut game = Orchestrator::new(config.new_board()?, Mark::X, player_x, player_o);
        if !show_boards {
            game = game.quiet();
        }
        tally.record(game.run(term)?);
    }
    term.say(&tally.to_string())?;
    Ok(tally)
}

/// Best move for `mark` in `board`, searched with `strategy`.
#[instrument(skip(board), fields(board = %board))]
pub fn suggest(board: &Board, mark: Mark, strategy: StrategyKind) -> Result<Decision<Move>> {
    let mut scratch = board.clone();
    let decision = strategy
        .build()
        .decide(&mut scratch, mark, mark.opponent())?;
    Ok(decision)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_records_each_status() {
        let mut tally = Tally::default();
        tally.record(Status::Won(Mark::X));
        tally.record(Status::Draw);
        tally.record(Status::Draw);
        tally.record(Status::InProgress);
        assert_eq!(tally.games(), 3);
        assert_eq!(tally.to_string(), "3 games: X won 1, O won 0, 2 drawn");
    }

    #[test]
    fn test_suggest_prefers_win() {
        let board: Board = "OO./XX./X..".parse().unwrap();
        let decision = suggest(&board, Mark::O, StrategyKind::AlphaBeta).unwrap();
        // O wins outright at (0,2) before it needs to block (1,2).
        assert_eq!(decision.mv, Move::new(0, 2));
    }

    #[test]
    fn test_suggest_on_five_by_five() {
        let board: Board = "XXXX./OOOO./...../...../.....".parse().unwrap();
        let strategy = StrategyKind::Minimax.for_board_size(board.size());
        let decision = suggest(&board, Mark::X, strategy).unwrap();
        assert_eq!(decision.mv, Move::new(0, 4));
        assert_eq!(decision.score, unbeatable_core::WIN);
    }
}
