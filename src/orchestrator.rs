//! Game orchestration between two players.

use crate::console::Terminal;
use crate::players::Player;
use crate::render::render;
use anyhow::Result;
use tracing::{debug, info, instrument};
use unbeatable_core::{Board, Mark, Status};

/// Runs one game: asks each player in turn for a move, applies it, and
/// stops as soon as the board is won or full.
pub struct Orchestrator {
    board: Board,
    first: Mark,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    show_board: bool,
}

impl Orchestrator {
    /// Creates an orchestrator for a game starting from `board`.
    pub fn new(
        board: Board,
        first: Mark,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
    ) -> Self {
        Self {
            board,
            first,
            player_x,
            player_o,
            show_board: true,
        }
    }

    /// Only announce moves and the result, without drawing the board.
    pub fn quiet(mut self) -> Self {
        self.show_board = false;
        self
    }

    /// The board as it stands.
    pub fn board(&self) -> &Board {
        &self.board
    }

    fn player(&mut self, mark: Mark) -> &mut dyn Player {
        match mark {
            Mark::X => self.player_x.as_mut(),
            Mark::O => self.player_o.as_mut(),
        }
    }

    /// Runs the game loop until the game is decided.
    #[instrument(skip(self, term), fields(first = %self.first, size = self.board.size()))]
    pub fn run(&mut self, term: &mut dyn Terminal) -> Result<Status> {
        info!("Starting game orchestration");

        loop {
            let status = self.board.status();
            if status.is_over() {
                return self.finish(status, term);
            }

            if self.show_board {
                term.say("")?;
                term.say(&render(&self.board))?;
            }

            let mark = self.board.to_move(self.first);
            let board = self.board.clone();
            let player = self.player(mark);
            term.say(&player.turn_message())?;

            debug!(player = player.name(), %mark, "Waiting for move");
            let mv = player.choose(&board, mark, term)?;
            let name = player.name().to_string();

            self.board.apply_move(mv, mark)?;
            info!(player = %name, %mark, %mv, "Move made");
            if !self.show_board {
                term.say(&format!("{name} ({mark}) plays {mv}"))?;
            }
        }
    }

    fn finish(&mut self, status: Status, term: &mut dyn Terminal) -> Result<Status> {
        if self.show_board {
            term.say("")?;
            term.say(&render(&self.board))?;
        }
        let message = match status {
            Status::Won(mark) => self.player(mark).victory_message(),
            _ => "It's a tie!".to_string(),
        };
        info!(?status, "Game over");
        term.say(&message)?;
        Ok(status)
    }

    /// Clears the board for another game with the same players.
    pub fn restart(&mut self) {
        self.board.clear();
    }
}
