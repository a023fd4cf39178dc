use crate::games::SessionRng;

use super::board::Board;
use super::bot_controller::select_move;
use super::types::{BOARD_SIZE, Difficulty, GameResult, Mark, MoveError, Turn, WinningLine};
use super::win_detector::{check_win_with_line, has_line};

/// One game of tic-tac-toe between the human seat and the computer seat.
///
/// The session is a small `Copy` value. Mutating methods take `&mut self`;
/// copy the session first to keep the previous state around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSession {
    board: Board,
    human_mark: Mark,
    turn: Turn,
    result: Option<GameResult>,
    last_move: Option<usize>,
}

impl TicTacToeSession {
    pub fn new(human_mark: Mark) -> Self {
        Self {
            board: Board::new(),
            human_mark,
            turn: Self::opening_turn(human_mark),
            result: None,
            last_move: None,
        }
    }

    fn opening_turn(human_mark: Mark) -> Turn {
        if human_mark == Mark::FIRST {
            Turn::Human
        } else {
            Turn::Computer
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    pub fn computer_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    pub fn mark_for(&self, side: Turn) -> Mark {
        match side {
            Turn::Human => self.human_mark,
            Turn::Computer => self.computer_mark(),
        }
    }

    pub fn current_mark(&self) -> Mark {
        self.mark_for(self.turn)
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.result {
            Some(GameResult::Won(_)) => check_win_with_line(&self.board),
            _ => None,
        }
    }

    /// Places the mark of `side` at `index`, then settles the result or
    /// passes the turn. On error nothing changes.
    pub fn place_mark(&mut self, side: Turn, index: usize) -> Result<(), MoveError> {
        if self.result.is_some() {
            return Err(MoveError::GameOver);
        }

        if side != self.turn {
            return Err(MoveError::NotYourTurn);
        }

        if index >= BOARD_SIZE {
            return Err(MoveError::OutOfBounds(index));
        }

        if self.board.get(index) != Some(None) {
            return Err(MoveError::CellOccupied(index));
        }

        let mark = self.mark_for(side);
        self.board.set(index, mark);
        self.last_move = Some(index);

        if has_line(&self.board, mark) {
            self.result = Some(GameResult::Won(mark));
        } else if self.board.is_full() {
            self.result = Some(GameResult::Draw);
        } else {
            self.turn = self.turn.other();
        }

        Ok(())
    }

    pub fn apply_human_move(&mut self, index: usize) -> bool {
        self.place_mark(Turn::Human, index).is_ok()
    }

    /// Runs the search and plays its move. Does nothing unless the computer
    /// is to move and the game is still open. Returns the played cell.
    pub fn apply_computer_move(
        &mut self,
        difficulty: Difficulty,
        rng: &mut SessionRng,
    ) -> Option<usize> {
        if self.result.is_some() || self.turn != Turn::Computer {
            return None;
        }

        let index = select_move(
            &self.board,
            self.computer_mark(),
            self.human_mark,
            difficulty,
            rng,
        )?;

        self.place_mark(Turn::Computer, index).ok()?;
        Some(index)
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.human_mark);
    }
}
