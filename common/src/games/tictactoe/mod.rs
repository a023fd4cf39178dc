mod board;
mod bot_controller;
mod game_state;
mod stats;
mod types;
mod win_detector;

pub use board::{Board, WIN_LINES, get_available_moves, is_valid_move};
pub use bot_controller::{MEDIUM_DEPTH_LIMIT, best_moves, select_move};
pub use game_state::TicTacToeSession;
pub use stats::{GameStats, WinRateTier};
pub use types::{
    BOARD_SIZE, BOARD_WIDTH, Cell, Difficulty, GameMode, GameResult, Mark, MoveError, Turn,
    WinningLine,
};
pub use win_detector::{check_win, check_win_with_line, evaluate_result};
