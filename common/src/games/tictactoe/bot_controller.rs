use crate::games::SessionRng;

use super::board::{Board, get_available_moves};
use super::types::{Difficulty, GameResult, Mark};
use super::win_detector::evaluate_result;

/// Plies searched by `Difficulty::Medium`: its own move and the reply.
pub const MEDIUM_DEPTH_LIMIT: usize = 2;

/// Base score of a decided game. The ply count is subtracted so quicker
/// wins and slower losses rank higher; the sign alone is the outcome.
const WIN_SCORE: i32 = 10;

/// Picks the cell for `bot_mark` to play. `None` only when the board is full.
///
/// The board is a read-only snapshot; candidate positions are local copies.
pub fn select_move(
    board: &Board,
    bot_mark: Mark,
    opponent_mark: Mark,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(board, rng),
        Difficulty::Medium => {
            calculate_minimax_move(board, bot_mark, opponent_mark, Some(MEDIUM_DEPTH_LIMIT), rng)
        }
        Difficulty::Hard => calculate_minimax_move(board, bot_mark, opponent_mark, None, rng),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = get_available_moves(board);
    rng.choose(&available_moves).copied()
}

fn calculate_minimax_move(
    board: &Board,
    bot_mark: Mark,
    opponent_mark: Mark,
    depth_limit: Option<usize>,
    rng: &mut SessionRng,
) -> Option<usize> {
    let best_moves = best_moves(board, bot_mark, opponent_mark, depth_limit);
    rng.choose(&best_moves).copied()
}

/// Every root move that reaches the best minimax score, in cell order.
pub fn best_moves(
    board: &Board,
    bot_mark: Mark,
    opponent_mark: Mark,
    depth_limit: Option<usize>,
) -> Vec<usize> {
    let mut best_score = i32::MIN;
    let mut best_moves = Vec::new();

    for index in get_available_moves(board) {
        let child = board.with_mark(index, bot_mark);
        let score = minimax(&child, 1, depth_limit, false, bot_mark, opponent_mark);

        if score > best_score {
            best_score = score;
            best_moves.clear();
            best_moves.push(index);
        } else if score == best_score {
            best_moves.push(index);
        }
    }

    best_moves
}

/// Scores `board` from the bot's point of view. `depth` is the number of
/// plies already played since the root.
fn minimax(
    board: &Board,
    depth: usize,
    depth_limit: Option<usize>,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
) -> i32 {
    if let Some(result) = evaluate_result(board) {
        return score_result(result, bot_mark, depth);
    }

    if depth_limit.is_some_and(|limit| depth >= limit) {
        return 0;
    }

    let (mover, next_is_maximizing) = if is_maximizing {
        (bot_mark, false)
    } else {
        (opponent_mark, true)
    };

    let scores = get_available_moves(board).into_iter().map(|index| {
        let child = board.with_mark(index, mover);
        minimax(
            &child,
            depth + 1,
            depth_limit,
            next_is_maximizing,
            bot_mark,
            opponent_mark,
        )
    });

    let best = if is_maximizing {
        scores.max()
    } else {
        scores.min()
    };

    // A non-terminal board always has a move, so the fold is never empty.
    best.unwrap_or(0)
}

fn score_result(result: GameResult, bot_mark: Mark, depth: usize) -> i32 {
    match result {
        GameResult::Draw => 0,
        GameResult::Won(mark) if mark == bot_mark => WIN_SCORE - depth as i32,
        GameResult::Won(_) => depth as i32 - WIN_SCORE,
    }
}
