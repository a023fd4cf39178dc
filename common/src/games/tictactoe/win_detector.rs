use super::board::{Board, WIN_LINES};
use super::types::{GameResult, Mark, WinningLine};

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// First line, in [`WIN_LINES`] order, held entirely by one mark.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    WIN_LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Some(mark) if cells[b] == Some(mark) && cells[c] == Some(mark) => {
            Some(WinningLine::new(mark, [a, b, c]))
        }
        _ => None,
    })
}

pub fn has_line(board: &Board, mark: Mark) -> bool {
    let cells = board.cells();
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&index| cells[index] == Some(mark)))
}

/// Terminal outcome of a position, or `None` while moves remain.
pub fn evaluate_result(board: &Board) -> Option<GameResult> {
    if let Some(mark) = check_win(board) {
        return Some(GameResult::Won(mark));
    }
    if board.is_full() {
        return Some(GameResult::Draw);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::parse_board;

    #[test]
    fn test_every_line_is_detected() {
        for line in WIN_LINES {
            let mut board = Board::new();
            for index in line {
                board.set(index, Mark::O);
            }

            let found = check_win_with_line(&board);

            assert_eq!(found, Some(WinningLine::new(Mark::O, line)));
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = parse_board("XXO ... ...");

        assert_eq!(check_win(&board), None);
        assert!(!has_line(&board, Mark::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = parse_board("XOX XOO OXX");

        assert_eq!(evaluate_result(&board), Some(GameResult::Draw));
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        let board = parse_board("XOX OXO OXX");

        assert_eq!(evaluate_result(&board), Some(GameResult::Won(Mark::X)));
    }

    #[test]
    fn test_open_board_has_no_result() {
        let board = parse_board("X.. .O. ...");

        assert_eq!(evaluate_result(&board), None);
    }
}
