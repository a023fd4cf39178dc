use std::fmt;

use super::types::{BOARD_SIZE, BOARD_WIDTH, Cell, Mark};

/// Every line that wins the game: rows, columns, then both diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from a row-major cell list.
    pub fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Writes a mark without any rule checks. Callers validate first.
    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Some(mark);
    }

    /// Returns a copy with `mark` at `index`; the receiver is left untouched.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.set(index, mark);
        next
    }

    pub fn marks_placed(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(BOARD_WIDTH).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                match cell {
                    Some(mark) => write!(f, "{}", mark)?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_none())
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    matches!(board.get(index), Some(None))
}

#[cfg(test)]
pub(crate) fn parse_board(rows: &str) -> Board {
    let mut cells = [None; BOARD_SIZE];
    let symbols = rows.chars().filter(|c| !c.is_whitespace());
    for (index, symbol) in symbols.enumerate().take(BOARD_SIZE) {
        cells[index] = match symbol {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            _ => None,
        };
    }
    Board::from_cells(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_all_moves() {
        let board = Board::new();

        assert_eq!(get_available_moves(&board), (0..9).collect::<Vec<_>>());
        assert_eq!(board.marks_placed(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_available_moves_skip_marked_cells() {
        let board = parse_board("X.O ... ..X");

        assert_eq!(get_available_moves(&board), vec![1, 3, 4, 5, 6, 7]);
        assert_eq!(board.marks_placed(), 3);
    }

    #[test]
    fn test_is_valid_move() {
        let board = parse_board("X.. ... ...");

        assert!(!is_valid_move(&board, 0));
        assert!(is_valid_move(&board, 1));
        assert!(!is_valid_move(&board, 9));
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();

        let next = board.with_mark(4, Mark::O);

        assert_eq!(board.get(4), Some(None));
        assert_eq!(next.get(4), Some(Some(Mark::O)));
    }

    #[test]
    fn test_display_renders_rows() {
        let board = parse_board("XO. .X. ..O");

        assert_eq!(board.to_string(), "XO.\n.X.\n..O");
    }

    #[test]
    fn test_win_lines_cover_each_cell() {
        for index in 0..BOARD_SIZE {
            assert!(WIN_LINES.iter().any(|line| line.contains(&index)));
        }
        assert_eq!(WIN_LINES.iter().filter(|line| line.contains(&4)).count(), 4);
    }
}
