use super::types::{BoardError, Mark};
use super::win_detector::{check_win, check_win_with_line};
use std::fmt;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) cells: [Mark; CELL_COUNT],
    // Starts at 1 so that turn() yields the full-round number after the
    // counter is halved, matching the phase gate in the minimax search.
    move_counter: usize,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
            move_counter: 1,
        }
    }

    pub fn map_coordinate(row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= BOARD_SIDE || col >= BOARD_SIDE {
            return Err(BoardError::OutOfBounds);
        }
        Ok(col + BOARD_SIDE * row)
    }

    pub fn set(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), BoardError> {
        let index = Self::map_coordinate(row, col)?;

        if self.cells[index] != Mark::Empty {
            return Err(BoardError::CellOccupied);
        }

        self.cells[index] = mark;
        self.move_counter += 1;

        Ok(())
    }

    /// Applies an already-computed bot move. Does not advance the move
    /// counter; externally-driven turn progression must go through `set`.
    pub fn set_by_index(&mut self, index: usize, mark: Mark) -> Result<(), BoardError> {
        if index >= CELL_COUNT {
            return Err(BoardError::OutOfBounds);
        }

        if self.cells[index] != Mark::Empty {
            return Err(BoardError::CellOccupied);
        }

        self.cells[index] = mark;

        Ok(())
    }

    pub fn turn(&self) -> usize {
        self.move_counter / 2
    }

    pub fn winner(&self, mark: Mark) -> bool {
        check_win(&self.cells, mark)
    }

    pub fn winning_line(&self, mark: Mark) -> Option<[usize; 3]> {
        check_win_with_line(&self.cells, mark)
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIDE {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            let base = row * BOARD_SIDE;
            writeln!(
                f,
                " {} | {} | {} ",
                self.cells[base],
                self.cells[base + 1],
                self.cells[base + 2]
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_coordinate_row_major() {
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(Board::map_coordinate(row, col), Ok(col + 3 * row));
            }
        }
    }

    #[test]
    fn test_map_coordinate_out_of_bounds() {
        assert_eq!(Board::map_coordinate(9, 9), Err(BoardError::OutOfBounds));
        assert_eq!(Board::map_coordinate(3, 0), Err(BoardError::OutOfBounds));
        assert_eq!(Board::map_coordinate(0, 3), Err(BoardError::OutOfBounds));
    }

    #[test]
    fn test_set_writes_mark_and_advances_counter() {
        let mut board = Board::new();
        assert_eq!(board.turn(), 0);

        board.set(1, 2, Mark::X).unwrap();

        assert_eq!(board.cells[5], Mark::X);
        assert_eq!(board.turn(), 1);
    }

    #[test]
    fn test_set_rejects_occupied_cell() {
        let mut board = Board::new();
        board.set(0, 0, Mark::X).unwrap();

        let result = board.set(0, 0, Mark::O);

        assert_eq!(result, Err(BoardError::CellOccupied));
        assert_eq!(board.cells[0], Mark::X);
        assert_eq!(board.turn(), 1);
    }

    #[test]
    fn test_set_out_of_bounds_leaves_state_unchanged() {
        let mut board = Board::new();

        assert_eq!(board.set(5, 5, Mark::X), Err(BoardError::OutOfBounds));
        assert!(board.cells.iter().all(|&cell| cell == Mark::Empty));
        assert_eq!(board.turn(), 0);
    }

    #[test]
    fn test_set_by_index_does_not_advance_counter() {
        let mut board = Board::new();

        board.set_by_index(4, Mark::O).unwrap();

        assert_eq!(board.cells[4], Mark::O);
        assert_eq!(board.turn(), 0);
    }

    #[test]
    fn test_set_by_index_bounds_and_occupancy() {
        let mut board = Board::new();

        assert_eq!(board.set_by_index(9, Mark::X), Err(BoardError::OutOfBounds));

        board.set_by_index(0, Mark::X).unwrap();
        assert_eq!(board.set_by_index(0, Mark::O), Err(BoardError::CellOccupied));
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(0, 0, Mark::X).unwrap();
        board.set(1, 0, Mark::O).unwrap();
        board.set(0, 1, Mark::X).unwrap();
        board.set(1, 1, Mark::O).unwrap();
        board.set(0, 2, Mark::X).unwrap();

        assert!(board.winner(Mark::X));
        assert!(!board.winner(Mark::O));
        assert_eq!(board.winning_line(Mark::X), Some([0, 1, 2]));
    }

    #[test]
    fn test_available_moves_ascending() {
        let mut board = Board::new();
        board.set(0, 0, Mark::X).unwrap();
        board.set(1, 1, Mark::O).unwrap();

        assert_eq!(board.available_moves(), vec![1, 2, 3, 5, 6, 7, 8]);
        assert!(!board.is_full());
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for i in 0..9 {
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            board.set_by_index(i, mark).unwrap();
        }

        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn test_render_grid() {
        let mut board = Board::new();
        board.set(0, 0, Mark::X).unwrap();
        board.set(1, 1, Mark::O).unwrap();

        let rendered = board.to_string();

        assert_eq!(
            rendered,
            " X |   |   \n---+---+---\n   | O |   \n---+---+---\n   |   |   \n"
        );
    }
}
