use super::types::Mark;

pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(cells: &[Mark; 9], mark: Mark) -> bool {
    check_win_with_line(cells, mark).is_some()
}

pub fn check_win_with_line(cells: &[Mark; 9], mark: Mark) -> Option<[usize; 3]> {
    if mark == Mark::Empty {
        return None;
    }

    WINNING_LINES
        .iter()
        .find(|line| line.iter().all(|&i| cells[i] == mark))
        .copied()
}
