use super::board::{Board, CELL_COUNT};
use super::session_rng::SessionRng;
use super::types::{BotType, Mark};
use super::win_detector::check_win;
use crate::log;

pub struct BotInput {
    pub board: Board,
    pub mark: Mark,
}

impl BotInput {
    pub fn from_board(board: &Board, mark: Mark) -> Self {
        Self {
            board: board.clone(),
            mark,
        }
    }
}

pub fn calculate_move(bot_type: BotType, input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let selected = match bot_type {
        BotType::Random => calculate_random_move(input, rng),
        BotType::Minimax => calculate_minimax_move(input),
    };

    if let Some(index) = selected {
        log!("{:?} bot selected index {} for {:?}", bot_type, index, input.mark);
    }

    selected
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = input.board.available_moves();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let bot_mark = input.mark;
    bot_mark.opponent()?;

    let mut board = input.board.clone();

    let mut best_move = None;
    // Sentinel outside the terminal score range [-11, 11], so the first
    // candidate with a real score always replaces it.
    let mut best_score = match bot_mark {
        Mark::X => -20,
        _ => 20,
    };

    for index in 0..CELL_COUNT {
        if board.cells[index] != Mark::Empty {
            continue;
        }

        board.cells[index] = bot_mark;
        let score = minimax(&mut board, 0, opponent_of(bot_mark));
        board.cells[index] = Mark::Empty;

        let improved = match bot_mark {
            Mark::X => score > best_score,
            _ => score < best_score,
        };

        // Strict improvement only: among equal scores the lowest index wins.
        if improved {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

fn opponent_of(mark: Mark) -> Mark {
    match mark {
        Mark::X => Mark::O,
        _ => Mark::X,
    }
}

fn minimax(board: &mut Board, depth: i32, to_move: Mark) -> i32 {
    if check_win(&board.cells, Mark::X) {
        return 11 - depth;
    }
    if check_win(&board.cells, Mark::O) {
        return depth - 11;
    }

    let maximizing = to_move == Mark::X;
    let mut mark_score = if maximizing { -20 } else { 20 };

    // Opening phase gate inherited from the reference engine: during the
    // first full round only the first three cells are explored.
    let max_index = if board.turn() <= 1 { 2 } else { CELL_COUNT - 1 };

    for index in 0..=max_index {
        if board.cells[index] != Mark::Empty {
            continue;
        }

        board.cells[index] = to_move;
        let score = minimax(board, depth + 1, opponent_of(to_move));
        board.cells[index] = Mark::Empty;

        mark_score = if maximizing {
            mark_score.max(score)
        } else {
            mark_score.min(score)
        };
    }

    mark_score
}
