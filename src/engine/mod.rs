mod board;
mod bot;
mod session_rng;
mod types;
mod win_detector;

pub use board::{BOARD_SIDE, Board, CELL_COUNT};
pub use bot::{BotInput, calculate_minimax_move, calculate_move};
pub use session_rng::SessionRng;
pub use types::{BoardError, BotType, Mark};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line};
