pub mod board;
pub mod types;

pub use board::{Board, BOARD_CELLS, CENTER, CORNERS, EDGES, WIN_LINES};
pub use types::{Difficulty, GameError, GameStatus, Player};
