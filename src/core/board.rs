use super::types::Player;
use serde::{Deserialize, Serialize};

pub const BOARD_CELLS: usize = 9;

/// The eight winning triples, in the order they are checked: rows top to
/// bottom, columns left to right, then the two diagonals.
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

pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];
pub const EDGES: [usize; 4] = [1, 3, 5, 7];

/// 3x3 board, row-major, indexed 0-8. `None` is an empty cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Option<Player>; BOARD_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Board::default()
    }

    /// Panics on an out-of-range index; callers validate with `in_range`.
    pub fn cell(&self, index: usize) -> Option<Player> {
        self.cells[index]
    }

    pub fn in_range(index: usize) -> bool {
        index < BOARD_CELLS
    }

    pub fn is_empty_cell(&self, index: usize) -> bool {
        self.cells[index].is_none()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    pub fn mark_count(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| **c == Some(player)).count()
    }
}
