use crate::core::{Board, GameError, GameStatus, Player, WIN_LINES};

/// Derives the side to move from the mark counts. X leads by exactly zero or
/// one marks on any board reachable through `apply_move`.
pub fn active_player(board: &Board) -> Player {
    if board.mark_count(Player::X) == board.mark_count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Ascending indices of the empty cells.
pub fn legal_moves(board: &Board) -> Vec<usize> {
    (0..board.cells.len())
        .filter(|&i| board.is_empty_cell(i))
        .collect()
}

/// Scans the eight lines in their fixed order; the first complete triple
/// decides the winner and is the reported line.
pub fn compute_status(board: &Board) -> GameStatus {
    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Some(mark) = board.cell(a) {
            if board.cell(b) == Some(mark) && board.cell(c) == Some(mark) {
                return GameStatus::Won { winner: mark, line };
            }
        }
    }
    if board.is_full() {
        GameStatus::Drawn
    } else {
        GameStatus::InProgress
    }
}

/// Places `player`'s mark at `index` on a copy of the board and returns the
/// new board with its recomputed status. Rejects the move without touching
/// anything when the index is out of range, the cell is taken, it is not
/// `player`'s turn, or the game is already decided.
pub fn apply_move(
    board: &Board,
    index: usize,
    player: Player,
) -> Result<(Board, GameStatus), GameError> {
    if !Board::in_range(index) {
        return Err(GameError::InvalidMove);
    }
    if compute_status(board).is_terminal() {
        return Err(GameError::InvalidMove);
    }
    if !board.is_empty_cell(index) {
        return Err(GameError::InvalidMove);
    }
    if player != active_player(board) {
        return Err(GameError::InvalidMove);
    }

    let mut next = board.clone();
    next.cells[index] = Some(player);
    let status = compute_status(&next);
    Ok((next, status))
}
