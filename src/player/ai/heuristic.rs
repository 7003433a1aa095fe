use crate::core::{Board, Difficulty, GameError, GameStatus, Player, CENTER, CORNERS, EDGES};
use crate::logic::{compute_status, legal_moves};
use crate::player::PlayerController;
use rand::prelude::*;

/// Chance that Medium plays the tactical line instead of a random cell.
const MEDIUM_TACTICAL_CHANCE: f64 = 0.5;

/// Picks a cell for `player` by fixed priority: take a win, block the
/// opponent's win, take the center, then a random open corner, then a random
/// open edge. Easy ignores the priorities entirely, Medium follows them half
/// the time.
pub fn select_move(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    rng: &mut impl Rng,
) -> Result<usize, GameError> {
    let open = legal_moves(board);
    if open.is_empty() {
        return Err(GameError::NoLegalMove);
    }

    let tactical = match difficulty {
        Difficulty::Hard => true,
        Difficulty::Medium => rng.gen_bool(MEDIUM_TACTICAL_CHANCE),
        Difficulty::Easy => false,
    };
    if !tactical {
        return open.choose(rng).copied().ok_or(GameError::NoLegalMove);
    }

    if let Some(index) = winning_cell(board, player) {
        return Ok(index);
    }
    if let Some(index) = winning_cell(board, player.opponent()) {
        return Ok(index);
    }
    if board.is_empty_cell(CENTER) {
        return Ok(CENTER);
    }

    let open_corners: Vec<usize> = CORNERS
        .iter()
        .copied()
        .filter(|&i| board.is_empty_cell(i))
        .collect();
    if let Some(&index) = open_corners.choose(rng) {
        return Ok(index);
    }

    let open_edges: Vec<usize> = EDGES
        .iter()
        .copied()
        .filter(|&i| board.is_empty_cell(i))
        .collect();
    if let Some(&index) = open_edges.choose(rng) {
        return Ok(index);
    }

    // The pools above span all nine cells; lowest index if none matched.
    open.first().copied().ok_or(GameError::NoLegalMove)
}

/// Lowest empty cell that completes a line for `mark`, if any.
fn winning_cell(board: &Board, mark: Player) -> Option<usize> {
    (0..board.cells.len()).find(|&i| {
        if !board.is_empty_cell(i) {
            return false;
        }
        let mut probe = board.clone();
        probe.cells[i] = Some(mark);
        matches!(compute_status(&probe), GameStatus::Won { winner, .. } if winner == mark)
    })
}

/// Rule-based opponent. Difficulty is read fresh on every selection.
pub struct HeuristicAi {
    pub player_id: Player,
    pub name: String,
    pub difficulty: Difficulty,
}

impl HeuristicAi {
    pub fn new(player_id: Player, name: &str, difficulty: Difficulty) -> Self {
        Self {
            player_id,
            name: name.to_string(),
            difficulty,
        }
    }
}

impl PlayerController for HeuristicAi {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &Board, _legal_moves: &[usize]) -> Option<usize> {
        let mut rng = rand::thread_rng();
        select_move(board, self.player_id, self.difficulty, &mut rng).ok()
    }

    fn is_ai(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(s: &str) -> Board {
        let mut board = Board::new();
        for (i, ch) in s.chars().enumerate() {
            board.cells[i] = match ch {
                'X' => Some(Player::X),
                'O' => Some(Player::O),
                _ => None,
            };
        }
        board
    }

    #[test]
    fn test_hard_takes_immediate_win() {
        // O can win at 5 and must prefer it over blocking X at 2.
        let board = board_from("XX.OO..X.");
        let mut rng = rand::thread_rng();
        let index = select_move(&board, Player::O, Difficulty::Hard, &mut rng).unwrap();
        assert_eq!(index, 5);
    }

    #[test]
    fn test_hard_blocks_forced_win() {
        // X threatens 0-1-2 and O has no win of its own; the only block is 2.
        let board = board_from("XX..O..OX");
        let mut rng = rand::thread_rng();
        let index = select_move(&board, Player::O, Difficulty::Hard, &mut rng).unwrap();
        assert_eq!(index, 2);
    }

    #[test]
    fn test_hard_takes_center() {
        let board = board_from("X........");
        let mut rng = rand::thread_rng();
        let index = select_move(&board, Player::O, Difficulty::Hard, &mut rng).unwrap();
        assert_eq!(index, 4);
    }

    #[test]
    fn test_hard_answers_center_with_corner() {
        // No win, no block, center taken: the reply must be a corner.
        let board = board_from("....X....");
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let index = select_move(&board, Player::O, Difficulty::Hard, &mut rng).unwrap();
            assert!([0, 2, 6, 8].contains(&index), "got {}", index);
        }
    }

    #[test]
    fn test_hard_falls_back_to_edges() {
        // Center and every corner taken, no win or block for either side:
        // only the edge pool (cells 1 and 7) is left.
        let board = board_from("X.OOXXX.O");
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let index = select_move(&board, Player::O, Difficulty::Hard, &mut rng).unwrap();
            assert!(index == 1 || index == 7, "got {}", index);
        }
    }

    #[test]
    fn test_easy_stays_legal() {
        let board = board_from("XX.OO..X.");
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let index = select_move(&board, Player::O, Difficulty::Easy, &mut rng).unwrap();
            assert!(board.is_empty_cell(index));
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = board_from("XOXXOOOXX");
        let mut rng = rand::thread_rng();
        assert_eq!(
            select_move(&board, Player::X, Difficulty::Hard, &mut rng),
            Err(GameError::NoLegalMove)
        );
        assert_eq!(
            select_move(&board, Player::X, Difficulty::Easy, &mut rng),
            Err(GameError::NoLegalMove)
        );
    }

    #[test]
    fn test_win_preferred_in_scan_order() {
        // O can win at both 2 (row 0-1-2) and 6 (column 0-3-6): the
        // ascending scan settles on 2.
        let board = board_from("OO.OXX.XX");
        let mut rng = rand::thread_rng();
        let index = select_move(&board, Player::O, Difficulty::Hard, &mut rng).unwrap();
        assert_eq!(index, 2);
    }
}
