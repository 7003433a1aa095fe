use crate::core::{Board, Player};
use crate::player::PlayerController;
use rand::seq::SliceRandom;

/// Picks uniformly among the open cells. This is what Easy plays.
pub struct RandomAi {
    pub name: String,
}

impl RandomAi {
    pub fn new(_player_id: Player, name: &str) -> Self {
        RandomAi {
            name: name.to_string(),
        }
    }
}

impl PlayerController for RandomAi {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, _board: &Board, legal_moves: &[usize]) -> Option<usize> {
        let mut rng = rand::thread_rng();
        legal_moves.choose(&mut rng).copied()
    }

    fn is_ai(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_ai_picks_from_legal_list() {
        let ai = RandomAi::new(Player::O, "Random");
        let board = Board::new();
        let legal = vec![3, 5, 8];
        for _ in 0..20 {
            let index = ai.choose_move(&board, &legal).unwrap();
            assert!(legal.contains(&index));
        }
        assert_eq!(ai.choose_move(&board, &[]), None);
    }
}
