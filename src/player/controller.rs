use crate::core::Board;
use crate::game::ScoreTally;

/// Move provider for one seat at the table. `None` from `choose_move` means
/// the seat gives up the round.
pub trait PlayerController {
    fn choose_move(&self, board: &Board, legal_moves: &[usize]) -> Option<usize>;
    fn name(&self) -> &str;
    /// AI seats get a presentation delay before their move lands.
    fn is_ai(&self) -> bool {
        false
    }
    /// Called before each turn so interactive seats can show the tally.
    fn observe_scores(&self, _scores: ScoreTally) {}
}
