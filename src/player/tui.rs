use crate::core::{Board, BOARD_CELLS};
use crate::display::{render_board, DisplayState};
use crate::game::ScoreTally;
use crate::player::PlayerController;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::cell::Cell;
use std::time::Duration;

/// Human seat: arrow keys move a cursor over the grid, Enter places the mark.
pub struct TuiController {
    name: String,
    scores: Cell<ScoreTally>,
}

impl TuiController {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            scores: Cell::new(ScoreTally::default()),
        }
    }
}

impl PlayerController for TuiController {
    fn name(&self) -> &str {
        &self.name
    }

    fn observe_scores(&self, scores: ScoreTally) {
        self.scores.set(scores);
    }

    fn choose_move(&self, board: &Board, legal_moves_list: &[usize]) -> Option<usize> {
        let mut state = DisplayState::default();
        state.scores = self.scores.get();
        state.show_cursor = true;
        state.status_msg = Some(format!("{}'s turn", self.name));

        // Start the cursor on the first open cell.
        state.cursor = legal_moves_list.first().copied().unwrap_or(0);

        loop {
            render_board(board, &state);
            print!("[Arrows]: Move | [Enter]: Place | [q]: Leave round\r\n");

            if !event::poll(Duration::from_millis(100)).unwrap_or(false) {
                continue;
            }
            if let Ok(Event::Key(KeyEvent { code, .. })) = event::read() {
                match code {
                    KeyCode::Char('q') | KeyCode::Esc => return None,
                    KeyCode::Up => {
                        if state.cursor >= 3 {
                            state.cursor -= 3;
                        }
                    }
                    KeyCode::Down => {
                        if state.cursor + 3 < BOARD_CELLS {
                            state.cursor += 3;
                        }
                    }
                    KeyCode::Left => {
                        if state.cursor % 3 > 0 {
                            state.cursor -= 1;
                        }
                    }
                    KeyCode::Right => {
                        if state.cursor % 3 < 2 {
                            state.cursor += 1;
                        }
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        if legal_moves_list.contains(&state.cursor) {
                            return Some(state.cursor);
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}
