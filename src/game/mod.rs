pub mod score;

pub use score::{ScoreStore, ScoreTally, SCORE_FILE};

use crate::core::{Board, GameError, GameStatus, Player};
use crate::display::{render_board, DisplayState};
use crate::logic::{active_player, apply_move, legal_moves};
use crate::player::PlayerController;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::time::{Duration, Instant};

/// Permission to apply one opponent move after its pacing delay. Tickets
/// issued before a reset are refused by `apply_scheduled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveTicket {
    generation: u64,
    due: Instant,
}

impl MoveTicket {
    pub fn due(&self) -> Instant {
        self.due
    }
}

/// One table: board, turn, running tally. All mutation goes through
/// `try_move`/`apply_scheduled`/`reset`; several sessions can live side by
/// side.
pub struct Session {
    board: Board,
    status: GameStatus,
    scores: ScoreTally,
    generation: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Session {
            board: Board::new(),
            status: GameStatus::InProgress,
            scores: ScoreTally::default(),
            generation: 0,
        }
    }

    /// Resumes with a previously loaded tally.
    pub fn with_scores(scores: ScoreTally) -> Self {
        Session {
            scores,
            ..Session::new()
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn scores(&self) -> ScoreTally {
        self.scores
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn active_player(&self) -> Player {
        active_player(&self.board)
    }

    /// Clears the board for a new round. Outstanding move tickets become
    /// stale here; the tally carries over.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.status = GameStatus::InProgress;
        self.generation += 1;
    }

    pub fn reset_scores(&mut self) {
        self.scores.reset();
    }

    /// Applies a move for whichever player is on turn. On a finishing move
    /// the tally is updated before returning.
    pub fn try_move(&mut self, index: usize) -> Result<GameStatus, GameError> {
        let player = active_player(&self.board);
        let (board, status) = apply_move(&self.board, index, player)?;
        self.board = board;
        self.status = status;
        if status.is_terminal() {
            self.scores.record(status);
        }
        Ok(status)
    }

    /// Issues a ticket for an opponent move due after `delay`.
    pub fn schedule_opponent(&self, delay: Duration) -> MoveTicket {
        MoveTicket {
            generation: self.generation,
            due: Instant::now() + delay,
        }
    }

    /// Applies a move under a ticket. `Ok(None)` means the ticket was issued
    /// before the last reset and the move was dropped unapplied.
    pub fn apply_scheduled(
        &mut self,
        ticket: MoveTicket,
        index: usize,
    ) -> Result<Option<GameStatus>, GameError> {
        if ticket.generation != self.generation {
            return Ok(None);
        }
        self.try_move(index).map(Some)
    }
}

/// How a round left the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Finished(GameStatus),
    /// A seat left mid-round; nothing is tallied.
    Aborted,
    Quit,
}

/// Runs one round to completion, alternating seats. AI seats get `delay`
/// of thinking pause during which `q` quits and `r` restarts the round.
pub fn play_round(
    session: &mut Session,
    seat_x: &dyn PlayerController,
    seat_o: &dyn PlayerController,
    delay: Duration,
) -> anyhow::Result<RoundOutcome> {
    session.reset();

    loop {
        if session.status().is_terminal() {
            return Ok(RoundOutcome::Finished(session.status()));
        }

        let controller: &dyn PlayerController = match session.active_player() {
            Player::X => seat_x,
            Player::O => seat_o,
        };
        controller.observe_scores(session.scores());

        if controller.is_ai() {
            let mut state = DisplayState::default();
            state.scores = session.scores();
            state.status_msg = Some(format!("{} is thinking...", controller.name()));
            render_board(session.board(), &state);

            let ticket = session.schedule_opponent(delay);
            // Input stays live through the pause so a restart or quit is
            // never blocked on the opponent.
            while Instant::now() < ticket.due() {
                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(KeyEvent { code, .. }) = event::read()? {
                        match code {
                            KeyCode::Char('q') => return Ok(RoundOutcome::Quit),
                            KeyCode::Char('r') => session.reset(),
                            _ => {}
                        }
                    }
                }
            }

            let legal = legal_moves(session.board());
            let Some(index) = controller.choose_move(session.board(), &legal) else {
                return Ok(RoundOutcome::Aborted);
            };
            if session.apply_scheduled(ticket, index)?.is_none() {
                // Round was restarted during the pause; the move is gone.
                continue;
            }
        } else {
            let legal = legal_moves(session.board());
            let Some(index) = controller.choose_move(session.board(), &legal) else {
                return Ok(RoundOutcome::Aborted);
            };
            // The controller only offers empty cells, but the engine has the
            // final say; a refused move just comes back around.
            if session.try_move(index) == Err(GameError::InvalidMove) {
                continue;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_is_idle() {
        let session = Session::new();
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.active_player(), Player::X);
        assert!(session.board().cells.iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_round_to_win_updates_tally() {
        let mut session = Session::new();
        for index in [0, 3, 1, 4] {
            session.try_move(index).unwrap();
        }
        let status = session.try_move(2).unwrap();
        assert_eq!(
            status,
            GameStatus::Won {
                winner: Player::X,
                line: [0, 1, 2]
            }
        );
        assert_eq!(session.scores().x, 1);

        // Terminal table refuses more moves.
        assert_eq!(session.try_move(5), Err(GameError::InvalidMove));

        // The tally survives the next round.
        session.reset();
        assert_eq!(session.scores().x, 1);
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_stale_ticket_is_dropped() {
        let mut session = Session::new();
        session.try_move(4).unwrap();

        let ticket = session.schedule_opponent(Duration::from_millis(0));
        session.reset();

        assert_eq!(session.apply_scheduled(ticket, 0), Ok(None));
        assert!(session.board().cells.iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_current_ticket_applies() {
        let mut session = Session::new();
        session.try_move(4).unwrap();

        let ticket = session.schedule_opponent(Duration::from_millis(0));
        let status = session.apply_scheduled(ticket, 0).unwrap();
        assert_eq!(status, Some(GameStatus::InProgress));
        assert_eq!(session.board().cell(0), Some(Player::O));
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut first = Session::new();
        let second = Session::new();
        first.try_move(0).unwrap();
        assert_eq!(second.board().cell(0), None);
    }

    #[test]
    fn test_reset_scores() {
        let mut session = Session::with_scores(ScoreTally {
            x: 2,
            o: 1,
            draws: 3,
        });
        session.reset_scores();
        assert_eq!(session.scores(), ScoreTally::default());
    }
}
