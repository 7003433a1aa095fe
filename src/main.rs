use anyhow::Result;
use crossterm::event::{self, Event, KeyCode};
use crossterm::{cursor, execute, terminal};
use std::io;
use std::time::Duration;
use tictactoe_tui::core::{GameStatus, Player};
use tictactoe_tui::display::{render_board, DisplayState};
use tictactoe_tui::game::{play_round, RoundOutcome, ScoreStore, Session, SCORE_FILE};
use tictactoe_tui::player::ai::{AiConfig, HeuristicAi};
use tictactoe_tui::player::{PlayerController, TuiController};
use tictactoe_tui::selfplay::{self, SelfPlayConfig};
use tictactoe_tui::ui;

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;

    let res = run();

    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    res
}

fn clear_screen() -> Result<()> {
    execute!(
        io::stdout(),
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    Ok(())
}

fn run() -> Result<()> {
    let config = AiConfig::load_or_default();
    let store = ScoreStore::new(SCORE_FILE);
    let mut session = Session::with_scores(store.load());

    loop {
        clear_screen()?;
        print!("=== Tic-Tac-Toe ===\r\n\r\n");
        print!("Select mode:\r\n");
        print!("1. Human vs Human\r\n");
        print!("2. Human vs AI\r\n");
        print!("3. AI vs AI (watch)\r\n");
        print!("4. Self-play batch\r\n");
        print!("s. Reset scores\r\n");
        print!("q. Quit\r\n");

        let Some(choice) = ui::choose(&['1', '2', '3', '4', 's'])? else {
            return Ok(());
        };

        match choice {
            's' => {
                session.reset_scores();
                save_scores(&store, &session);
                continue;
            }
            '4' => {
                run_selfplay_menu(&config)?;
                continue;
            }
            _ => {}
        }

        let seats = build_seats(choice, &config)?;
        let Some((seat_x, seat_o)) = seats else {
            continue;
        };

        let delay = Duration::from_millis(config.move_delay_ms);

        loop {
            match play_round(&mut session, seat_x.as_ref(), seat_o.as_ref(), delay)? {
                RoundOutcome::Finished(status) => {
                    save_scores(&store, &session);
                    match round_over(&mut session, &store, status)? {
                        RoundOverChoice::Again => continue,
                        RoundOverChoice::Menu => break,
                        RoundOverChoice::Quit => return Ok(()),
                    }
                }
                RoundOutcome::Aborted | RoundOutcome::Quit => break,
            }
        }
    }
}

type Seats = Option<(Box<dyn PlayerController>, Box<dyn PlayerController>)>;

fn build_seats(choice: char, config: &AiConfig) -> Result<Seats> {
    let seats: Seats = match choice {
        '1' => Some((
            Box::new(TuiController::new("Player X")),
            Box::new(TuiController::new("Player O")),
        )),
        '2' => {
            let Some(difficulty) =
                ui::select_difficulty("AI difficulty", config.default_difficulty)?
            else {
                return Ok(None);
            };
            Some((
                Box::new(TuiController::new("Player X")),
                Box::new(HeuristicAi::new(
                    Player::O,
                    &format!("AI ({})", difficulty),
                    difficulty,
                )),
            ))
        }
        '3' => {
            let Some(x_difficulty) =
                ui::select_difficulty("X difficulty", config.default_difficulty)?
            else {
                return Ok(None);
            };
            let Some(o_difficulty) =
                ui::select_difficulty("O difficulty", config.default_difficulty)?
            else {
                return Ok(None);
            };
            Some((
                Box::new(HeuristicAi::new(
                    Player::X,
                    &format!("X AI ({})", x_difficulty),
                    x_difficulty,
                )),
                Box::new(HeuristicAi::new(
                    Player::O,
                    &format!("O AI ({})", o_difficulty),
                    o_difficulty,
                )),
            ))
        }
        _ => None,
    };
    Ok(seats)
}

enum RoundOverChoice {
    Again,
    Menu,
    Quit,
}

fn round_over(
    session: &mut Session,
    store: &ScoreStore,
    status: GameStatus,
) -> Result<RoundOverChoice> {
    loop {
        let mut state = DisplayState::default();
        state.scores = session.scores();
        state.winning_line = match status {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        };
        state.status_msg = Some(match status {
            GameStatus::Won { winner, .. } => format!("Player {} wins!", winner),
            _ => "Game ended in a draw!".to_string(),
        });
        render_board(session.board(), &state);
        print!("[Enter]: Play again | [s]: Reset scores | [m]: Menu | [q]: Quit\r\n");

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Enter | KeyCode::Char('r') => return Ok(RoundOverChoice::Again),
                    KeyCode::Char('m') => return Ok(RoundOverChoice::Menu),
                    KeyCode::Char('q') => return Ok(RoundOverChoice::Quit),
                    KeyCode::Char('s') => {
                        session.reset_scores();
                        save_scores(store, session);
                    }
                    _ => {}
                }
            }
        }
    }
}

fn save_scores(store: &ScoreStore, session: &Session) {
    // Persistence is best effort; a failed write never stops the game.
    if let Err(err) = store.save(&session.scores()) {
        print!("(score save failed: {})\r\n", err);
    }
}

fn run_selfplay_menu(config: &AiConfig) -> Result<()> {
    clear_screen()?;
    print!("=== Self-play batch ===\r\n\r\n");

    let games = ui::read_number("Number of games", 100)?;
    let Some(ai_x) = ui::select_difficulty("X difficulty", config.default_difficulty)? else {
        return Ok(());
    };
    let Some(ai_o) = ui::select_difficulty("O difficulty", config.default_difficulty)? else {
        return Ok(());
    };

    print!("\r\nRunning {} games...\r\n", games);

    let selfplay_config = SelfPlayConfig {
        games,
        ai_x,
        ai_o,
        save_stats: true,
    };
    let stats = selfplay::run_selfplay(&selfplay_config);

    print!("{}\r\n", stats.summary());
    match selfplay::save_stats(&stats) {
        Ok(path) => print!("Stats written to {}\r\n", path.display()),
        Err(err) => print!("(stats save failed: {})\r\n", err),
    }
    print!("\r\nPress any key to return.\r\n");
    ui::wait_any_key()?;
    Ok(())
}
