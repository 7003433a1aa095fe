use crate::core::{Board, Player};
use crate::game::ScoreTally;
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::stdout;

/// Everything the renderer needs besides the board itself.
pub struct DisplayState {
    pub cursor: usize,
    pub show_cursor: bool,
    pub status_msg: Option<String>,
    pub winning_line: Option<[usize; 3]>,
    pub scores: ScoreTally,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            cursor: 0,
            show_cursor: false,
            status_msg: None,
            winning_line: None,
            scores: ScoreTally::default(),
        }
    }
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Full-screen redraw: title, status line, tally, then the grid. Winning
/// cells come out green, the cursor cell bracketed yellow.
pub fn render_board(board: &Board, state: &DisplayState) {
    let mut out = stdout();

    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )
    .unwrap();

    print!("=== Tic-Tac-Toe ===\r\n");
    if let Some(msg) = &state.status_msg {
        print!("{}\r\n", msg.clone().bold().yellow());
    } else {
        print!("\r\n");
    }
    print!(
        "X {} | O {} | Draws {}\r\n\r\n",
        state.scores.x, state.scores.o, state.scores.draws
    );

    for row in 0..3 {
        print!("   +---+---+---+\r\n");
        print!("   |");
        for col in 0..3 {
            let index = row * 3 + col;
            let mark = board.cell(index);

            let char_str = match mark {
                Some(player) => player.to_string(),
                None => ".".to_string(),
            };

            let is_cursor = state.show_cursor && state.cursor == index;
            let is_winning = state
                .winning_line
                .map_or(false, |line| line.contains(&index));

            let (prefix, suffix) = if is_cursor { ("[", "]") } else { (" ", " ") };
            let cell_text = format!("{}{}{}", prefix, char_str, suffix);

            if is_cursor {
                print!("{}", cell_text.yellow());
            } else if is_winning {
                print!("{}", cell_text.bold().green());
            } else {
                match mark {
                    Some(Player::X) => print!("{}", cell_text.cyan()),
                    Some(Player::O) => print!("{}", cell_text.magenta()),
                    None => print!("{}", cell_text),
                }
            }
            print!("|");
        }
        print!("\r\n");
    }
    print!("   +---+---+---+\r\n\r\n");
}
