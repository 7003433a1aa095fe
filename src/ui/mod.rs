use crate::core::Difficulty;
use crossterm::event::{self, Event, KeyCode};
use std::io::{self, Write};
use std::time::Duration;

/// Blocks until one of `choices` is pressed; `q` and Esc back out with None.
pub fn choose(choices: &[char]) -> anyhow::Result<Option<char>> {
    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(None),
                    KeyCode::Char(c) if choices.contains(&c) => return Ok(Some(c)),
                    _ => {}
                }
            }
        }
    }
}

pub fn wait_any_key() -> anyhow::Result<()> {
    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(_) = event::read()? {
                return Ok(());
            }
        }
    }
}

pub fn select_difficulty(
    label: &str,
    default: Difficulty,
) -> anyhow::Result<Option<Difficulty>> {
    print!(
        "\r\n{}: [1] Easy  [2] Medium  [3] Hard  (Enter = {})\r\n",
        label, default
    );
    io::stdout().flush()?;
    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('1') => return Ok(Some(Difficulty::Easy)),
                    KeyCode::Char('2') => return Ok(Some(Difficulty::Medium)),
                    KeyCode::Char('3') => return Ok(Some(Difficulty::Hard)),
                    KeyCode::Enter => return Ok(Some(default)),
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(None),
                    _ => {}
                }
            }
        }
    }
}

/// Digit entry with echo and backspace. Enter accepts; empty input takes the
/// default, Esc bails out to the default too.
pub fn read_number(prompt: &str, default: usize) -> anyhow::Result<usize> {
    print!("{} (Default: {})\r\n> ", prompt, default);
    io::stdout().flush()?;

    let mut input = String::new();
    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Enter => {
                        print!("\r\n");
                        if input.is_empty() {
                            return Ok(default);
                        }
                        if let Ok(n) = input.parse() {
                            return Ok(n);
                        }
                        input.clear();
                        print!("\r> ");
                        io::stdout().flush()?;
                    }
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        input.push(c);
                        print!("{}", c);
                        io::stdout().flush()?;
                    }
                    KeyCode::Backspace => {
                        if input.pop().is_some() {
                            print!("\u{0008} \u{0008}");
                            io::stdout().flush()?;
                        }
                    }
                    KeyCode::Esc => return Ok(default),
                    _ => {}
                }
            }
        }
    }
}
