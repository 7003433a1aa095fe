//! Headless AI-vs-AI batch runner.
//!
//! Plays N games between two difficulty tiers and writes the stats to
//! `selfplay_stats/`.

use std::env;
use tictactoe_tui::core::Difficulty;
use tictactoe_tui::selfplay::{run_selfplay, save_stats, SelfPlayConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: selfplay <games> [x-difficulty] [o-difficulty]");
        eprintln!("Difficulties: easy | medium | hard (default: hard)");
        std::process::exit(1);
    }

    let games: usize = args[1].parse()?;
    let ai_x: Difficulty = match args.get(2) {
        Some(s) => s.parse()?,
        None => Difficulty::Hard,
    };
    let ai_o: Difficulty = match args.get(3) {
        Some(s) => s.parse()?,
        None => Difficulty::Hard,
    };

    let config = SelfPlayConfig {
        games,
        ai_x,
        ai_o,
        save_stats: true,
    };

    println!("Playing {} games: X = {} vs O = {}", games, ai_x, ai_o);
    let stats = run_selfplay(&config);
    println!("{}", stats.summary());

    if config.save_stats {
        let path = save_stats(&stats)?;
        println!("Stats written to {}", path.display());
    }

    Ok(())
}
