use crate::core::{Board, Difficulty, GameStatus, Player};
use crate::logic::{active_player, apply_move, compute_status};
use crate::player::ai::select_move;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Instant;

pub struct SelfPlayConfig {
    pub games: usize,
    pub ai_x: Difficulty,
    pub ai_o: Difficulty,
    pub save_stats: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Option<Player>,
    pub moves: usize,
    pub time_ms: u128,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub avg_moves: f64,
    pub ai_x: String,
    pub ai_o: String,
    pub created: String,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    fn new(config: &SelfPlayConfig) -> Self {
        Self {
            total_games: 0,
            x_wins: 0,
            o_wins: 0,
            draws: 0,
            avg_moves: 0.0,
            ai_x: config.ai_x.to_string(),
            ai_o: config.ai_o.to_string(),
            created: chrono::Local::now().to_rfc3339(),
            games: Vec::new(),
        }
    }

    fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.winner {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_moves: usize = self.games.iter().map(|g| g.moves).sum();
        self.avg_moves = total_moves as f64 / self.games.len() as f64;
    }

    pub fn summary(&self) -> String {
        format!(
            "{} games | X ({}) wins: {} | O ({}) wins: {} | draws: {} | avg moves: {:.1}",
            self.total_games,
            self.ai_x,
            self.x_wins,
            self.ai_o,
            self.o_wins,
            self.draws,
            self.avg_moves
        )
    }
}

/// Plays one AI-vs-AI game to the end, no rendering, no pacing delay.
fn play_one(ai_x: Difficulty, ai_o: Difficulty) -> GameResult {
    let start = Instant::now();
    let mut board = Board::new();
    let mut moves = 0;
    let mut rng = rand::thread_rng();

    let winner = loop {
        match compute_status(&board) {
            GameStatus::Won { winner, .. } => break Some(winner),
            GameStatus::Drawn => break None,
            GameStatus::InProgress => {}
        }

        let player = active_player(&board);
        let difficulty = match player {
            Player::X => ai_x,
            Player::O => ai_o,
        };

        let Ok(index) = select_move(&board, player, difficulty, &mut rng) else {
            break None;
        };
        let Ok((next, _)) = apply_move(&board, index, player) else {
            break None;
        };
        board = next;
        moves += 1;
    };

    GameResult {
        winner,
        moves,
        time_ms: start.elapsed().as_millis(),
    }
}

/// Runs the configured number of games across the thread pool and folds the
/// results into one stats record.
pub fn run_selfplay(config: &SelfPlayConfig) -> SelfPlayStats {
    let results: Vec<GameResult> = (0..config.games)
        .into_par_iter()
        .map(|_| play_one(config.ai_x, config.ai_o))
        .collect();

    let mut stats = SelfPlayStats::new(config);
    for result in results {
        stats.add_result(result);
    }
    stats
}

/// Writes the stats under `selfplay_stats/` with a timestamped file name and
/// returns the path.
pub fn save_stats(stats: &SelfPlayStats) -> anyhow::Result<PathBuf> {
    let dir = PathBuf::from("selfplay_stats");
    std::fs::create_dir_all(&dir)?;

    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("selfplay_{}g_{}.json", stats.total_games, stamp));

    let file = std::fs::File::create(&path)?;
    serde_json::to_writer_pretty(file, stats)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_game_is_counted() {
        let config = SelfPlayConfig {
            games: 8,
            ai_x: Difficulty::Hard,
            ai_o: Difficulty::Easy,
            save_stats: false,
        };
        let stats = run_selfplay(&config);
        assert_eq!(stats.total_games, 8);
        assert_eq!(stats.games.len(), 8);
        assert_eq!(stats.x_wins + stats.o_wins + stats.draws, 8);
    }

    #[test]
    fn test_game_lengths_are_plausible() {
        let config = SelfPlayConfig {
            games: 12,
            ai_x: Difficulty::Medium,
            ai_o: Difficulty::Medium,
            save_stats: false,
        };
        let stats = run_selfplay(&config);
        for game in &stats.games {
            // The quickest win takes five moves, a draw fills all nine.
            assert!(game.moves >= 5 && game.moves <= 9, "moves {}", game.moves);
        }
    }

    #[test]
    fn test_hard_mirror_never_loses_to_itself_quickly() {
        // Two Hard AIs always block immediate threats, so no game can end in
        // the minimum five moves (that requires an unanswered double turn of
        // tactics-free play).
        let config = SelfPlayConfig {
            games: 10,
            ai_x: Difficulty::Hard,
            ai_o: Difficulty::Hard,
            save_stats: false,
        };
        let stats = run_selfplay(&config);
        for game in &stats.games {
            assert!(game.moves > 5, "hard vs hard ended in {} moves", game.moves);
        }
    }
}
