use crate::core::{GameStatus, Player};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// File the tally is kept in between runs.
pub const SCORE_FILE: &str = "tictactoe_scores.json";

/// Win/draw counts carried across rounds and across runs. Serialized as the
/// flat record `{"X": n, "O": n, "draw": n}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    #[serde(rename = "X")]
    pub x: u32,
    #[serde(rename = "O")]
    pub o: u32,
    #[serde(rename = "draw")]
    pub draws: u32,
}

impl ScoreTally {
    /// Counts a finished round. InProgress is ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won {
                winner: Player::X, ..
            } => self.x += 1,
            GameStatus::Won {
                winner: Player::O, ..
            } => self.o += 1,
            GameStatus::Drawn => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    pub fn reset(&mut self) {
        *self = ScoreTally::default();
    }
}

/// Durable storage for the tally. Reads never fail: a missing or unreadable
/// file is an all-zero tally.
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ScoreStore { path: path.into() }
    }

    pub fn load(&self) -> ScoreTally {
        File::open(&self.path)
            .ok()
            .and_then(|file| serde_json::from_reader(BufReader::new(file)).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, tally: &ScoreTally) -> anyhow::Result<()> {
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(file, tally)?;
        Ok(())
    }
}
