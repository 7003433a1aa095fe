use crate::core::Difficulty;
use serde::{Deserialize, Serialize};

/// Tunables read from `ai_config.json` next to the binary. Missing or broken
/// files fall back to the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    pub version: String,
    pub default_difficulty: Difficulty,
    /// Pause before an AI move lands, for pacing only.
    pub move_delay_ms: u64,
}

impl AiConfig {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = "ai_config.json";
        let config_str = std::fs::read_to_string(config_path)?;
        let config: AiConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| Self::default())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            version: "1.0".to_string(),
            default_difficulty: Difficulty::Medium,
            move_delay_ms: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_json() {
        let config = AiConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: AiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.default_difficulty, config.default_difficulty);
        assert_eq!(back.move_delay_ms, config.move_delay_ms);
    }
}
