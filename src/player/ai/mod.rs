pub mod config;
pub mod heuristic;
pub mod random;

pub use config::AiConfig;
pub use heuristic::{select_move, HeuristicAi};
pub use random::RandomAi;
