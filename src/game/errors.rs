use thiserror::Error;

use super::dart::Multiplier;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Invalid dart: {multiplier} {value}")]
    InvalidDart { value: u32, multiplier: Multiplier },

    #[error("Invalid starting score: {0} (expected 301, 501 or 701)")]
    InvalidStartingScore(u32),

    #[error("Legs per set must be at least 1")]
    InvalidLegsPerSet,

    #[error("Sets to win must be at least 1")]
    InvalidSetsToWin,

    #[error("A match needs at least one player")]
    NoPlayers,

    #[error("Starting player {index} is out of range for {player_count} players")]
    StartingPlayerOutOfRange { index: usize, player_count: usize },
}
