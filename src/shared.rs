use thiserror::Error;

use crate::game::GameError;
use crate::simulation::SimulationError;
use crate::tournament::TournamentError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Game error: {0}")]
    Game(#[from] GameError),

    #[error("Tournament error: {0}")]
    Tournament(#[from] TournamentError),

    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
