use thiserror::Error;

use crate::tournament::TournamentError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error("Match still running after {limit} darts")]
    DartLimitReached { limit: u32 },

    #[error("Tournament error: {0}")]
    Tournament(#[from] TournamentError),
}
