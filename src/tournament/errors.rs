use thiserror::Error;

use crate::game::GameError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TournamentError {
    #[error("A tournament needs between {min} and {max} players, got {count}")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },

    #[error("Player listed twice: {0}")]
    DuplicatePlayer(String),

    #[error("Player not in tournament: {0}")]
    PlayerNotInRoster(String),

    #[error("Fixture not found: {0}")]
    FixtureNotFound(String),

    #[error("Fixture is not pending: {0}")]
    FixtureNotPending(String),

    #[error("Fixture already completed: {0}")]
    FixtureAlreadyCompleted(String),

    #[error("Fixture {0} is already being played")]
    AnotherFixtureActive(String),

    #[error("Winner {winner_id} did not play in fixture {fixture_id}")]
    WinnerNotInFixture {
        fixture_id: String,
        winner_id: String,
    },

    #[error("Player {player_id} is missing from the match for fixture {fixture_id}")]
    PlayerMissingFromMatch {
        fixture_id: String,
        player_id: String,
    },

    #[error("Match for fixture {0} is not finished")]
    MatchNotFinished(String),

    #[error("Game error: {0}")]
    Game(#[from] GameError),
}
