pub mod models;
pub mod schedule;
pub mod service;
pub mod standings;

mod errors;

pub use errors::TournamentError;
pub use models::{Fixture, FixtureStatus, MatchResult, StandingsEntry};
pub use schedule::generate_schedule;
pub use service::{record_match_result, Tournament, TournamentPhase, MAX_PLAYERS, MIN_PLAYERS};
pub use standings::{compute_standings, POINTS_PER_WIN};
