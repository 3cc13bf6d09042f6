// Library crate for the darts scorer and round-robin organizer
// This file exposes the public API for the binary and integration tests

pub mod config;
pub mod game;
pub mod shared;
pub mod simulation;
pub mod tournament;

// Re-export commonly used types for easier access in tests
pub use config::SimulationConfig;
pub use game::{
    AroundTheClockMatch, CheckMode, Dart, MatchConfig, MatchState, Multiplier, Phase, Player,
    StartingScore, ThrowOutcome, Undo, X01Match,
};
pub use shared::AppError;
pub use simulation::{AimingThrower, SkillLevel, ThrowStrategy};
pub use tournament::{
    compute_standings, generate_schedule, record_match_result, Fixture, FixtureStatus,
    MatchResult, StandingsEntry, Tournament, TournamentPhase,
};
