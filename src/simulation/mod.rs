pub mod aiming;
pub mod runner;
pub mod types;

mod errors;

pub use aiming::AimingThrower;
pub use errors::SimulationError;
pub use runner::{play_around_the_clock, play_x01, run_tournament, DEFAULT_DART_LIMIT};
pub use types::{SkillLevel, ThrowStrategy};
