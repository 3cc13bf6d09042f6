// Public API
pub use around_the_clock::AroundTheClockMatch;
pub use config::{CheckMode, MatchConfig, MatchConfigBuilder, StartingScore};
pub use dart::{Dart, Multiplier};
pub use errors::GameError;
pub use player::{MatchPlayer, Player, TurnTotal};
pub use state::{MatchState, Phase, ThrowOutcome, Transition, Undo};
pub use undo::{ThrowKind, ThrowLog, ThrowRecord};
pub use x01::{X01Match, DARTS_PER_TURN};

// Internal modules
mod around_the_clock;
mod config;
mod dart;
mod errors;
mod player;
mod state;
mod undo;
mod x01;
