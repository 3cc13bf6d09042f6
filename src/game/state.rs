use serde::{Deserialize, Serialize};

use super::{
    around_the_clock::AroundTheClockMatch,
    config::CheckMode,
    dart::Dart,
    player::MatchPlayer,
    undo::{ThrowLog, ThrowRecord},
    x01::X01Match,
};

/// Where a match stands between throws. Leg and set completion are held
/// until the caller asks for the next leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    Playing,
    LegComplete { winner: usize },
    SetComplete { winner: usize },
    MatchComplete { winner: usize },
}

impl Phase {
    pub fn winner(&self) -> Option<usize> {
        match self {
            Phase::Playing => None,
            Phase::LegComplete { winner }
            | Phase::SetComplete { winner }
            | Phase::MatchComplete { winner } => Some(*winner),
        }
    }
}

/// What a single dart did. Rule violations are ordinary outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ThrowOutcome {
    Scored {
        player: usize,
        points: u32,
        remaining: u32,
    },
    OpeningRejected {
        player: usize,
        required: CheckMode,
    },
    Bust {
        player: usize,
    },
    CheckoutRejected {
        player: usize,
        required: CheckMode,
    },
    LegWon {
        player: usize,
    },
    SetWon {
        player: usize,
    },
    MatchWon {
        player: usize,
    },
    TargetHit {
        player: usize,
        next_target: u32,
    },
    Missed {
        player: usize,
    },
    /// The match is over; the dart was ignored
    MatchAlreadyComplete,
    /// A leg or set was just won; call `advance_leg` first
    AwaitingNextLeg,
}

impl ThrowOutcome {
    /// True when the dart was ignored and the state is unchanged
    pub fn is_noop(&self) -> bool {
        matches!(
            self,
            ThrowOutcome::MatchAlreadyComplete | ThrowOutcome::AwaitingNextLeg
        )
    }

    /// True when the dart ended the player's turn without scoring
    pub fn discarded_turn(&self) -> bool {
        matches!(
            self,
            ThrowOutcome::Bust { .. } | ThrowOutcome::CheckoutRejected { .. }
        )
    }
}

/// The state after a dart plus what happened.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S> {
    pub state: S,
    pub outcome: ThrowOutcome,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Undo<S> {
    Reverted { state: S, record: ThrowRecord },
    NothingToUndo,
}

impl<S> Undo<S> {
    /// The reverted state, or `current` when there was nothing to undo
    pub fn into_state_or(self, current: S) -> S {
        match self {
            Undo::Reverted { state, .. } => state,
            Undo::NothingToUndo => current,
        }
    }
}

/// Any running match. The two variants share nothing but dart decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum MatchState {
    X01(X01Match),
    AroundTheClock(AroundTheClockMatch),
}

impl MatchState {
    pub fn apply_throw(&self, dart: Dart) -> Transition<MatchState> {
        match self {
            MatchState::X01(game) => {
                let Transition { state, outcome } = game.apply_throw(dart);
                Transition {
                    state: MatchState::X01(state),
                    outcome,
                }
            }
            MatchState::AroundTheClock(game) => {
                let Transition { state, outcome } = game.apply_throw(dart);
                Transition {
                    state: MatchState::AroundTheClock(state),
                    outcome,
                }
            }
        }
    }

    pub fn undo(&self) -> Undo<MatchState> {
        let undone = match self {
            MatchState::X01(game) => match game.undo() {
                Undo::Reverted { state, record } => (MatchState::X01(state), record),
                Undo::NothingToUndo => return Undo::NothingToUndo,
            },
            MatchState::AroundTheClock(game) => match game.undo() {
                Undo::Reverted { state, record } => (MatchState::AroundTheClock(state), record),
                Undo::NothingToUndo => return Undo::NothingToUndo,
            },
        };
        Undo::Reverted {
            state: undone.0,
            record: undone.1,
        }
    }

    /// Start the next leg after a leg or set win. `None` outside those phases.
    pub fn advance_leg(&self) -> Option<MatchState> {
        match self {
            MatchState::X01(game) => game.advance_leg().map(MatchState::X01),
            MatchState::AroundTheClock(_) => None,
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            MatchState::X01(game) => game.phase(),
            MatchState::AroundTheClock(game) => game.phase(),
        }
    }

    pub fn players(&self) -> &[MatchPlayer] {
        match self {
            MatchState::X01(game) => game.players(),
            MatchState::AroundTheClock(game) => game.players(),
        }
    }

    pub fn current_player_index(&self) -> usize {
        match self {
            MatchState::X01(game) => game.current_player_index(),
            MatchState::AroundTheClock(game) => game.current_player_index(),
        }
    }

    pub fn log(&self) -> &ThrowLog {
        match self {
            MatchState::X01(game) => game.log(),
            MatchState::AroundTheClock(game) => game.log(),
        }
    }

    pub fn winner(&self) -> Option<&MatchPlayer> {
        match self.phase() {
            Phase::MatchComplete { winner } => self.players().get(winner),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.phase(), Phase::MatchComplete { .. })
    }
}
