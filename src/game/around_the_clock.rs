use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{
    dart::Dart,
    errors::GameError,
    player::{MatchPlayer, Player},
    state::{Phase, ThrowOutcome, Transition, Undo},
    undo::{ThrowKind, ThrowLog, ThrowRecord},
    x01::DARTS_PER_TURN,
};

pub const FIRST_TARGET: u32 = 1;
pub const FINAL_TARGET: u32 = 20;

/// Around the clock: hit 1 through 20 in order, first to pass 20 wins.
/// A player's `remaining_score` holds the number they need next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AroundTheClockMatch {
    players: Vec<MatchPlayer>,
    current_player: usize,
    dart_index: u8,
    phase: Phase,
    log: ThrowLog,
}

impl AroundTheClockMatch {
    pub fn new(players: &[Player]) -> Result<Self, GameError> {
        if players.is_empty() {
            return Err(GameError::NoPlayers);
        }

        Ok(Self {
            players: players
                .iter()
                .map(|player| MatchPlayer::new(player, FIRST_TARGET, true))
                .collect(),
            current_player: 0,
            dart_index: 0,
            phase: Phase::Playing,
            log: ThrowLog::new(),
        })
    }

    pub fn with_starting_player(mut self, index: usize) -> Result<Self, GameError> {
        if index >= self.players.len() {
            return Err(GameError::StartingPlayerOutOfRange {
                index,
                player_count: self.players.len(),
            });
        }
        self.current_player = index;
        Ok(self)
    }

    pub fn players(&self) -> &[MatchPlayer] {
        &self.players
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player
    }

    pub fn current_target(&self) -> u32 {
        self.players[self.current_player].remaining_score
    }

    pub fn dart_index(&self) -> u8 {
        self.dart_index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn log(&self) -> &ThrowLog {
        &self.log
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.phase, Phase::MatchComplete { .. })
    }

    pub fn apply_throw(&self, dart: Dart) -> Transition<Self> {
        if self.is_complete() {
            return Transition {
                state: self.clone(),
                outcome: ThrowOutcome::MatchAlreadyComplete,
            };
        }

        let mut next = self.clone();
        let index = next.current_player;
        let player = &mut next.players[index];
        let target = player.remaining_score;
        player.darts_thrown += 1;

        let hit = dart.value() == target;
        if hit {
            player.remaining_score += 1;
        }
        next.log.push(ThrowRecord {
            player_index: index,
            turn_dart_index: next.dart_index,
            applied_score_delta: if hit { -1 } else { 0 },
            opened_before_throw: player.has_opened,
            kind: if hit {
                ThrowKind::TargetHit
            } else {
                ThrowKind::Missed
            },
        });

        let outcome = if !hit {
            ThrowOutcome::Missed { player: index }
        } else if player.remaining_score > FINAL_TARGET {
            info!(player = %player.name, darts = player.darts_thrown, "Around the clock won");
            next.phase = Phase::MatchComplete { winner: index };
            next.dart_index = 0;
            return Transition {
                state: next,
                outcome: ThrowOutcome::MatchWon { player: index },
            };
        } else {
            debug!(player = %player.name, target, "Target hit");
            ThrowOutcome::TargetHit {
                player: index,
                next_target: player.remaining_score,
            }
        };

        if next.dart_index + 1 >= DARTS_PER_TURN {
            next.dart_index = 0;
            next.current_player = (index + 1) % next.players.len();
        } else {
            next.dart_index += 1;
        }

        Transition {
            state: next,
            outcome,
        }
    }

    pub fn undo(&self) -> Undo<Self> {
        let mut next = self.clone();
        let Some(record) = next.log.pop() else {
            return Undo::NothingToUndo;
        };
        let Some(player) = next.players.get_mut(record.player_index) else {
            return Undo::NothingToUndo;
        };

        player.remaining_score = player
            .remaining_score
            .saturating_add_signed(record.applied_score_delta);
        player.darts_thrown = player.darts_thrown.saturating_sub(1);
        player.has_opened = record.opened_before_throw;

        next.phase = Phase::Playing;
        next.current_player = record.player_index;
        next.dart_index = record.turn_dart_index;

        Undo::Reverted {
            state: next,
            record,
        }
    }
}
