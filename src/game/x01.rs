// x01 scoring engine (301/501/701).
//
// Each dart is checked in a fixed order: opening gate, bust, checkout gate,
// leg/set completion, normal deduction. Every dart, accepted or not, leaves
// one record in the throw log so it can be undone exactly.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{
    config::MatchConfig,
    dart::Dart,
    errors::GameError,
    player::{MatchPlayer, Player},
    state::{Phase, ThrowOutcome, Transition, Undo},
    undo::{revert_scoring, ThrowKind, ThrowLog, ThrowRecord},
};

pub const DARTS_PER_TURN: u8 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct X01Match {
    config: MatchConfig,
    players: Vec<MatchPlayer>,
    current_player: usize,
    dart_index: u8,
    phase: Phase,
    log: ThrowLog,
}

impl X01Match {
    pub fn new(players: &[Player], config: MatchConfig) -> Result<Self, GameError> {
        if players.is_empty() {
            return Err(GameError::NoPlayers);
        }

        let starting = config.starting_score().points();
        let players = players
            .iter()
            .map(|player| MatchPlayer::new(player, starting, false))
            .collect();

        Ok(Self {
            config,
            players,
            current_player: 0,
            dart_index: 0,
            phase: Phase::Playing,
            log: ThrowLog::new(),
        })
    }

    /// Choose who throws first in the opening leg. Later legs always start with player 0.
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

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn players(&self) -> &[MatchPlayer] {
        &self.players
    }

    pub fn player(&self, id: &str) -> Option<&MatchPlayer> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player
    }

    pub fn current_player(&self) -> &MatchPlayer {
        &self.players[self.current_player]
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

    pub fn winner(&self) -> Option<&MatchPlayer> {
        match self.phase {
            Phase::MatchComplete { winner } => self.players.get(winner),
            _ => None,
        }
    }

    /// Apply one dart and return the resulting state. `self` is left untouched.
    pub fn apply_throw(&self, dart: Dart) -> Transition<Self> {
        let outcome = match self.phase {
            Phase::MatchComplete { .. } => Some(ThrowOutcome::MatchAlreadyComplete),
            Phase::LegComplete { .. } | Phase::SetComplete { .. } => {
                Some(ThrowOutcome::AwaitingNextLeg)
            }
            Phase::Playing => None,
        };
        if let Some(outcome) = outcome {
            debug!(?outcome, "Ignoring dart");
            return Transition {
                state: self.clone(),
                outcome,
            };
        }

        let mut next = self.clone();
        let outcome = next.score_dart(dart);
        Transition {
            state: next,
            outcome,
        }
    }

    /// Revert the most recent dart of the current leg.
    pub fn undo(&self) -> Undo<Self> {
        let mut next = self.clone();
        let Some(record) = next.log.pop() else {
            return Undo::NothingToUndo;
        };
        let legs_per_set = next.config.legs_per_set();
        let Some(player) = next.players.get_mut(record.player_index) else {
            return Undo::NothingToUndo;
        };

        revert_scoring(player, &record, &next.log);

        if let ThrowKind::Checkout { closed_set } = record.kind {
            player.legs_won_total = player.legs_won_total.saturating_sub(1);
            if closed_set {
                player.sets_won = player.sets_won.saturating_sub(1);
                player.legs_won = legs_per_set - 1;
            } else {
                player.legs_won = player.legs_won.saturating_sub(1);
            }
        }

        debug!(
            player = %player.name,
            kind = ?record.kind,
            remaining = player.remaining_score,
            "Undid dart"
        );

        next.phase = Phase::Playing;
        next.current_player = record.player_index;
        next.dart_index = record.turn_dart_index;

        Undo::Reverted {
            state: next,
            record,
        }
    }

    /// Leave a leg or set win and start the next leg with player 0.
    /// The finished leg's darts can no longer be undone.
    pub fn advance_leg(&self) -> Option<Self> {
        let closed_set = match self.phase {
            Phase::LegComplete { .. } => false,
            Phase::SetComplete { .. } => true,
            Phase::Playing | Phase::MatchComplete { .. } => return None,
        };

        let mut next = self.clone();
        let starting = next.config.starting_score().points();
        for player in &mut next.players {
            player.reset_for_leg(starting, false);
            if closed_set {
                player.legs_won = 0;
            }
        }
        next.current_player = 0;
        next.dart_index = 0;
        next.phase = Phase::Playing;
        next.log.clear();

        info!(closed_set, "Starting next leg");
        Some(next)
    }

    fn score_dart(&mut self, dart: Dart) -> ThrowOutcome {
        let index = self.current_player;
        let points = dart.score();
        let in_mode = self.config.in_mode();
        let out_mode = self.config.out_mode();
        let player = &self.players[index];

        if !player.has_opened && points > 0 && !in_mode.permits(dart.multiplier()) {
            debug!(player = %player.name, %dart, %in_mode, "Opening dart rejected");
            self.reject_opening();
            return ThrowOutcome::OpeningRejected {
                player: index,
                required: in_mode,
            };
        }

        if points > player.remaining_score {
            debug!(player = %player.name, %dart, remaining = player.remaining_score, "Bust");
            self.discard_turn(ThrowKind::Bust);
            return ThrowOutcome::Bust { player: index };
        }

        if points == player.remaining_score {
            if !out_mode.permits(dart.multiplier()) {
                debug!(player = %player.name, %dart, %out_mode, "Checkout rejected");
                self.discard_turn(ThrowKind::CheckoutRejected);
                return ThrowOutcome::CheckoutRejected {
                    player: index,
                    required: out_mode,
                };
            }
            return self.checkout(points);
        }

        let dart_index = self.dart_index;
        let player = &mut self.players[index];
        let opened_before = player.has_opened;
        player.remaining_score -= points;
        player.score_accumulated += points;
        player.darts_thrown += 1;
        player.has_opened = opened_before || points > 0;
        player.current_turn_throws.push(points);
        let remaining = player.remaining_score;

        self.log.push(ThrowRecord {
            player_index: index,
            turn_dart_index: dart_index,
            applied_score_delta: points as i32,
            opened_before_throw: opened_before,
            kind: ThrowKind::Scored,
        });
        self.next_dart();

        ThrowOutcome::Scored {
            player: index,
            points,
            remaining,
        }
    }

    // The dart takes a slot in the turn but scores nothing.
    fn reject_opening(&mut self) {
        let index = self.current_player;
        let player = &mut self.players[index];
        player.current_turn_throws.push(0);
        player.darts_thrown += 1;

        self.log.push(ThrowRecord {
            player_index: index,
            turn_dart_index: self.dart_index,
            applied_score_delta: 0,
            opened_before_throw: player.has_opened,
            kind: ThrowKind::OpeningRejected,
        });
        self.next_dart();
    }

    // Give back everything the turn scored so far and hand over to the next player.
    fn discard_turn(&mut self, kind: ThrowKind) {
        let index = self.current_player;
        let player = &mut self.players[index];
        let discarded = player.current_turn_total();
        player.remaining_score += discarded;
        player.score_accumulated = player.score_accumulated.saturating_sub(discarded);
        player.darts_thrown += 1;
        player.close_turn(true);

        self.log.push(ThrowRecord {
            player_index: index,
            turn_dart_index: self.dart_index,
            applied_score_delta: -(discarded as i32),
            opened_before_throw: player.has_opened,
            kind,
        });
        self.next_player();
    }

    fn checkout(&mut self, points: u32) -> ThrowOutcome {
        let index = self.current_player;
        let legs_per_set = self.config.legs_per_set();
        let sets_to_win = self.config.sets_to_win();
        let player = &mut self.players[index];
        let opened_before = player.has_opened;

        player.remaining_score = 0;
        player.score_accumulated += points;
        player.darts_thrown += 1;
        player.has_opened = true;
        player.current_turn_throws.push(points);
        player.close_turn(false);

        player.legs_won += 1;
        player.legs_won_total += 1;
        let closed_set = player.legs_won == legs_per_set;
        if closed_set {
            player.legs_won = 0;
            player.sets_won += 1;
        }
        let match_won = player.sets_won == sets_to_win;

        info!(
            player = %player.name,
            legs_won = player.legs_won,
            sets_won = player.sets_won,
            closed_set,
            match_won,
            "Leg won"
        );

        self.log.push(ThrowRecord {
            player_index: index,
            turn_dart_index: self.dart_index,
            applied_score_delta: points as i32,
            opened_before_throw: opened_before,
            kind: ThrowKind::Checkout { closed_set },
        });
        self.dart_index = 0;

        if match_won {
            self.phase = Phase::MatchComplete { winner: index };
            ThrowOutcome::MatchWon { player: index }
        } else if closed_set {
            self.phase = Phase::SetComplete { winner: index };
            ThrowOutcome::SetWon { player: index }
        } else {
            self.phase = Phase::LegComplete { winner: index };
            ThrowOutcome::LegWon { player: index }
        }
    }

    fn next_dart(&mut self) {
        if self.dart_index + 1 >= DARTS_PER_TURN {
            self.players[self.current_player].close_turn(false);
            self.next_player();
        } else {
            self.dart_index += 1;
        }
    }

    fn next_player(&mut self) {
        self.dart_index = 0;
        self.current_player = (self.current_player + 1) % self.players.len();
    }
}
