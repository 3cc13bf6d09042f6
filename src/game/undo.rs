// Append-only throw log. Every dart applied to a match leaves exactly one
// record here, and every field a dart mutates can be restored from it.

use serde::{Deserialize, Serialize};

use super::player::MatchPlayer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThrowKind {
    /// Points deducted normally
    Scored,
    /// Dart refused by the in-mode before the player opened
    OpeningRejected,
    /// Dart would have gone below zero; the turn was discarded
    Bust,
    /// Dart reached zero with the wrong ring; the turn was discarded
    CheckoutRejected,
    /// Dart finished the leg
    Checkout { closed_set: bool },
    /// Around the clock target hit
    TargetHit,
    /// Around the clock dart that missed the target
    Missed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrowRecord {
    pub player_index: usize,
    pub turn_dart_index: u8,
    /// Positive for a deduction, zero for a no-op, negative for a score increase
    pub applied_score_delta: i32,
    pub opened_before_throw: bool,
    pub kind: ThrowKind,
}

impl ThrowRecord {
    /// Value this dart left in the player's current turn
    pub fn turn_value(&self) -> u32 {
        match self.kind {
            ThrowKind::Scored | ThrowKind::Checkout { .. } => self.applied_score_delta.max(0) as u32,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrowLog {
    records: Vec<ThrowRecord>,
}

impl ThrowLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ThrowRecord) {
        self.records.push(record);
    }

    pub fn pop(&mut self) -> Option<ThrowRecord> {
        self.records.pop()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Dart values thrown earlier in the same turn as `record`, oldest first.
    /// Walks back through the player's records until the turn's first dart.
    pub fn turn_darts_before(&self, record: &ThrowRecord) -> Vec<u32> {
        if record.turn_dart_index == 0 {
            return Vec::new();
        }

        let mut darts = Vec::with_capacity(record.turn_dart_index as usize);
        for earlier in self
            .records
            .iter()
            .rev()
            .filter(|r| r.player_index == record.player_index)
        {
            darts.push(earlier.turn_value());
            if earlier.turn_dart_index == 0 {
                break;
            }
        }
        darts.reverse();
        darts
    }
}

/// Undo the scoring effect of `record` on `player`.
/// `log` must already have `record` popped off its tail.
pub(crate) fn revert_scoring(player: &mut MatchPlayer, record: &ThrowRecord, log: &ThrowLog) {
    let turn_was_closed =
        player.current_turn_throws.is_empty() && !player.completed_turn_totals.is_empty();

    if turn_was_closed {
        player.completed_turn_totals.pop();
        player.current_turn_throws = log.turn_darts_before(record);
    } else {
        player.current_turn_throws.pop();
    }

    let delta = record.applied_score_delta;
    player.remaining_score = player.remaining_score.saturating_add_signed(delta);
    player.score_accumulated = player.score_accumulated.saturating_add_signed(-delta);
    player.darts_thrown = player.darts_thrown.saturating_sub(1);
    player.has_opened = record.opened_before_throw;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(player_index: usize, turn_dart_index: u8, delta: i32, kind: ThrowKind) -> ThrowRecord {
        ThrowRecord {
            player_index,
            turn_dart_index,
            applied_score_delta: delta,
            opened_before_throw: true,
            kind,
        }
    }

    #[test]
    fn test_pop_on_empty_log() {
        let mut log = ThrowLog::new();
        assert!(log.pop().is_none());
        assert!(log.is_empty());
    }

    #[test]
    fn test_turn_darts_before_stops_at_first_dart() {
        let mut log = ThrowLog::new();
        // Player 0's previous turn
        log.push(record(0, 0, 20, ThrowKind::Scored));
        log.push(record(0, 1, 20, ThrowKind::Scored));
        log.push(record(0, 2, 20, ThrowKind::Scored));
        // Player 1's turn
        log.push(record(1, 0, 5, ThrowKind::Scored));
        log.push(record(1, 1, 1, ThrowKind::Scored));
        log.push(record(1, 2, 19, ThrowKind::Scored));
        // Player 0's current turn
        log.push(record(0, 0, 60, ThrowKind::Scored));
        log.push(record(0, 1, 0, ThrowKind::OpeningRejected));

        let closing = record(0, 2, 57, ThrowKind::Scored);
        assert_eq!(log.turn_darts_before(&closing), vec![60, 0]);
    }

    #[test]
    fn test_turn_darts_before_first_dart_is_empty() {
        let mut log = ThrowLog::new();
        log.push(record(0, 0, 20, ThrowKind::Scored));
        let bust = record(1, 0, 0, ThrowKind::Bust);
        assert!(log.turn_darts_before(&bust).is_empty());
    }

    #[test]
    fn test_turn_value_ignores_rejected_darts() {
        assert_eq!(record(0, 0, 40, ThrowKind::Scored).turn_value(), 40);
        assert_eq!(record(0, 0, -45, ThrowKind::Bust).turn_value(), 0);
        assert_eq!(record(0, 0, 0, ThrowKind::CheckoutRejected).turn_value(), 0);
        assert_eq!(
            record(0, 0, 32, ThrowKind::Checkout { closed_set: false }).turn_value(),
            32
        );
    }
}
