use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named participant, stable across matches and tournaments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
}

impl Player {
    /// Create a player with a freshly generated id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
        }
    }

    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Summary of a closed turn. Busted turns keep the darts' total for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnTotal {
    pub total: u32,
    pub busted: bool,
}

impl TurnTotal {
    /// Points this turn actually took off the board
    pub fn scored(&self) -> u32 {
        if self.busted {
            0
        } else {
            self.total
        }
    }
}

/// Per-match state of one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPlayer {
    pub id: String,
    pub name: String,
    /// Points left in an x01 leg, or the next target in around the clock
    pub remaining_score: u32,
    pub legs_won: u32,
    pub sets_won: u32,
    pub has_opened: bool,
    pub darts_thrown: u32,
    pub score_accumulated: u32,
    pub current_turn_throws: Vec<u32>,
    pub completed_turn_totals: Vec<TurnTotal>,
    /// Legs won over the whole match, never reset between sets
    pub legs_won_total: u32,
}

impl MatchPlayer {
    pub fn new(player: &Player, remaining_score: u32, has_opened: bool) -> Self {
        Self {
            id: player.id.clone(),
            name: player.name.clone(),
            remaining_score,
            legs_won: 0,
            sets_won: 0,
            has_opened,
            darts_thrown: 0,
            score_accumulated: 0,
            current_turn_throws: Vec::new(),
            completed_turn_totals: Vec::new(),
            legs_won_total: 0,
        }
    }

    /// Average per three darts. Busted darts count towards the darts thrown
    /// but contribute nothing to the accumulated score.
    pub fn average(&self) -> f64 {
        if self.darts_thrown == 0 {
            return 0.0;
        }
        self.score_accumulated as f64 / self.darts_thrown as f64 * 3.0
    }

    pub fn current_turn_total(&self) -> u32 {
        self.current_turn_throws.iter().sum()
    }

    pub fn identity(&self) -> Player {
        Player::with_id(self.id.clone(), self.name.clone())
    }

    /// Fold the in-progress turn into the completed turns.
    pub(crate) fn close_turn(&mut self, busted: bool) {
        let total = self.current_turn_total();
        self.current_turn_throws.clear();
        self.completed_turn_totals.push(TurnTotal { total, busted });
    }

    /// Clear everything scoped to a single leg, keeping match counters.
    pub(crate) fn reset_for_leg(&mut self, remaining_score: u32, has_opened: bool) {
        self.remaining_score = remaining_score;
        self.current_turn_throws.clear();
        self.has_opened = has_opened;
    }
}
