use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::game::{MatchPlayer, Player, X01Match};

use super::TournamentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FixtureStatus {
    Pending,
    Active,
    Completed,
}

/// One scheduled pairing. Created with the schedule, only ever updated on completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: String,
    pub round: u32,
    pub sequence: u32,
    pub player_a_id: String,
    pub player_b_id: String,
    pub status: FixtureStatus,
    pub winner_id: Option<String>,
    pub legs_a: u32,
    pub legs_b: u32,
    pub sets_a: u32,
    pub sets_b: u32,
}

impl Fixture {
    pub fn pending(id: String, round: u32, sequence: u32, player_a: &Player, player_b: &Player) -> Self {
        Self {
            id,
            round,
            sequence,
            player_a_id: player_a.id.clone(),
            player_b_id: player_b.id.clone(),
            status: FixtureStatus::Pending,
            winner_id: None,
            legs_a: 0,
            legs_b: 0,
            sets_a: 0,
            sets_b: 0,
        }
    }

    pub fn involves(&self, player_id: &str) -> bool {
        self.player_a_id == player_id || self.player_b_id == player_id
    }

    pub fn is_completed(&self) -> bool {
        self.status == FixtureStatus::Completed
    }

    pub fn loser_id(&self) -> Option<&str> {
        let winner = self.winner_id.as_deref()?;
        if winner == self.player_a_id {
            Some(&self.player_b_id)
        } else {
            Some(&self.player_a_id)
        }
    }
}

/// The four numbers (plus winner) a finished match hands back to the tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner_id: String,
    pub legs_a: u32,
    pub legs_b: u32,
    pub sets_a: u32,
    pub sets_b: u32,
}

impl MatchResult {
    /// Read the result of a finished match. Legs are the whole-match totals, not the
    /// per-set counters.
    pub fn from_match(fixture: &Fixture, game: &X01Match) -> Result<Self, TournamentError> {
        let winner = game
            .winner()
            .ok_or_else(|| TournamentError::MatchNotFinished(fixture.id.clone()))?;

        let player_a = participant(fixture, game, &fixture.player_a_id)?;
        let player_b = participant(fixture, game, &fixture.player_b_id)?;

        Ok(Self {
            winner_id: winner.id.clone(),
            legs_a: player_a.legs_won_total,
            legs_b: player_b.legs_won_total,
            sets_a: player_a.sets_won,
            sets_b: player_b.sets_won,
        })
    }
}

fn participant<'g>(
    fixture: &Fixture,
    game: &'g X01Match,
    player_id: &str,
) -> Result<&'g MatchPlayer, TournamentError> {
    game.player(player_id)
        .ok_or_else(|| TournamentError::PlayerMissingFromMatch {
            fixture_id: fixture.id.clone(),
            player_id: player_id.to_string(),
        })
}

/// One row of the standings table. `points`, `leg_diff` and `set_diff` are
/// derived from the counters every time standings are computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub player_id: String,
    pub player_name: String,
    pub wins: u32,
    pub losses: u32,
    pub legs_for: u32,
    pub legs_against: u32,
    pub sets_for: u32,
    pub sets_against: u32,
    pub points: u32,
    pub leg_diff: i32,
    pub set_diff: i32,
}

impl StandingsEntry {
    pub fn new(player: &Player) -> Self {
        Self {
            player_id: player.id.clone(),
            player_name: player.name.clone(),
            wins: 0,
            losses: 0,
            legs_for: 0,
            legs_against: 0,
            sets_for: 0,
            sets_against: 0,
            points: 0,
            leg_diff: 0,
            set_diff: 0,
        }
    }

    pub fn games_played(&self) -> u32 {
        self.wins + self.losses
    }
}
