use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::game::{MatchConfig, Player, X01Match};

use super::{
    models::{Fixture, FixtureStatus, MatchResult, StandingsEntry},
    schedule::generate_schedule,
    standings::compute_standings,
    TournamentError,
};

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentPhase {
    Active,
    Completed,
}

/// Mark one fixture completed with the given result. Returns a new fixture list.
pub fn record_match_result(
    fixtures: &[Fixture],
    match_id: &str,
    result: &MatchResult,
) -> Result<Vec<Fixture>, TournamentError> {
    let fixture = fixtures
        .iter()
        .find(|f| f.id == match_id)
        .ok_or_else(|| TournamentError::FixtureNotFound(match_id.to_string()))?;

    if fixture.is_completed() {
        return Err(TournamentError::FixtureAlreadyCompleted(match_id.to_string()));
    }
    if !fixture.involves(&result.winner_id) {
        return Err(TournamentError::WinnerNotInFixture {
            fixture_id: match_id.to_string(),
            winner_id: result.winner_id.clone(),
        });
    }

    Ok(fixtures
        .iter()
        .map(|f| {
            if f.id != match_id {
                return f.clone();
            }
            Fixture {
                status: FixtureStatus::Completed,
                winner_id: Some(result.winner_id.clone()),
                legs_a: result.legs_a,
                legs_b: result.legs_b,
                sets_a: result.sets_a,
                sets_b: result.sets_b,
                ..f.clone()
            }
        })
        .collect())
}

/// A round-robin tournament. Every operation returns a new value; the fixture
/// list is the only source of truth and standings are computed from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    id: String,
    config: MatchConfig,
    players: Vec<Player>,
    schedule: Vec<Fixture>,
}

impl Tournament {
    pub fn new(players: Vec<Player>, config: MatchConfig) -> Result<Self, TournamentError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
            return Err(TournamentError::InvalidPlayerCount {
                count: players.len(),
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }

        let mut seen = HashSet::new();
        for player in &players {
            if !seen.insert(player.id.as_str()) {
                return Err(TournamentError::DuplicatePlayer(player.id.clone()));
            }
        }

        let schedule = generate_schedule(&players);
        let id = Uuid::new_v4().to_string();
        info!(
            tournament_id = %id,
            players = players.len(),
            fixtures = schedule.len(),
            "Created tournament"
        );

        Ok(Self {
            id,
            config,
            players,
            schedule,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn schedule(&self) -> &[Fixture] {
        &self.schedule
    }

    pub fn fixture(&self, fixture_id: &str) -> Option<&Fixture> {
        self.schedule.iter().find(|f| f.id == fixture_id)
    }

    pub fn phase(&self) -> TournamentPhase {
        if self.schedule.iter().all(Fixture::is_completed) {
            TournamentPhase::Completed
        } else {
            TournamentPhase::Active
        }
    }

    pub fn active_fixture(&self) -> Option<&Fixture> {
        self.schedule
            .iter()
            .find(|f| f.status == FixtureStatus::Active)
    }

    pub fn pending_fixtures(&self) -> Vec<&Fixture> {
        self.fixtures_with(FixtureStatus::Pending)
    }

    pub fn completed_fixtures(&self) -> Vec<&Fixture> {
        self.fixtures_with(FixtureStatus::Completed)
    }

    /// First pending fixture in schedule order
    pub fn next_pending_fixture(&self) -> Option<&Fixture> {
        self.schedule
            .iter()
            .find(|f| f.status == FixtureStatus::Pending)
    }

    /// (completed, total)
    pub fn progress(&self) -> (usize, usize) {
        (self.completed_fixtures().len(), self.schedule.len())
    }

    pub fn standings(&self) -> Vec<StandingsEntry> {
        compute_standings(&self.schedule, &self.players)
    }

    /// Top of the table once every fixture has been played
    pub fn champion(&self) -> Option<StandingsEntry> {
        if self.phase() != TournamentPhase::Completed {
            return None;
        }
        self.standings().into_iter().next()
    }

    /// Mark a pending fixture active and set up its match. Only one fixture
    /// can be in play at a time.
    pub fn start_fixture(&self, fixture_id: &str) -> Result<(Self, X01Match), TournamentError> {
        if let Some(active) = self.active_fixture() {
            warn!(
                requested = %fixture_id,
                active = %active.id,
                "Refusing to start a second fixture"
            );
            return Err(TournamentError::AnotherFixtureActive(active.id.clone()));
        }

        let fixture = self
            .fixture(fixture_id)
            .ok_or_else(|| TournamentError::FixtureNotFound(fixture_id.to_string()))?;
        if fixture.status != FixtureStatus::Pending {
            return Err(TournamentError::FixtureNotPending(fixture_id.to_string()));
        }

        let participants = [
            self.roster_player(&fixture.player_a_id)?,
            self.roster_player(&fixture.player_b_id)?,
        ];
        let game = X01Match::new(&participants, self.config)?;

        let mut next = self.clone();
        for f in next.schedule.iter_mut().filter(|f| f.id == fixture_id) {
            f.status = FixtureStatus::Active;
        }

        info!(
            tournament_id = %self.id,
            fixture_id = %fixture_id,
            player_a = %participants[0].name,
            player_b = %participants[1].name,
            "Started fixture"
        );
        Ok((next, game))
    }

    /// Record a result. While a fixture is being played, only that fixture can
    /// be completed.
    pub fn complete_fixture(
        &self,
        fixture_id: &str,
        result: &MatchResult,
    ) -> Result<Self, TournamentError> {
        if let Some(active) = self.active_fixture().filter(|f| f.id != fixture_id) {
            warn!(
                requested = %fixture_id,
                active = %active.id,
                "Refusing to complete a fixture while another is in play"
            );
            return Err(TournamentError::AnotherFixtureActive(active.id.clone()));
        }

        let schedule = record_match_result(&self.schedule, fixture_id, result).inspect_err(|e| {
            warn!(fixture_id = %fixture_id, error = %e, "Could not record result");
        })?;

        let next = Self {
            schedule,
            ..self.clone()
        };
        let (completed, total) = next.progress();
        info!(
            tournament_id = %self.id,
            fixture_id = %fixture_id,
            winner = %result.winner_id,
            completed,
            total,
            "Completed fixture"
        );
        Ok(next)
    }

    /// Record the result of a finished match played for `fixture_id`.
    pub fn complete_from_match(
        &self,
        fixture_id: &str,
        game: &X01Match,
    ) -> Result<Self, TournamentError> {
        let fixture = self
            .fixture(fixture_id)
            .ok_or_else(|| TournamentError::FixtureNotFound(fixture_id.to_string()))?;
        let result = MatchResult::from_match(fixture, game)?;
        self.complete_fixture(fixture_id, &result)
    }

    fn fixtures_with(&self, status: FixtureStatus) -> Vec<&Fixture> {
        self.schedule.iter().filter(|f| f.status == status).collect()
    }

    fn roster_player(&self, player_id: &str) -> Result<Player, TournamentError> {
        self.players
            .iter()
            .find(|p| p.id == player_id)
            .cloned()
            .ok_or_else(|| TournamentError::PlayerNotInRoster(player_id.to_string()))
    }
}
