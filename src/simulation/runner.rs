use tracing::{debug, info, warn};

use crate::game::{AroundTheClockMatch, X01Match};
use crate::tournament::Tournament;

use super::{errors::SimulationError, types::ThrowStrategy};

/// Generous enough for any real match; only a player stuck on an
/// unreachable finish gets near it.
pub const DEFAULT_DART_LIMIT: u32 = 5_000;

/// Throw darts until the match is won, moving on to the next leg whenever one
/// finishes.
pub fn play_x01(
    game: X01Match,
    strategy: &mut dyn ThrowStrategy,
    dart_limit: u32,
) -> Result<X01Match, SimulationError> {
    let mut game = game;
    let mut thrown = 0;

    while !game.is_complete() {
        if let Some(next) = game.advance_leg() {
            game = next;
            continue;
        }
        if thrown >= dart_limit {
            warn!(limit = dart_limit, "Giving up on x01 match");
            return Err(SimulationError::DartLimitReached { limit: dart_limit });
        }

        let dart = strategy.next_x01_dart(&game);
        let transition = game.apply_throw(dart);
        debug!(%dart, outcome = ?transition.outcome, "Simulated dart");
        game = transition.state;
        thrown += 1;
    }

    if let Some(winner) = game.winner() {
        info!(
            strategy = strategy.strategy_name(),
            winner = %winner.name,
            average = winner.average(),
            darts = thrown,
            "Simulated x01 match"
        );
    }
    Ok(game)
}

pub fn play_around_the_clock(
    game: AroundTheClockMatch,
    strategy: &mut dyn ThrowStrategy,
    dart_limit: u32,
) -> Result<AroundTheClockMatch, SimulationError> {
    let mut game = game;
    let mut thrown = 0;

    while !game.is_complete() {
        if thrown >= dart_limit {
            warn!(limit = dart_limit, "Giving up on around the clock match");
            return Err(SimulationError::DartLimitReached { limit: dart_limit });
        }

        let dart = strategy.next_around_the_clock_dart(&game);
        let transition = game.apply_throw(dart);
        debug!(%dart, outcome = ?transition.outcome, "Simulated dart");
        game = transition.state;
        thrown += 1;
    }

    info!(
        strategy = strategy.strategy_name(),
        winner = ?game.phase().winner(),
        darts = thrown,
        "Simulated around the clock match"
    );
    Ok(game)
}

/// Play every pending fixture in schedule order.
pub fn run_tournament(
    tournament: Tournament,
    strategy: &mut dyn ThrowStrategy,
    dart_limit: u32,
) -> Result<Tournament, SimulationError> {
    let mut tournament = tournament;

    while let Some(fixture_id) = tournament.next_pending_fixture().map(|f| f.id.clone()) {
        let (started, game) = tournament.start_fixture(&fixture_id)?;
        let finished = play_x01(game, strategy, dart_limit)?;
        tournament = started.complete_from_match(&fixture_id, &finished)?;
    }

    if let Some(champion) = tournament.champion() {
        info!(
            tournament_id = %tournament.id(),
            champion = %champion.player_name,
            wins = champion.wins,
            "Tournament finished"
        );
    }
    Ok(tournament)
}
