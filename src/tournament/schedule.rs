use tracing::debug;

use crate::game::Player;

use super::models::Fixture;

/// Build a round-robin schedule with the circle method.
///
/// An odd roster gets an empty seat (a bye); pairings against it are left out,
/// so every unordered pair of players meets exactly once. The last seat stays
/// fixed while the others rotate one place per round. Fewer than two players
/// yields no fixtures.
///
/// `sequence` numbers the fixtures actually played in a round, 1 upwards with
/// no gaps. A bye takes no number, so with an odd roster it is not the seat slot.
pub fn generate_schedule(players: &[Player]) -> Vec<Fixture> {
    if players.len() < 2 {
        return Vec::new();
    }

    let mut seats: Vec<Option<&Player>> = players.iter().map(Some).collect();
    if seats.len() % 2 == 1 {
        seats.push(None);
    }

    let rotating = seats.len() - 1;
    let pairs_per_round = seats.len() / 2;
    let mut fixtures = Vec::with_capacity(players.len() * (players.len() - 1) / 2);

    for round in 0..rotating {
        let mut sequence = 0;
        for slot in 0..pairs_per_round {
            let home = if slot == 0 {
                rotating
            } else {
                (round + slot) % rotating
            };
            let away = (rotating - slot + round) % rotating;

            if let (Some(player_a), Some(player_b)) = (seats[home], seats[away]) {
                sequence += 1;
                fixtures.push(Fixture::pending(
                    format!("match-{}", fixtures.len()),
                    round as u32 + 1,
                    sequence,
                    player_a,
                    player_b,
                ));
            }
        }
    }

    debug!(
        players = players.len(),
        fixtures = fixtures.len(),
        "Generated round-robin schedule"
    );
    fixtures
}
