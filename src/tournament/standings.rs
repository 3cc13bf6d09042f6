use std::cmp::Ordering;
use std::collections::HashMap;

use crate::game::Player;

use super::models::{Fixture, StandingsEntry};

pub const POINTS_PER_WIN: u32 = 2;

/// Rank the roster from completed fixtures only.
///
/// Order: wins, leg difference, set difference, legs for (all descending),
/// then player name ascending. Names compare byte-wise, so upper case sorts
/// before lower case. Fixture sides that are not on the roster are ignored.
pub fn compute_standings(fixtures: &[Fixture], roster: &[Player]) -> Vec<StandingsEntry> {
    let mut entries: Vec<StandingsEntry> = roster.iter().map(StandingsEntry::new).collect();
    let positions: HashMap<&str, usize> = roster
        .iter()
        .enumerate()
        .map(|(index, player)| (player.id.as_str(), index))
        .collect();

    for fixture in fixtures.iter().filter(|f| f.is_completed()) {
        let Some(winner_id) = fixture.winner_id.as_deref() else {
            continue;
        };

        let sides = [
            (&fixture.player_a_id, fixture.legs_a, fixture.legs_b, fixture.sets_a, fixture.sets_b),
            (&fixture.player_b_id, fixture.legs_b, fixture.legs_a, fixture.sets_b, fixture.sets_a),
        ];
        for (player_id, legs_for, legs_against, sets_for, sets_against) in sides {
            let Some(&index) = positions.get(player_id.as_str()) else {
                continue;
            };
            let entry = &mut entries[index];
            if player_id == winner_id {
                entry.wins += 1;
            } else {
                entry.losses += 1;
            }
            entry.legs_for += legs_for;
            entry.legs_against += legs_against;
            entry.sets_for += sets_for;
            entry.sets_against += sets_against;
        }
    }

    for entry in &mut entries {
        entry.points = entry.wins * POINTS_PER_WIN;
        entry.leg_diff = entry.legs_for as i32 - entry.legs_against as i32;
        entry.set_diff = entry.sets_for as i32 - entry.sets_against as i32;
    }

    entries.sort_by(rank_order);
    entries
}

fn rank_order(a: &StandingsEntry, b: &StandingsEntry) -> Ordering {
    b.wins
        .cmp(&a.wins)
        .then_with(|| b.leg_diff.cmp(&a.leg_diff))
        .then_with(|| b.set_diff.cmp(&a.set_diff))
        .then_with(|| b.legs_for.cmp(&a.legs_for))
        .then_with(|| a.player_name.cmp(&b.player_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tournament::FixtureStatus;

    fn player(id: &str, name: &str) -> Player {
        Player::with_id(id, name)
    }

    fn completed(a: &Player, b: &Player, winner: &Player, legs: (u32, u32), sets: (u32, u32)) -> Fixture {
        let mut fixture = Fixture::pending(format!("{}-{}", a.id, b.id), 1, 1, a, b);
        fixture.status = FixtureStatus::Completed;
        fixture.winner_id = Some(winner.id.clone());
        fixture.legs_a = legs.0;
        fixture.legs_b = legs.1;
        fixture.sets_a = sets.0;
        fixture.sets_b = sets.1;
        fixture
    }

    fn names(entries: &[StandingsEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.player_name.as_str()).collect()
    }

    #[test]
    fn test_empty_fixtures_sorted_by_name() {
        let roster = vec![player("c", "Carol"), player("a", "Alice"), player("b", "Bob")];
        let standings = compute_standings(&[], &roster);
        assert_eq!(names(&standings), vec!["Alice", "Bob", "Carol"]);
        assert!(standings.iter().all(|e| e.games_played() == 0 && e.points == 0));
    }

    #[test]
    fn test_credits_both_sides() {
        let alice = player("a", "Alice");
        let bob = player("b", "Bob");
        let fixtures = vec![completed(&alice, &bob, &bob, (1, 3), (0, 1))];

        let standings = compute_standings(&fixtures, &[alice, bob]);
        let bob_entry = &standings[0];
        assert_eq!(bob_entry.player_name, "Bob");
        assert_eq!(bob_entry.wins, 1);
        assert_eq!(bob_entry.points, 2);
        assert_eq!(bob_entry.legs_for, 3);
        assert_eq!(bob_entry.legs_against, 1);
        assert_eq!(bob_entry.leg_diff, 2);
        assert_eq!(bob_entry.set_diff, 1);

        let alice_entry = &standings[1];
        assert_eq!(alice_entry.losses, 1);
        assert_eq!(alice_entry.leg_diff, -2);
        assert_eq!(alice_entry.set_diff, -1);
    }

    #[test]
    fn test_pending_and_active_fixtures_ignored() {
        let alice = player("a", "Alice");
        let bob = player("b", "Bob");
        let mut active = completed(&alice, &bob, &bob, (0, 2), (0, 1));
        active.status = FixtureStatus::Active;
        let pending = Fixture::pending("p".to_string(), 1, 2, &alice, &bob);

        let standings = compute_standings(&[active, pending], &[alice, bob]);
        assert!(standings.iter().all(|e| e.games_played() == 0));
    }

    #[test]
    fn test_tie_breaks_in_order() {
        let alice = player("a", "Alice");
        let bob = player("b", "Bob");
        let carol = player("c", "Carol");
        let dave = player("d", "Dave");

        // Everyone wins one and loses one; only the leg/set numbers differ.
        let fixtures = vec![
            completed(&alice, &bob, &alice, (2, 0), (1, 0)),
            completed(&bob, &carol, &bob, (2, 1), (1, 0)),
            completed(&carol, &dave, &carol, (2, 1), (1, 0)),
            completed(&dave, &alice, &dave, (3, 2), (1, 0)),
        ];
        let standings = compute_standings(&fixtures, &[alice, bob, carol, dave]);

        // Alice +1 legs, Bob -1, Carol and Dave level at 0 but Dave has more legs for
        assert_eq!(names(&standings), vec!["Alice", "Dave", "Carol", "Bob"]);
        assert_eq!(standings[1].legs_for, 4);
        assert_eq!(standings[2].legs_for, 3);
    }

    #[test]
    fn test_set_difference_beats_name() {
        let xia = player("x", "Xia");
        let yan = player("y", "Yan");
        let zoe = player("z", "Zoe");
        let fixtures = vec![
            completed(&xia, &zoe, &xia, (2, 1), (1, 0)),
            completed(&yan, &zoe, &yan, (2, 1), (2, 0)),
        ];

        let standings = compute_standings(&fixtures, &[xia, yan, zoe]);
        assert_eq!(names(&standings), vec!["Yan", "Xia", "Zoe"]);
    }

    #[test]
    fn test_identical_records_break_alphabetically() {
        let zed = player("z", "Zed");
        let amy = player("y", "Amy");
        let standings = compute_standings(&[], &[zed, amy]);
        assert_eq!(names(&standings), vec!["Amy", "Zed"]);
    }

    #[test]
    fn test_name_tie_break_is_case_sensitive() {
        let roster = vec![player("a", "alice"), player("b", "Bob"), player("c", "Carol")];
        let standings = compute_standings(&[], &roster);
        assert_eq!(names(&standings), vec!["Bob", "Carol", "alice"]);
    }

    #[test]
    fn test_unknown_players_are_skipped() {
        let alice = player("a", "Alice");
        let ghost = player("g", "Ghost");
        let fixtures = vec![completed(&alice, &ghost, &alice, (2, 0), (1, 0))];

        let standings = compute_standings(&fixtures, &[alice]);
        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].wins, 1);
    }
}
