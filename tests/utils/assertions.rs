//! Test assertion helpers - fluent API for verifying player state
#![allow(dead_code)] // Test utilities may not all be used in every test

use darts::{game::MatchPlayer, X01Match};

// ============================================================================
// Assertion Helpers
// ============================================================================

pub struct PlayerAssertion<'a> {
    player: &'a MatchPlayer,
}

impl<'a> PlayerAssertion<'a> {
    pub fn for_player(game: &'a X01Match, id: &str) -> Self {
        let player = game
            .player(id)
            .unwrap_or_else(|| panic!("{} should be in the match", id));
        Self { player }
    }

    pub fn remaining(self, expected: u32) -> Self {
        assert_eq!(
            self.player.remaining_score, expected,
            "{} has the wrong remaining score",
            self.player.name
        );
        self
    }

    pub fn legs(self, per_set: u32, total: u32) -> Self {
        assert_eq!(
            (self.player.legs_won, self.player.legs_won_total),
            (per_set, total),
            "{} has the wrong leg counts (per set, total)",
            self.player.name
        );
        self
    }

    pub fn sets(self, expected: u32) -> Self {
        assert_eq!(
            self.player.sets_won, expected,
            "{} has the wrong set count",
            self.player.name
        );
        self
    }

    pub fn darts(self, expected: u32) -> Self {
        assert_eq!(
            self.player.darts_thrown, expected,
            "{} has thrown the wrong number of darts",
            self.player.name
        );
        self
    }

    pub fn turn(self, expected: &[u32]) -> Self {
        assert_eq!(
            self.player.current_turn_throws, expected,
            "{} has the wrong darts in the current turn",
            self.player.name
        );
        self
    }

    pub fn opened(self, expected: bool) -> Self {
        assert_eq!(
            self.player.has_opened, expected,
            "{} has the wrong opening state",
            self.player.name
        );
        self
    }
}
