//! Builders for matches, rosters and darts
#![allow(dead_code)] // Test utilities may not all be used in every test

use darts::{
    AroundTheClockMatch, CheckMode, Dart, MatchConfig, Player, StartingScore, X01Match,
};

// ============================================================================
// Dart Creation Macro
// ============================================================================

/// `throws![T 20, D 12, S 5, S 0]` - ring letter then face value
#[macro_export]
macro_rules! throws {
    ($($ring:ident $value:literal),* $(,)?) => {
        vec![$($crate::utils::dart(stringify!($ring), $value)),*]
    };
}

pub fn dart(ring: &str, value: u32) -> Dart {
    match ring {
        "S" => Dart::single(value),
        "D" => Dart::double(value),
        "T" => Dart::triple(value),
        other => panic!("unknown ring {}", other),
    }
    .expect("dart should be on the board")
}

/// Players with ids equal to their lowercased names
pub fn roster(names: &[&str]) -> Vec<Player> {
    names
        .iter()
        .map(|name| Player::with_id(name.to_lowercase(), *name))
        .collect()
}

// ============================================================================
// Match Setup
// ============================================================================

pub struct MatchBuilder {
    players: Vec<Player>,
    starting_score: StartingScore,
    legs_per_set: u32,
    sets_to_win: u32,
    in_mode: CheckMode,
    out_mode: CheckMode,
    starting_player: usize,
}

impl MatchBuilder {
    pub fn new() -> Self {
        Self {
            players: roster(&["Alice"]),
            starting_score: StartingScore::FiveOhOne,
            legs_per_set: 2,
            sets_to_win: 1,
            in_mode: CheckMode::Standard,
            out_mode: CheckMode::Standard,
            starting_player: 0,
        }
    }

    pub fn with_players(mut self, names: &[&str]) -> Self {
        self.players = roster(names);
        self
    }

    pub fn starting_score(mut self, score: StartingScore) -> Self {
        self.starting_score = score;
        self
    }

    pub fn legs_per_set(mut self, legs: u32) -> Self {
        self.legs_per_set = legs;
        self
    }

    pub fn sets_to_win(mut self, sets: u32) -> Self {
        self.sets_to_win = sets;
        self
    }

    pub fn in_mode(mut self, mode: CheckMode) -> Self {
        self.in_mode = mode;
        self
    }

    pub fn out_mode(mut self, mode: CheckMode) -> Self {
        self.out_mode = mode;
        self
    }

    pub fn starting_player(mut self, index: usize) -> Self {
        self.starting_player = index;
        self
    }

    pub fn config(&self) -> MatchConfig {
        MatchConfig::builder()
            .starting_score(self.starting_score)
            .legs_per_set(self.legs_per_set)
            .sets_to_win(self.sets_to_win)
            .in_mode(self.in_mode)
            .out_mode(self.out_mode)
            .build()
            .expect("test config should be valid")
    }

    pub fn build(self) -> X01Match {
        X01Match::new(&self.players, self.config())
            .and_then(|game| game.with_starting_player(self.starting_player))
            .expect("test match should build")
    }

    pub fn build_around_the_clock(self) -> AroundTheClockMatch {
        AroundTheClockMatch::new(&self.players)
            .and_then(|game| game.with_starting_player(self.starting_player))
            .expect("test match should build")
    }
}

impl Default for MatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}
