//! Drive a match with a fixed list of darts
#![allow(dead_code)] // Test utilities may not all be used in every test

use darts::{Dart, ThrowOutcome, X01Match};

/// Throw every dart in order and return the final state
pub fn play_darts(game: X01Match, darts: &[Dart]) -> X01Match {
    play_darts_collecting(game, darts).0
}

/// Throw every dart in order, keeping each outcome
pub fn play_darts_collecting(game: X01Match, darts: &[Dart]) -> (X01Match, Vec<ThrowOutcome>) {
    darts
        .iter()
        .fold((game, Vec::new()), |(game, mut outcomes), dart| {
            let transition = game.apply_throw(*dart);
            outcomes.push(transition.outcome);
            (transition.state, outcomes)
        })
}
